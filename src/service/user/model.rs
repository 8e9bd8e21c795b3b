/// A registered user. Rows are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub fullname: String,
    pub phone: String,
    pub address: String,
    pub chat_id: i64,
}
