use std::collections::HashSet;

use async_trait::async_trait;

use crate::storage::{StorageError, TursoClient};

mod model;

pub use model::User;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    fullname TEXT,
    phone TEXT,
    address TEXT,
    chat_id INTEGER UNIQUE
)";

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Every registered chat id.
    async fn list_all_ids(&self) -> Result<HashSet<i64>, StorageError>;
    /// Returns `false` without writing anything when the chat id is already registered.
    async fn insert_if_absent(&self, user: &User) -> Result<bool, StorageError>;
    async fn count(&self) -> Result<u64, StorageError>;
}

#[derive(Clone)]
pub struct UserService {
    client: TursoClient,
}

impl UserService {
    pub async fn new(client: TursoClient) -> Result<Self, StorageError> {
        info!("Initializing UserService...");
        client.connection().execute(CREATE_USERS_TABLE, ()).await?;
        info!("UserService initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl UserStore for UserService {
    async fn list_all_ids(&self) -> Result<HashSet<i64>, StorageError> {
        let conn = self.client.connection();
        let mut rows = conn.query("SELECT chat_id FROM users", ()).await?;

        let mut ids = HashSet::new();
        while let Some(row) = rows.next().await? {
            ids.insert(row.get::<i64>(0)?);
        }

        Ok(ids)
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, StorageError> {
        let conn = self.client.connection();
        let inserted = conn
            .execute(
                "INSERT INTO users (fullname, phone, address, chat_id) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (chat_id) DO NOTHING",
                libsql::params![
                    user.fullname.clone(),
                    user.phone.clone(),
                    user.address.clone(),
                    user.chat_id
                ],
            )
            .await?;

        debug!("Insert for chat {} affected {} rows", user.chat_id, inserted);
        Ok(inserted > 0)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let conn = self.client.connection();
        let mut rows = conn.query("SELECT COUNT(*) FROM users", ()).await?;

        let count = match rows.next().await? {
            Some(row) => row.get::<i64>(0)?,
            None => 0,
        };

        u64::try_from(count).map_err(|_| StorageError::InvalidValue {
            column: "COUNT(*)",
            value: count,
        })
    }
}
