use libsql::errors::Error as TursoError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    Redis(String),
    #[error("Turso error: {0}")]
    Turso(#[from] TursoError),
    #[error("Unexpected value in column {column}: {value}")]
    InvalidValue { column: &'static str, value: i64 },
}
