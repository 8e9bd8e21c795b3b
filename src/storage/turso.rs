use libsql::{Builder, Connection, Database};
use std::sync::Arc;

use crate::config::DatabaseConfig;

use super::StorageError;

/// One libsql database handle plus a single connection shared by every request.
#[derive(Clone)]
pub struct TursoClient {
    /// Held so the database outlives every connection cloned from `conn`.
    _db: Arc<Database>,
    conn: Connection,
}

impl TursoClient {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, StorageError> {
        info!("Initializing TursoClient...");
        let db = if config.is_remote() {
            Builder::new_remote(config.url.clone(), config.token.clone())
                .build()
                .await?
        } else {
            Builder::new_local(&config.url).build().await?
        };

        let conn = db.connect()?;

        info!("TursoClient initialized");
        Ok(Self {
            _db: Arc::new(db),
            conn,
        })
    }

    pub fn connection(&self) -> Connection {
        self.conn.clone()
    }
}
