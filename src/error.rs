use teloxide::RequestError;

use crate::{config::ConfigError, storage::StorageError};

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Dialogue state error: {0}")]
    DialogueStateError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Telegram error: {0}")]
    Telegram(#[from] RequestError),

    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::Other(error)
    }
}

pub type HandlerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub type BotResult<T> = Result<T, BotError>;
