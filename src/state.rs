use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::BotResult,
    service::user::{UserService, UserStore},
    storage::TursoClient,
};

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> BotResult<Self> {
        let client = TursoClient::new(&config.database).await?;
        let users = UserService::new(client).await?;

        Ok(Self { users: Arc::new(users) })
    }
}
