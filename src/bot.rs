use std::time::Duration;

use anyhow::Context;
use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::{net, Bot};

use crate::config::AppConfig;
use crate::error::BotResult;
use crate::handler::get_handler;
use crate::service::dialogue::DialogueService;
use crate::state::AppState;

pub struct BotService {
    bot: Bot,
    config: AppConfig,
}

impl BotService {
    pub fn new(config: AppConfig) -> BotResult<Self> {
        let client = net::default_reqwest_settings()
            .pool_idle_timeout(Duration::from_secs(60))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        let bot = Bot::with_client(config.telegram.0.clone(), client);

        Ok(Self { bot, config })
    }

    pub async fn start(self) -> BotResult<()> {
        info!("Testing connection to Telegram API...");
        match self.bot.get_me().await {
            Ok(me) => info!("Connected to Telegram API as @{}", me.username()),
            Err(e) => {
                error!("Failed to connect to Telegram API: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Initializing AppState...");
        let state = AppState::new(&self.config).await?;
        info!("AppState initialized");

        let storage = DialogueService::get_dialogue_storage(&self.config.dialogue).await?;

        crate::command::setup_user_commands(&self.bot).await?;

        Dispatcher::builder(self.bot, get_handler())
            .dependencies(dptree::deps![storage, state])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Bot stopped");
        Ok(())
    }
}
