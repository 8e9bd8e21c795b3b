use bot::BotService;
use config::AppConfig;
use error::BotResult;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;
#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

mod bot;
mod command;
mod config;
mod error;
mod handler;
mod service;
mod state;
mod storage;


#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> BotResult<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = pretty_env_logger::try_init_timed();

    info!("Starting bot...");

    let config = AppConfig::from_env()?;
    rust_i18n::set_locale(&config.language.locale);

    let bot_service = BotService::new(config)?;
    info!("Bot instance created");

    bot_service.start().await
}
