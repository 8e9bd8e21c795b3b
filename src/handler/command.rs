use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::{types::Message, Bot};

use crate::command::Command;
use crate::error::{BotError, HandlerResult};
use crate::service::dialogue::{BotDialogue, DialogueState};
use crate::state::AppState;

use super::message::start_game;

async fn handle_start(bot: Bot, dialogue: BotDialogue, msg: Message, state: AppState) -> HandlerResult<()> {
    let chat_id = msg.chat.id;
    let registered = state.users.list_all_ids().await?;

    if registered.contains(&chat_id.0) {
        debug!("Chat {} is registered, starting a game", chat_id);
        return start_game(&bot, &dialogue, chat_id).await;
    }

    debug!("Chat {} is not registered, starting registration", chat_id);
    dialogue
        .update(DialogueState::AwaitingFullname)
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    bot.send_message(chat_id, t!("registration.fullname")).await?;

    Ok(())
}

async fn handle_followers(bot: Bot, msg: Message, state: AppState) -> HandlerResult<()> {
    let count = state.users.count().await?;

    bot.send_message(msg.chat.id, t!("stats.followers", count = count.to_string()))
        .await?;

    Ok(())
}

pub fn get_start_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter_command::<Command>()
        .branch(dptree::case![Command::Start].endpoint(handle_start))
}

pub fn get_command_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter_command::<Command>()
        .branch(dptree::case![Command::Followers].endpoint(handle_followers))
}
