use teloxide::{prelude::Requester, types::Message, Bot};

use crate::{
    error::{BotError, HandlerResult},
    service::{
        dialogue::{BotDialogue, DialogueState},
        user::User,
    },
    state::AppState,
};

use super::game::start_game;

pub(super) async fn handle_message_fullname(bot: Bot, dialogue: BotDialogue, msg: Message) -> HandlerResult<()> {
    let Some(fullname) = msg.text() else {
        bot.send_message(msg.chat.id, t!("registration.fullname")).await?;
        return Ok(());
    };

    debug!("Chat {} sent full name", msg.chat.id);
    dialogue
        .update(DialogueState::AwaitingPhone {
            fullname: fullname.to_string(),
        })
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    bot.send_message(msg.chat.id, t!("registration.phone")).await?;

    Ok(())
}

pub(super) async fn handle_message_phone(
    bot: Bot,
    dialogue: BotDialogue,
    msg: Message,
    fullname: String,
) -> HandlerResult<()> {
    let Some(phone) = msg.text() else {
        bot.send_message(msg.chat.id, t!("registration.phone")).await?;
        return Ok(());
    };

    debug!("Chat {} sent phone", msg.chat.id);
    dialogue
        .update(DialogueState::AwaitingAddress {
            fullname,
            phone: phone.to_string(),
        })
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    bot.send_message(msg.chat.id, t!("registration.address")).await?;

    Ok(())
}

pub(super) async fn handle_message_address(
    bot: Bot,
    dialogue: BotDialogue,
    msg: Message,
    state: AppState,
    (fullname, phone): (String, String),
) -> HandlerResult<()> {
    let Some(address) = msg.text() else {
        bot.send_message(msg.chat.id, t!("registration.address")).await?;
        return Ok(());
    };

    let user = User {
        fullname,
        phone,
        address: address.to_string(),
        chat_id: msg.chat.id.0,
    };

    if state.users.insert_if_absent(&user).await? {
        info!("Registered chat {}", user.chat_id);
    } else {
        info!("Chat {} was already registered, keeping the existing row", user.chat_id);
    }

    bot.send_message(msg.chat.id, t!("registration.completed")).await?;

    start_game(&bot, &dialogue, msg.chat.id).await
}
