mod game;
mod registration;

use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    dptree,
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{Message, Update},
    Bot,
};

use crate::{error::HandlerResult, service::dialogue::DialogueState};

pub(super) use game::start_game;

pub fn get_message_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .branch(dptree::case![DialogueState::AwaitingFullname].endpoint(registration::handle_message_fullname))
        .branch(dptree::case![DialogueState::AwaitingPhone { fullname }].endpoint(registration::handle_message_phone))
        .branch(
            dptree::case![DialogueState::AwaitingAddress { fullname, phone }]
                .endpoint(registration::handle_message_address),
        )
        .branch(dptree::case![DialogueState::AwaitingGuess(session)].endpoint(game::handle_message_guess))
}

pub async fn handle_message_echo(bot: Bot, msg: Message) -> HandlerResult<()> {
    match msg.text() {
        Some(text) => {
            let mut request = bot.send_message(msg.chat.id, text);
            if let Some(entities) = msg.entities() {
                request = request.entities(entities.to_vec());
            }
            request.await?;
        }
        None => {
            bot.copy_message(msg.chat.id, msg.chat.id, msg.id).await?;
        }
    }

    Ok(())
}
