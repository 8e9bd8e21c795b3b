use teloxide::{
    prelude::Requester,
    types::{ChatId, Message},
    Bot,
};

use crate::{
    error::{BotError, HandlerResult},
    service::{
        dialogue::{BotDialogue, DialogueState},
        game::{GameSession, GuessOutcome},
    },
};

/// Puts the chat into a fresh game and sends the opening prompt.
pub(crate) async fn start_game(bot: &Bot, dialogue: &BotDialogue, chat_id: ChatId) -> HandlerResult<()> {
    dialogue
        .update(DialogueState::AwaitingGuess(GameSession::start()))
        .await
        .map_err(|e| BotError::DialogueStateError(e.to_string()))?;

    bot.send_message(chat_id, t!("game.prompt")).await?;

    Ok(())
}

pub(super) async fn handle_message_guess(
    bot: Bot,
    dialogue: BotDialogue,
    msg: Message,
    session: GameSession,
) -> HandlerResult<()> {
    let chat_id = msg.chat.id;
    let text = msg.text().unwrap_or_default();

    match session.evaluate(msg.text()) {
        GuessOutcome::GaveUp { secret } => {
            debug!(
                "Chat {} gave up on {} after {} attempts",
                chat_id,
                session.secret(),
                session.attempts()
            );
            bot.send_message(chat_id, t!("game.reveal", secret = secret.to_string()))
                .await?;
            dialogue
                .exit()
                .await
                .map_err(|e| BotError::DialogueStateError(e.to_string()))?;
        }
        GuessOutcome::Invalid => {
            bot.send_message(chat_id, t!("game.invalid")).await?;
        }
        GuessOutcome::TooHigh(next) => {
            dialogue
                .update(DialogueState::AwaitingGuess(next))
                .await
                .map_err(|e| BotError::DialogueStateError(e.to_string()))?;
            bot.send_message(chat_id, t!("game.too_high", guess = text)).await?;
        }
        GuessOutcome::TooLow(next) => {
            dialogue
                .update(DialogueState::AwaitingGuess(next))
                .await
                .map_err(|e| BotError::DialogueStateError(e.to_string()))?;
            bot.send_message(chat_id, t!("game.too_low", guess = text)).await?;
        }
        GuessOutcome::Correct { attempts } => {
            info!("Chat {} guessed the number in {} attempts", chat_id, attempts);
            bot.send_message(chat_id, t!("game.won", attempts = attempts.to_string()))
                .await?;
            dialogue
                .exit()
                .await
                .map_err(|e| BotError::DialogueStateError(e.to_string()))?;
        }
    }

    Ok(())
}
