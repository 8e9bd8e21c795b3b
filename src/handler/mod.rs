mod command;
mod message;

use command::{get_command_handler, get_start_handler};
use message::{get_message_handler, handle_message_echo};
use teloxide::{
    dispatching::{
        dialogue::{self, ErasedStorage},
        UpdateFilterExt, UpdateHandler,
    },
    types::Update,
};

use crate::service::dialogue::DialogueState;

/// `/start` wins over any dialogue state, then the current state picks its
/// handler, then stateless commands, and anything left is echoed back.
pub fn get_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dialogue::enter::<Update, ErasedStorage<DialogueState>, DialogueState, _>()
        .branch(get_start_handler())
        .branch(get_message_handler())
        .branch(get_command_handler())
        .branch(Update::filter_message().endpoint(handle_message_echo))
}
