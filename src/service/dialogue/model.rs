use serde::{Deserialize, Serialize};

use crate::service::game::GameSession;

/// Where a chat is in the conversation. Registration answers travel inside
/// the variant that needs them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    #[default]
    Idle,
    // Registration
    AwaitingFullname,
    AwaitingPhone {
        fullname: String,
    },
    AwaitingAddress {
        fullname: String,
        phone: String,
    },
    // Game
    AwaitingGuess(GameSession),
}
