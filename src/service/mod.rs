pub mod dialogue;
pub mod game;
pub mod user;
