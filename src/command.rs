use teloxide::{macros::BotCommands, prelude::Requester, types::BotCommand, Bot, RequestError};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    Followers,
}

impl Command {
    pub fn user_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", t!("commands.description.start")),
            BotCommand::new("followers", t!("commands.description.followers")),
        ]
    }
}

pub async fn setup_user_commands(bot: &Bot) -> Result<(), RequestError> {
    bot.delete_my_commands().await?;
    bot.set_my_commands(Command::user_commands()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use teloxide::utils::command::BotCommands as _;

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "guessbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/followers", "guessbot").unwrap(), Command::Followers);
        assert_eq!(Command::parse("/start@guessbot", "guessbot").unwrap(), Command::Start);
        assert!(Command::parse("/help", "guessbot").is_err());
        assert!(Command::parse("start", "guessbot").is_err());
    }

    #[test]
    fn test_user_commands_menu() {
        let commands = Command::user_commands();
        let names: Vec<&str> = commands.iter().map(|c| c.command.as_str()).collect();
        assert_eq!(names, vec!["start", "followers"]);
        assert!(commands.iter().all(|c| !c.description.is_empty()));
    }
}
