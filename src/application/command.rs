use super::outcome::Declined;
use std::str::FromStr;

/// One line typed at the machine's prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(String),
    Select(String),
    Return,
    Exit,
}

impl FromStr for Command {
    type Err = Declined;

    /// Keywords and arguments are matched case-insensitively; surrounding
    /// whitespace is ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let line = input.trim().to_lowercase();
        let invalid = || Declined::InvalidCommand(input.trim().to_string());

        match line.split_once(char::is_whitespace) {
            Some((keyword, argument)) => {
                let argument = argument.trim();
                match keyword {
                    "insert" => Ok(Command::Insert(argument.to_string())),
                    "select" => Ok(Command::Select(argument.to_string())),
                    _ => Err(invalid()),
                }
            }
            None => match line.as_str() {
                "return" => Ok(Command::Return),
                "exit" => Ok(Command::Exit),
                _ => Err(invalid()),
            },
        }
    }
}
