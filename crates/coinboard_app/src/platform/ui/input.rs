//! Maps typed command lines to core messages.

use coinboard_core::{Msg, SortKey, UnknownSortKey};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{command}` takes at most one argument")]
    TooManyArguments { command: &'static str },
    #[error(transparent)]
    Column(#[from] UnknownSortKey),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    let extra = words.next().is_some();

    let command = match head.to_ascii_lowercase().as_str() {
        "sort" | "s" => {
            let column = require("sort", "a column name", arg, extra)?;
            Command::Dispatch(Msg::SortClicked(column.parse::<SortKey>()?))
        }
        "add" | "a" => {
            let id = require("add", "an asset id", arg, extra)?;
            Command::Dispatch(Msg::AddFavoriteClicked { id: id.to_string() })
        }
        "remove" | "rm" | "r" => {
            let id = require("remove", "an asset id", arg, extra)?;
            Command::Dispatch(Msg::RemoveFavoriteClicked { id: id.to_string() })
        }
        "more" | "m" => no_args("more", arg, Command::Dispatch(Msg::SeeMoreClicked))?,
        "dismiss" | "ok" => no_args("dismiss", arg, Command::Dispatch(Msg::NoticeDismissed))?,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn require<'a>(
    command: &'static str,
    what: &'static str,
    arg: Option<&'a str>,
    extra: bool,
) -> Result<&'a str, InputError> {
    if extra {
        return Err(InputError::TooManyArguments { command });
    }
    arg.ok_or(InputError::MissingArgument { command, what })
}

fn no_args(command: &'static str, arg: Option<&str>, parsed: Command) -> Result<Command, InputError> {
    match arg {
        Some(_) => Err(InputError::TooManyArguments { command }),
        None => Ok(parsed),
    }
}
