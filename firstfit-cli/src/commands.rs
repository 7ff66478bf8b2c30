//! Command Parser
//!
//! Turns one line of text into a [`Command`]. The expected format is
//!
//!   <KEYWORD> [argument ...]
//!
//! Keywords are case-insensitive and tokens are separated by spaces or tabs.
//! Surplus arguments are ignored. Sizes must be plain decimal digits that fit
//! in a `usize`; anything else is rejected here and never reaches the arena.

use nom::{
    bytes::complete::take_while1,
    character::complete::{digit1, space1},
    combinator::{all_consuming, map_res},
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

pub const AVAILABLE: &str = "INIT, ALLOC, FREE, INSPECT, STATS, METRICS, HELP, EXIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init { capacity: usize },
    Alloc { id: String, size: usize },
    Free { id: String },
    Inspect,
    Stats,
    Metrics,
    Help,
    Exit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Init { .. } => "INIT",
            Command::Alloc { .. } => "ALLOC",
            Command::Free { .. } => "FREE",
            Command::Inspect => "INSPECT",
            Command::Stats => "STATS",
            Command::Metrics => "METRICS",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
        }
    }
}

/// Rejected input. The `Display` text is what the session prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Error: Invalid number format.")]
    InvalidNumber(String),

    #[error("Unknown command: {0}\nAvailable commands: {available}", available = AVAILABLE)]
    UnknownCommand(String),
}

const INIT_USAGE: &str = "INIT <total_size>";
const ALLOC_USAGE: &str = "ALLOC <id> <size>";
const FREE_USAGE: &str = "FREE <id>";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    // `token` only fails on empty input.
    let Ok((rest, keyword)) = token.parse(line.trim()) else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_uppercase().as_str() {
        "INIT" => {
            let (_, capacity) = argument(rest);
            let capacity = capacity.ok_or(CommandError::MissingArgument(INIT_USAGE))?;
            Command::Init {
                capacity: parse_size(capacity)?,
            }
        }
        "ALLOC" => {
            let (rest, id) = argument(rest);
            let (_, size) = argument(rest);
            match (id, size) {
                (Some(id), Some(size)) => Command::Alloc {
                    id: id.to_string(),
                    size: parse_size(size)?,
                },
                _ => return Err(CommandError::MissingArgument(ALLOC_USAGE)),
            }
        }
        "FREE" => {
            let (_, id) = argument(rest);
            let id = id.ok_or(CommandError::MissingArgument(FREE_USAGE))?;
            Command::Free { id: id.to_string() }
        }
        "INSPECT" => Command::Inspect,
        "STATS" => Command::Stats,
        "METRICS" => Command::Metrics,
        "HELP" => Command::Help,
        "EXIT" | "QUIT" => Command::Exit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

/// The next whitespace-separated token and the input after it. Leaves the
/// input untouched when no token follows.
fn argument(input: &str) -> (&str, Option<&str>) {
    match preceded(space1, token).parse(input) {
        Ok((rest, arg)) => (rest, Some(arg)),
        Err(_) => (input, None),
    }
}

fn parse_size(text: &str) -> Result<usize, CommandError> {
    let parsed: IResult<&str, usize> =
        all_consuming(map_res(digit1, |digits: &str| digits.parse::<usize>())).parse(text);
    parsed
        .map(|(_, value)| value)
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}
