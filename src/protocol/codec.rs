//! Protocol codec
//!
//! Parsing command lines and formatting responses.

use super::{Command, CommandType, Response};
use crate::error::{KvError, Result};
use crate::Value;

/// Printed for GET / COUNT misses
pub const NULL: &str = "NULL";

/// Printed for COMMIT / ROLLBACK with nothing pending
pub const NO_TRANSACTION: &str = "NO TRANSACTION";

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command as a single line (without the newline)
pub fn encode_command(command: &Command) -> String {
    let keyword = command.command_type().keyword();

    match command {
        Command::Get { key } | Command::Delete { key } => format!("{} {}", keyword, key),
        Command::Set { key, value } => format!("{} {} {}", keyword, key, value),
        Command::Count { value } => format!("{} {}", keyword, value),
        Command::Begin | Command::Commit | Command::Rollback | Command::Clear | Command::End => {
            keyword.to_string()
        }
    }
}

/// Decode a command from one line
///
/// Surrounding whitespace and runs of spaces between tokens are ignored.
pub fn decode_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();

    let word = tokens
        .next()
        .ok_or_else(|| KvError::Parse("empty command".to_string()))?;
    let command_type = CommandType::from_keyword(word)
        .ok_or_else(|| KvError::Parse(format!("unknown command: {}", word)))?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != command_type.arity() {
        return Err(KvError::Parse(format!(
            "{} expects {} argument(s), got {}",
            command_type.keyword(),
            command_type.arity(),
            args.len()
        )));
    }

    let command = match command_type {
        CommandType::Get => Command::Get {
            key: args[0].to_string(),
        },
        CommandType::Set => Command::Set {
            key: args[0].to_string(),
            value: parse_value(args[1])?,
        },
        CommandType::Delete => Command::Delete {
            key: args[0].to_string(),
        },
        CommandType::Count => Command::Count {
            value: parse_value(args[0])?,
        },
        CommandType::Begin => Command::Begin,
        CommandType::Commit => Command::Commit,
        CommandType::Rollback => Command::Rollback,
        CommandType::Clear => Command::Clear,
        CommandType::End => Command::End,
    };

    Ok(command)
}

fn parse_value(token: &str) -> Result<Value> {
    token
        .parse::<Value>()
        .map_err(|e| KvError::Parse(format!("invalid value {:?}: {}", token, e)))
}

// =============================================================================
// Response Encoding
// =============================================================================

/// Encode a response as a line, or None if nothing should be printed
pub fn encode_response(response: &Response) -> Option<String> {
    match response {
        Response::Done => None,
        Response::Value(Some(value)) => Some(value.to_string()),
        Response::Count(Some(count)) => Some(count.to_string()),
        Response::Value(None) | Response::Count(None) => Some(NULL.to_string()),
        Response::NoTransaction => Some(NO_TRANSACTION.to_string()),
        Response::Error(message) => Some(format!("ERROR {}", message)),
    }
}
