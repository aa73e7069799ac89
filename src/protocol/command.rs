//! Command definitions
//!
//! Represents commands read by the shell.

use crate::Value;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
    Delete,
    Count,
    Begin,
    Commit,
    Rollback,
    Clear,
    End,
}

impl CommandType {
    /// Canonical keyword for this command
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::Get => "GET",
            CommandType::Set => "SET",
            CommandType::Delete => "DELETE",
            CommandType::Count => "COUNT",
            CommandType::Begin => "BEGIN",
            CommandType::Commit => "COMMIT",
            CommandType::Rollback => "ROLLBACK",
            CommandType::Clear => "CLEAR",
            CommandType::End => "END",
        }
    }

    /// Look up a keyword, case-insensitively, aliases included
    pub fn from_keyword(word: &str) -> Option<Self> {
        let command_type = match word.to_ascii_uppercase().as_str() {
            "GET" => CommandType::Get,
            "SET" => CommandType::Set,
            "DELETE" | "UNSET" => CommandType::Delete,
            "COUNT" | "NUMEQUALTO" => CommandType::Count,
            "BEGIN" => CommandType::Begin,
            "COMMIT" => CommandType::Commit,
            "ROLLBACK" => CommandType::Rollback,
            "CLEAR" => CommandType::Clear,
            "END" => CommandType::End,
            _ => return None,
        };
        Some(command_type)
    }

    /// Number of arguments the command takes
    pub fn arity(&self) -> usize {
        match self {
            CommandType::Set => 2,
            CommandType::Get | CommandType::Delete | CommandType::Count => 1,
            _ => 0,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get the effective value of a key
    Get { key: String },

    /// Set a key to a value
    Set { key: String, value: Value },

    /// Delete a key
    Delete { key: String },

    /// Count keys holding a value
    Count { value: Value },

    /// Push a savepoint
    Begin,

    /// Flush pending frames
    Commit,

    /// Undo the most recent frame
    Rollback,

    /// Drop all state
    Clear,

    /// Stop the session
    End,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::Delete { .. } => CommandType::Delete,
            Command::Count { .. } => CommandType::Count,
            Command::Begin => CommandType::Begin,
            Command::Commit => CommandType::Commit,
            Command::Rollback => CommandType::Rollback,
            Command::Clear => CommandType::Clear,
            Command::End => CommandType::End,
        }
    }

    /// Whether executing this command can change state
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Command::Get { .. } | Command::Count { .. } | Command::End
        )
    }
}
