//! Response definitions
//!
//! Represents the outcome of one executed command.

use crate::Value;

/// A response to print back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Command succeeded with nothing to print
    Done,

    /// Result of GET
    Value(Option<Value>),

    /// Result of COUNT
    Count(Option<u64>),

    /// COMMIT or ROLLBACK with nothing pending
    NoTransaction,

    /// Command could not be parsed or executed
    Error(String),
}

impl Response {
    /// Create an ERROR response
    pub fn error(message: &str) -> Self {
        Response::Error(message.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}
