//! Protocol Module
//!
//! Line-oriented text commands that wrap the database as local calls.
//!
//! ## Command Format
//! ```text
//! <KEYWORD> [arg] [arg]\n
//! ```
//!
//! ### Commands
//! - `SET <key> <value>`
//! - `GET <key>`
//! - `DELETE <key>` (alias `UNSET`)
//! - `COUNT <value>` (alias `NUMEQUALTO`)
//! - `BEGIN`, `COMMIT`, `ROLLBACK`
//! - `CLEAR`
//! - `END`
//!
//! Keywords are case-insensitive, keys are not. Values are signed 64-bit
//! integers.
//!
//! ### Responses
//! - `<value>` / `<count>` for GET and COUNT hits
//! - `NULL` for GET and COUNT misses
//! - `NO TRANSACTION` for COMMIT / ROLLBACK with nothing pending
//! - `ERROR <message>` for malformed lines
//! - nothing for the other commands

mod command;
mod response;
mod codec;

pub use command::{Command, CommandType};
pub use response::Response;
pub use codec::{decode_command, encode_command, encode_response};
