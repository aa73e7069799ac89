//! Shell Module
//!
//! Drives a database from a stream of command lines.
//!
//! ## Architecture
//! - One line in, at most one line out
//! - Malformed lines produce an ERROR line and the session continues
//! - `END` or end of input stops the session

mod session;

pub use session::{SessionStats, Shell};
