//! Transaction Log Module
//!
//! A flat undo stack layered over the base table.
//!
//! ## Responsibilities
//! - Record savepoints, writes and deletes as frames, oldest first
//! - Resolve reads through pending frames before the base table
//! - Keep the value-count index in step as frames are pushed and undone
//! - Flatten every pending frame into the base table on commit
//!
//! ## Stack Layout
//! ```text
//!   index 0                                      top
//!   ┌───────────┬──────────────┬───────────┬─────────────┐
//!   │ Savepoint │ Write(a, 10) │ Savepoint │ Remove(a)   │
//!   └───────────┴──────────────┴───────────┴─────────────┘
//!                  shadowed: -                shadowed: 10
//! ```
//!
//! `begin` only pushes a marker. Rollback pops a single frame, whatever
//! its kind, so undoing everything since a `begin` takes one rollback per
//! frame pushed since then, marker included.

mod frame;
mod log;

pub use frame::Frame;
pub use log::TransactionLog;
