//! # TallyKV
//!
//! An in-memory key-value store with:
//! - A flat undo-log for begin / commit / rollback
//! - A value-count index answering "how many keys hold V" in O(1)
//! - A line-oriented command shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Shell (stdin / script)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Database Facade                         │
//! │         (direct when log empty, via log otherwise)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │ Transaction │─────────▶│ Value-Count  │
//!   │     Log     │  adjust  │    Index     │
//!   └──────┬──────┘          └──────────────┘
//!          │ fallback / commit
//!          ▼
//!   ┌─────────────┐
//!   │ Base Table  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;
pub mod index;
pub mod txlog;
pub mod protocol;
pub mod shell;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use engine::{Database, SharedDatabase};

/// Value type used by the command layer
pub type Value = i64;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TallyKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
