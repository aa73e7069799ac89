//! Base Table Module
//!
//! Committed key/value state.
//!
//! ## Responsibilities
//! - Hold the values produced by non-transactional writes and by commit
//! - Serve as the fallback for reads no pending frame answers
//! - Keep tombstones written by committed deletes
//!
//! ## Data Structure Choice
//! BTreeMap keyed by `String`:
//! - Ordered keys so enumeration is deterministic
//! - Exclusively owned by the database, no interior locking

mod table;

pub use table::{BaseTable, BaseTableIter};

/// Entry stored in the base table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEntry<V> {
    /// A live value
    Value(V),

    /// A committed delete; the key is present but resolves to no value
    Tombstone,
}

impl<V> TableEntry<V> {
    /// The live value, if this entry is not a tombstone
    pub fn as_value(&self) -> Option<&V> {
        match self {
            TableEntry::Value(value) => Some(value),
            TableEntry::Tombstone => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, TableEntry::Tombstone)
    }
}
