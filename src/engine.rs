//! Engine Module
//!
//! The database facade that coordinates all components.
//!
//! ## Responsibilities
//! - Route each call to the base table (no pending frames) or through the
//!   transaction log (frames pending)
//! - Keep the value-count index consistent with both paths
//! - Transaction control: begin / commit / rollback
//! - Hard reset via `clear_all`

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::index::ValueIndex;
use crate::protocol::{Command, Response};
use crate::table::BaseTable;
use crate::txlog::TransactionLog;
use crate::Value;

/// The in-memory database
///
/// ## Routing
///
/// - **Empty log**: `set`/`delete` mutate the base table directly.
/// - **Non-empty log**: `set`/`delete` push frames; the base table is only
///   written by `commit`.
/// - **Reads** resolve through pending frames newest-first, then fall back
///   to the base table.
///
/// `set` always adds one to the count of the value written and never takes
/// one away from the value it replaces. `delete` does take the removed
/// value's count down. Counts are therefore exact for keys written once
/// between deletes.
#[derive(Debug, Clone)]
pub struct Database<V = Value> {
    /// Database configuration
    config: Config,

    /// Committed state
    table: BaseTable<V>,

    /// Value → number of keys holding it
    index: ValueIndex<V>,

    /// Pending frames, oldest first
    log: TransactionLog<V>,
}

impl<V> Database<V>
where
    V: Clone + Eq + Hash,
{
    /// Create an empty database with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty database with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            table: BaseTable::new(),
            index: ValueIndex::new(),
            log: TransactionLog::new(),
        }
    }

    // =========================================================================
    // Data Operations
    // =========================================================================

    /// Get the effective value of a key
    pub fn get(&self, key: &str) -> Option<V> {
        self.log.resolve(key, &self.table).cloned()
    }

    /// Set a key to a value
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if self.log.is_empty() {
            self.index.increment(&value);
            self.table.put(key, value);
        } else {
            self.log.push_write(key, value, &self.table, &mut self.index);
        }
    }

    /// Delete a key
    ///
    /// Outside a transaction the key is removed from the base table
    /// outright. Inside one, a remove frame is pushed.
    pub fn delete(&mut self, key: &str) {
        if self.log.is_empty() {
            if let Some(entry) = self.table.remove(key) {
                if let Some(value) = entry.as_value() {
                    self.index.decrement(value);
                }
            }
        } else {
            self.log
                .push_remove(key.to_string(), &self.table, &mut self.index);
        }
    }

    /// Number of keys holding `value`; None if the value was never observed
    pub fn count(&self, value: &V) -> Option<u64> {
        self.index.get(value)
    }

    // =========================================================================
    // Transaction Control
    // =========================================================================

    /// Push a savepoint marker
    pub fn begin(&mut self) {
        self.log.push_savepoint();
        tracing::debug!(depth = self.log.depth(), "begin");
    }

    /// Flush every pending frame into the base table
    ///
    /// Returns `KvError::NoTransaction` and changes nothing if no frame is
    /// pending.
    pub fn commit(&mut self) -> Result<()> {
        if self.log.is_empty() {
            tracing::debug!("commit: no active transaction");
            return Err(KvError::NoTransaction);
        }

        let flushed = self
            .log
            .flatten_into(&mut self.table, self.config.purge_tombstones_on_commit);
        tracing::debug!(frames = flushed, "commit");

        Ok(())
    }

    /// Undo exactly one frame, the most recent
    ///
    /// Returns `KvError::NoTransaction` and changes nothing if no frame is
    /// pending.
    pub fn rollback(&mut self) -> Result<()> {
        match self.log.undo(&mut self.index) {
            Some(_) => {
                tracing::debug!(depth = self.log.depth(), "rollback");
                Ok(())
            }
            None => {
                tracing::debug!("rollback: no active transaction");
                Err(KvError::NoTransaction)
            }
        }
    }

    /// Drop all state without running any undo logic
    pub fn clear_all(&mut self) {
        self.log.discard();
        self.table.clear();
        if self.config.reset_index_on_clear {
            self.index.clear();
        }
        tracing::debug!(index_reset = self.config.reset_index_on_clear, "clear all");
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of frames on the transaction log
    pub fn depth(&self) -> usize {
        self.log.depth()
    }

    /// Whether any frame is pending
    pub fn in_transaction(&self) -> bool {
        !self.log.is_empty()
    }

    /// Number of keys in the base table, tombstones included
    pub fn table_len(&self) -> usize {
        self.table.entry_count()
    }

    /// Base table keys in order, tombstoned keys included
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|(key, _)| key)
    }

    /// Number of distinct values the index has counted
    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// The committed state
    pub fn table(&self) -> &BaseTable<V> {
        &self.table
    }

    /// The pending frames
    pub fn log(&self) -> &TransactionLog<V> {
        &self.log
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Database<Value> {
    /// Execute a command
    ///
    /// Routes commands to appropriate handlers. `End` is a no-op here; the
    /// shell stops on it before execution.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::Get { key } => Ok(Response::Value(self.get(&key))),
            Command::Set { key, value } => {
                self.set(key, value);
                Ok(Response::Done)
            }
            Command::Delete { key } => {
                self.delete(&key);
                Ok(Response::Done)
            }
            Command::Count { value } => Ok(Response::Count(self.count(&value))),
            Command::Begin => {
                self.begin();
                Ok(Response::Done)
            }
            Command::Commit => {
                self.commit()?;
                Ok(Response::Done)
            }
            Command::Rollback => {
                self.rollback()?;
                Ok(Response::Done)
            }
            Command::Clear => {
                self.clear_all();
                Ok(Response::Done)
            }
            Command::End => Ok(Response::Done),
        }
    }
}

impl<V> Default for Database<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// A database behind a single mutex, shareable across threads
///
/// Every call takes the lock for its full duration, so each operation is
/// atomic with respect to the others. Nothing groups several calls.
#[derive(Debug)]
pub struct SharedDatabase<V = Value> {
    inner: Arc<Mutex<Database<V>>>,
}

impl<V> Clone for SharedDatabase<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> SharedDatabase<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new(database: Database<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(database)),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key)
    }

    pub fn set(&self, key: impl Into<String>, value: V) {
        self.inner.lock().set(key, value);
    }

    pub fn delete(&self, key: &str) {
        self.inner.lock().delete(key);
    }

    pub fn count(&self, value: &V) -> Option<u64> {
        self.inner.lock().count(value)
    }

    pub fn begin(&self) {
        self.inner.lock().begin();
    }

    pub fn commit(&self) -> Result<()> {
        self.inner.lock().commit()
    }

    pub fn rollback(&self) -> Result<()> {
        self.inner.lock().rollback()
    }

    pub fn clear_all(&self) {
        self.inner.lock().clear_all();
    }

    /// Run a closure with exclusive access to the database
    pub fn with<R>(&self, f: impl FnOnce(&mut Database<V>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
