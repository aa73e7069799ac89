//! Transaction log implementation
//!
//! Vec-backed frame stack with index maintenance on push and undo.

use std::hash::Hash;

use super::Frame;
use crate::index::ValueIndex;
use crate::table::BaseTable;

/// Ordered stack of pending frames (oldest at index 0)
#[derive(Debug, Clone)]
pub struct TransactionLog<V> {
    frames: Vec<Frame<V>>,
}

impl<V> TransactionLog<V>
where
    V: Clone + Eq + Hash,
{
    /// Create a new empty log
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Answer a read from pending frames only
    ///
    /// Returns `None` when no frame touches `key`, otherwise
    /// `Some(resolution)` from the most recent frame that does.
    pub fn lookup(&self, key: &str) -> Option<Option<&V>> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.touches(key))
            .map(Frame::resolved)
    }

    /// Effective value of `key`: pending frames first, then the base table
    pub fn resolve<'a>(&'a self, key: &str, table: &'a BaseTable<V>) -> Option<&'a V> {
        match self.lookup(key) {
            Some(resolution) => resolution,
            None => table.value(key),
        }
    }

    // =========================================================================
    // Push
    // =========================================================================

    /// Push a savepoint marker
    pub fn push_savepoint(&mut self) {
        tracing::trace!(depth = self.frames.len(), "push savepoint");
        self.frames.push(Frame::Savepoint);
    }

    /// Push a write frame
    ///
    /// The index gains one for `value`; whatever `key` resolved to before
    /// keeps its count.
    pub fn push_write(
        &mut self,
        key: String,
        value: V,
        table: &BaseTable<V>,
        index: &mut ValueIndex<V>,
    ) {
        let shadowed = self.resolve(&key, table).cloned();
        index.increment(&value);

        tracing::trace!(depth = self.frames.len(), key = %key, "push write");
        self.frames.push(Frame::Write {
            key,
            value,
            shadowed,
        });
    }

    /// Push a remove frame, taking the key's effective value out of the index
    pub fn push_remove(&mut self, key: String, table: &BaseTable<V>, index: &mut ValueIndex<V>) {
        let shadowed = self.resolve(&key, table).cloned();
        if let Some(value) = &shadowed {
            index.decrement(value);
        }

        tracing::trace!(depth = self.frames.len(), key = %key, "push remove");
        self.frames.push(Frame::Remove { key, shadowed });
    }

    // =========================================================================
    // Undo / Flatten
    // =========================================================================

    /// Pop the top frame and reverse its index adjustment
    ///
    /// Returns None if the log is empty.
    pub fn undo(&mut self, index: &mut ValueIndex<V>) -> Option<Frame<V>> {
        let frame = self.frames.pop()?;

        match &frame {
            Frame::Savepoint => {}
            Frame::Write { value, .. } => index.decrement(value),
            Frame::Remove { shadowed, .. } => {
                if let Some(value) = shadowed {
                    index.increment(value);
                }
            }
        }

        tracing::trace!(depth = self.frames.len(), frame = ?frame.key(), "undo frame");
        Some(frame)
    }

    /// Apply every frame to the base table oldest-first and empty the log
    ///
    /// Removes become tombstones unless `purge_tombstones` is set, in which
    /// case the key is removed outright. The index is not touched; it
    /// already reflects every frame. Returns the number of frames flushed.
    pub fn flatten_into(&mut self, table: &mut BaseTable<V>, purge_tombstones: bool) -> usize {
        let flushed = self.frames.len();

        for frame in self.frames.drain(..) {
            match frame {
                Frame::Savepoint => {}
                Frame::Write { key, value, .. } => table.put(key, value),
                Frame::Remove { key, .. } => {
                    if purge_tombstones {
                        table.remove(&key);
                    } else {
                        table.tombstone(key);
                    }
                }
            }
        }

        flushed
    }

    /// Drop every frame without undoing anything
    pub fn discard(&mut self) {
        self.frames.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of frames on the stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames oldest-first
    pub fn frames(&self) -> &[Frame<V>] {
        &self.frames
    }

    /// Number of savepoint markers on the stack
    pub fn savepoints(&self) -> usize {
        self.frames.iter().filter(|frame| frame.is_savepoint()).count()
    }
}

impl<V> Default for TransactionLog<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
