//! Value-count index implementation

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from value to the number of keys holding it
#[derive(Debug, Clone)]
pub struct ValueIndex<V> {
    counts: HashMap<V, u64>,
}

impl<V> ValueIndex<V>
where
    V: Clone + Eq + Hash,
{
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Count for a value; None if the value was never observed
    pub fn get(&self, value: &V) -> Option<u64> {
        self.counts.get(value).copied()
    }

    /// Record one more key holding `value`
    pub fn increment(&mut self, value: &V) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.clone(), 1);
            }
        }
    }

    /// Record one fewer key holding `value`
    ///
    /// Saturates at zero. The entry is kept so the value keeps reporting
    /// `Some(0)` afterwards.
    pub fn decrement(&mut self, value: &V) {
        let count = self.counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            tracing::warn!("value-count index underflow; count stays at zero");
            return;
        }
        *count -= 1;
    }

    /// Number of distinct values ever observed since the last clear
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Drop every count
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

impl<V> Default for ValueIndex<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
