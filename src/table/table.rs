//! Base table implementation
//!
//! BTreeMap-backed committed state.

use std::collections::btree_map;
use std::collections::BTreeMap;

use super::TableEntry;

/// Committed mapping from key to value
#[derive(Debug, Clone)]
pub struct BaseTable<V> {
    data: BTreeMap<String, TableEntry<V>>,
}

impl<V> BaseTable<V> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Raw entry lookup, tombstones included
    pub fn get(&self, key: &str) -> Option<&TableEntry<V>> {
        self.data.get(key)
    }

    /// Live value for a key (absent and tombstoned keys both yield None)
    pub fn value(&self, key: &str) -> Option<&V> {
        self.data.get(key).and_then(TableEntry::as_value)
    }

    /// Insert or overwrite a live value
    pub fn put(&mut self, key: String, value: V) {
        self.data.insert(key, TableEntry::Value(value));
    }

    /// Mark a key as deleted while keeping it in the table
    pub fn tombstone(&mut self, key: String) {
        self.data.insert(key, TableEntry::Tombstone);
    }

    /// Physically remove a key, returning the entry it held
    pub fn remove(&mut self, key: &str) -> Option<TableEntry<V>> {
        self.data.remove(key)
    }

    /// Number of keys present, tombstones included
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> BaseTableIter<'_, V> {
        BaseTableIter {
            inner: self.data.iter(),
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<V> Default for BaseTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over base table entries in key order
pub struct BaseTableIter<'a, V> {
    inner: btree_map::Iter<'a, String, TableEntry<V>>,
}

impl<'a, V> Iterator for BaseTableIter<'a, V> {
    type Item = (&'a str, &'a TableEntry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, entry)| (key.as_str(), entry))
    }
}
