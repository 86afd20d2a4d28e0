//! # Index
//!
//! The in-memory key → value map behind the engine.
//!
//! The index is derived state: at any moment it equals the fold of all
//! committed entries in the log, later entries overriding earlier ones and a
//! tombstone removing its key. It is rebuilt from the log on open and
//! mutated only after a successful append, so it never gets ahead of disk.
//!
//! ## Key properties
//! - **Hash-backed**: point lookups only; iteration order is irrelevant.
//! - **No tombstones in memory**: replay applies operations in log order, so
//!   a delete simply removes the key.
//! - **Approximate size tracking**: tracks key + value bytes so callers can
//!   see the working set the store is holding in memory.

use std::collections::HashMap;

/// An unordered in-memory map from key bytes to value bytes.
///
/// The map tracks an approximate byte size (keys + values, not container
/// overhead) alongside the entries.
#[derive(Debug, Default)]
pub struct Index {
    map: HashMap<Vec<u8>, Vec<u8>>,
    approx_size: usize,
}

impl Index {
    /// Creates a new, empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a key-value pair.
    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) {
        match self.map.get(&key) {
            Some(old) => {
                // Key bytes are already counted; swap the value bytes.
                self.approx_size = self.approx_size.saturating_sub(old.len());
            }
            None => {
                self.approx_size = self.approx_size.saturating_add(key.len());
            }
        }
        self.approx_size = self.approx_size.saturating_add(value.len());
        self.map.insert(key, value);
    }

    /// Removes a key, returning `true` if it was present.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        match self.map.remove(key) {
            Some(old) => {
                self.approx_size = self.approx_size.saturating_sub(key.len() + old.len());
                true
            }
            None => false,
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of live keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Approximate byte size of all keys and values stored.
    pub fn approx_size(&self) -> usize {
        self.approx_size
    }

    /// Removes all entries and resets the size counter.
    pub fn clear(&mut self) {
        self.map.clear();
        self.approx_size = 0;
    }
}
