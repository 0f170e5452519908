//! Keyed index from a lookup key to a slab key.
//!
//! Two instances live inside every heap:
//!
//! - the level index: price → level slab key
//! - the order index: order id → node slab key
//!
//! `put` and `remove` are strict. Inserting a key twice or removing a key
//! that is not present means the heap's bookkeeping is already wrong, so
//! both panic instead of returning a value the caller could ignore.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Strict map from `K` to a slab key.
#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    entries: HashMap<K, usize>,
}

impl<K> Default for KeyIndex<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Copy + Debug> KeyIndex<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a new entry.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already present.
    #[inline]
    pub fn put(&mut self, key: K, value: usize) {
        let previous = self.entries.insert(key, value);
        assert!(previous.is_none(), "index already holds key {key:?}");
    }

    #[inline]
    pub fn get(&self, key: K) -> Option<usize> {
        self.entries.get(&key).copied()
    }

    /// Remove an entry and return its value.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent.
    #[inline]
    pub fn remove(&mut self, key: K) -> usize {
        match self.entries.remove(&key) {
            Some(value) => value,
            None => panic!("index has no key {key:?}"),
        }
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut index: KeyIndex<i64> = KeyIndex::with_capacity(8);
        assert!(index.is_empty());

        index.put(-100, 3);
        index.put(100, 4);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(-100), Some(3));
        assert_eq!(index.get(100), Some(4));
        assert_eq!(index.get(0), None);
        assert!(index.contains(100));

        assert_eq!(index.remove(-100), 3);
        assert!(!index.contains(-100));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_key_reusable_after_remove() {
        let mut index: KeyIndex<u64> = KeyIndex::default();
        index.put(1, 10);
        index.remove(1);
        index.put(1, 11);
        assert_eq!(index.get(1), Some(11));
    }

    #[test]
    fn test_clear() {
        let mut index: KeyIndex<u64> = KeyIndex::with_capacity(4);
        index.put(1, 1);
        index.put(2, 2);
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.get(1), None);
    }

    #[test]
    #[should_panic(expected = "index already holds key 7")]
    fn test_duplicate_put_panics() {
        let mut index: KeyIndex<u64> = KeyIndex::default();
        index.put(7, 0);
        index.put(7, 1);
    }

    #[test]
    #[should_panic(expected = "index has no key 9")]
    fn test_remove_missing_panics() {
        let mut index: KeyIndex<u64> = KeyIndex::default();
        index.remove(9);
    }
}
