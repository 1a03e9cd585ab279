//! Insertion Order Module
//!
//! Ordered map tracking insertion/update order for eviction.

use std::hash::Hash;

use lru::LruCache;

// == Insertion Order ==
/// Map whose iteration order is insertion/update order.
///
/// - Back = most recently inserted or updated
/// - Front = oldest, next eviction candidate
///
/// Reads go through [`peek`](Self::peek) and never reorder. Backed by a
/// linked hash map, so upsert and pop are O(1). Capacity is enforced by the
/// caller.
#[derive(Debug)]
pub struct InsertionOrder<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> InsertionOrder<K, V> {
    // == Constructor ==
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            inner: LruCache::unbounded(),
        }
    }

    // == Peek ==
    /// Returns the value for `key` without changing its position.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.inner.peek(key)
    }

    // == Upsert ==
    /// Inserts or replaces the value for `key` and moves it to the back.
    ///
    /// Returns the replaced value, if any.
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.put(key, value)
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        self.inner.pop_lru()
    }

    // == Keys ==
    /// Iterates keys from oldest to newest.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.iter().rev().map(|(key, _)| key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Hash + Eq, V> Default for InsertionOrder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
