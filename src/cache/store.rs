//! Key Store Module
//!
//! Composite-keyed storage combining insertion-order tracking with TTL freshness.
//! Not synchronized; [`KeyCache`](crate::KeyCache) guards it with a mutex.

use std::fmt;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == Cache Key ==
/// The exact `(key-set location, key id)` pair an entry is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    location: String,
    key_id: String,
}

impl CacheKey {
    pub fn new(location: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            key_id: key_id.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [kid={}]", self.location, self.key_id)
    }
}

// == Lookup ==
/// Result of checking the store for a composite key.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Entry present and within its TTL
    Fresh(String),
    /// Entry present but past its TTL, with its age in seconds
    Stale { age: f64 },
    /// No entry for this key
    Missing,
}

// == Store Outcome ==
/// What an upsert did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// A new key was appended, possibly after evicting the oldest entry
    Inserted { evicted: Option<CacheKey> },
    /// An existing key was replaced and moved to the newest position
    Refreshed,
}

// == Key Store ==
/// Bounded map from [`CacheKey`] to [`CacheEntry`].
#[derive(Debug)]
pub struct KeyStore {
    /// Entries in insertion/update order
    entries: InsertionOrder<CacheKey, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed (>= 1)
    capacity: usize,
    /// Entry time-to-live in seconds
    ttl_secs: f64,
}

impl KeyStore {
    // == Constructor ==
    /// Creates a new KeyStore.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; zero is treated as one
    /// * `ttl_secs` - Entry time-to-live in seconds
    pub fn new(capacity: usize, ttl_secs: f64) -> Self {
        Self {
            entries: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl_secs,
        }
    }

    // == Lookup ==
    /// Checks for a fresh entry at time `now`.
    ///
    /// Never mutates the entries or their order; only statistics are updated.
    pub fn lookup(&mut self, key: &CacheKey, now: f64) -> Lookup {
        match self.entries.peek(key) {
            Some(entry) if entry.is_valid(now, self.ttl_secs) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Lookup::Fresh(value)
            }
            Some(entry) => {
                let age = entry.age(now);
                self.stats.record_stale();
                Lookup::Stale { age }
            }
            None => {
                self.stats.record_miss();
                Lookup::Missing
            }
        }
    }

    // == Store ==
    /// Inserts or refreshes the entry for `key`.
    ///
    /// A refresh replaces the entry and moves it to the newest position. A new
    /// key at capacity first evicts exactly one entry, the oldest by order.
    pub fn store(&mut self, key: CacheKey, entry: CacheEntry) -> StoreOutcome {
        let outcome = if self.entries.contains(&key) {
            StoreOutcome::Refreshed
        } else if self.entries.len() >= self.capacity {
            let evicted = self.entries.pop_oldest().map(|(evicted, _)| evicted);
            if evicted.is_some() {
                self.stats.record_eviction();
            }
            StoreOutcome::Inserted { evicted }
        } else {
            StoreOutcome::Inserted { evicted: None }
        };

        self.entries.upsert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        outcome
    }

    // == Entry ==
    /// Returns the entry for `key` without reordering.
    #[cfg(test)]
    pub fn entry(&self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.peek(key)
    }

    /// Iterates keys from oldest to newest.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &CacheKey> {
        self.entries.keys()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains(key)
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Mutable access for recording fetch outcomes.
    pub fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
