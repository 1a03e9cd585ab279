//! Cache Statistics Module
//!
//! Tracks key cache metrics: hits, misses, fetches, evictions and failures.

use serde::Serialize;

// == Cache Stats ==
/// Tracks key cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups served from a fresh entry
    pub hits: u64,
    /// Lookups with no entry for the composite key
    pub misses: u64,
    /// Lookups that found an entry past its TTL
    pub stale: u64,
    /// Key-set fetches issued
    pub fetches: u64,
    /// Fetches that failed (transport, status or malformed document)
    pub fetch_failures: u64,
    /// Fetched key sets lacking the requested key
    pub keys_not_found: u64,
    /// Entries removed to respect the capacity bound
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale += 1;
    }

    pub fn record_fetch(&mut self) {
        self.fetches += 1;
    }

    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn record_key_not_found(&mut self) {
        self.keys_not_found += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
