//! Cache Entry Module
//!
//! Defines the structure for individual cached keys with TTL-based freshness.

// == Cache Entry ==
/// Key material paired with the time it was stored.
///
/// Entries are replaced wholesale on refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored key material (opaque, typically PEM)
    pub value: String,
    /// Insertion timestamp (Unix seconds, fractional)
    pub insert_timestamp: f64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stored at `insert_timestamp`.
    pub fn new(value: impl Into<String>, insert_timestamp: f64) -> Self {
        Self {
            value: value.into(),
            insert_timestamp,
        }
    }

    // == Is Valid ==
    /// Checks whether the entry is still fresh.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is stale.
    ///
    /// # Arguments
    /// * `now` - Current time in Unix seconds
    /// * `ttl_secs` - Time-to-live in seconds
    pub fn is_valid(&self, now: f64, ttl_secs: f64) -> bool {
        now - self.insert_timestamp < ttl_secs
    }

    // == Age ==
    /// Returns the age of the entry in seconds.
    pub fn age(&self, now: f64) -> f64 {
        now - self.insert_timestamp
    }
}
