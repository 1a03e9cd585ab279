//! Configuration Module
//!
//! Holds the key cache tuning constants, loadable from environment variables.

use std::env;
use std::time::Duration;

/// Default timeout for a key-set request, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 2;

/// Default maximum number of cached keys.
pub const DEFAULT_CACHE_SIZE: usize = 100;

/// Default time-to-live of a cache entry, in minutes.
pub const DEFAULT_ENTRY_TTL_MINUTES: u64 = 15;

/// Key cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout applied to every key-set fetch, in seconds
    pub http_timeout_secs: u64,
    /// Maximum number of entries the cache can hold (always > 0)
    pub cache_size: usize,
    /// Time-to-live of a cache entry, in minutes
    pub entry_ttl_minutes: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `KEYCACHE_HTTP_TIMEOUT_SECS` - Fetch timeout in seconds (default: 2)
    /// - `KEYCACHE_CACHE_SIZE` - Maximum cache entries, must be > 0 (default: 100)
    /// - `KEYCACHE_ENTRY_TTL_MINUTES` - Entry TTL in minutes (default: 15)
    pub fn from_env() -> Self {
        Self {
            http_timeout_secs: env::var("KEYCACHE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            cache_size: env::var("KEYCACHE_CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_CACHE_SIZE),
            entry_ttl_minutes: env::var("KEYCACHE_ENTRY_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ENTRY_TTL_MINUTES),
        }
    }

    /// Sets the fetch timeout in seconds.
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Sets the cache capacity. Zero is clamped to one.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size.max(1);
        self
    }

    /// Sets the entry TTL in minutes.
    pub fn with_entry_ttl_minutes(mut self, minutes: u64) -> Self {
        self.entry_ttl_minutes = minutes;
        self
    }

    /// Fetch timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Entry TTL in seconds, as compared against clock deltas.
    pub fn entry_ttl_secs(&self) -> f64 {
        self.entry_ttl_minutes as f64 * 60.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            cache_size: DEFAULT_CACHE_SIZE,
            entry_ttl_minutes: DEFAULT_ENTRY_TTL_MINUTES,
        }
    }
}
