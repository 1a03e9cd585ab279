//! Key Cache Module
//!
//! Thread-safe fetch-on-miss cache of verification keys.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheKey, CacheStats, KeyStore, Lookup, StoreOutcome};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{KeyCacheError, Result};
use crate::fetch::{HttpKeySetFetcher, KeySetFetcher};
use crate::models::KeySet;

// == Key Cache ==
/// Resolves `(location, key id)` to key material, fetching the key set only
/// when no fresh entry exists.
///
/// The store is guarded by a single mutex held only for map operations. The
/// fetch runs outside the lock, so two threads missing the same key may both
/// fetch; the later store simply refreshes the earlier one.
pub struct KeyCache {
    store: Mutex<KeyStore>,
    fetcher: Arc<dyn KeySetFetcher>,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl KeyCache {
    // == Constructors ==
    /// Creates a cache with default configuration.
    pub fn new(fetcher: Arc<dyn KeySetFetcher>) -> Self {
        Self::with_config(fetcher, Config::default())
    }

    /// Creates a cache with the given configuration and the system clock.
    pub fn with_config(fetcher: Arc<dyn KeySetFetcher>, config: Config) -> Self {
        Self {
            store: Mutex::new(KeyStore::new(config.cache_size, config.entry_ttl_secs())),
            fetcher,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replaces the clock used for freshness checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // == Load Key ==
    /// Returns the key material for `key_id` from the key set at `location`.
    ///
    /// # Errors
    /// - [`KeyCacheError::Fetch`] if the key set could not be retrieved
    /// - [`KeyCacheError::KeyNotFound`] if the key set has no key `key_id`
    ///
    /// The cache is left untouched on either error.
    pub fn load_key(&self, location: &str, key_id: &str) -> Result<String> {
        let cache_key = CacheKey::new(location, key_id);

        {
            let mut store = self.store.lock();
            match store.lookup(&cache_key, self.clock.now()) {
                Lookup::Fresh(value) => {
                    debug!(location, key_id, "Key cache hit");
                    return Ok(value);
                }
                Lookup::Stale { age } => {
                    debug!(location, key_id, age_secs = age, "Key cache entry expired")
                }
                Lookup::Missing => debug!(location, key_id, "Key cache miss"),
            }
            store.stats_mut().record_fetch();
        }

        let value = self.fetch_key(location, key_id)?;

        let entry = CacheEntry::new(value.clone(), self.clock.now());
        let outcome = self.store.lock().store(cache_key, entry);

        match outcome {
            StoreOutcome::Refreshed => info!(location, key_id, "Refreshed cached key"),
            StoreOutcome::Inserted { evicted } => {
                if let Some(evicted) = evicted {
                    debug!(
                        evicted_location = evicted.location(),
                        evicted_key_id = evicted.key_id(),
                        "Evicted oldest cached key"
                    );
                }
                info!(location, key_id, "Cached key");
            }
        }

        Ok(value)
    }

    // == Fetch Key ==
    /// Fetches the key set and selects `key_id`, recording failures.
    fn fetch_key(&self, location: &str, key_id: &str) -> Result<String> {
        let key_set = self
            .fetcher
            .fetch(location, self.config.http_timeout())
            .and_then(|document| KeySet::from_document(location, document));

        let key_set = match key_set {
            Ok(key_set) => key_set,
            Err(e) => {
                warn!(location, key_id, error = %e, "Key set fetch failed");
                self.store.lock().stats_mut().record_fetch_failure();
                return Err(e.into());
            }
        };

        match key_set.key_value(key_id) {
            Some(value) => Ok(value.to_string()),
            None => {
                warn!(
                    location,
                    key_id,
                    available = key_set.len(),
                    "Key id not present in key set"
                );
                self.store.lock().stats_mut().record_key_not_found();
                Err(KeyCacheError::KeyNotFound {
                    location: location.to_string(),
                    key_id: key_id.to_string(),
                })
            }
        }
    }

    // == Introspection ==
    /// True if an entry, fresh or stale, exists for the exact pair.
    pub fn contains(&self, location: &str, key_id: &str) -> bool {
        self.store.lock().contains(&CacheKey::new(location, key_id))
    }

    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

impl Default for KeyCache {
    /// HTTP-backed cache with default configuration.
    fn default() -> Self {
        Self::new(Arc::new(HttpKeySetFetcher::new()))
    }
}
