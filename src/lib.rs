//! JWKS Key Cache - verification key cache for JWT validation
//!
//! Resolves `(key-set location, key id)` pairs to public key material, fetching
//! the remote key set only when no fresh local copy exists. Entries expire after
//! a TTL and the cache is bounded, evicting in insertion/update order.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use cache::{CacheEntry, CacheKey, CacheStats, KeyCache};
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{FetchError, KeyCacheError, Result};
pub use fetch::{HttpKeySetFetcher, KeySetFetcher};
pub use models::{JsonWebKey, KeySet};
