//! Cache Module
//!
//! Bounded verification-key cache with TTL freshness and insertion-order eviction.

mod entry;
mod key_cache;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key_cache::KeyCache;
pub use stats::CacheStats;
pub use store::CacheKey;

pub(crate) use lru::InsertionOrder;
pub(crate) use store::{KeyStore, Lookup, StoreOutcome};
