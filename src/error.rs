//! Error types for the key cache
//!
//! Separates transport failures from "reached the key set but the key is not there".

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of the key-set fetcher. The cache never recovers from these locally.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, timeout or unreadable body
    #[error("Key set request to {location} failed: {source}")]
    Transport {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status
    #[error("Key set endpoint {location} returned status {status}")]
    Status { location: String, status: u16 },

    /// Body is not a key-set shaped JSON document
    #[error("Malformed key set document from {location}: {reason}")]
    MalformedDocument { location: String, reason: String },
}

// == Key Cache Error Enum ==
/// Error returned by [`KeyCache::load_key`](crate::KeyCache::load_key).
#[derive(Error, Debug)]
pub enum KeyCacheError {
    /// The key set could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The key set was fetched but holds no key with the requested id
    #[error("Key '{key_id}' not found in key set {location}")]
    KeyNotFound { location: String, key_id: String },
}

impl KeyCacheError {
    /// True if the key-set source could not be reached or parsed.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, KeyCacheError::Fetch(_))
    }

    /// True if the key set was reachable but lacks the requested key.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, KeyCacheError::KeyNotFound { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the key cache.
pub type Result<T> = std::result::Result<T, KeyCacheError>;
