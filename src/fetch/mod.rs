//! Key-set fetching
//!
//! The [`KeySetFetcher`] trait is the seam between the cache and the network.

mod http;

use std::time::Duration;

use serde_json::Value;

use crate::error::FetchError;

pub use http::HttpKeySetFetcher;

/// Synchronously retrieves the key-set document served at `location`.
///
/// Implementations return the parsed JSON document; interpreting it as a key
/// set is left to the caller. An empty or non-matching document is not an error
/// at this level.
pub trait KeySetFetcher: Send + Sync {
    fn fetch(&self, location: &str, timeout: Duration) -> Result<Value, FetchError>;
}
