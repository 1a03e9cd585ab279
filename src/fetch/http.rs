//! HTTP key-set fetcher
//!
//! Blocking reqwest client; the timeout is applied per request.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

use super::KeySetFetcher;
use crate::error::FetchError;

/// Fetches key sets over HTTP(S).
///
/// Must not be called from within an async runtime; the blocking client
/// drives its own.
#[derive(Debug, Clone, Default)]
pub struct HttpKeySetFetcher {
    client: Client,
}

impl HttpKeySetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (proxies, TLS roots, user agent).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl KeySetFetcher for HttpKeySetFetcher {
    fn fetch(&self, location: &str, timeout: Duration) -> Result<Value, FetchError> {
        debug!(location, timeout_ms = timeout.as_millis() as u64, "Fetching key set");

        let transport = |source| FetchError::Transport {
            location: location.to_string(),
            source,
        };

        let response = self
            .client
            .get(location)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| FetchError::MalformedDocument {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}
