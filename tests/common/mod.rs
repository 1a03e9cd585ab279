//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use jwks_key_cache::{Clock, FetchError, KeySetFetcher};
use serde_json::{json, Value};

pub const MOCKED_CURRENT_TIME: f64 = 915148801.25;

pub const KEY_ID_0: &str =
    "-----BEGIN PUBLIC KEY-----\nMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAx/jN0\n-----END PUBLIC KEY-----";
pub const KEY_ID_1: &str =
    "-----BEGIN PUBLIC KEY-----\nMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAx/jN1\n-----END PUBLIC KEY-----";

/// Initializes a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwks_key_cache=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A `token_keys` document holding `key-id-0` and `key-id-1`.
pub fn http_success() -> Value {
    json!({
        "keys": [
            {"kty": "RSA", "e": "AQAB", "use": "sig", "kid": "key-id-0", "alg": "RS256", "value": KEY_ID_0},
            {"kty": "RSA", "e": "AQAB", "use": "sig", "kid": "key-id-1", "alg": "RS256", "value": KEY_ID_1}
        ]
    })
}

// == Mock Clock ==
/// Clock whose time is set explicitly by the test.
pub struct MockClock {
    now: Mutex<f64>,
}

impl MockClock {
    pub fn new(now: f64) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: f64) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, secs: f64) {
        *self.now.lock().unwrap() += secs;
    }
}

impl Clock for MockClock {
    fn now(&self) -> f64 {
        *self.now.lock().unwrap()
    }
}

// == Scripted Fetcher ==
/// Fetcher returning a fixed document, or failing, and counting calls.
pub struct ScriptedFetcher {
    document: Mutex<Result<Value, u16>>,
    calls: AtomicUsize,
    locations: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new(document: Value) -> Arc<Self> {
        Arc::new(Self {
            document: Mutex::new(Ok(document)),
            calls: AtomicUsize::new(0),
            locations: Mutex::new(Vec::new()),
        })
    }

    /// Makes subsequent fetches fail with the given HTTP status.
    pub fn fail_with_status(&self, status: u16) {
        *self.document.lock().unwrap() = Err(status);
    }

    pub fn respond_with(&self, document: Value) {
        *self.document.lock().unwrap() = Ok(document);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().unwrap().clone()
    }
}

impl KeySetFetcher for ScriptedFetcher {
    fn fetch(&self, location: &str, _timeout: Duration) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.locations.lock().unwrap().push(location.to_string());
        match &*self.document.lock().unwrap() {
            Ok(document) => Ok(document.clone()),
            Err(status) => Err(FetchError::Status {
                location: location.to_string(),
                status: *status,
            }),
        }
    }
}
