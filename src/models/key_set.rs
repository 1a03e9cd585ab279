//! Key set document
//!
//! Interprets a fetched document as a list of `(kid, value)` pairs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

/// A key-set document, e.g. `{"keys": [{"kid": "key-id-0", "value": "-----BEGIN ..."}]}`.
///
/// A document without a `keys` field is an empty key set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySet {
    #[serde(default)]
    pub keys: Vec<JsonWebKey>,
}

/// A single key of a key set. Only `kid` and `value` are consulted by the cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonWebKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Encoded key material (PEM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
}

impl KeySet {
    /// Parses a fetched document.
    ///
    /// Fails with [`FetchError::MalformedDocument`] if the document is not an
    /// object or its `keys` field is not a list of key objects.
    pub fn from_document(location: &str, document: Value) -> Result<Self, FetchError> {
        serde_json::from_value(document).map_err(|e| FetchError::MalformedDocument {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }

    /// Returns the key material of the first key whose id equals `key_id`.
    pub fn key_value(&self, key_id: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|key| key.kid.as_deref() == Some(key_id))
            .and_then(|key| key.value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
