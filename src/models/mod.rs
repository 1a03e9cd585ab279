//! Key-set document models
//!
//! Serde types for the JSON documents served by key-set endpoints.

pub mod key_set;

pub use key_set::{JsonWebKey, KeySet};
