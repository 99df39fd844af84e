//! Key-Value Store Port - Interface for the kiosk's local persistence.
//!
//! Values are opaque strings (JSON documents in practice). A missing key is
//! `Ok(None)`, never an error, so first-run state falls back to defaults.

use async_trait::async_trait;

/// Key under which the serialized cart is stored.
pub const CART_KEY: &str = "aeb-cart";

/// Key under which the quotation counter is stored.
pub const QUOTATION_COUNT_KEY: &str = "aeb-quotation-count";

/// Errors that can occur during key-value operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize value for key {key}: {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize value for key {key}: {reason}")]
    DeserializationFailed { key: String, reason: String },
}

/// Port for reading and writing string values by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing has been stored yet
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the value under `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_match_kiosk_layout() {
        assert_eq!(CART_KEY, "aeb-cart");
        assert_eq!(QUOTATION_COUNT_KEY, "aeb-quotation-count");
    }

    #[test]
    fn deserialization_error_names_the_key() {
        let err = KeyValueStoreError::DeserializationFailed {
            key: CART_KEY.to_string(),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("aeb-cart"));
        assert!(err.to_string().contains("deserialize"));
    }
}
