//! Blob store configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::blob::DEFAULT_BLOB_BASE_URL;

/// Blob store configuration
///
/// Without a token the relay keeps documents in memory, which is only
/// acceptable outside production.
#[derive(Clone, Deserialize)]
pub struct BlobConfig {
    /// Base URL of the blob API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Read-write token for the blob store
    pub token: Option<String>,

    /// Upload timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl BlobConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a token is configured
    pub fn has_token(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate blob configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBlobUrl);
        }
        if *environment == Environment::Production {
            if !self.has_token() {
                return Err(ValidationError::MissingRequired("BLOB__TOKEN"));
            }
            if !self.base_url.starts_with("https://") {
                return Err(ValidationError::BlobUrlMustBeHttps);
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl fmt::Debug for BlobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BLOB_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}
