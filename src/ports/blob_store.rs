//! Blob Store Port - Interface for publishing documents at a public URL.
//!
//! The kiosk renders the quotation PDF locally and relays the bytes here;
//! the returned URL is what the QR code on screen points at.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Metadata for a stored blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBlob {
    /// Public URL of the blob
    pub url: String,
    /// Path the blob was stored under
    pub pathname: String,
    pub content_type: String,
    pub content_disposition: String,
    /// URL that forces a download instead of inline display
    pub download_url: String,
}

/// Errors that can occur while storing a blob
#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Blob store is not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Blob store rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from blob store: {0}")]
    InvalidResponse(String),
}

/// Port for storing binary documents publicly
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `pathname` with public read access
    ///
    /// # Errors
    /// Returns `BlobStoreError` if the backing service refuses or is unreachable
    async fn put(
        &self,
        pathname: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredBlob, BlobStoreError>;
}
