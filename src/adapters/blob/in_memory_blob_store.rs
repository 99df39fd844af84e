//! In-Memory Blob Store Adapter
//!
//! Keeps uploaded documents in memory and hands out URLs under a fixed
//! base. Used in tests and when no blob token is configured.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::vercel_blob_store::inline_disposition;
use crate::ports::{BlobStore, BlobStoreError, StoredBlob};

/// In-memory blob store
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    base_url: String,
    blobs: Arc<RwLock<HashMap<String, (String, Vec<u8>)>>>,
    fail_with: Option<String>,
}

impl InMemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            blobs: Arc::new(RwLock::new(HashMap::new())),
            fail_with: None,
        }
    }

    /// A store whose every put fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new("memory://blobs")
        }
    }

    /// Stored bytes for a pathname
    pub async fn get(&self, pathname: &str) -> Option<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(pathname)
            .map(|(_, bytes)| bytes.clone())
    }

    pub async fn count(&self) -> usize {
        self.blobs.read().await.len()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new("memory://blobs")
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(
        &self,
        pathname: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredBlob, BlobStoreError> {
        if let Some(message) = &self.fail_with {
            return Err(BlobStoreError::Network(message.clone()));
        }

        self.blobs
            .write()
            .await
            .insert(pathname.to_string(), (content_type.to_string(), bytes));

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), pathname);
        Ok(StoredBlob {
            download_url: format!("{}?download=1", url),
            url,
            pathname: pathname.to_string(),
            content_type: content_type.to_string(),
            content_disposition: inline_disposition(pathname),
        })
    }
}
