//! Vercel Blob Store - HTTP adapter for the Vercel Blob API.
//!
//! Issues a single `PUT {base_url}/{pathname}` (segments percent-encoded) with the bearer token and
//! public access. No retries: a failed upload surfaces to the kiosk, which
//! offers the local download instead.
//!
//! # Configuration
//!
//! ```ignore
//! let config = VercelBlobConfig::new(token)
//!     .with_base_url("https://blob.vercel-storage.com")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let store = VercelBlobStore::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{BlobStore, BlobStoreError, StoredBlob};

/// Default public endpoint of the Vercel Blob API.
pub const DEFAULT_BLOB_BASE_URL: &str = "https://blob.vercel-storage.com";

/// API version header value understood by the blob endpoint.
const BLOB_API_VERSION: &str = "7";

/// Configuration for the Vercel blob adapter.
#[derive(Debug, Clone)]
pub struct VercelBlobConfig {
    /// Read-write token for the blob store.
    token: Secret<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl VercelBlobConfig {
    /// Creates a configuration with the given read-write token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
            base_url: DEFAULT_BLOB_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Response body of a successful put.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutBlobResponse {
    url: String,
    pathname: String,
    content_type: Option<String>,
    content_disposition: Option<String>,
    download_url: Option<String>,
}

/// Vercel Blob API client.
pub struct VercelBlobStore {
    config: VercelBlobConfig,
    base_url: Url,
    client: Client,
}

impl VercelBlobStore {
    /// Creates the store with its own HTTP client.
    ///
    /// # Errors
    ///
    /// `BlobStoreError::NotConfigured` if the base URL is not a usable
    /// http(s) base or the HTTP client cannot be built.
    pub fn new(config: VercelBlobConfig) -> Result<Self, BlobStoreError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BlobStoreError::NotConfigured(format!("base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BlobStoreError::NotConfigured(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BlobStoreError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Appends each `/`-separated part of `pathname` as a percent-encoded
    /// path segment, so `?`, `#` and spaces stay part of the blob name.
    fn put_url(&self, pathname: &str) -> Result<Url, BlobStoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BlobStoreError::NotConfigured("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(pathname.split('/'));
        Ok(url)
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, BlobStoreError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(BlobStoreError::AuthenticationFailed(error_body)),
            code => Err(BlobStoreError::Rejected {
                status: code,
                message: error_body,
            }),
        }
    }
}

#[async_trait]
impl BlobStore for VercelBlobStore {
    async fn put(
        &self,
        pathname: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredBlob, BlobStoreError> {
        let size = bytes.len();
        tracing::debug!(pathname, size, "Uploading blob");

        let url = self.put_url(pathname)?;
        let response = self
            .client
            .put(url)
            .bearer_auth(self.config.token())
            .header("x-api-version", BLOB_API_VERSION)
            .header("x-content-type", content_type)
            .header("x-access", "public")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BlobStoreError::Network(format!(
                        "Timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    BlobStoreError::Network(format!("Connection failed: {}", e))
                } else {
                    BlobStoreError::Network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body: PutBlobResponse = response
            .json()
            .await
            .map_err(|e| BlobStoreError::InvalidResponse(e.to_string()))?;

        Ok(into_stored_blob(body, content_type))
    }
}

fn into_stored_blob(body: PutBlobResponse, content_type: &str) -> StoredBlob {
    let download_url = body
        .download_url
        .unwrap_or_else(|| format!("{}?download=1", body.url));
    let content_disposition = body
        .content_disposition
        .unwrap_or_else(|| inline_disposition(&body.pathname));

    StoredBlob {
        url: body.url,
        pathname: body.pathname,
        content_type: body.content_type.unwrap_or_else(|| content_type.to_string()),
        content_disposition,
        download_url,
    }
}

/// `inline; filename="…"` using the last path segment.
pub(crate) fn inline_disposition(pathname: &str) -> String {
    let name = pathname.rsplit('/').next().unwrap_or(pathname);
    format!("inline; filename=\"{}\"", name)
}
