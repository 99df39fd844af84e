//! RelayDocumentHandler - Publishes a rendered quotation PDF.
//!
//! The kiosk posts the raw PDF bytes; the handler picks the blob pathname,
//! stores the document publicly and returns the blob metadata whose URL is
//! encoded in the on-screen QR code.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::ports::{BlobStore, BlobStoreError, StoredBlob};

/// Content type of every relayed document.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Command to relay one document.
#[derive(Debug, Clone)]
pub struct RelayDocumentCommand {
    /// Requested file name; empty or missing picks a timestamped default.
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum RelayDocumentError {
    #[error("Request body (PDF) not found")]
    EmptyBody,

    #[error("Invalid file name: {0}")]
    InvalidFilename(String),

    #[error("Document of {size} bytes exceeds the {max} byte limit")]
    TooLarge { size: usize, max: usize },

    #[error(transparent)]
    Store(#[from] BlobStoreError),
}

pub struct RelayDocumentHandler {
    store: Arc<dyn BlobStore>,
    max_bytes: usize,
}

impl RelayDocumentHandler {
    pub fn new(store: Arc<dyn BlobStore>, max_bytes: usize) -> Self {
        Self { store, max_bytes }
    }

    pub async fn handle(&self, cmd: RelayDocumentCommand) -> Result<StoredBlob, RelayDocumentError> {
        if cmd.bytes.is_empty() {
            tracing::warn!("Upload rejected: empty body");
            return Err(RelayDocumentError::EmptyBody);
        }
        if cmd.bytes.len() > self.max_bytes {
            return Err(RelayDocumentError::TooLarge {
                size: cmd.bytes.len(),
                max: self.max_bytes,
            });
        }

        let pathname = match cmd.filename.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => validate_filename(name)?,
            _ => default_filename(Timestamp::now()),
        };

        let size = cmd.bytes.len();
        tracing::info!(pathname = %pathname, size, "Uploading quotation document");

        match self.store.put(&pathname, cmd.bytes, PDF_CONTENT_TYPE).await {
            Ok(blob) => {
                tracing::info!(url = %blob.url, "Quotation document uploaded");
                Ok(blob)
            }
            Err(e) => {
                tracing::error!(pathname = %pathname, error = %e, "Quotation document upload failed");
                Err(e.into())
            }
        }
    }
}

/// `orcamento-aeb-{unix millis}.pdf`
pub fn default_filename(now: Timestamp) -> String {
    format!("orcamento-aeb-{}.pdf", now.unix_millis())
}

/// Relative `/`-separated name without traversal, control characters or URL
/// delimiters (`?`, `#`).
fn validate_filename(name: &str) -> Result<String, RelayDocumentError> {
    if name.starts_with('/')
        || name.contains('\\')
        || name.split('/').any(|segment| segment == ".." || segment.is_empty())
        || name.chars().any(|c| c.is_control() || matches!(c, '?' | '#'))
    {
        return Err(RelayDocumentError::InvalidFilename(name.to_string()));
    }
    Ok(name.to_string())
}
