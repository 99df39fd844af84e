//! HTTP DTOs for the upload relay.
//!
//! The relay keeps the `{error, details}` error shape the kiosk front-end
//! already parses, rather than the `errorCode` envelope used elsewhere.

use serde::{Deserialize, Serialize};

/// Query string of the upload endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    pub filename: Option<String>,
}

/// Error body returned by the upload relay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl UploadErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
