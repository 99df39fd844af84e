//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Upload limit must be between 1 byte and 50 MiB")]
    InvalidUploadLimit,

    #[error("Blob base URL must be an http(s) URL")]
    InvalidBlobUrl,

    #[error("Blob base URL must use HTTPS in production")]
    BlobUrlMustBeHttps,

    #[error("Bonus threshold must be a finite, non-negative amount")]
    InvalidBonusThreshold,

    #[error("Weight increment must be a finite, non-negative number")]
    InvalidWeightIncrement,
}
