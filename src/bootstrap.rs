//! Wires configuration to concrete adapters.

use std::sync::Arc;
use thiserror::Error;

use crate::adapters::blob::{InMemoryBlobStore, VercelBlobConfig, VercelBlobStore};
use crate::adapters::http::ApiServices;
use crate::adapters::random::ThreadRngSource;
use crate::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use crate::application::handlers::KioskState;
use crate::config::{AppConfig, ConfigError, StorageBackend};
use crate::domain::pricing::PricingEngine;
use crate::domain::promotion::PrizeWheel;
use crate::ports::{BlobStore, BlobStoreError, KeyValueStore};
use crate::telemetry::TelemetryError;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Blob store setup failed: {0}")]
    BlobStore(#[from] BlobStoreError),

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the API dependencies described by `config`.
pub fn build_services(config: &AppConfig) -> Result<ApiServices, StartupError> {
    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; cart and counter reset on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let blob_store: Arc<dyn BlobStore> = match &config.blob.token {
        Some(token) if config.blob.has_token() => {
            let blob_config = VercelBlobConfig::new(token.clone())
                .with_base_url(config.blob.base_url.clone())
                .with_timeout(config.blob.timeout());
            Arc::new(VercelBlobStore::new(blob_config)?)
        }
        _ => {
            tracing::warn!("No blob token configured; uploaded PDFs are kept in memory");
            Arc::new(InMemoryBlobStore::default())
        }
    };

    Ok(ApiServices {
        kiosk: KioskState::new(store),
        engine: Arc::new(PricingEngine::standard()),
        wheel: Arc::new(PrizeWheel::standard(
            config.promotion.bonus_threshold,
            config.promotion.weight_increment,
        )),
        random: Arc::new(ThreadRngSource),
        blob_store,
        max_upload_bytes: config.server.max_upload_bytes,
    })
}
