//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AEB_CONFIGURATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use aeb_configurator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod blob;
mod error;
mod promotion;
mod server;
mod storage;

pub use blob::BlobConfig;
pub use error::{ConfigError, ValidationError};
pub use promotion::PromotionConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development kiosk. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Blob store used by the upload relay
    #[serde(default)]
    pub blob: BlobConfig,

    /// Local persistence for the cart and quotation counter
    #[serde(default)]
    pub storage: StorageConfig,

    /// Prize wheel tuning
    #[serde(default)]
    pub promotion: PromotionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AEB_CONFIGURATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AEB_CONFIGURATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AEB_CONFIGURATOR__BLOB__TOKEN=...` -> `blob.token = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AEB_CONFIGURATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including a missing blob token in production.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.blob.validate(&self.server.environment)?;
        self.promotion.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
