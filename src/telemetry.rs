//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise `server.log_level` is the filter.
//! Production emits JSON lines, everything else human-readable text.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Tracing subscriber already initialized: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `RUST_LOG` or the configured directive.
pub fn env_filter(server: &ServerConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&server.log_level).map_err(|source| TelemetryError::InvalidFilter {
        filter: server.log_level.clone(),
        source,
    })
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(server)?;
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(false).with_target(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    Ok(())
}
