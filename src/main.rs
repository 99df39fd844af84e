use tokio::net::TcpListener;

use aeb_configurator::adapters::http::build_app;
use aeb_configurator::bootstrap::{build_services, StartupError};
use aeb_configurator::config::{AppConfig, ConfigError};
use aeb_configurator::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.server)?;

    let services = build_services(&config)?;
    let app = build_app(services, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "AEB configurator listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
