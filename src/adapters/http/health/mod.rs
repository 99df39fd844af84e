//! Liveness endpoint.
//!
//! - `GET /api/health` - `{status, message, timestamp}`

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// ISO 8601
    pub timestamp: String,
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    let timestamp = Timestamp::now().to_rfc3339();
    tracing::debug!(%timestamp, "Health check");
    Json(HealthResponse {
        status: "ok",
        message: "A API está funcionando corretamente.",
        timestamp,
    })
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
