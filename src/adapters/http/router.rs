//! Assembles the kiosk API from the per-module routers.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Json, Router};
use http::{header, HeaderValue, Method, StatusCode};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::KioskState;
use crate::config::ServerConfig;
use crate::domain::pricing::PricingEngine;
use crate::domain::promotion::PrizeWheel;
use crate::ports::{BlobStore, RandomSource};

use super::cart::{cart_routes, CartAppState};
use super::health::health_routes;
use super::pricing::{pricing_routes, PricingAppState};
use super::promotion::{promotion_routes, PromotionAppState};
use super::upload::{upload_routes, UploadAppState};
use super::ErrorResponse;

/// Everything the API needs, already wired to concrete adapters.
#[derive(Clone)]
pub struct ApiServices {
    pub kiosk: KioskState,
    pub engine: Arc<PricingEngine>,
    pub wheel: Arc<PrizeWheel>,
    pub random: Arc<dyn RandomSource>,
    pub blob_store: Arc<dyn BlobStore>,
    pub max_upload_bytes: usize,
}

/// The `/api` router without middleware.
pub fn api_router(services: ApiServices) -> Router {
    let api = Router::new()
        .merge(health_routes())
        .merge(upload_routes(UploadAppState {
            blob_store: services.blob_store.clone(),
            max_upload_bytes: services.max_upload_bytes,
        }))
        .merge(pricing_routes(PricingAppState {
            engine: services.engine.clone(),
        }))
        .merge(cart_routes(CartAppState {
            kiosk: services.kiosk.clone(),
            engine: services.engine.clone(),
        }))
        .merge(promotion_routes(PromotionAppState {
            kiosk: services.kiosk,
            wheel: services.wheel,
            random: services.random,
        }));

    Router::new().nest("/api", api).fallback(not_found)
}

/// The full application: API routes plus tracing, CORS and timeout layers.
pub fn build_app(services: ApiServices, server: &ServerConfig) -> Router {
    api_router(services)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("NOT_FOUND", "Route not found")),
    )
}
