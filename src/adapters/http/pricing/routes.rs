//! Axum router for pricing endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{competitors, quote, PricingAppState};

/// # Routes
/// - `POST /pricing/quote` - Base/final price and applied surcharges
/// - `POST /pricing/competitors` - Competitor estimate
pub fn pricing_routes(state: PricingAppState) -> Router {
    Router::new()
        .route("/pricing/quote", post(quote))
        .route("/pricing/competitors", post(competitors))
        .with_state(state)
}
