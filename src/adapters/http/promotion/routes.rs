//! Axum router for promotion endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{draw, list_prizes, quotation_count, PromotionAppState};

/// # Routes
/// - `GET /promotion/prizes?orderValue=` - Active prize list
/// - `POST /promotion/draw` - Validate the phone, draw for the cart total, count the quotation
/// - `GET /promotion/quotation-count` - Counter value
pub fn promotion_routes(state: PromotionAppState) -> Router {
    Router::new()
        .route("/promotion/prizes", get(list_prizes))
        .route("/promotion/draw", post(draw))
        .route("/promotion/quotation-count", get(quotation_count))
        .with_state(state)
}
