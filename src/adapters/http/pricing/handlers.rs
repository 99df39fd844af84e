//! HTTP handlers for pricing endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::catalog::TransformerConfiguration;
use crate::domain::pricing::{estimate_competitors, PricingEngine, PricingError};

use super::super::ErrorResponse;
use super::dto::{CompetitorRequest, QuoteResponse};

#[derive(Clone)]
pub struct PricingAppState {
    pub engine: Arc<PricingEngine>,
}

/// POST /api/pricing/quote - Price a single configuration
pub async fn quote(
    State(state): State<PricingAppState>,
    Json(configuration): Json<TransformerConfiguration>,
) -> Result<impl IntoResponse, PricingApiError> {
    let quote = state.engine.quote(&configuration)?;
    let seed = configuration.seed_fragment();
    let comparison = estimate_competitors(quote.final_price, &seed);

    Ok(Json(QuoteResponse {
        quote,
        seed,
        comparison,
    }))
}

/// POST /api/pricing/competitors - Competitor estimate for a price and seed
pub async fn competitors(Json(request): Json<CompetitorRequest>) -> impl IntoResponse {
    Json(estimate_competitors(request.price, &request.seed))
}

#[derive(Debug)]
pub struct PricingApiError(PricingError);

impl From<PricingError> for PricingApiError {
    fn from(err: PricingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PricingApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            PricingError::UnpricedConfiguration { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPRICED_CONFIGURATION")
            }
        };

        tracing::warn!(error = %self.0, "Pricing request rejected");
        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
