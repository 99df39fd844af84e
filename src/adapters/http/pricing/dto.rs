//! HTTP DTOs for pricing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Price;
use crate::domain::pricing::{CompetitorComparison, PriceQuote};

/// Response for `POST /api/pricing/quote`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: PriceQuote,
    /// Comparison seed of this configuration.
    pub seed: String,
    /// Competitor figures for the final price.
    pub comparison: CompetitorComparison,
}

/// Request for `POST /api/pricing/competitors`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorRequest {
    pub price: Price,
    pub seed: String,
}
