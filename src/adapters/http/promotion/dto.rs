//! HTTP DTOs for promotion endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Price;
use crate::domain::promotion::PrizeEntry;

/// Query for `GET /api/promotion/prizes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizesQuery {
    pub order_value: f64,
}

/// Active prize list for an order value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizesResponse {
    pub bonus_eligible: bool,
    pub bonus_threshold: f64,
    pub prizes: Vec<PrizeEntry>,
}

/// Request for `POST /api/promotion/draw`.
///
/// Only the phone is read; the order value comes from the stored cart.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawRequest {
    pub phone: String,
}

/// Response for `POST /api/promotion/draw`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResponse {
    pub prize: PrizeEntry,
    /// Segment index in the active prize list.
    pub index: usize,
    /// Cart total the prize set was chosen for.
    pub order_value: Price,
    pub quotation_count: u64,
    /// Normalised contact number.
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationCountResponse {
    pub count: u64,
}
