//! HTTP handlers for promotion endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::promotion::{
    DrawPrizeCommand, DrawPrizeError, DrawPrizeHandler, GetQuotationCountHandler,
};
use crate::application::handlers::KioskState;
use crate::domain::cart::CartError;
use crate::domain::promotion::{validate_order_value, PrizeWheel, PromotionError};
use crate::ports::RandomSource;

use super::super::ErrorResponse;
use super::dto::{DrawRequest, DrawResponse, PrizesQuery, PrizesResponse, QuotationCountResponse};

#[derive(Clone)]
pub struct PromotionAppState {
    pub kiosk: KioskState,
    pub wheel: Arc<PrizeWheel>,
    pub random: Arc<dyn RandomSource>,
}

impl PromotionAppState {
    pub fn draw_handler(&self) -> DrawPrizeHandler {
        DrawPrizeHandler::new(self.kiosk.clone(), self.wheel.clone(), self.random.clone())
    }

    pub fn quotation_count_handler(&self) -> GetQuotationCountHandler {
        GetQuotationCountHandler::new(self.kiosk.clone())
    }
}

/// GET /api/promotion/prizes?orderValue= - Prizes on the wheel for an order
pub async fn list_prizes(
    State(state): State<PromotionAppState>,
    Query(query): Query<PrizesQuery>,
) -> Result<impl IntoResponse, PromotionApiError> {
    let order_value = validate_order_value(query.order_value).map_err(DrawPrizeError::from)?;

    Ok(Json(PrizesResponse {
        bonus_eligible: state.wheel.is_bonus_eligible(order_value),
        bonus_threshold: state.wheel.bonus_threshold(),
        prizes: state.wheel.active_prizes(order_value),
    }))
}

/// POST /api/promotion/draw - Capture the lead and spin the wheel for the cart total
pub async fn draw(
    State(state): State<PromotionAppState>,
    Json(request): Json<DrawRequest>,
) -> Result<impl IntoResponse, PromotionApiError> {
    let result = state
        .draw_handler()
        .handle(DrawPrizeCommand {
            phone: request.phone,
        })
        .await?;

    Ok(Json(DrawResponse {
        prize: result.draw.prize,
        index: result.draw.index,
        order_value: result.order_value,
        quotation_count: result.quotation_count,
        phone: result.phone.to_string(),
    }))
}

/// GET /api/promotion/quotation-count - Welcome-screen counter
pub async fn quotation_count(
    State(state): State<PromotionAppState>,
) -> Result<impl IntoResponse, PromotionApiError> {
    let count = state
        .quotation_count_handler()
        .handle()
        .await
        .map_err(DrawPrizeError::from)?;
    Ok(Json(QuotationCountResponse { count }))
}

#[derive(Debug)]
pub struct PromotionApiError(DrawPrizeError);

impl From<DrawPrizeError> for PromotionApiError {
    fn from(err: DrawPrizeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PromotionApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            DrawPrizeError::Promotion(PromotionError::InvalidPhone(v)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "INVALID_PHONE",
                    "Por favor, digite um número de WhatsApp válido.",
                    serde_json::json!({ "field": v.field(), "reason": v.to_string() }),
                ),
            ),
            DrawPrizeError::Promotion(PromotionError::InvalidOrderValue(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_ORDER_VALUE", self.0.to_string()),
            ),
            DrawPrizeError::Cart(CartError::Empty) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("CART_EMPTY", "Adicione um transformador antes de girar a roleta."),
            ),
            DrawPrizeError::Cart(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", self.0.to_string()),
            ),
            DrawPrizeError::Storage(_) => {
                tracing::error!(error = %self.0, "Quotation counter storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("STORAGE_ERROR", self.0.to_string()),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
