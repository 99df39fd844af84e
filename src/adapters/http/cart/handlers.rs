//! HTTP handlers for cart and quotation endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::cart::{
    AddCartItemCommand, AddCartItemHandler, CartCommandError, ClearCartHandler, GetCartHandler,
    RemoveCartItemCommand, RemoveCartItemHandler, UpdateCartItemQuantityCommand,
    UpdateCartItemQuantityHandler,
};
use crate::application::handlers::quotation::PrepareQuotationHandler;
use crate::application::handlers::KioskState;
use crate::domain::cart::CartError;
use crate::domain::catalog::TransformerConfiguration;
use crate::domain::foundation::CartItemId;
use crate::domain::pricing::{PricingEngine, PricingError};

use super::super::ErrorResponse;
use super::dto::{AddItemResponse, CartResponse, UpdateQuantityRequest, UpdateQuantityResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CartAppState {
    pub kiosk: KioskState,
    pub engine: Arc<PricingEngine>,
}

impl CartAppState {
    pub fn add_item_handler(&self) -> AddCartItemHandler {
        AddCartItemHandler::new(self.kiosk.clone(), self.engine.clone())
    }

    pub fn update_quantity_handler(&self) -> UpdateCartItemQuantityHandler {
        UpdateCartItemQuantityHandler::new(self.kiosk.clone())
    }

    pub fn remove_item_handler(&self) -> RemoveCartItemHandler {
        RemoveCartItemHandler::new(self.kiosk.clone())
    }

    pub fn clear_handler(&self) -> ClearCartHandler {
        ClearCartHandler::new(self.kiosk.clone())
    }

    pub fn get_cart_handler(&self) -> GetCartHandler {
        GetCartHandler::new(self.kiosk.clone())
    }

    pub fn prepare_quotation_handler(&self) -> PrepareQuotationHandler {
        PrepareQuotationHandler::new(self.kiosk.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cart - Current cart with totals
pub async fn get_cart(State(state): State<CartAppState>) -> Result<impl IntoResponse, CartApiError> {
    let cart = state.get_cart_handler().handle().await?;
    Ok(Json(CartResponse::from(&cart)))
}

/// POST /api/cart/items - Add a configured transformer
pub async fn add_item(
    State(state): State<CartAppState>,
    Json(configuration): Json<TransformerConfiguration>,
) -> Result<impl IntoResponse, CartApiError> {
    let result = state
        .add_item_handler()
        .handle(AddCartItemCommand { configuration })
        .await?;

    let response = AddItemResponse {
        item: result.item,
        cart: CartResponse::from(&result.cart),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/cart/items/:id - Set a line's quantity
pub async fn update_quantity(
    State(state): State<CartAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<impl IntoResponse, CartApiError> {
    let item_id = parse_item_id(&id)?;
    let result = state
        .update_quantity_handler()
        .handle(UpdateCartItemQuantityCommand {
            item_id,
            quantity: request.quantity,
        })
        .await?;

    Ok(Json(UpdateQuantityResponse::new(result.outcome, &result.cart)))
}

/// DELETE /api/cart/items/:id - Remove a line
pub async fn remove_item(
    State(state): State<CartAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CartApiError> {
    let item_id = parse_item_id(&id)?;
    let result = state
        .remove_item_handler()
        .handle(RemoveCartItemCommand { item_id })
        .await?;

    Ok(Json(CartResponse::from(&result.cart)))
}

/// DELETE /api/cart - Empty the cart
pub async fn clear_cart(State(state): State<CartAppState>) -> Result<impl IntoResponse, CartApiError> {
    state.clear_handler().handle().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/quotation - Cart summary with competitor comparison
pub async fn get_quotation(
    State(state): State<CartAppState>,
) -> Result<impl IntoResponse, CartApiError> {
    let summary = state.prepare_quotation_handler().handle().await?;
    Ok(Json(summary))
}

fn parse_item_id(raw: &str) -> Result<CartItemId, CartApiError> {
    raw.parse()
        .map_err(|_| CartApiError::InvalidItemId(raw.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum CartApiError {
    Command(CartCommandError),
    InvalidItemId(String),
}

impl From<CartCommandError> for CartApiError {
    fn from(err: CartCommandError) -> Self {
        Self::Command(err)
    }
}

impl IntoResponse for CartApiError {
    fn into_response(self) -> Response {
        let err = match self {
            CartApiError::InvalidItemId(raw) => {
                let body = ErrorResponse::new("INVALID_ITEM_ID", format!("Invalid cart item id: {}", raw));
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            CartApiError::Command(err) => err,
        };

        let (status, error_code) = match &err {
            CartCommandError::Cart(CartError::Unpriced(PricingError::UnpricedConfiguration { .. })) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNPRICED_CONFIGURATION")
            }
            CartCommandError::Cart(CartError::ItemNotFound(_)) => {
                (StatusCode::NOT_FOUND, "CART_ITEM_NOT_FOUND")
            }
            CartCommandError::Cart(CartError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            CartCommandError::Cart(CartError::Empty) => (StatusCode::CONFLICT, "CART_EMPTY"),
            CartCommandError::Storage(_) => {
                tracing::error!(error = %err, "Cart storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
        };

        let body = match &err {
            CartCommandError::Cart(CartError::Validation(v)) => ErrorResponse::with_details(
                error_code,
                err.to_string(),
                serde_json::json!({ "field": v.field() }),
            ),
            _ => ErrorResponse::new(error_code, err.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
