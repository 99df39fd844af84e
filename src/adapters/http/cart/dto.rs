//! HTTP DTOs for cart and quotation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, CartItem, QuantityUpdate};
use crate::domain::catalog::Price;

/// Cart contents with totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_price: Price,
    pub total_items: u64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_price: cart.total_price(),
            total_items: cart.total_items(),
        }
    }
}

/// Response for `POST /api/cart/items`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub item: CartItem,
    pub cart: CartResponse,
}

/// Request for `PUT /api/cart/items/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Response for `PUT /api/cart/items/:id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityResponse {
    /// `true` when the quantity removed the line.
    pub removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub cart: CartResponse,
}

impl UpdateQuantityResponse {
    pub fn new(outcome: QuantityUpdate, cart: &Cart) -> Self {
        let (removed, quantity) = match outcome {
            QuantityUpdate::Updated(q) => (false, Some(q)),
            QuantityUpdate::Removed => (true, None),
        };
        Self {
            removed,
            quantity,
            cart: cart.into(),
        }
    }
}
