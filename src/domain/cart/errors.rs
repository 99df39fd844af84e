//! Cart error types.

use thiserror::Error;

use crate::domain::foundation::{CartItemId, ValidationError};
use crate::domain::pricing::PricingError;

/// Errors raised by cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error(transparent)]
    Unpriced(#[from] PricingError),

    #[error("Cart item not found: {0}")]
    ItemNotFound(CartItemId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cart is empty")]
    Empty,
}
