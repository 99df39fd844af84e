//! Promotion error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised before a prize is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromotionError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(#[source] ValidationError),

    #[error("Order value must be a finite, non-negative amount, got {0}")]
    InvalidOrderValue(f64),
}

/// Checks an order value before it reaches the wheel.
pub fn validate_order_value(order_value: f64) -> Result<f64, PromotionError> {
    if order_value.is_finite() && order_value >= 0.0 {
        Ok(order_value)
    } else {
        Err(PromotionError::InvalidOrderValue(order_value))
    }
}
