//! PrepareQuotationHandler - Assembles the quotation shown before the draw.
//!
//! Totals come from the stored cart; the competitor comparison is seeded
//! from the cart's configurations so the same cart always shows the same
//! competitor figures.

use serde::Serialize;

use crate::application::handlers::cart::CartCommandError;
use crate::application::handlers::KioskState;
use crate::domain::cart::{CartError, CartItem};
use crate::domain::catalog::Price;
use crate::domain::pricing::{estimate_competitors, CompetitorComparison};

/// Quotation summary for the current cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub items: Vec<CartItem>,
    pub total_price: Price,
    pub total_items: u64,
    pub comparison: CompetitorComparison,
}

pub struct PrepareQuotationHandler {
    state: KioskState,
}

impl PrepareQuotationHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    /// # Errors
    ///
    /// `CartError::Empty` when there is nothing to quote.
    pub async fn handle(&self) -> Result<QuotationSummary, CartCommandError> {
        let cart = self.state.load_cart().await?;
        if cart.is_empty() {
            return Err(CartError::Empty.into());
        }

        let total_price = cart.total_price();
        let comparison = estimate_competitors(total_price, &cart.comparison_seed());

        Ok(QuotationSummary {
            total_items: cart.total_items(),
            items: cart.items().to_vec(),
            total_price,
            comparison,
        })
    }
}
