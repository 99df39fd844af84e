//! AddCartItemHandler - Prices a configuration and appends it to the cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartItem};
use crate::domain::catalog::TransformerConfiguration;
use crate::domain::pricing::PricingEngine;

use crate::application::handlers::KioskState;
use super::CartCommandError;

/// Command to add one configured transformer.
#[derive(Debug, Clone)]
pub struct AddCartItemCommand {
    pub configuration: TransformerConfiguration,
}

/// Result of adding an item.
#[derive(Debug, Clone)]
pub struct AddCartItemResult {
    pub item: CartItem,
    pub cart: Cart,
}

/// Handler for adding cart items.
///
/// Unpriced configurations are rejected and the stored cart is left as is.
pub struct AddCartItemHandler {
    state: KioskState,
    engine: Arc<PricingEngine>,
}

impl AddCartItemHandler {
    pub fn new(state: KioskState, engine: Arc<PricingEngine>) -> Self {
        Self { state, engine }
    }

    pub async fn handle(&self, cmd: AddCartItemCommand) -> Result<AddCartItemResult, CartCommandError> {
        let _guard = self.state.write_guard().await;

        let mut cart = self.state.load_cart().await?;
        let item = cart.add(cmd.configuration, &self.engine)?.clone();
        self.state.save_cart(&cart).await?;

        tracing::info!(
            item_id = %item.id,
            final_price = item.final_price,
            items = cart.items().len(),
            "Added item to cart"
        );

        Ok(AddCartItemResult { item, cart })
    }
}
