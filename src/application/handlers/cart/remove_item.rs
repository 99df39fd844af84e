//! RemoveCartItemHandler and ClearCartHandler.

use crate::domain::cart::{Cart, CartItem};
use crate::domain::foundation::CartItemId;

use crate::application::handlers::KioskState;
use super::CartCommandError;

#[derive(Debug, Clone)]
pub struct RemoveCartItemCommand {
    pub item_id: CartItemId,
}

#[derive(Debug, Clone)]
pub struct RemoveCartItemResult {
    pub removed: CartItem,
    pub cart: Cart,
}

pub struct RemoveCartItemHandler {
    state: KioskState,
}

impl RemoveCartItemHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    pub async fn handle(&self, cmd: RemoveCartItemCommand) -> Result<RemoveCartItemResult, CartCommandError> {
        let _guard = self.state.write_guard().await;

        let mut cart = self.state.load_cart().await?;
        let removed = cart.remove(cmd.item_id)?;
        self.state.save_cart(&cart).await?;

        Ok(RemoveCartItemResult { removed, cart })
    }
}

/// Empties the cart and drops the stored document.
pub struct ClearCartHandler {
    state: KioskState,
}

impl ClearCartHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    pub async fn handle(&self) -> Result<(), CartCommandError> {
        let _guard = self.state.write_guard().await;
        self.state.clear_cart().await?;
        tracing::info!("Cart cleared");
        Ok(())
    }
}
