//! UpdateCartItemQuantityHandler - Sets a line's quantity.

use crate::domain::cart::{Cart, QuantityUpdate};
use crate::domain::foundation::CartItemId;

use crate::application::handlers::KioskState;
use super::CartCommandError;

#[derive(Debug, Clone)]
pub struct UpdateCartItemQuantityCommand {
    pub item_id: CartItemId,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct UpdateCartItemQuantityResult {
    pub outcome: QuantityUpdate,
    pub cart: Cart,
}

pub struct UpdateCartItemQuantityHandler {
    state: KioskState,
}

impl UpdateCartItemQuantityHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCartItemQuantityCommand,
    ) -> Result<UpdateCartItemQuantityResult, CartCommandError> {
        let _guard = self.state.write_guard().await;

        let mut cart = self.state.load_cart().await?;
        let outcome = cart.update_quantity(cmd.item_id, cmd.quantity)?;
        self.state.save_cart(&cart).await?;

        Ok(UpdateCartItemQuantityResult { outcome, cart })
    }
}
