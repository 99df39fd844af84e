//! GetCartHandler - Query handler for the current cart.

use crate::domain::cart::Cart;

use crate::application::handlers::KioskState;
use super::CartCommandError;

pub struct GetCartHandler {
    state: KioskState,
}

impl GetCartHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    pub async fn handle(&self) -> Result<Cart, CartCommandError> {
        Ok(self.state.load_cart().await?)
    }
}
