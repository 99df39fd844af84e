//! Cart command and query handlers.

mod add_item;
mod errors;
mod get_cart;
mod remove_item;
mod update_quantity;

pub use add_item::{AddCartItemCommand, AddCartItemHandler, AddCartItemResult};
pub use errors::CartCommandError;
pub use get_cart::GetCartHandler;
pub use remove_item::{ClearCartHandler, RemoveCartItemCommand, RemoveCartItemHandler, RemoveCartItemResult};
pub use update_quantity::{
    UpdateCartItemQuantityCommand, UpdateCartItemQuantityHandler, UpdateCartItemQuantityResult,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::handlers::KioskState;
    use crate::domain::cart::Cart;
    use crate::domain::catalog::{
        ConductorMaterial, FactorK, InputVoltage, OilConfiguration, OilType, PowerRating,
        TransformerConfiguration,
    };
    use crate::domain::foundation::CartItemId;
    use crate::domain::pricing::PricingEngine;

    pub fn oil_config(kva: u32) -> TransformerConfiguration {
        TransformerConfiguration::Oil(OilConfiguration {
            power: PowerRating::from_kva(kva),
            material: ConductorMaterial::Aluminum,
            factor_k: FactorK::K1,
            input_voltage: InputVoltage::Kv15,
            oil_type: OilType::Mineral,
            function: None,
            output_voltage: None,
            custom_name: None,
        })
    }

    /// A kiosk state whose cart holds one aluminium mineral-oil unit per rating.
    pub async fn state_with_items(ratings: &[u32]) -> (KioskState, Vec<CartItemId>) {
        let state = KioskState::new(Arc::new(InMemoryKeyValueStore::new()));
        let engine = PricingEngine::standard();
        let mut cart = Cart::new();
        let mut ids = Vec::new();
        for &kva in ratings {
            ids.push(cart.add(oil_config(kva), &engine).unwrap().id);
        }
        state.save_cart(&cart).await.unwrap();
        (state, ids)
    }
}
