//! Cart aggregate.
//!
//! Items are priced when they are added: `base_price` is the list price,
//! `final_price` includes surcharges. A configuration the table cannot price
//! never enters the cart.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Price, TransformerConfiguration};
use crate::domain::foundation::{CartItemId, Timestamp, ValidationError};
use crate::domain::pricing::PricingEngine;

use super::CartError;

/// Largest quantity a single line may hold.
pub const MAX_QUANTITY: u32 = 999;

/// One configured transformer in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub configuration: TransformerConfiguration,
    pub quantity: u32,
    pub base_price: Price,
    pub final_price: Price,
    pub added_at: Timestamp,
}

impl CartItem {
    /// Final price times quantity.
    pub fn subtotal(&self) -> Price {
        self.final_price * Price::from(self.quantity)
    }
}

/// Outcome of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Updated(u32),
    Removed,
}

/// The customer's cart. Persisted as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Prices the configuration and appends it with quantity 1.
    ///
    /// # Errors
    ///
    /// `CartError::Unpriced` if the table has no entry for it.
    pub fn add(
        &mut self,
        configuration: TransformerConfiguration,
        engine: &PricingEngine,
    ) -> Result<&CartItem, CartError> {
        let base_price = engine.compute_price(&configuration, false)?;
        let final_price = engine.compute_price(&configuration, true)?;

        self.items.push(CartItem {
            id: CartItemId::new(),
            configuration,
            quantity: 1,
            base_price,
            final_price,
            added_at: Timestamp::now(),
        });

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Sets a line's quantity; zero or less removes the line.
    pub fn update_quantity(
        &mut self,
        id: CartItemId,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartError> {
        if quantity <= 0 {
            self.remove(id)?;
            return Ok(QuantityUpdate::Removed);
        }
        if quantity > i64::from(MAX_QUANTITY) {
            return Err(ValidationError::out_of_range("quantity", 1, i64::from(MAX_QUANTITY), quantity).into());
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;
        item.quantity = quantity as u32;
        Ok(QuantityUpdate::Updated(item.quantity))
    }

    pub fn remove(&mut self, id: CartItemId) -> Result<CartItem, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `final_price × quantity`.
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Seed for the competitor comparison of the whole cart.
    pub fn comparison_seed(&self) -> String {
        self.items
            .iter()
            .map(|item| item.configuration.seed_fragment())
            .collect::<Vec<_>>()
            .join("-")
    }
}
