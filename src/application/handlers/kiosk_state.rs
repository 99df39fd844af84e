//! KioskState - Typed access to the cart and counter documents.
//!
//! Wraps the `KeyValueStore` port with the kiosk's keys and JSON encoding.
//! Unreadable documents are logged and replaced by defaults so a corrupted
//! entry never locks the kiosk out of a fresh quotation.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::cart::{Cart, QuotationCounter};
use crate::ports::{KeyValueStore, KeyValueStoreError, CART_KEY, QUOTATION_COUNT_KEY};

/// Shared handle on the kiosk's persisted state.
///
/// Handlers that load, mutate and save hold `write_guard()` for the whole
/// sequence so concurrent requests cannot drop each other's updates.
#[derive(Clone)]
pub struct KioskState {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl KioskState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub async fn load_cart(&self) -> Result<Cart, KeyValueStoreError> {
        let Some(raw) = self.store.get(CART_KEY).await? else {
            return Ok(Cart::default());
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!(key = CART_KEY, error = %e, "Discarding unreadable cart");
                Ok(Cart::default())
            }
        }
    }

    pub async fn save_cart(&self, cart: &Cart) -> Result<(), KeyValueStoreError> {
        let json = serde_json::to_string(cart).map_err(|e| KeyValueStoreError::SerializationFailed {
            key: CART_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.store.put(CART_KEY, &json).await
    }

    pub async fn clear_cart(&self) -> Result<(), KeyValueStoreError> {
        self.store.remove(CART_KEY).await
    }

    pub async fn load_counter(&self) -> Result<QuotationCounter, KeyValueStoreError> {
        let Some(raw) = self.store.get(QUOTATION_COUNT_KEY).await? else {
            return Ok(QuotationCounter::default());
        };
        match raw.trim().parse::<u64>() {
            Ok(value) => Ok(QuotationCounter::new(value)),
            Err(e) => {
                tracing::warn!(key = QUOTATION_COUNT_KEY, error = %e, "Resetting unreadable quotation counter");
                Ok(QuotationCounter::default())
            }
        }
    }

    pub async fn save_counter(&self, counter: QuotationCounter) -> Result<(), KeyValueStoreError> {
        self.store
            .put(QUOTATION_COUNT_KEY, &counter.value().to_string())
            .await
    }
}
