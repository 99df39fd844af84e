//! DrawPrizeHandler - Lead capture followed by a prize draw.
//!
//! The phone number is validated before anything else, so rejected input
//! never spins the wheel or moves the quotation counter. The order value is
//! the total of the persisted cart, never a figure supplied by the client.

use std::sync::Arc;
use thiserror::Error;

use crate::application::handlers::KioskState;
use crate::domain::cart::CartError;
use crate::domain::catalog::Price;
use crate::domain::promotion::{PhoneNumber, PrizeDraw, PrizeWheel, PromotionError};
use crate::ports::{KeyValueStoreError, RandomSource};

/// Command to draw a prize for a captured lead.
#[derive(Debug, Clone)]
pub struct DrawPrizeCommand {
    pub phone: String,
}

/// Result of a successful draw.
#[derive(Debug, Clone)]
pub struct DrawPrizeResult {
    pub phone: PhoneNumber,
    pub draw: PrizeDraw,
    /// Cart total the prize set was chosen for.
    pub order_value: Price,
    /// Quotation counter after this draw.
    pub quotation_count: u64,
}

#[derive(Debug, Error)]
pub enum DrawPrizeError {
    #[error(transparent)]
    Promotion(#[from] PromotionError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Quotation counter storage failed: {0}")]
    Storage(#[from] KeyValueStoreError),
}

pub struct DrawPrizeHandler {
    state: KioskState,
    wheel: Arc<PrizeWheel>,
    random: Arc<dyn RandomSource>,
}

impl DrawPrizeHandler {
    pub fn new(state: KioskState, wheel: Arc<PrizeWheel>, random: Arc<dyn RandomSource>) -> Self {
        Self { state, wheel, random }
    }

    pub async fn handle(&self, cmd: DrawPrizeCommand) -> Result<DrawPrizeResult, DrawPrizeError> {
        // 1. Validate input
        let phone = PhoneNumber::try_new(&cmd.phone).map_err(PromotionError::InvalidPhone)?;

        let _guard = self.state.write_guard().await;

        // 2. Price the order from the stored cart
        let cart = self.state.load_cart().await?;
        if cart.is_empty() {
            return Err(CartError::Empty.into());
        }
        let order_value = cart.total_price();

        // 3. Draw
        let draw = self.wheel.select(order_value as f64, self.random.next_fraction());

        // 4. Count the quotation
        let mut counter = self.state.load_counter().await?;
        let quotation_count = counter.increment();
        self.state.save_counter(counter).await?;

        tracing::info!(
            prize = %draw.prize.name,
            index = draw.index,
            order_value,
            bonus_eligible = self.wheel.is_bonus_eligible(order_value as f64),
            quotation_count,
            "Prize drawn"
        );

        Ok(DrawPrizeResult {
            phone,
            draw,
            order_value,
            quotation_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::FixedRandomSource;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::handlers::cart::test_support::state_with_items;
    use crate::domain::promotion::{DEFAULT_BONUS_THRESHOLD, DEFAULT_WEIGHT_INCREMENT};

    fn handler(state: &KioskState, samples: Vec<f64>) -> DrawPrizeHandler {
        DrawPrizeHandler::new(
            state.clone(),
            Arc::new(PrizeWheel::standard(DEFAULT_BONUS_THRESHOLD, DEFAULT_WEIGHT_INCREMENT)),
            Arc::new(FixedRandomSource::new(samples)),
        )
    }

    fn command(phone: &str) -> DrawPrizeCommand {
        DrawPrizeCommand {
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn draw_increments_counter() {
        let (state, _) = state_with_items(&[300]).await;

        let result = handler(&state, vec![0.0])
            .handle(command("(11) 98765-4321"))
            .await
            .unwrap();

        assert_eq!(result.draw.index, 0);
        assert_eq!(result.draw.prize.name, "2% de Desconto");
        assert_eq!(result.order_value, 37_600);
        assert_eq!(result.quotation_count, 31);
        assert_eq!(state.load_counter().await.unwrap().value(), 31);
    }

    #[tokio::test]
    async fn last_segment_is_bonus_below_threshold() {
        let (state, _) = state_with_items(&[300]).await;
        let result = handler(&state, vec![0.999_9])
            .handle(command("11987654321"))
            .await
            .unwrap();
        assert_eq!(result.draw.prize.name, "10% de Desconto");
        assert_eq!(result.draw.index, 8);
    }

    #[tokio::test]
    async fn bonus_withheld_when_cart_total_reaches_threshold() {
        // 3000 kVA oil lists at 265000.
        let (state, _) = state_with_items(&[3000]).await;
        let result = handler(&state, vec![0.999_9])
            .handle(command("11987654321"))
            .await
            .unwrap();
        assert_eq!(result.order_value, 265_000);
        assert_eq!(result.draw.prize.name, "Caderno");
        assert_eq!(result.draw.index, 7);
    }

    #[tokio::test]
    async fn cart_quantities_count_towards_the_threshold() {
        let (state, ids) = state_with_items(&[300]).await;
        let mut cart = state.load_cart().await.unwrap();
        cart.update_quantity(ids[0], 4).unwrap();
        state.save_cart(&cart).await.unwrap();

        let result = handler(&state, vec![0.999_9])
            .handle(command("11987654321"))
            .await
            .unwrap();
        assert_eq!(result.order_value, 150_400);
        assert_ne!(result.draw.prize.name, "10% de Desconto");
    }

    #[tokio::test]
    async fn empty_cart_cannot_draw() {
        let state = KioskState::new(Arc::new(InMemoryKeyValueStore::new()));

        let err = handler(&state, vec![0.5])
            .handle(command("11987654321"))
            .await
            .unwrap_err();

        assert!(matches!(err, DrawPrizeError::Cart(CartError::Empty)));
        assert_eq!(state.load_counter().await.unwrap().value(), 30);
    }

    #[tokio::test]
    async fn invalid_phone_leaves_counter_untouched() {
        let (state, _) = state_with_items(&[300]).await;

        let err = handler(&state, vec![0.5])
            .handle(command("12345"))
            .await
            .unwrap_err();

        assert!(matches!(err, DrawPrizeError::Promotion(PromotionError::InvalidPhone(_))));
        assert_eq!(state.load_counter().await.unwrap().value(), 30);
    }

    #[tokio::test]
    async fn successive_draws_keep_counting() {
        let (state, _) = state_with_items(&[45]).await;
        let handler = handler(&state, vec![0.1, 0.6]);
        handler.handle(command("11987654321")).await.unwrap();
        let second = handler.handle(command("11987654321")).await.unwrap();
        assert_eq!(second.quotation_count, 32);
    }
}
