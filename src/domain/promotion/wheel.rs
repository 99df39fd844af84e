//! Prize Wheel - Weighted draw over an order-value dependent prize set.
//!
//! Below the bonus threshold the bonus prize is appended. At or above it the
//! bonus is left out and every base weight gets a flat increment instead.
//! The increment is not a normalised redistribution, so the draw treats the
//! weights as arbitrary positive numbers summing to `W`, never as percentages.

use serde::Serialize;

use super::{standard_base_prizes, standard_bonus_prize, PrizeEntry};

/// Orders strictly below this value are eligible for the bonus prize.
pub const DEFAULT_BONUS_THRESHOLD: f64 = 150_000.0;

/// Weight added to each base prize when the bonus is withheld.
pub const DEFAULT_WEIGHT_INCREMENT: f64 = 0.4;

/// Result of a draw: the prize and its segment index in the active list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeDraw {
    pub prize: PrizeEntry,
    pub index: usize,
}

/// The prize wheel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeWheel {
    base: Vec<PrizeEntry>,
    bonus: PrizeEntry,
    bonus_threshold: f64,
    weight_increment: f64,
}

impl PrizeWheel {
    pub fn new(
        base: Vec<PrizeEntry>,
        bonus: PrizeEntry,
        bonus_threshold: f64,
        weight_increment: f64,
    ) -> Self {
        Self {
            base,
            bonus,
            bonus_threshold,
            weight_increment,
        }
    }

    /// The shipped prize list with the given threshold and increment.
    pub fn standard(bonus_threshold: f64, weight_increment: f64) -> Self {
        Self::new(
            standard_base_prizes(),
            standard_bonus_prize(),
            bonus_threshold,
            weight_increment,
        )
    }

    pub fn bonus_threshold(&self) -> f64 {
        self.bonus_threshold
    }

    pub fn bonus(&self) -> &PrizeEntry {
        &self.bonus
    }

    /// Whether an order of this value can win the bonus prize.
    pub fn is_bonus_eligible(&self, order_value: f64) -> bool {
        order_value < self.bonus_threshold
    }

    /// The prizes on the wheel for an order of this value, in draw order.
    pub fn active_prizes(&self, order_value: f64) -> Vec<PrizeEntry> {
        if self.is_bonus_eligible(order_value) {
            let mut prizes = self.base.clone();
            prizes.push(self.bonus.clone());
            prizes
        } else {
            self.base
                .iter()
                .map(|p| p.with_extra_weight(self.weight_increment))
                .collect()
        }
    }

    /// Draws a prize.
    ///
    /// `sample` is a uniform value in `[0, 1)`; it is scaled to
    /// `[0, total weight)` and walked through the active list in order,
    /// subtracting each weight until the remainder drops to zero or below.
    pub fn select(&self, order_value: f64, sample: f64) -> PrizeDraw {
        let prizes = self.active_prizes(order_value);
        let total: f64 = prizes.iter().map(|p| p.weight).sum();
        let mut remaining = sample.clamp(0.0, 1.0) * total;

        for (index, prize) in prizes.iter().enumerate() {
            remaining -= prize.weight;
            if remaining <= 0.0 {
                return PrizeDraw {
                    prize: prize.clone(),
                    index,
                };
            }
        }

        // Only reachable through float drift at sample ~ 1.0.
        PrizeDraw {
            prize: prizes.first().cloned().unwrap_or_else(|| self.bonus.clone()),
            index: 0,
        }
    }
}

impl Default for PrizeWheel {
    fn default() -> Self {
        Self::standard(DEFAULT_BONUS_THRESHOLD, DEFAULT_WEIGHT_INCREMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(prizes: &[PrizeEntry]) -> f64 {
        prizes.iter().map(|p| p.weight).sum()
    }

    #[test]
    fn small_orders_get_the_bonus_prize_appended() {
        let wheel = PrizeWheel::default();
        let prizes = wheel.active_prizes(100_000.0);
        assert_eq!(prizes.len(), 9);
        assert_eq!(prizes.last().unwrap().name, "10% de Desconto");
        assert!((total(&prizes) - 118.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_itself_is_not_eligible() {
        let wheel = PrizeWheel::default();
        assert!(!wheel.is_bonus_eligible(150_000.0));
        assert!(wheel.is_bonus_eligible(149_999.99));
    }

    #[test]
    fn large_orders_get_flat_increment_instead() {
        let wheel = PrizeWheel::default();
        let prizes = wheel.active_prizes(200_000.0);
        assert_eq!(prizes.len(), 8);
        assert!(prizes.iter().all(|p| p.name != "10% de Desconto"));
        assert!((prizes[0].weight - 25.4).abs() < 1e-9);
        assert!((total(&prizes) - 118.2).abs() < 1e-9);
    }

    #[test]
    fn zero_sample_picks_first_entry() {
        let wheel = PrizeWheel::default();
        let draw = wheel.select(50_000.0, 0.0);
        assert_eq!(draw.index, 0);
        assert_eq!(draw.prize.name, "2% de Desconto");
    }

    #[test]
    fn samples_map_to_cumulative_segments() {
        let wheel = PrizeWheel::default();
        let draw = wheel.select(50_000.0, 24.9 / 118.0);
        assert_eq!(draw.prize.name, "2% de Desconto");
        let draw = wheel.select(50_000.0, 25.5 / 118.0);
        assert_eq!(draw.prize.name, "Power Bank");
    }

    #[test]
    fn top_of_the_range_picks_last_entry() {
        let wheel = PrizeWheel::default();
        let draw = wheel.select(50_000.0, 0.999_999);
        assert_eq!(draw.index, 8);
        assert_eq!(draw.prize.name, "10% de Desconto");
    }

    #[test]
    fn large_orders_never_draw_the_bonus() {
        let wheel = PrizeWheel::default();
        for step in 0..1_000 {
            let sample = f64::from(step) / 1_000.0;
            assert_ne!(wheel.select(200_000.0, sample).prize.name, "10% de Desconto");
        }
    }

    #[test]
    fn index_matches_position_in_active_list() {
        let wheel = PrizeWheel::default();
        let prizes = wheel.active_prizes(10_000.0);
        for step in 0..100 {
            let draw = wheel.select(10_000.0, f64::from(step) / 100.0);
            assert_eq!(prizes[draw.index], draw.prize);
        }
    }

    #[test]
    fn custom_threshold_moves_eligibility() {
        let wheel = PrizeWheel::standard(50_000.0, 0.4);
        assert!(!wheel.is_bonus_eligible(60_000.0));
        assert_eq!(wheel.active_prizes(60_000.0).len(), 8);
    }

    #[test]
    fn empty_base_falls_back_to_bonus() {
        let wheel = PrizeWheel::new(vec![], standard_bonus_prize(), 0.0, 0.4);
        let draw = wheel.select(10.0, 0.5);
        assert_eq!(draw.prize.name, "10% de Desconto");
        assert_eq!(draw.index, 0);
    }
}
