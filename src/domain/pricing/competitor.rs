//! Competitor price comparison.
//!
//! Two synthetic competitor prices derived from a hash of the configuration,
//! so the same cart always shows the same comparison across re-renders.
//! The offsets come from a sine hash; there is no market data behind them.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Price;

/// Competitor A sits 15% to 30% above our price.
const OFFSET_A_MIN: f64 = 0.15;
const OFFSET_A_SPAN: f64 = 0.15;

/// Competitor B sits 5% to 25% above our price.
const OFFSET_B_MIN: f64 = 0.05;
const OFFSET_B_SPAN: f64 = 0.20;

const SINE_SCALE: f64 = 10_000.0;

/// Our price against two synthetic competitors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorComparison {
    pub competitor_a: Price,
    pub competitor_b: Price,
    /// Mean competitor price minus ours. Negative values are kept as-is.
    pub savings: f64,
}

/// Sums the UTF-16 code units of the seed.
pub fn seed_hash(seed: &str) -> u64 {
    seed.encode_utf16().map(u64::from).sum()
}

/// Fractional part in `[0, 1)`, also for negative inputs.
fn unit_fraction(x: f64) -> f64 {
    x - x.floor()
}

/// Derives the competitor comparison for `price` from `seed`.
///
/// Deterministic: identical arguments give bit-identical results.
pub fn estimate_competitors(price: Price, seed: &str) -> CompetitorComparison {
    let hash = seed_hash(seed) as f64;
    let offset_a = unit_fraction(hash.sin() * SINE_SCALE) * OFFSET_A_SPAN + OFFSET_A_MIN;
    let offset_b = unit_fraction((hash * 2.0).sin() * SINE_SCALE) * OFFSET_B_SPAN + OFFSET_B_MIN;

    let ours = price as f64;
    let competitor_a = (ours * (1.0 + offset_a)).round() as Price;
    let competitor_b = (ours * (1.0 + offset_b)).round() as Price;

    CompetitorComparison {
        competitor_a,
        competitor_b,
        savings: (competitor_a as f64 + competitor_b as f64) / 2.0 - ours,
    }
}
