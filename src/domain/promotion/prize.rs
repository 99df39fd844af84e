//! Prize entries.

use serde::{Deserialize, Serialize};

/// One segment of the prize wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeEntry {
    pub name: String,
    /// Relative weight; only the ratio to the wheel's total matters.
    pub weight: f64,
    pub display_color: String,
    pub text_color: String,
}

impl PrizeEntry {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        display_color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            display_color: display_color.into(),
            text_color: text_color.into(),
        }
    }

    /// Same entry with `increment` added to its weight.
    pub fn with_extra_weight(&self, increment: f64) -> Self {
        Self {
            weight: self.weight + increment,
            ..self.clone()
        }
    }
}

/// The eight prizes every order can win, in wheel order.
pub fn standard_base_prizes() -> Vec<PrizeEntry> {
    vec![
        PrizeEntry::new("2% de Desconto", 25.0, "#3B82F6", "#FFFFFF"),
        PrizeEntry::new("Power Bank", 20.0, "#EF4444", "#FFFFFF"),
        PrizeEntry::new("4% de Desconto", 20.0, "#10B981", "#FFFFFF"),
        PrizeEntry::new("Squeeze", 15.0, "#F59E0B", "#000000"),
        PrizeEntry::new("6% de Desconto", 12.0, "#8B5CF6", "#FFFFFF"),
        PrizeEntry::new("Copo ABMT", 10.0, "#06B6D4", "#FFFFFF"),
        PrizeEntry::new("Bag de TNT", 8.0, "#84CC16", "#000000"),
        PrizeEntry::new("Caderno", 5.0, "#F97316", "#FFFFFF"),
    ]
}

/// High-value prize reserved for orders below the bonus threshold.
pub fn standard_bonus_prize() -> PrizeEntry {
    PrizeEntry::new("10% de Desconto", 3.0, "#DC2626", "#FFFFFF")
}
