//! Prize wheel configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::promotion::{DEFAULT_BONUS_THRESHOLD, DEFAULT_WEIGHT_INCREMENT};

/// Prize wheel configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PromotionConfig {
    /// Orders strictly below this value get the bonus prize
    #[serde(default = "default_threshold")]
    pub bonus_threshold: f64,

    /// Weight added to each base prize at or above the threshold
    #[serde(default = "default_weight_increment")]
    pub weight_increment: f64,
}

impl PromotionConfig {
    /// Validate promotion configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.bonus_threshold.is_finite() || self.bonus_threshold < 0.0 {
            return Err(ValidationError::InvalidBonusThreshold);
        }
        if !self.weight_increment.is_finite() || self.weight_increment < 0.0 {
            return Err(ValidationError::InvalidWeightIncrement);
        }
        Ok(())
    }
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            bonus_threshold: default_threshold(),
            weight_increment: default_weight_increment(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_BONUS_THRESHOLD
}

fn default_weight_increment() -> f64 {
    DEFAULT_WEIGHT_INCREMENT
}
