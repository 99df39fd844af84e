//! Pricing error types.

use thiserror::Error;

use crate::domain::catalog::{InputVoltage, PowerRating, TransformerKind};

/// Errors raised while pricing a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The (type, voltage, power) combination has no catalogue entry.
    /// Callers must block checkout instead of quoting a free item.
    #[error("No price for {kind} transformer at {voltage} and {power} kVA")]
    UnpricedConfiguration {
        kind: TransformerKind,
        voltage: InputVoltage,
        power: PowerRating,
    },
}
