//! Pricing Engine - Resolves a configuration to a price.
//!
//! Three steps, all pure:
//! 1. Look up the base price for (type, voltage class, power).
//! 2. Multiply the running price by every matching surcharge, in order.
//! 3. Round once, at the end, to whole currency units.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::catalog::{Price, PriceTable, TransformerConfiguration};

use super::{PricingError, Surcharge, STANDARD_SURCHARGES};

/// Base and final price of one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// List price, no surcharges.
    pub base_price: Price,
    /// Price after every matching surcharge.
    pub final_price: Price,
    /// Names of the surcharges that matched, in application order.
    pub applied_surcharges: Vec<&'static str>,
}

/// Stateless price calculator over an immutable table.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    table: Arc<PriceTable>,
    surcharges: Vec<Surcharge>,
}

impl PricingEngine {
    /// Creates an engine over a table with the standard surcharges.
    pub fn new(table: Arc<PriceTable>) -> Self {
        Self {
            table,
            surcharges: STANDARD_SURCHARGES.to_vec(),
        }
    }

    /// Engine over the shipped catalogue.
    pub fn standard() -> Self {
        Self::new(PriceTable::standard())
    }

    /// Replaces the surcharge list (kept in the given order).
    pub fn with_surcharges(mut self, surcharges: Vec<Surcharge>) -> Self {
        self.surcharges = surcharges;
        self
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Computes the price of a configuration.
    ///
    /// With `apply_surcharges == false` this is the list price shown as the
    /// undiscounted comparison in the cart.
    ///
    /// # Errors
    ///
    /// `PricingError::UnpricedConfiguration` when the table has no entry for
    /// the configuration's (type, voltage, power).
    pub fn compute_price(
        &self,
        config: &TransformerConfiguration,
        apply_surcharges: bool,
    ) -> Result<Price, PricingError> {
        let base = self.base_price(config)?;
        if !apply_surcharges {
            return Ok(base.round() as Price);
        }

        let running = self
            .matching(config)
            .fold(base, |price, surcharge| price * surcharge.multiplier);

        Ok(running.round() as Price)
    }

    /// Legacy total variant: a table miss degrades to zero.
    ///
    /// Only for display paths; anything that can reach checkout must use
    /// [`PricingEngine::compute_price`].
    pub fn compute_price_or_zero(
        &self,
        config: &TransformerConfiguration,
        apply_surcharges: bool,
    ) -> Price {
        match self.compute_price(config, apply_surcharges) {
            Ok(price) => price,
            Err(err) => {
                tracing::warn!(error = %err, "Unpriced configuration resolved to zero");
                0
            }
        }
    }

    /// Base and final price plus the surcharges that produced the difference.
    pub fn quote(&self, config: &TransformerConfiguration) -> Result<PriceQuote, PricingError> {
        Ok(PriceQuote {
            base_price: self.compute_price(config, false)?,
            final_price: self.compute_price(config, true)?,
            applied_surcharges: self.matching(config).map(|s| s.name).collect(),
        })
    }

    /// Unrounded base, voltage factor included.
    fn base_price(&self, config: &TransformerConfiguration) -> Result<f64, PricingError> {
        let (kind, voltage, power) = (config.kind(), config.input_voltage(), config.power());
        self.table
            .list_price(kind, voltage, power)
            .ok_or(PricingError::UnpricedConfiguration {
                kind,
                voltage,
                power,
            })
    }

    fn matching<'a>(
        &'a self,
        config: &'a TransformerConfiguration,
    ) -> impl Iterator<Item = &'a Surcharge> + 'a {
        self.surcharges.iter().filter(move |s| s.applies_to(config))
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
