//! Quotation counter shown on the welcome screen.

use serde::{Deserialize, Serialize};

/// Value used when nothing has been persisted yet.
pub const INITIAL_QUOTATION_COUNT: u64 = 30;

/// Number of quotations generated at this kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotationCounter(u64);

impl QuotationCounter {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Records one more quotation and returns the new count.
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }
}

impl Default for QuotationCounter {
    fn default() -> Self {
        Self(INITIAL_QUOTATION_COUNT)
    }
}
