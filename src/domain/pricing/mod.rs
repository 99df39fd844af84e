//! Pricing module - Pure price computation.
//!
//! - `engine` - Base lookup plus ordered surcharges
//! - `surcharge` - The surcharge rules and their order
//! - `competitor` - Deterministic competitor price comparison
//! - `errors` - Pricing failures

mod competitor;
mod engine;
mod errors;
mod surcharge;

pub use competitor::{estimate_competitors, seed_hash, CompetitorComparison};
pub use engine::{PriceQuote, PricingEngine};
pub use errors::PricingError;
pub use surcharge::{Surcharge, STANDARD_SURCHARGES};
