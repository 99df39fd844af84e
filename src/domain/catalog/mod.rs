//! Catalog module - What the kiosk can configure and what it costs.
//!
//! - `configuration` - The transformer configuration tagged union and its option enums
//! - `power` - Fixed-point power ratings (kVA)
//! - `price_table` - The immutable base price table

mod configuration;
mod power;
mod price_table;

pub use configuration::{
    ConductorMaterial, DryConfiguration, FactorK, InputVoltage, OilConfiguration, OilType,
    OutputVoltage, TransformerConfiguration, TransformerFunction, TransformerKind,
};
pub use power::PowerRating;
pub use price_table::{Price, PriceTable, VoltageTable};
