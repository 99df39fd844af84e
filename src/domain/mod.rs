//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, validation errors)
//! - `catalog` - Transformer configuration and the base price table
//! - `pricing` - Price computation, surcharges and competitor comparison
//! - `promotion` - Prize wheel and lead capture
//! - `cart` - Cart aggregate and quotation counter

pub mod cart;
pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod promotion;
