//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the configurator domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::CartItemId;
pub use timestamp::Timestamp;
