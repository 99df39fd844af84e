//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cart;
mod kiosk_state;
pub mod promotion;
pub mod quotation;
pub mod upload;

pub use kiosk_state::KioskState;
