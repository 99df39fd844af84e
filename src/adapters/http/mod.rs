//! HTTP adapters - REST API for the kiosk front-end.
//!
//! Each area has its own adapter module with DTOs, handlers and routes;
//! `router` merges them under `/api`.

pub mod cart;
mod error;
pub mod health;
pub mod pricing;
pub mod promotion;
mod router;
pub mod upload;

pub use error::ErrorResponse;
pub use router::{api_router, build_app, ApiServices};
