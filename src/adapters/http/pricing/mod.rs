//! HTTP adapter for pricing endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CompetitorRequest, QuoteResponse};
pub use handlers::{PricingApiError, PricingAppState};
pub use routes::pricing_routes;
