//! HTTP adapter for the prize wheel and quotation counter.

mod dto;
mod handlers;
mod routes;

pub use dto::{DrawRequest, DrawResponse, PrizesQuery, PrizesResponse, QuotationCountResponse};
pub use handlers::{PromotionApiError, PromotionAppState};
pub use routes::promotion_routes;
