//! HTTP adapter for cart and quotation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddItemResponse, CartResponse, UpdateQuantityRequest, UpdateQuantityResponse};
pub use handlers::{CartApiError, CartAppState};
pub use routes::cart_routes;
