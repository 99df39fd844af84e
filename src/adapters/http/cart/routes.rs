//! Axum router for cart and quotation endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    add_item, clear_cart, get_cart, get_quotation, remove_item, update_quantity, CartAppState,
};

/// # Routes
/// - `GET /cart` - Cart with totals
/// - `DELETE /cart` - Empty the cart
/// - `POST /cart/items` - Add a configuration
/// - `PUT /cart/items/:id` - Set quantity (zero or less removes)
/// - `DELETE /cart/items/:id` - Remove a line
/// - `GET /quotation` - Summary with competitor comparison
pub fn cart_routes(state: CartAppState) -> Router {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", put(update_quantity).delete(remove_item))
        .route("/quotation", get(get_quotation))
        .with_state(state)
}
