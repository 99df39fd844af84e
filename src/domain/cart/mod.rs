//! Cart module - Items the customer is about to quote.
//!
//! - `cart` - The cart aggregate and its line items
//! - `counter` - Running count of quotations generated at the kiosk
//! - `errors` - Cart failures

mod cart;
mod counter;
mod errors;

pub use cart::{Cart, CartItem, QuantityUpdate, MAX_QUANTITY};
pub use counter::{QuotationCounter, INITIAL_QUOTATION_COUNT};
pub use errors::CartError;
