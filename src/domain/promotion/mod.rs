//! Promotion module - Lead capture and the prize wheel.
//!
//! - `prize` - Prize entries and the shipped prize list
//! - `wheel` - Order-value dependent prize set and the weighted draw
//! - `phone` - Contact number captured before a draw
//! - `errors` - Input errors rejected before a draw

mod errors;
mod phone;
mod prize;
mod wheel;

pub use errors::{validate_order_value, PromotionError};
pub use phone::PhoneNumber;
pub use prize::{standard_base_prizes, standard_bonus_prize, PrizeEntry};
pub use wheel::{PrizeDraw, PrizeWheel, DEFAULT_BONUS_THRESHOLD, DEFAULT_WEIGHT_INCREMENT};
