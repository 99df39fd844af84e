//! Promotion handlers.

mod draw_prize;
mod get_quotation_count;

pub use draw_prize::{DrawPrizeCommand, DrawPrizeError, DrawPrizeHandler, DrawPrizeResult};
pub use get_quotation_count::GetQuotationCountHandler;
