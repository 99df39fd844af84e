//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::cart::{
    AddCartItemCommand, AddCartItemHandler, AddCartItemResult, CartCommandError,
    ClearCartHandler, GetCartHandler, RemoveCartItemCommand, RemoveCartItemHandler,
    RemoveCartItemResult, UpdateCartItemQuantityCommand, UpdateCartItemQuantityHandler,
    UpdateCartItemQuantityResult,
};
pub use handlers::promotion::{
    DrawPrizeCommand, DrawPrizeError, DrawPrizeHandler, DrawPrizeResult, GetQuotationCountHandler,
};
pub use handlers::quotation::{PrepareQuotationHandler, QuotationSummary};
pub use handlers::upload::{
    RelayDocumentCommand, RelayDocumentError, RelayDocumentHandler, PDF_CONTENT_TYPE,
};
pub use handlers::KioskState;
