//! Quotation handlers.

mod prepare_quotation;

pub use prepare_quotation::{PrepareQuotationHandler, QuotationSummary};
