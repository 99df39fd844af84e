//! HTTP adapter for the PDF upload relay.
//!
//! - `POST /api/create-pdf-link?filename=` - Store a PDF publicly
//! - `POST /api/upload-pdf?filename=` - Alias

mod dto;
mod handlers;
mod routes;

pub use dto::{UploadErrorResponse, UploadQuery};
pub use handlers::{UploadApiError, UploadAppState};
pub use routes::upload_routes;
