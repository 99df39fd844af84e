//! Axum router for the upload relay.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use super::handlers::{create_pdf_link, method_not_allowed, UploadAppState};

/// Create the upload router.
///
/// # Routes
/// - `POST /create-pdf-link` - Relay a PDF, return blob metadata
/// - `POST /upload-pdf` - Alias kept for older kiosk builds
///
/// Other methods on either path answer 405 with a JSON body. Bodies over
/// `max_upload_bytes` stop buffering at the limit and answer 413 in the
/// same `{error, details}` shape.
pub fn upload_routes(state: UploadAppState) -> Router {
    let limit = state.max_upload_bytes;
    Router::new()
        .route(
            "/create-pdf-link",
            post(create_pdf_link).fallback(method_not_allowed),
        )
        .route(
            "/upload-pdf",
            post(create_pdf_link).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}
