//! HTTP handlers for the upload relay.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::upload::{
    RelayDocumentCommand, RelayDocumentError, RelayDocumentHandler,
};
use crate::ports::BlobStore;

use super::dto::{UploadErrorResponse, UploadQuery};

/// Dependencies of the upload relay.
#[derive(Clone)]
pub struct UploadAppState {
    pub blob_store: Arc<dyn BlobStore>,
    pub max_upload_bytes: usize,
}

impl UploadAppState {
    pub fn relay_handler(&self) -> RelayDocumentHandler {
        RelayDocumentHandler::new(self.blob_store.clone(), self.max_upload_bytes)
    }
}

/// POST /api/create-pdf-link?filename=... - Relay a rendered PDF
///
/// Extractor rejections are taken as values so they answer in the relay's
/// JSON error shape instead of axum's plain-text bodies.
pub async fn create_pdf_link(
    State(state): State<UploadAppState>,
    query: Result<Query<UploadQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, UploadApiError> {
    let Query(query) = query?;
    let body = body?;

    let cmd = RelayDocumentCommand {
        filename: query.filename,
        bytes: body.to_vec(),
    };

    let blob = state.relay_handler().handle(cmd).await?;
    Ok(Json(blob))
}

/// Any non-POST method on the upload endpoints.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(UploadErrorResponse::new("Method Not Allowed")),
    )
        .into_response()
}

/// API error wrapper for the relay.
#[derive(Debug)]
pub enum UploadApiError {
    Relay(RelayDocumentError),
    Query(QueryRejection),
    Body(BytesRejection),
}

impl From<RelayDocumentError> for UploadApiError {
    fn from(err: RelayDocumentError) -> Self {
        Self::Relay(err)
    }
}

impl From<QueryRejection> for UploadApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

impl From<BytesRejection> for UploadApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl UploadApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Relay(RelayDocumentError::EmptyBody) => (
                StatusCode::BAD_REQUEST,
                "Corpo da requisição (PDF) não encontrado.",
            ),
            Self::Relay(RelayDocumentError::InvalidFilename(_)) => {
                (StatusCode::BAD_REQUEST, "Nome de arquivo inválido.")
            }
            Self::Relay(RelayDocumentError::TooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Arquivo PDF muito grande.")
            }
            Self::Relay(RelayDocumentError::Store(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocorreu um erro ao salvar o PDF.",
            ),
            Self::Query(_) => (StatusCode::BAD_REQUEST, "Parâmetros inválidos."),
            Self::Body(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Arquivo PDF muito grande.")
            }
            Self::Body(rejection) => (
                rejection.status(),
                "Não foi possível ler o corpo da requisição.",
            ),
        }
    }

    fn details(&self) -> String {
        match self {
            Self::Relay(err) => err.to_string(),
            Self::Query(rejection) => rejection.body_text(),
            Self::Body(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for UploadApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(details = %self.details(), "Upload relay failed");
        }

        let body = UploadErrorResponse::with_details(error, self.details());
        (status, Json(body)).into_response()
    }
}
