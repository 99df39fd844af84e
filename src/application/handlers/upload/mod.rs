//! Document relay handlers.

mod relay_document;

pub use relay_document::{
    default_filename, RelayDocumentCommand, RelayDocumentError, RelayDocumentHandler,
    PDF_CONTENT_TYPE,
};
