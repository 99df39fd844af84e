//! Errors for cart commands and queries.

use thiserror::Error;

use crate::domain::cart::CartError;
use crate::ports::KeyValueStoreError;

#[derive(Debug, Error)]
pub enum CartCommandError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Cart storage failed: {0}")]
    Storage(#[from] KeyValueStoreError),
}
