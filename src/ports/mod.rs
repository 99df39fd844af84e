//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Local persistence for the cart and quotation counter
//! - `BlobStore` - Public storage for generated quotation documents
//! - `RandomSource` - Uniform samples for the prize draw

mod blob_store;
mod key_value_store;
mod random_source;

pub use blob_store::{BlobStore, BlobStoreError, StoredBlob};
pub use key_value_store::{KeyValueStore, KeyValueStoreError, CART_KEY, QUOTATION_COUNT_KEY};
pub use random_source::RandomSource;
