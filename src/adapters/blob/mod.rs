//! Blob store adapters.
//!
//! - `VercelBlobStore` - Vercel Blob HTTP API
//! - `InMemoryBlobStore` - Map-backed, for tests and unconfigured kiosks

mod in_memory_blob_store;
mod vercel_blob_store;

pub use in_memory_blob_store::InMemoryBlobStore;
pub use vercel_blob_store::{VercelBlobConfig, VercelBlobStore, DEFAULT_BLOB_BASE_URL};
