//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value persistence (in-memory, file)
//! - `blob` - Document publishing (Vercel Blob, in-memory)
//! - `random` - Random sources for the prize draw
//! - `http` - REST API for the kiosk front-end

pub mod blob;
pub mod http;
pub mod random;
pub mod storage;

pub use blob::{InMemoryBlobStore, VercelBlobConfig, VercelBlobStore};
pub use random::{FixedRandomSource, SeededRandomSource, ThreadRngSource};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
