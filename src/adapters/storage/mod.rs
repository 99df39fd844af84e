//! Key-value storage adapters.
//!
//! - `InMemoryKeyValueStore` - Map-backed, for tests and ephemeral kiosks
//! - `FileKeyValueStore` - One JSON file per key under a data directory

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
