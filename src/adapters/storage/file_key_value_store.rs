//! File-based Key-Value Store Adapter
//!
//! One file per key under a base directory, named `{key}.json`. Survives
//! kiosk restarts the way browser local storage does.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueStore, KeyValueStoreError};

/// File-backed key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Keys become file names, so only a safe alphabet is accepted.
    fn file_path(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(KeyValueStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    async fn ensure_dir(&self) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.file_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let path = self.file_path(key)?;
        self.ensure_dir().await?;

        // Readers never observe a partially written document.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| KeyValueStoreError::IoError(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueStoreError::IoError(e.to_string())),
        }
    }
}
