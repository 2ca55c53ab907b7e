//! Key-value blob store abstraction.

use std::collections::HashMap;

use crate::types::errors::StorageError;

/// A key-value blob persistence primitive, string values only.
///
/// The stores JSON-encode their state before writing and are the single
/// logical owner of their keys; implementations only need to provide the
/// three primitive operations.
pub trait BlobStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key` entirely. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory blob store backed by a `HashMap`.
///
/// State is lost on drop; useful for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.blobs.remove(key);
        Ok(())
    }
}
