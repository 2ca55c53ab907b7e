use std::fmt;

// === StorageError ===

/// Errors related to the key-value blob storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying storage backend failed.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
