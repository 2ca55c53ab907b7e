//! QRVault blob storage layer.
//!
//! Provides the key-value blob persistence primitive the stores write
//! through: string keys mapping to string values (JSON-encoded by the
//! stores before writing).
//!
//! # Usage
//!
//! ```no_run
//! use qrvault::storage::{BlobStore, SqliteBlobStore};
//!
//! // Open a persistent store
//! let mut blobs = SqliteBlobStore::open("qrvault.db").expect("failed to open database");
//!
//! // Or an in-memory one for testing
//! let mut blobs = SqliteBlobStore::open_in_memory().expect("failed to open in-memory database");
//!
//! blobs.set("qr_codes", "[]").unwrap();
//! ```

pub mod blob;
pub mod sqlite;

pub use blob::{BlobStore, MemoryBlobStore};
pub use sqlite::SqliteBlobStore;
