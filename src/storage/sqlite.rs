//! SQLite-backed blob store.
//!
//! Wraps a `rusqlite::Connection` holding a single `blobs` table and
//! ensures the schema exists on open. The schema setup is idempotent and
//! safe to run on every startup.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use super::blob::BlobStore;
use crate::types::errors::StorageError;

/// Blob store persisting values in a SQLite database file.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Opens (or creates) a SQLite database at the given file path and
    /// ensures the blob schema exists.
    ///
    /// # Errors
    /// Returns `StorageError::Backend` if the connection cannot be
    /// established or the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory SQLite database.
    ///
    /// Useful for testing — the database is discarded on drop.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "PRAGMA journal_mode = WAL;
                 CREATE TABLE IF NOT EXISTS blobs (
                     key TEXT PRIMARY KEY,
                     value TEXT NOT NULL,
                     updated_at INTEGER NOT NULL
                 );",
            )
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.conn
            .query_row(
                "SELECT value FROM blobs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Self::now()],
            )
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1", params![key])
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }
}
