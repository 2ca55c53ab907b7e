//! QRVault — QR payload formatting and saved-code history core.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod formatter;
pub mod storage;
pub mod store;
pub mod types;
