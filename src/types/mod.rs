// QRVault shared type definitions
// Each submodule defines types used across the library.

pub mod errors;
pub mod qr;
pub mod settings;
