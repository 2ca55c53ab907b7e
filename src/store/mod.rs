// QRVault state stores
// Stores own the in-memory state and synchronize it with the blob storage layer.

pub mod history;
pub mod settings;

pub use history::{HistoryStore, HistoryStoreTrait};
pub use settings::{SettingsStore, SettingsStoreTrait};
