//! Settings store.
//!
//! Singleton user preferences with fixed defaults, granular typed update,
//! load-with-merge, and full reset. Follows the same persistence
//! discipline as the history store: every update writes the full settings
//! object under one key, and failures are logged without disturbing the
//! in-memory state.

use tracing::{debug, warn};

use crate::storage::BlobStore;
use crate::types::settings::{AppSettings, SettingsUpdate};

/// Blob key holding the serialized settings object.
pub const SETTINGS_KEY: &str = "app_settings";

/// Trait defining settings store operations.
pub trait SettingsStoreTrait {
    /// Applies a single-field update and persists the full settings object.
    fn update(&mut self, update: SettingsUpdate);
    /// Loads persisted settings if present. A blob written by an older
    /// version merges additively over the defaults; a malformed blob
    /// leaves the current settings untouched.
    fn load(&mut self);
    /// Restores the fixed defaults and deletes the persisted blob.
    fn reset(&mut self);
    /// The current in-memory settings.
    fn settings(&self) -> &AppSettings;
}

/// Settings store backed by a [`BlobStore`].
pub struct SettingsStore<S: BlobStore> {
    blobs: S,
    settings: AppSettings,
}

impl<S: BlobStore> SettingsStore<S> {
    /// Creates a store holding the default settings. Call
    /// [`SettingsStoreTrait::load`] to pull in persisted state.
    pub fn new(blobs: S) -> Self {
        Self {
            blobs,
            settings: AppSettings::default(),
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.settings) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize settings");
                return;
            }
        };
        if let Err(e) = self.blobs.set(SETTINGS_KEY, &json) {
            warn!(error = %e, "failed to persist settings");
        }
    }
}

impl<S: BlobStore> SettingsStoreTrait for SettingsStore<S> {
    fn update(&mut self, update: SettingsUpdate) {
        self.settings.apply(update);
        self.persist();
    }

    fn load(&mut self) {
        let stored = match self.blobs.get(SETTINGS_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "failed to read settings, keeping current state");
                return;
            }
        };

        if let Some(json) = stored {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    self.settings = settings;
                    debug!("loaded settings");
                }
                Err(e) => {
                    warn!(error = %e, "malformed settings blob, keeping current state");
                }
            }
        }
    }

    fn reset(&mut self) {
        self.settings = AppSettings::default();
        if let Err(e) = self.blobs.remove(SETTINGS_KEY) {
            warn!(error = %e, "failed to remove persisted settings");
        }
        debug!("reset settings to defaults");
    }

    fn settings(&self) -> &AppSettings {
        &self.settings
    }
}
