//! Unit tests for the settings store public API: defaults, granular
//! update, persistence round trip, additive merge on load, and reset.

use qrvault::storage::{BlobStore, MemoryBlobStore, SqliteBlobStore};
use qrvault::store::settings::{SettingsStore, SettingsStoreTrait, SETTINGS_KEY};
use qrvault::types::qr::ErrorCorrectionLevel;
use qrvault::types::settings::{AppSettings, SettingsUpdate, ThemeMode};

#[test]
fn test_documented_defaults() {
    let defaults = AppSettings::default();

    assert_eq!(defaults.theme, ThemeMode::Auto);
    assert!(defaults.haptic_feedback);
    assert_eq!(defaults.default_foreground_color, "#000000");
    assert_eq!(defaults.default_background_color, "#FFFFFF");
    assert_eq!(defaults.default_size, 200);
    assert_eq!(defaults.default_error_correction, ErrorCorrectionLevel::M);
    assert!(!defaults.auto_save_to_gallery);
}

#[test]
fn test_update_persists_and_fresh_store_restores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.db");

    {
        let mut store = SettingsStore::new(SqliteBlobStore::open(&path).unwrap());
        store.load();
        store.update(SettingsUpdate::DefaultSize(250));
        store.update(SettingsUpdate::Theme(ThemeMode::Dark));
    }

    let mut store = SettingsStore::new(SqliteBlobStore::open(&path).unwrap());
    store.load();
    assert_eq!(store.settings().default_size, 250);
    assert_eq!(store.settings().theme, ThemeMode::Dark);
    // Untouched fields keep their defaults
    assert!(store.settings().haptic_feedback);
}

#[test]
fn test_update_applies_every_field() {
    let mut store = SettingsStore::new(MemoryBlobStore::new());

    store.update(SettingsUpdate::Theme(ThemeMode::Light));
    store.update(SettingsUpdate::HapticFeedback(false));
    store.update(SettingsUpdate::DefaultForegroundColor("#112233".to_string()));
    store.update(SettingsUpdate::DefaultBackgroundColor("#445566".to_string()));
    store.update(SettingsUpdate::DefaultSize(320));
    store.update(SettingsUpdate::DefaultErrorCorrection(ErrorCorrectionLevel::H));
    store.update(SettingsUpdate::AutoSaveToGallery(true));

    let s = store.settings();
    assert_eq!(s.theme, ThemeMode::Light);
    assert!(!s.haptic_feedback);
    assert_eq!(s.default_foreground_color, "#112233");
    assert_eq!(s.default_background_color, "#445566");
    assert_eq!(s.default_size, 320);
    assert_eq!(s.default_error_correction, ErrorCorrectionLevel::H);
    assert!(s.auto_save_to_gallery);
}

#[test]
fn test_reset_restores_defaults_and_removes_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.db");

    {
        let mut store = SettingsStore::new(SqliteBlobStore::open(&path).unwrap());
        store.update(SettingsUpdate::DefaultSize(400));
        store.reset();
        assert_eq!(*store.settings(), AppSettings::default());
    }

    let blobs = SqliteBlobStore::open(&path).unwrap();
    assert_eq!(blobs.get(SETTINGS_KEY).unwrap(), None);

    let mut store = SettingsStore::new(SqliteBlobStore::open(&path).unwrap());
    store.load();
    assert_eq!(*store.settings(), AppSettings::default());
}

#[test]
fn test_partial_blob_merges_over_defaults() {
    // A blob written before newer fields existed must not null them out
    let mut blobs = MemoryBlobStore::new();
    blobs.set(SETTINGS_KEY, "{\"defaultSize\":300}").unwrap();

    let mut store = SettingsStore::new(blobs);
    store.load();

    assert_eq!(store.settings().default_size, 300);
    assert_eq!(store.settings().theme, ThemeMode::Auto);
    assert!(store.settings().haptic_feedback);
    assert_eq!(store.settings().default_error_correction, ErrorCorrectionLevel::M);
}

#[test]
fn test_malformed_blob_keeps_current_state() {
    let mut blobs = MemoryBlobStore::new();
    blobs.set(SETTINGS_KEY, "not json at all").unwrap();

    let mut store = SettingsStore::new(blobs);
    store.update(SettingsUpdate::DefaultSize(222));
    store.load();
    assert_eq!(store.settings().default_size, 222);
}

#[test]
fn test_persisted_layout_is_camel_case() {
    let mut store = SettingsStore::new(MemoryBlobStore::new());
    store.update(SettingsUpdate::AutoSaveToGallery(true));

    let json = serde_json::to_value(store.settings()).unwrap();
    assert_eq!(json["autoSaveToGallery"], serde_json::json!(true));
    assert_eq!(json["defaultErrorCorrection"], serde_json::json!("M"));
    assert_eq!(json["theme"], serde_json::json!("auto"));
}
