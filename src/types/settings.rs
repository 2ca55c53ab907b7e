use serde::{Deserialize, Serialize};

use super::qr::ErrorCorrectionLevel;

/// App color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    Auto,
}

/// User preferences for QR generation and app behavior.
///
/// Exactly one instance exists per installation, persisted as a single
/// JSON object under the `app_settings` key. Every field carries a serde
/// default so a blob written by an older version merges additively over
/// the defaults instead of failing or nulling newer fields out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: ThemeMode,
    #[serde(default = "default_true")]
    pub haptic_feedback: bool,
    #[serde(default = "default_foreground")]
    pub default_foreground_color: String,
    #[serde(default = "default_background")]
    pub default_background_color: String,
    #[serde(default = "default_size")]
    pub default_size: u32,
    #[serde(default = "default_error_correction")]
    pub default_error_correction: ErrorCorrectionLevel,
    #[serde(default)]
    pub auto_save_to_gallery: bool,
}

fn default_theme() -> ThemeMode {
    ThemeMode::Auto
}

fn default_true() -> bool {
    true
}

fn default_foreground() -> String {
    "#000000".to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_size() -> u32 {
    200
}

fn default_error_correction() -> ErrorCorrectionLevel {
    ErrorCorrectionLevel::M
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            haptic_feedback: true,
            default_foreground_color: default_foreground(),
            default_background_color: default_background(),
            default_size: default_size(),
            default_error_correction: default_error_correction(),
            auto_save_to_gallery: false,
        }
    }
}

/// A single-field settings change.
///
/// One variant per [`AppSettings`] field, so updates stay compile-time
/// checked instead of going through stringly-typed keys.
#[derive(Debug, Clone)]
pub enum SettingsUpdate {
    Theme(ThemeMode),
    HapticFeedback(bool),
    DefaultForegroundColor(String),
    DefaultBackgroundColor(String),
    DefaultSize(u32),
    DefaultErrorCorrection(ErrorCorrectionLevel),
    AutoSaveToGallery(bool),
}

impl AppSettings {
    /// Applies a single-field update in place.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::Theme(v) => self.theme = v,
            SettingsUpdate::HapticFeedback(v) => self.haptic_feedback = v,
            SettingsUpdate::DefaultForegroundColor(v) => self.default_foreground_color = v,
            SettingsUpdate::DefaultBackgroundColor(v) => self.default_background_color = v,
            SettingsUpdate::DefaultSize(v) => self.default_size = v,
            SettingsUpdate::DefaultErrorCorrection(v) => self.default_error_correction = v,
            SettingsUpdate::AutoSaveToGallery(v) => self.auto_save_to_gallery = v,
        }
    }
}
