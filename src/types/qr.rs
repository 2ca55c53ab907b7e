use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of supported QR payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrType {
    Text,
    Url,
    Email,
    Sms,
    Phone,
    Wifi,
    Contact,
}

impl QrType {
    /// Returns the lowercase tag used in the persisted JSON layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            QrType::Text => "text",
            QrType::Url => "url",
            QrType::Email => "email",
            QrType::Sms => "sms",
            QrType::Phone => "phone",
            QrType::Wifi => "wifi",
            QrType::Contact => "contact",
        }
    }
}

/// QR redundancy setting, trading data capacity for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    M,
    Q,
    H,
}

/// WiFi network authentication mode.
///
/// Serialized exactly as the tokens external scanners expect in the
/// `WIFI:T:<security>;...` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    Nopass,
}

impl WifiSecurity {
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Nopass => "nopass",
        }
    }
}

/// WiFi join form fields. Empty strings are allowed; the formatter emits
/// them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiData {
    pub ssid: String,
    pub password: String,
    pub security: WifiSecurity,
    #[serde(default)]
    pub hidden: bool,
}

/// Contact form fields for vCard payloads. Empty fields are omitted from
/// the generated vCard entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: String,
}

/// Transient form input for one QR generation session.
///
/// One variant per [`QrType`], carrying only the fields that type needs.
/// Never persisted; the formatter turns it into a payload string and title.
#[derive(Debug, Clone)]
pub enum QrInput {
    Text {
        text: String,
    },
    Url {
        url: String,
    },
    Email {
        email: String,
        subject: String,
        body: String,
    },
    Sms {
        phone: String,
        body: String,
    },
    Phone {
        phone: String,
    },
    Wifi(WifiData),
    Contact(ContactData),
}

impl QrInput {
    /// Returns the [`QrType`] tag for this input.
    pub fn qr_type(&self) -> QrType {
        match self {
            QrInput::Text { .. } => QrType::Text,
            QrInput::Url { .. } => QrType::Url,
            QrInput::Email { .. } => QrType::Email,
            QrInput::Sms { .. } => QrType::Sms,
            QrInput::Phone { .. } => QrType::Phone,
            QrInput::Wifi(_) => QrType::Wifi,
            QrInput::Contact(_) => QrType::Contact,
        }
    }
}

/// A saved QR code with its rendering customization and metadata.
///
/// Once created, `id`, `qr_type`, `data`, and `created_at` never change;
/// only `is_favorite` is mutable. Serialized camelCase with `created_at`
/// as an ISO-8601 string, matching the persisted `qr_codes` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub id: String,
    #[serde(rename = "type")]
    pub qr_type: QrType,
    pub data: String,
    pub title: String,
    pub foreground_color: String,
    pub background_color: String,
    pub size: u32,
    pub error_correction_level: ErrorCorrectionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_favorite: bool,
}

/// A QR record as submitted for saving — everything except the `id` and
/// `created_at` fields, which the history store assigns.
#[derive(Debug, Clone)]
pub struct QrDraft {
    pub qr_type: QrType,
    pub data: String,
    pub title: String,
    pub foreground_color: String,
    pub background_color: String,
    pub size: u32,
    pub error_correction_level: ErrorCorrectionLevel,
    pub logo_uri: Option<String>,
    pub is_favorite: bool,
}
