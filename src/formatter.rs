//! QR payload formatter.
//!
//! Pure functions mapping typed form input to the literal payload string an
//! external QR scanner expects (`mailto:`, `sms:`, `tel:`, `WIFI:...`,
//! vCard 3.0) and to a short display title. No state, no I/O, no failure
//! modes — degenerate input yields an empty or partial string, never an
//! error. Validating that input is complete enough to encode is the
//! caller's job.

use crate::types::qr::{ContactData, QrInput, WifiData};

/// Maximum title length for text payloads before truncation.
const TEXT_TITLE_MAX: usize = 30;

/// Formats form input into the payload string to encode.
///
/// The per-type encodings are fixed for interoperability with external
/// scanners; field order and separators must not change.
pub fn format_payload(input: &QrInput) -> String {
    match input {
        QrInput::Text { text } => text.clone(),
        QrInput::Url { url } => format_url(url),
        QrInput::Email {
            email,
            subject,
            body,
        } => format_email(email, subject, body),
        QrInput::Sms { phone, body } => {
            if body.is_empty() {
                format!("sms:{}", phone)
            } else {
                format!("sms:{}?body={}", phone, urlencoding::encode(body))
            }
        }
        QrInput::Phone { phone } => format!("tel:{}", phone),
        QrInput::Wifi(wifi) => format_wifi(wifi),
        QrInput::Contact(contact) => format_vcard(contact),
    }
}

/// Derives a short display label for the input, with a per-type fallback
/// when the discriminating field is empty.
pub fn payload_title(input: &QrInput) -> String {
    match input {
        QrInput::Text { text } => {
            if text.is_empty() {
                "Text QR".to_string()
            } else {
                truncate_title(text)
            }
        }
        QrInput::Url { url } => fallback(url, "URL QR"),
        QrInput::Email { email, .. } => fallback(email, "Email QR"),
        QrInput::Sms { phone, .. } => fallback(phone, "SMS QR"),
        QrInput::Phone { phone } => fallback(phone, "Phone QR"),
        QrInput::Wifi(wifi) => fallback(&wifi.ssid, "WiFi QR"),
        QrInput::Contact(contact) => {
            let name = format!("{} {}", contact.first_name, contact.last_name)
                .trim()
                .to_string();
            fallback(&name, "Contact QR")
        }
    }
}

/// Prefixes `https://` unless the input already carries an http(s) scheme.
/// Empty input stays empty.
fn format_url(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Builds a `mailto:` URI. Subject and body are appended as URL-encoded
/// query parameters, each only when non-empty, subject first.
fn format_email(email: &str, subject: &str, body: &str) -> String {
    if subject.is_empty() && body.is_empty() {
        return format!("mailto:{}", email);
    }

    let mut params = Vec::new();
    if !subject.is_empty() {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if !body.is_empty() {
        params.push(format!("body={}", urlencoding::encode(body)));
    }
    format!("mailto:{}?{}", email, params.join("&"))
}

/// Builds the `WIFI:` join string. Field order and the trailing `;;` are
/// required by scanners.
fn format_wifi(wifi: &WifiData) -> String {
    format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        wifi.security.as_str(),
        wifi.ssid,
        wifi.password,
        if wifi.hidden { "true" } else { "false" }
    )
}

/// Builds a vCard 3.0 block. `FN` and `N` are always emitted; `ORG`,
/// `TEL`, `EMAIL`, and `URL` lines appear only when their source field is
/// non-empty, in that order.
fn format_vcard(contact: &ContactData) -> String {
    let full_name = [contact.first_name.as_str(), contact.last_name.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", full_name),
        format!("N:{};{};;;", contact.last_name, contact.first_name),
    ];
    if !contact.organization.is_empty() {
        lines.push(format!("ORG:{}", contact.organization));
    }
    if !contact.phone.is_empty() {
        lines.push(format!("TEL:{}", contact.phone));
    }
    if !contact.email.is_empty() {
        lines.push(format!("EMAIL:{}", contact.email));
    }
    if !contact.url.is_empty() {
        lines.push(format!("URL:{}", contact.url));
    }
    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// Truncates a text title to [`TEXT_TITLE_MAX`] characters, appending an
/// ellipsis marker when anything was cut. Operates on characters, not
/// bytes, so multibyte input never splits a boundary.
fn truncate_title(text: &str) -> String {
    if text.chars().count() > TEXT_TITLE_MAX {
        let head: String = text.chars().take(TEXT_TITLE_MAX).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn fallback(value: &str, label: &str) -> String {
    if value.is_empty() {
        label.to_string()
    } else {
        value.to_string()
    }
}
