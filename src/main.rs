//! Demo walkthrough of the QRVault core: formats a few payloads, saves
//! them to an in-memory history store, and exercises the derived views.

use qrvault::formatter::{format_payload, payload_title};
use qrvault::storage::SqliteBlobStore;
use qrvault::store::{
    HistoryStore, HistoryStoreTrait, SettingsStore, SettingsStoreTrait,
};
use qrvault::types::qr::{QrDraft, QrInput, QrType, WifiData, WifiSecurity};
use qrvault::types::settings::SettingsUpdate;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("QRVault v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let blobs = SqliteBlobStore::open_in_memory().expect("failed to open in-memory database");
    let settings_blobs =
        SqliteBlobStore::open_in_memory().expect("failed to open in-memory database");

    let mut settings = SettingsStore::new(settings_blobs);
    settings.load();
    settings.update(SettingsUpdate::DefaultSize(250));

    let mut history = HistoryStore::new(blobs);
    history.load();

    let inputs = [
        QrInput::Url {
            url: "rust-lang.org".to_string(),
        },
        QrInput::Wifi(WifiData {
            ssid: "Home".to_string(),
            password: "hunter2".to_string(),
            security: WifiSecurity::Wpa,
            hidden: false,
        }),
        QrInput::Sms {
            phone: "+15550100".to_string(),
            body: "on my way".to_string(),
        },
    ];

    for input in &inputs {
        let data = format_payload(input);
        let title = payload_title(input);
        println!("  [{}] {} -> {}", input.qr_type().as_str(), title, data);

        let defaults = settings.settings();
        history.add(QrDraft {
            qr_type: input.qr_type(),
            data,
            title,
            foreground_color: defaults.default_foreground_color.clone(),
            background_color: defaults.default_background_color.clone(),
            size: defaults.default_size,
            error_correction_level: defaults.default_error_correction,
            logo_uri: None,
            is_favorite: false,
        });
    }

    println!();
    println!("  saved {} records", history.qr_codes().len());

    let first_id = history.qr_codes()[0].id.clone();
    history.toggle_favorite(&first_id);
    println!("  favorites: {}", history.favorites().len());
    println!("  recent: {}", history.recent().len());
    println!(
        "  search \"wifi\": {} match(es)",
        history.search("wifi").len()
    );
    println!(
        "  filter sms: {} match(es)",
        history.filter_by_type(Some(QrType::Sms)).len()
    );
}
