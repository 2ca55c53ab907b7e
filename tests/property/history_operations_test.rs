//! Property-based tests for history store operations.
//!
//! The favorites and recent views are derived from the canonical list;
//! after any sequence of mutations they must equal the corresponding pure
//! function of that list, and a freshly added record must be reachable by
//! searching its title.

use proptest::prelude::*;
use qrvault::storage::MemoryBlobStore;
use qrvault::store::history::{HistoryStore, HistoryStoreTrait, RECENT_LIMIT};
use qrvault::types::qr::{ErrorCorrectionLevel, QrDraft, QrType};

fn draft(title: &str, favorite: bool) -> QrDraft {
    QrDraft {
        qr_type: QrType::Text,
        data: title.to_string(),
        title: title.to_string(),
        foreground_color: "#000000".to_string(),
        background_color: "#FFFFFF".to_string(),
        size: 200,
        error_correction_level: ErrorCorrectionLevel::M,
        logo_uri: None,
        is_favorite: favorite,
    }
}

/// One mutation against the store. Indexes are taken modulo the current
/// list length so every generated op is applicable.
#[derive(Debug, Clone)]
enum Op {
    Add { favorite: bool },
    Toggle { slot: usize },
    Delete { slot: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(|favorite| Op::Add { favorite }),
        2 => (0usize..16).prop_map(|slot| Op::Toggle { slot }),
        1 => (0usize..16).prop_map(|slot| Op::Delete { slot }),
    ]
}

/// Strategy for non-empty searchable titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // After every mutation, favorites == filter(is_favorite) and
    // recent == first min(5, len) of the canonical list.
    #[test]
    fn derived_views_never_drift(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        let mut counter = 0u32;

        for op in ops {
            match op {
                Op::Add { favorite } => {
                    counter += 1;
                    store.add(draft(&format!("entry {}", counter), favorite));
                }
                Op::Toggle { slot } => {
                    if !store.qr_codes().is_empty() {
                        let id = store.qr_codes()[slot % store.qr_codes().len()].id.clone();
                        prop_assert!(store.toggle_favorite(&id));
                    }
                }
                Op::Delete { slot } => {
                    if !store.qr_codes().is_empty() {
                        let id = store.qr_codes()[slot % store.qr_codes().len()].id.clone();
                        prop_assert!(store.delete(&id));
                    }
                }
            }

            let expected_favorites: Vec<&str> = store
                .qr_codes()
                .iter()
                .filter(|qr| qr.is_favorite)
                .map(|qr| qr.id.as_str())
                .collect();
            let favorites: Vec<&str> =
                store.favorites().iter().map(|qr| qr.id.as_str()).collect();
            prop_assert_eq!(favorites, expected_favorites);

            let recent = store.recent();
            prop_assert!(recent.len() <= RECENT_LIMIT);
            let expected_recent: Vec<&str> = store
                .qr_codes()
                .iter()
                .take(RECENT_LIMIT)
                .map(|qr| qr.id.as_str())
                .collect();
            let recent_ids: Vec<&str> = recent.iter().map(|qr| qr.id.as_str()).collect();
            prop_assert_eq!(recent_ids, expected_recent);
        }
    }

    // Adding a record and searching for its title always finds it.
    #[test]
    fn add_then_search_returns_record(title in arb_title()) {
        let mut store = HistoryStore::new(MemoryBlobStore::new());
        let id = store.add(draft(&title, false));

        let results = store.search(&title);
        prop_assert!(
            results.iter().any(|qr| qr.id == id),
            "searching for title '{}' should find the record with id '{}'",
            title,
            id
        );

        // Case-insensitive: the uppercased query finds it too
        let upper = store.search(&title.to_uppercase());
        prop_assert!(upper.iter().any(|qr| qr.id == id));
    }
}
