//! History store for saved QR codes.
//!
//! Authoritative in-memory + persisted list of [`QrCode`] records. All
//! mutation goes through this store; favorites and recents are computed
//! views over the canonical list, never stored separately.
//!
//! Persistence is best-effort: a failed blob write is logged and the
//! in-memory state stays the source of truth for the rest of the session.
//! The next cold start simply won't see the unsaved change.

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::storage::BlobStore;
use crate::types::qr::{QrCode, QrDraft, QrType};

/// Blob key holding the serialized record list.
pub const QR_CODES_KEY: &str = "qr_codes";

/// Number of entries in the recents view.
pub const RECENT_LIMIT: usize = 5;

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    /// Saves a new record, assigning its id and creation time. Returns the id.
    fn add(&mut self, draft: QrDraft) -> String;
    /// Flips the favorite flag on the matching record. Returns `false` if
    /// no record has that id (a safe no-op).
    fn toggle_favorite(&mut self, id: &str) -> bool;
    /// Removes the matching record. Returns `false` if absent.
    fn delete(&mut self, id: &str) -> bool;
    /// Replaces in-memory state with the persisted list. Idempotent.
    fn load(&mut self);
    /// Records whose title or data contains `query`, case-insensitively.
    /// A blank query returns the full list.
    fn search(&self, query: &str) -> Vec<&QrCode>;
    /// Records of the given type, or the full list for `None`.
    fn filter_by_type(&self, qr_type: Option<QrType>) -> Vec<&QrCode>;
    /// Empties the list and deletes the persisted key entirely.
    fn clear(&mut self);
    /// The canonical list, most-recent-first.
    fn qr_codes(&self) -> &[QrCode];
    /// Records flagged as favorites.
    fn favorites(&self) -> Vec<&QrCode>;
    /// The most recently created records, at most [`RECENT_LIMIT`].
    fn recent(&self) -> Vec<&QrCode>;
}

/// History store backed by a [`BlobStore`].
pub struct HistoryStore<S: BlobStore> {
    blobs: S,
    qr_codes: Vec<QrCode>,
}

impl<S: BlobStore> HistoryStore<S> {
    /// Creates an empty store over the given blob backend. Call
    /// [`HistoryStoreTrait::load`] to pull in persisted state.
    pub fn new(blobs: S) -> Self {
        Self {
            blobs,
            qr_codes: Vec::new(),
        }
    }

    /// Serializes the full list to the blob store. Failures are logged,
    /// never propagated — memory stays the source of truth.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.qr_codes) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize QR history");
                return;
            }
        };
        if let Err(e) = self.blobs.set(QR_CODES_KEY, &json) {
            warn!(error = %e, "failed to persist QR history");
        }
    }
}

impl<S: BlobStore> HistoryStoreTrait for HistoryStore<S> {
    fn add(&mut self, draft: QrDraft) -> String {
        let record = QrCode {
            id: Uuid::new_v4().to_string(),
            qr_type: draft.qr_type,
            data: draft.data,
            title: draft.title,
            foreground_color: draft.foreground_color,
            background_color: draft.background_color,
            size: draft.size,
            error_correction_level: draft.error_correction_level,
            logo_uri: draft.logo_uri,
            created_at: Utc::now(),
            is_favorite: draft.is_favorite,
        };
        let id = record.id.clone();

        // Most-recent-first ordering
        self.qr_codes.insert(0, record);
        self.persist();
        id
    }

    fn toggle_favorite(&mut self, id: &str) -> bool {
        let Some(record) = self.qr_codes.iter_mut().find(|qr| qr.id == id) else {
            return false;
        };
        record.is_favorite = !record.is_favorite;
        self.persist();
        true
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.qr_codes.len();
        self.qr_codes.retain(|qr| qr.id != id);
        if self.qr_codes.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn load(&mut self) {
        let stored = match self.blobs.get(QR_CODES_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "failed to read QR history, keeping in-memory state");
                return;
            }
        };

        self.qr_codes = match stored {
            Some(json) => match serde_json::from_str(&json) {
                Ok(records) => records,
                Err(e) => {
                    // Malformed blob is treated as no data
                    warn!(error = %e, "malformed QR history blob, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(count = self.qr_codes.len(), "loaded QR history");
    }

    fn search(&self, query: &str) -> Vec<&QrCode> {
        let query = query.trim();
        if query.is_empty() {
            return self.qr_codes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.qr_codes
            .iter()
            .filter(|qr| {
                qr.title.to_lowercase().contains(&needle)
                    || qr.data.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn filter_by_type(&self, qr_type: Option<QrType>) -> Vec<&QrCode> {
        match qr_type {
            Some(t) => self.qr_codes.iter().filter(|qr| qr.qr_type == t).collect(),
            None => self.qr_codes.iter().collect(),
        }
    }

    fn clear(&mut self) {
        self.qr_codes.clear();
        // Delete the key itself, not an empty-array write
        if let Err(e) = self.blobs.remove(QR_CODES_KEY) {
            warn!(error = %e, "failed to remove persisted QR history");
        }
        debug!("cleared QR history");
    }

    fn qr_codes(&self) -> &[QrCode] {
        &self.qr_codes
    }

    fn favorites(&self) -> Vec<&QrCode> {
        self.qr_codes.iter().filter(|qr| qr.is_favorite).collect()
    }

    fn recent(&self) -> Vec<&QrCode> {
        self.qr_codes.iter().take(RECENT_LIMIT).collect()
    }
}
