//! The editing session: current snapshot, id counter and the persistence
//! collaborator. One session exists per process.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::editor::edits::Edit;
use crate::editor::ids::IdSequence;
use crate::models::ResumeDocument;
use crate::storage::codec::{load_document, save_document};
use crate::storage::{KeyValueStore, StoreError};

/// Outcome of the most recent persistence write.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SaveStatus {
    /// Time of the last write that succeeded.
    pub saved_at: Option<DateTime<Utc>>,
    /// Error of the last write, cleared by the next successful one.
    pub last_error: Option<String>,
}

pub struct EditorSession {
    document: Arc<ResumeDocument>,
    ids: IdSequence,
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    save_status: SaveStatus,
}

impl EditorSession {
    /// Loads the stored snapshot (or the sample content) and seeds the id
    /// counter from it.
    pub fn open(store: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let document = load_document(store.as_ref(), &storage_key);
        let ids = IdSequence::seeded_from(&document);
        EditorSession {
            document: Arc::new(document),
            ids,
            store,
            storage_key,
            save_status: SaveStatus::default(),
        }
    }

    /// The current snapshot. Cheap to clone and safe to render after the
    /// session lock is released.
    pub fn snapshot(&self) -> Arc<ResumeDocument> {
        Arc::clone(&self.document)
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Applies `edit`, swaps in the new snapshot and persists it. A failed
    /// write is logged and recorded; the edit is kept either way.
    ///
    /// The store is synchronous, so the write runs on the blocking pool via
    /// `spawn_blocking`. It is awaited before returning, which keeps writes
    /// in edit order while the caller holds the session lock.
    pub async fn apply(&mut self, edit: &Edit) -> Arc<ResumeDocument> {
        let next = edit.apply(&self.document, &mut self.ids);
        self.document = Arc::new(next);
        debug!("Applied edit '{}'", edit.op());
        self.persist().await;
        self.snapshot()
    }

    async fn persist(&mut self) {
        let store = Arc::clone(&self.store);
        let key = self.storage_key.clone();
        let document = self.snapshot();
        let result = tokio::task::spawn_blocking(move || {
            save_document(store.as_ref(), &key, &document)
        })
        .await
        .map_err(StoreError::from)
        .and_then(|written| written);

        match result {
            Ok(()) => {
                self.save_status = SaveStatus {
                    saved_at: Some(Utc::now()),
                    last_error: None,
                };
            }
            Err(e) => {
                error!("Failed to persist document '{}': {e}", self.storage_key);
                self.save_status.last_error = Some(e.to_string());
            }
        }
    }
}
