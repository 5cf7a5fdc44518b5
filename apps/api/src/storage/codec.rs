//! JSON encoding of [`ResumeDocument`] and the startup load policy.

use tracing::{info, warn};

use crate::models::ResumeDocument;
use crate::storage::{KeyValueStore, StoreError};

pub fn encode(doc: &ResumeDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(doc)
}

/// Decodes a stored record. Missing fields take their empty defaults and a
/// missing or unknown `template` becomes the classic layout.
pub fn decode(raw: &str) -> Result<ResumeDocument, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Reads the document stored under `key`, falling back to the sample
/// content when nothing is stored, the store fails, or the record does not
/// decode. Never fails.
pub fn load_document(store: &dyn KeyValueStore, key: &str) -> ResumeDocument {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No stored document under '{key}', starting from sample content");
            return ResumeDocument::sample();
        }
        Err(e) => {
            warn!("Error reading stored document '{key}': {e}");
            return ResumeDocument::sample();
        }
    };

    match decode(&raw) {
        Ok(doc) => {
            info!("Loaded stored document '{key}' ({} bytes)", raw.len());
            doc
        }
        Err(e) => {
            warn!("Stored document '{key}' is not decodable, using sample content: {e}");
            ResumeDocument::sample()
        }
    }
}

pub fn save_document(
    store: &dyn KeyValueStore,
    key: &str,
    doc: &ResumeDocument,
) -> Result<(), StoreError> {
    let encoded = encode(doc)?;
    store.set(key, &encoded)
}
