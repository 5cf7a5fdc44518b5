//! Local key-value persistence for document snapshots.
//!
//! The store only knows strings; encoding and the load fallback policy live
//! in [`codec`]. Sessions receive the store as `Arc<dyn KeyValueStore>`.

pub mod codec;
pub mod file_store;
#[cfg(test)]
pub mod memory;

use thiserror::Error;

pub use file_store::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid storage key '{0}': only letters, digits, '_' and '-' are allowed")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// String-keyed local store. Calls are synchronous and may block on disk;
/// async callers run them through `spawn_blocking`. Failures are treated as
/// diagnostics.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
