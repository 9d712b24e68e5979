//! Storage error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures reaching or writing the backing key-value storage.
///
/// Parse failures of the stored document are not errors: they are recovered
/// inside [`crate::store::DocumentStore::load`] and never surface here.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage could not be obtained or read (disabled, sandboxed, no window)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected a write
    #[error("Storage write failed: {0}")]
    Write(String),
    /// The value does not fit in the remaining quota
    #[error("Storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
