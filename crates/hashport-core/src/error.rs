use thiserror::Error;

/// Errors related to core type validation.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short key: {0}")]
    InvalidShortKey(String),
}

/// Errors a key-value store implementation may report.
///
/// `Occupied` is the conditional-write conflict from
/// [`put_if_absent`](crate::KeyValueStore::put_if_absent); the other
/// variants are transport or availability failures, reported
/// distinctly from "key not bound".
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("key already bound: {0}")]
    Occupied(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}
