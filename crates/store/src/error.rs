//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced when persisting the collection.
///
/// Loading never fails, so every variant comes from a save or flush.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
