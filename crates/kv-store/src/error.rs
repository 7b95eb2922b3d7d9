//! Store error types.

use thiserror::Error;

use crate::crypto::CryptoError;

/// Errors raised by writes and by opening a store.
///
/// Reads never fail; see [`crate::KeyValueStore::get`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("could not prepare store location: {0}")]
    Location(#[from] std::io::Error),

    #[error("value is not valid JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("encryption: {0}")]
    Encryption(#[from] CryptoError),

    #[error("store lock poisoned")]
    MutexPoisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
