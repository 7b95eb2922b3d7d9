use kv_store::StoreError;
use thiserror::Error;

/// Errors that can occur while persisting application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to persist state: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, StateError>;
