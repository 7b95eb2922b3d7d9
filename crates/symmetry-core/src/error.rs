//! Error types shared by every data backend.

use std::time::Duration;

use thiserror::Error;

use crate::models::WorkoutStatus;

/// Errors that can occur during data service operations.
///
/// Reads of absent or corrupt data never produce an error; backends report
/// those as empty collections or `None`.
#[derive(Debug, Error)]
pub enum DataError {
    /// Update targeted a record that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The selected backend has no implementation for this operation.
    #[error("{backend} backend does not implement {operation}")]
    NotImplemented {
        backend: &'static str,
        operation: &'static str,
    },

    /// A workout status change outside the allowed progression.
    #[error("invalid workout status transition: {from} -> {to}")]
    InvalidTransition {
        from: WorkoutStatus,
        to: WorkoutStatus,
    },

    /// Set data of a completed workout plan cannot change.
    #[error("workout plan {id} is already completed")]
    PlanCompleted { id: String },

    /// Plate weights must be positive and finite.
    #[error("invalid plate weight: {0}")]
    InvalidPlateWeight(f64),

    /// The underlying store rejected a write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A remote call did not finish in time.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
}

impl DataError {
    /// Build a `NotFound` error for the given entity name and id.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for data service operations.
pub type Result<T> = std::result::Result<T, DataError>;
