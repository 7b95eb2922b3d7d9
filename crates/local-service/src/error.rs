use kv_store::StoreError;
use symmetry_core::DataError;

/// Surface a failed write as a storage error.
pub(crate) fn storage(err: StoreError) -> DataError {
    tracing::error!("Store write failed: {}", err);
    DataError::Storage(err.to_string())
}
