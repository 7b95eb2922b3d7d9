//! Composition of the local services.

use std::sync::Arc;

use kv_store::KeyValueStore;
use symmetry_core::DataService;

use crate::locks::CollectionLocks;
use crate::{LocalProgressService, LocalUserService, LocalWorkoutService};

/// Builds a [`DataService`] backed by a local store.
pub struct LocalDataService;

impl LocalDataService {
    /// Wire the three local services to `store`, sharing one set of
    /// collection locks.
    pub fn build(store: Arc<dyn KeyValueStore>) -> DataService {
        let locks = Arc::new(CollectionLocks::new());
        tracing::info!("Using local data service (store: {})", store.name());

        DataService::new(
            Arc::new(LocalWorkoutService::with_locks(store.clone(), locks.clone())),
            Arc::new(LocalProgressService::with_locks(store.clone(), locks.clone())),
            Arc::new(LocalUserService::with_locks(store, locks)),
        )
    }
}
