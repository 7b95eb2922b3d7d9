//! The store that owns [`AppState`] and keeps its snapshot on disk.

use std::sync::Arc;

use kv_store::{collection, keys, KeyValueStore};
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::Result;
use crate::state::{reduce, AppState, PersistedState};

/// Snapshot format version. A stored snapshot with any other version is
/// discarded.
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    state: PersistedState,
    version: u32,
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    state: &'a PersistedState,
    version: u32,
}

/// Owns the application state and writes the persisted subset back after
/// every action that can change it.
pub struct AppStore {
    state: AppState,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("store", &self.store.name())
            .field("state", &self.state)
            .finish()
    }
}

impl AppStore {
    /// Hydrate from the snapshot in `store`, falling back to defaults.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let state = match collection::read_one::<Snapshot, _>(store.as_ref(), keys::APP_STATE) {
            Some(snapshot) if snapshot.version == SNAPSHOT_VERSION => {
                tracing::info!("Restored app state from {}", store.name());
                AppState::from_persisted(snapshot.state)
            }
            Some(snapshot) => {
                tracing::warn!(
                    "Discarding app state snapshot version {} (expected {})",
                    snapshot.version,
                    SNAPSHOT_VERSION
                );
                AppState::default()
            }
            None => AppState::default(),
        };
        Self { state, store }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce `action` into the state, persisting if needed.
    ///
    /// The in-memory state is updated even when the write fails.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let persist = action.touches_persisted();
        tracing::debug!(action = action.name(), persist, "Dispatch");

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if persist {
            self.save()?;
        }
        Ok(())
    }

    /// Write the persisted subset now.
    pub fn save(&self) -> Result<()> {
        let persisted = self.state.to_persisted();
        let snapshot = SnapshotRef {
            state: &persisted,
            version: SNAPSHOT_VERSION,
        };
        collection::write_one(self.store.as_ref(), keys::APP_STATE, &snapshot)?;
        Ok(())
    }
}
