//! Application state store for the Symmetry client.
//!
//! [`AppState`] is changed only by dispatching an [`Action`] through the pure
//! [`reduce`] function. [`AppStore`] wraps that with persistence: the
//! durable subset (everything except the active session) is written to a
//! [`KeyValueStore`](kv_store::KeyValueStore) as a versioned snapshot after
//! each action that can change it, and read back on startup.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use app_state::{Action, AppStore};
//! use kv_store::MemoryStore;
//!
//! let kv = Arc::new(MemoryStore::new("example"));
//! let mut store = AppStore::load(kv.clone());
//! store.dispatch(Action::AddBlacklistedExercise("dips".into())).unwrap();
//!
//! let reopened = AppStore::load(kv);
//! assert_eq!(reopened.state().settings.blacklisted_exercises, vec!["dips"]);
//! ```

mod action;
mod active;
mod error;
mod onboarding;
mod persist;
mod settings;
mod state;
mod timer;

pub use action::Action;
pub use active::{ActiveWorkoutState, RestTimer, DEFAULT_REST_SECONDS};
pub use error::{Result, StateError};
pub use onboarding::{Biometrics, Consent, Experience, OnboardingData, OnboardingUpdate, Schedule};
pub use persist::{AppStore, SNAPSHOT_VERSION};
pub use settings::{
    AppSettings, MeasurementUnit, NotificationSettings, SettingsUpdate, Subscription, Theme,
};
pub use state::{reduce, AppState, PersistedState};
pub use timer::{format_clock, run_rest_timer, session_elapsed};
