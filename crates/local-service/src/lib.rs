//! On-device implementations of the Symmetry data services.
//!
//! Each service reads and rewrites whole JSON collections in a
//! [`KeyValueStore`](kv_store::KeyValueStore):
//! - `LocalWorkoutService` - workout plans, with lifecycle checks on update
//! - `LocalProgressService` - append-only measurement, scan and cardio logs
//! - `LocalUserService` - the installation's user, targets and equipment
//!
//! Writes to one collection are serialized, so two concurrent updates never
//! lose each other's changes.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kv_store::MemoryStore;
//! use local_service::LocalDataService;
//!
//! #[tokio::main]
//! async fn main() -> symmetry_core::Result<()> {
//!     let data = LocalDataService::build(Arc::new(MemoryStore::new("example")));
//!
//!     let plans = data.workout.get_workout_plans("u1").await?;
//!     assert!(plans.is_empty());
//!     assert_eq!(data.backend(), "local");
//!     Ok(())
//! }
//! ```

mod data_service;
mod error;
mod locks;
mod progress;
mod user;
mod workout;

pub use data_service::LocalDataService;
pub use locks::CollectionLocks;
pub use progress::LocalProgressService;
pub use user::LocalUserService;
pub use workout::LocalWorkoutService;

// Re-export core types for convenience
pub use symmetry_core::{DataError, DataService, Result};

/// Backend name reported by every local service.
pub const BACKEND: &str = "local";
