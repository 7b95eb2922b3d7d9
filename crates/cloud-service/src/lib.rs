//! Remote implementations of the Symmetry data services.
//!
//! The remote API is not available yet: every operation fails with
//! [`DataError::NotImplemented`](symmetry_core::DataError::NotImplemented).
//! Calls are still bounded by the configured request timeout, so callers
//! already see the error shape a real backend would produce.
//!
//! # Example
//!
//! ```rust
//! use cloud_service::{CloudConfig, CloudDataService};
//! use symmetry_core::DataError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let data = CloudDataService::build(CloudConfig::default());
//!
//!     let result = data.workout.get_workout_plans("u1").await;
//!     assert!(matches!(result, Err(DataError::NotImplemented { .. })));
//! }
//! ```

mod client;
mod config;
mod data_service;
mod services;

pub use client::CloudClient;
pub use config::{CloudConfig, ConfigError, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use data_service::CloudDataService;
pub use services::{CloudProgressService, CloudUserService, CloudWorkoutService};

/// Backend name reported by every cloud service.
pub const BACKEND: &str = "cloud";
