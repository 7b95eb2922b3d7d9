//! Core types and contracts for the Symmetry data layer.
//!
//! This crate provides the shared interface that every storage backend
//! implements. It defines:
//!
//! - The domain entities ([`User`], [`WorkoutPlan`], [`BodyMeasurement`], ...)
//! - [`WorkoutService`] / [`ProgressService`] / [`UserService`] - the
//!   entity-scoped CRUD contracts
//! - [`DataService`] - the facade that callers hold on to
//! - [`DataError`] - the error taxonomy shared by all backends
//! - Closed-form calculators for plates, macros and warm-up sets
//!
//! # Example
//!
//! ```rust
//! use symmetry_core::{calculate_plates, WeightUnit};
//!
//! let per_side = calculate_plates(225.0, 45.0, WeightUnit::Lbs);
//! assert_eq!(per_side.len(), 1);
//! assert_eq!(per_side[0].weight, 45.0);
//! assert_eq!(per_side[0].count, 2);
//! ```

mod error;
mod facade;
pub mod macros;
pub mod models;
pub mod plates;
mod services;
pub mod training;

pub use error::{DataError, Result};
pub use facade::DataService;
pub use macros::{calculate_macros, ActivityLevel, MacroCalculation, MacroInput};
pub use models::{
    BodyMeasurement, CardioLog, CardioType, Circumferences, EquipmentProfile, EquipmentType,
    Exercise, ExperienceLevel, Gender, Goal, Intensity, MuscleAnalysis, MuscleGroup,
    MuscleStatus, NutritionTargets, PhysiqueScan, PlateInventory, Pose, SetLog, SetTag, User,
    UserUpdate, WeightUnit, WorkoutExercise, WorkoutPlan, WorkoutPlanUpdate, WorkoutStatus,
};
pub use plates::{calculate_plates, calculate_plates_with_inventory, PlateBreakdown, PlateLoad};
pub use services::{ProgressService, UserService, WorkoutService};
pub use training::{deload_weight, warmup_ramp, WarmupSet};

// Re-export async_trait for backend implementations
pub use async_trait::async_trait;
