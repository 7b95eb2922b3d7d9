//! The service traits every data backend implements.
//!
//! Local and cloud backends satisfy the same contracts, so callers never
//! know which one they were handed. All methods are async because a remote
//! backend genuinely waits on I/O even when the local one does not.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    BodyMeasurement, CardioLog, EquipmentProfile, NutritionTargets, PhysiqueScan, User,
    UserUpdate, WorkoutPlan, WorkoutPlanUpdate,
};

/// CRUD over workout plans.
///
/// This trait is object-safe and can be used with `Arc<dyn WorkoutService>`.
#[async_trait]
pub trait WorkoutService: Send + Sync {
    /// All plans owned by `user_id`, in creation order. Empty when none match.
    async fn get_workout_plans(&self, user_id: &str) -> Result<Vec<WorkoutPlan>>;

    /// A single plan by id, or `None`.
    async fn get_workout_plan(&self, id: &str) -> Result<Option<WorkoutPlan>>;

    /// Store a new plan. The caller supplies the id; the stored value is
    /// returned unchanged.
    async fn create_workout_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan>;

    /// Merge `update` into the plan with `id`.
    ///
    /// Fails with `NotFound` when the plan does not exist, leaving the
    /// collection untouched.
    async fn update_workout_plan(&self, id: &str, update: WorkoutPlanUpdate)
        -> Result<WorkoutPlan>;

    /// Remove the plan with `id`. Removing a missing plan is not an error.
    async fn delete_workout_plan(&self, id: &str) -> Result<()>;

    /// Name of the backend, for logs.
    fn backend(&self) -> &str;
}

/// Append-only progress logs.
#[async_trait]
pub trait ProgressService: Send + Sync {
    async fn get_body_measurements(&self, user_id: &str) -> Result<Vec<BodyMeasurement>>;

    async fn add_body_measurement(&self, measurement: BodyMeasurement)
        -> Result<BodyMeasurement>;

    async fn get_physique_scans(&self, user_id: &str) -> Result<Vec<PhysiqueScan>>;

    async fn add_physique_scan(&self, scan: PhysiqueScan) -> Result<PhysiqueScan>;

    async fn get_cardio_logs(&self, user_id: &str) -> Result<Vec<CardioLog>>;

    async fn add_cardio_log(&self, log: CardioLog) -> Result<CardioLog>;

    fn backend(&self) -> &str;
}

/// The user profile and the records it owns.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    async fn get_nutrition_targets(&self, user_id: &str) -> Result<Option<NutritionTargets>>;

    async fn get_equipment(&self, user_id: &str) -> Result<Option<EquipmentProfile>>;

    async fn create_user(&self, user: User) -> Result<User>;

    /// Merge `update` into the stored user. `NotFound` when there is none.
    async fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    /// Replace the nutrition targets wholesale.
    async fn update_nutrition_targets(
        &self,
        user_id: &str,
        targets: NutritionTargets,
    ) -> Result<NutritionTargets>;

    async fn update_equipment(
        &self,
        user_id: &str,
        equipment: EquipmentProfile,
    ) -> Result<EquipmentProfile>;

    /// Add `delta` pairs of `weight` plates to the stored inventory.
    ///
    /// Counts clamp at zero. `NotFound` when no equipment profile exists.
    async fn update_plate_count(
        &self,
        user_id: &str,
        weight: f64,
        delta: i64,
    ) -> Result<EquipmentProfile>;

    fn backend(&self) -> &str;
}
