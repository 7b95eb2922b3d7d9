//! Cloud variants of the domain services.

use async_trait::async_trait;
use symmetry_core::{
    BodyMeasurement, CardioLog, EquipmentProfile, NutritionTargets, PhysiqueScan,
    ProgressService, Result, User, UserService, UserUpdate, WorkoutPlan, WorkoutPlanUpdate,
    WorkoutService,
};

use crate::client::CloudClient;
use crate::BACKEND;

pub struct CloudWorkoutService {
    client: CloudClient,
}

impl CloudWorkoutService {
    pub fn new(client: CloudClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkoutService for CloudWorkoutService {
    async fn get_workout_plans(&self, _user_id: &str) -> Result<Vec<WorkoutPlan>> {
        self.client.call("getWorkoutPlans").await
    }

    async fn get_workout_plan(&self, _id: &str) -> Result<Option<WorkoutPlan>> {
        self.client.call("getWorkoutPlan").await
    }

    async fn create_workout_plan(&self, _plan: WorkoutPlan) -> Result<WorkoutPlan> {
        self.client.call("createWorkoutPlan").await
    }

    async fn update_workout_plan(
        &self,
        _id: &str,
        _update: WorkoutPlanUpdate,
    ) -> Result<WorkoutPlan> {
        self.client.call("updateWorkoutPlan").await
    }

    async fn delete_workout_plan(&self, _id: &str) -> Result<()> {
        self.client.call("deleteWorkoutPlan").await
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}

pub struct CloudProgressService {
    client: CloudClient,
}

impl CloudProgressService {
    pub fn new(client: CloudClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProgressService for CloudProgressService {
    async fn get_body_measurements(&self, _user_id: &str) -> Result<Vec<BodyMeasurement>> {
        self.client.call("getBodyMeasurements").await
    }

    async fn add_body_measurement(
        &self,
        _measurement: BodyMeasurement,
    ) -> Result<BodyMeasurement> {
        self.client.call("addBodyMeasurement").await
    }

    async fn get_physique_scans(&self, _user_id: &str) -> Result<Vec<PhysiqueScan>> {
        self.client.call("getPhysiqueScans").await
    }

    async fn add_physique_scan(&self, _scan: PhysiqueScan) -> Result<PhysiqueScan> {
        self.client.call("addPhysiqueScan").await
    }

    async fn get_cardio_logs(&self, _user_id: &str) -> Result<Vec<CardioLog>> {
        self.client.call("getCardioLogs").await
    }

    async fn add_cardio_log(&self, _log: CardioLog) -> Result<CardioLog> {
        self.client.call("addCardioLog").await
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}

pub struct CloudUserService {
    client: CloudClient,
}

impl CloudUserService {
    pub fn new(client: CloudClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserService for CloudUserService {
    async fn get_user(&self, _user_id: &str) -> Result<Option<User>> {
        self.client.call("getUser").await
    }

    async fn get_nutrition_targets(&self, _user_id: &str) -> Result<Option<NutritionTargets>> {
        self.client.call("getNutritionTargets").await
    }

    async fn get_equipment(&self, _user_id: &str) -> Result<Option<EquipmentProfile>> {
        self.client.call("getEquipment").await
    }

    async fn create_user(&self, _user: User) -> Result<User> {
        self.client.call("createUser").await
    }

    async fn update_user(&self, _user_id: &str, _update: UserUpdate) -> Result<User> {
        self.client.call("updateUser").await
    }

    async fn update_nutrition_targets(
        &self,
        _user_id: &str,
        _targets: NutritionTargets,
    ) -> Result<NutritionTargets> {
        self.client.call("updateNutritionTargets").await
    }

    async fn update_equipment(
        &self,
        _user_id: &str,
        _equipment: EquipmentProfile,
    ) -> Result<EquipmentProfile> {
        self.client.call("updateEquipment").await
    }

    async fn update_plate_count(
        &self,
        _user_id: &str,
        _weight: f64,
        _delta: i64,
    ) -> Result<EquipmentProfile> {
        self.client.call("updatePlateCount").await
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CloudConfig;
    use chrono::Utc;
    use symmetry_core::{DataError, WorkoutStatus};

    fn client() -> CloudClient {
        CloudClient::new(CloudConfig::default())
    }

    fn assert_not_implemented<T: std::fmt::Debug>(result: Result<T>, expected: &str) {
        match result {
            Err(DataError::NotImplemented { backend, operation }) => {
                assert_eq!(backend, "cloud");
                assert_eq!(operation, expected);
            }
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_workout_operations_not_implemented() {
        let service = CloudWorkoutService::new(client());
        let plan = WorkoutPlan {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            name: "Pull".to_string(),
            day_name: "Tuesday".to_string(),
            target_muscles: vec![],
            exercises: vec![],
            status: WorkoutStatus::Scheduled,
            scheduled_date: Utc::now(),
            completed_at: None,
            duration_minutes: None,
        };

        assert_not_implemented(service.get_workout_plans("u1").await, "getWorkoutPlans");
        assert_not_implemented(service.get_workout_plan("p1").await, "getWorkoutPlan");
        assert_not_implemented(service.create_workout_plan(plan).await, "createWorkoutPlan");
        assert_not_implemented(
            service
                .update_workout_plan("p1", WorkoutPlanUpdate::default())
                .await,
            "updateWorkoutPlan",
        );
        assert_not_implemented(service.delete_workout_plan("p1").await, "deleteWorkoutPlan");
    }

    #[tokio::test]
    async fn test_user_operations_not_implemented() {
        let service = CloudUserService::new(client());
        assert_not_implemented(service.get_user("u1").await, "getUser");
        assert_not_implemented(service.get_equipment("u1").await, "getEquipment");
        assert_not_implemented(
            service.update_plate_count("u1", 45.0, 1).await,
            "updatePlateCount",
        );
    }

    #[tokio::test]
    async fn test_progress_operations_not_implemented() {
        let service = CloudProgressService::new(client());
        assert_not_implemented(service.get_cardio_logs("u1").await, "getCardioLogs");
        assert_not_implemented(service.get_physique_scans("u1").await, "getPhysiqueScans");
        assert_eq!(service.backend(), "cloud");
    }
}
