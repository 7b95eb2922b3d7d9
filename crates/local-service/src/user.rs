//! Local user profile, nutrition targets and equipment.

use std::sync::Arc;

use async_trait::async_trait;
use kv_store::{collection, keys, KeyValueStore};
use symmetry_core::{
    DataError, EquipmentProfile, NutritionTargets, Result, User, UserService, UserUpdate,
};

use crate::error::storage;
use crate::locks::CollectionLocks;
use crate::BACKEND;

/// The installation's single user and the records it owns.
///
/// Targets and equipment are installation-wide singletons; the `user_id`
/// argument is accepted for parity with remote backends and not checked.
pub struct LocalUserService {
    store: Arc<dyn KeyValueStore>,
    locks: Arc<CollectionLocks>,
}

impl LocalUserService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_locks(store, Arc::new(CollectionLocks::new()))
    }

    pub fn with_locks(store: Arc<dyn KeyValueStore>, locks: Arc<CollectionLocks>) -> Self {
        Self { store, locks }
    }

    fn stored_user(&self) -> Option<User> {
        collection::read_one(self.store.as_ref(), keys::USER)
    }

    fn stored_equipment(&self) -> Option<EquipmentProfile> {
        collection::read_one(self.store.as_ref(), keys::EQUIPMENT)
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        collection::write_one(self.store.as_ref(), key, value).map_err(storage)
    }
}

#[async_trait]
impl UserService for LocalUserService {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.stored_user().filter(|u| u.id == user_id))
    }

    async fn get_nutrition_targets(&self, _user_id: &str) -> Result<Option<NutritionTargets>> {
        Ok(collection::read_one(self.store.as_ref(), keys::NUTRITION_TARGETS))
    }

    async fn get_equipment(&self, _user_id: &str) -> Result<Option<EquipmentProfile>> {
        Ok(self.stored_equipment())
    }

    async fn create_user(&self, user: User) -> Result<User> {
        let _guard = self.locks.lock(keys::USER).await;
        if let Some(existing) = self.stored_user() {
            tracing::warn!("Replacing stored user {} with {}", existing.id, user.id);
        }
        self.write(keys::USER, &user)?;
        tracing::info!("Created user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        let _guard = self.locks.lock(keys::USER).await;
        let mut user = self
            .stored_user()
            .filter(|u| u.id == user_id)
            .ok_or_else(|| DataError::not_found("User", user_id))?;

        update.apply(&mut user);
        self.write(keys::USER, &user)?;
        Ok(user)
    }

    async fn update_nutrition_targets(
        &self,
        _user_id: &str,
        targets: NutritionTargets,
    ) -> Result<NutritionTargets> {
        let _guard = self.locks.lock(keys::NUTRITION_TARGETS).await;
        self.write(keys::NUTRITION_TARGETS, &targets)?;
        tracing::debug!(calories = targets.calories, "Saved nutrition targets");
        Ok(targets)
    }

    async fn update_equipment(
        &self,
        _user_id: &str,
        equipment: EquipmentProfile,
    ) -> Result<EquipmentProfile> {
        let _guard = self.locks.lock(keys::EQUIPMENT).await;
        self.write(keys::EQUIPMENT, &equipment)?;
        Ok(equipment)
    }

    async fn update_plate_count(
        &self,
        user_id: &str,
        weight: f64,
        delta: i64,
    ) -> Result<EquipmentProfile> {
        let _guard = self.locks.lock(keys::EQUIPMENT).await;
        let mut equipment = self
            .stored_equipment()
            .ok_or_else(|| DataError::not_found("EquipmentProfile", user_id))?;

        let count = equipment.available_plates.adjust(weight, delta)?;
        self.write(keys::EQUIPMENT, &equipment)?;
        tracing::debug!(weight, delta, count, "Adjusted plate count");
        Ok(equipment)
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kv_store::MemoryStore;
    use symmetry_core::{ExperienceLevel, Gender, Goal, WeightUnit};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            height_cm: 178.0,
            weight_kg: 80.0,
            age: 30,
            gender: Gender::Male,
            experience_level: ExperienceLevel::Intermediate,
            goal: Goal::Maintain,
            training_frequency: 4,
            training_days: vec!["Monday".to_string(), "Thursday".to_string()],
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn service() -> LocalUserService {
        LocalUserService::new(Arc::new(MemoryStore::new("test")))
    }

    #[tokio::test]
    async fn test_get_user_matches_id() {
        let service = service();
        assert!(service.get_user("u1").await.unwrap().is_none());

        service.create_user(user("u1")).await.unwrap();
        assert_eq!(service.get_user("u1").await.unwrap(), Some(user("u1")));
        assert!(service.get_user("someone-else").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_merges() {
        let service = service();
        service.create_user(user("u1")).await.unwrap();

        let update = UserUpdate {
            weight_kg: Some(82.5),
            goal: Some(Goal::Bulk),
            ..Default::default()
        };
        let updated = service.update_user("u1", update).await.unwrap();
        assert_eq!(updated.weight_kg, 82.5);
        assert_eq!(updated.goal, Goal::Bulk);
        assert_eq!(updated.name, "Sam");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let service = service();
        let result = service.update_user("u1", UserUpdate::default()).await;
        assert!(matches!(result, Err(DataError::NotFound { entity: "User", .. })));
        assert!(service.get_user("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_targets_replace_wholesale() {
        let service = service();
        let first = NutritionTargets {
            calories: 2500,
            protein: 180,
            carbs: 280,
            fats: 70,
        };
        let second = NutritionTargets {
            calories: 2000,
            ..first
        };
        service.update_nutrition_targets("u1", first).await.unwrap();
        service.update_nutrition_targets("u1", second).await.unwrap();

        assert_eq!(service.get_nutrition_targets("u1").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_plate_count_clamps_at_zero() {
        let service = service();
        service
            .update_equipment("u1", EquipmentProfile::standard_gym(WeightUnit::Lbs))
            .await
            .unwrap();

        let profile = service.update_plate_count("u1", 45.0, -10).await.unwrap();
        assert_eq!(profile.available_plates.count(45.0), 0);

        let profile = service.update_plate_count("u1", 45.0, 2).await.unwrap();
        assert_eq!(profile.available_plates.count(45.0), 2);

        let stored = service.get_equipment("u1").await.unwrap().unwrap();
        assert_eq!(stored.available_plates.count(45.0), 2);
    }

    #[tokio::test]
    async fn test_plate_count_rejects_bad_weight() {
        let service = service();
        service
            .update_equipment("u1", EquipmentProfile::standard_gym(WeightUnit::Lbs))
            .await
            .unwrap();

        let result = service.update_plate_count("u1", -45.0, 3).await;
        assert!(matches!(result, Err(DataError::InvalidPlateWeight(_))));
        let result = service.update_plate_count("u1", f64::NAN, 1).await;
        assert!(matches!(result, Err(DataError::InvalidPlateWeight(_))));

        let stored = service.get_equipment("u1").await.unwrap().unwrap();
        assert_eq!(stored, EquipmentProfile::standard_gym(WeightUnit::Lbs));
    }

    #[tokio::test]
    async fn test_plate_count_without_profile() {
        let service = service();
        let result = service.update_plate_count("u1", 45.0, 1).await;
        assert!(matches!(result, Err(DataError::NotFound { .. })));
    }
}
