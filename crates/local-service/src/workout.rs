//! Local workout plan storage.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use kv_store::{collection, keys, KeyValueStore};
use symmetry_core::{DataError, Result, WorkoutPlan, WorkoutPlanUpdate, WorkoutService};

use crate::error::storage;
use crate::locks::CollectionLocks;
use crate::BACKEND;

/// Workout plans kept as one JSON array under `workout_plans`.
pub struct LocalWorkoutService {
    store: Arc<dyn KeyValueStore>,
    locks: Arc<CollectionLocks>,
}

impl LocalWorkoutService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_locks(store, Arc::new(CollectionLocks::new()))
    }

    pub fn with_locks(store: Arc<dyn KeyValueStore>, locks: Arc<CollectionLocks>) -> Self {
        Self { store, locks }
    }

    fn load(&self) -> Vec<WorkoutPlan> {
        collection::read_all(self.store.as_ref(), keys::WORKOUT_PLANS)
    }

    fn save(&self, plans: &[WorkoutPlan]) -> Result<()> {
        collection::write_all(self.store.as_ref(), keys::WORKOUT_PLANS, plans).map_err(storage)
    }
}

#[async_trait]
impl WorkoutService for LocalWorkoutService {
    async fn get_workout_plans(&self, user_id: &str) -> Result<Vec<WorkoutPlan>> {
        let plans: Vec<WorkoutPlan> = self
            .load()
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect();
        tracing::debug!(user_id, count = plans.len(), "Loaded workout plans");
        Ok(plans)
    }

    async fn get_workout_plan(&self, id: &str) -> Result<Option<WorkoutPlan>> {
        Ok(self.load().into_iter().find(|p| p.id == id))
    }

    async fn create_workout_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan> {
        let _guard = self.locks.lock(keys::WORKOUT_PLANS).await;
        let mut plans = self.load();
        plans.push(plan.clone());
        self.save(&plans)?;
        tracing::info!("Created workout plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    async fn update_workout_plan(
        &self,
        id: &str,
        update: WorkoutPlanUpdate,
    ) -> Result<WorkoutPlan> {
        let _guard = self.locks.lock(keys::WORKOUT_PLANS).await;
        let mut plans = self.load();
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DataError::not_found("WorkoutPlan", id))?;

        let previous = plan.status;
        update.apply_checked(plan, Utc::now())?;
        let updated = plan.clone();

        self.save(&plans)?;
        if previous != updated.status {
            tracing::info!("Workout plan {}: {} -> {}", id, previous, updated.status);
        }
        Ok(updated)
    }

    async fn delete_workout_plan(&self, id: &str) -> Result<()> {
        let _guard = self.locks.lock(keys::WORKOUT_PLANS).await;
        let mut plans = self.load();
        let before = plans.len();
        plans.retain(|p| p.id != id);

        if plans.len() == before {
            tracing::debug!(id, "Delete of missing workout plan ignored");
            return Ok(());
        }
        self.save(&plans)
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}
