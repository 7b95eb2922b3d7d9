//! The application state and its reducer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use symmetry_core::{
    BodyMeasurement, CardioLog, EquipmentProfile, NutritionTargets, PhysiqueScan, User,
    WorkoutPlan, WorkoutPlanUpdate,
};

use crate::action::Action;
use crate::active::ActiveWorkoutState;
use crate::onboarding::OnboardingData;
use crate::settings::AppSettings;

/// Everything the UI reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub nutrition_targets: Option<NutritionTargets>,
    pub equipment: Option<EquipmentProfile>,
    pub workout_plans: Vec<WorkoutPlan>,
    pub active_workout: ActiveWorkoutState,
    /// Oldest first.
    pub body_measurements: Vec<BodyMeasurement>,
    /// Oldest first.
    pub physique_scans: Vec<PhysiqueScan>,
    /// Oldest first.
    pub cardio_logs: Vec<CardioLog>,
    pub settings: AppSettings,
    pub onboarding: OnboardingData,
}

impl AppState {
    pub fn latest_measurement(&self) -> Option<&BodyMeasurement> {
        self.body_measurements.last()
    }

    pub fn latest_scan(&self) -> Option<&PhysiqueScan> {
        self.physique_scans.last()
    }

    pub fn latest_cardio(&self) -> Option<&CardioLog> {
        self.cardio_logs.last()
    }

    /// The plan the active session refers to, if any.
    pub fn active_plan(&self) -> Option<&WorkoutPlan> {
        let id = self.active_workout.workout_id.as_deref()?;
        self.workout_plans.iter().find(|p| p.id == id)
    }

    /// Restore the persisted subset, leaving the active session idle.
    pub fn from_persisted(persisted: PersistedState) -> Self {
        Self {
            user: persisted.user,
            nutrition_targets: persisted.nutrition_targets,
            equipment: persisted.equipment,
            workout_plans: persisted.workout_plans,
            active_workout: ActiveWorkoutState::default(),
            body_measurements: persisted.body_measurements,
            physique_scans: persisted.physique_scans,
            cardio_logs: persisted.cardio_logs,
            settings: persisted.settings,
            onboarding: persisted.onboarding,
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            user: self.user.clone(),
            nutrition_targets: self.nutrition_targets,
            equipment: self.equipment.clone(),
            workout_plans: self.workout_plans.clone(),
            body_measurements: self.body_measurements.clone(),
            physique_scans: self.physique_scans.clone(),
            cardio_logs: self.cardio_logs.clone(),
            settings: self.settings.clone(),
            onboarding: self.onboarding.clone(),
        }
    }
}

/// The subset of [`AppState`] that survives a restart.
///
/// Fields missing from a snapshot take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub user: Option<User>,
    pub nutrition_targets: Option<NutritionTargets>,
    pub equipment: Option<EquipmentProfile>,
    pub workout_plans: Vec<WorkoutPlan>,
    pub body_measurements: Vec<BodyMeasurement>,
    pub physique_scans: Vec<PhysiqueScan>,
    pub cardio_logs: Vec<CardioLog>,
    pub settings: AppSettings,
    pub onboarding: OnboardingData,
}

/// Apply `action` to `state`.
///
/// Pure: anything time-dependent arrives inside the action. Workout plan
/// updates follow the same lifecycle as the data services; parts of an
/// update the lifecycle forbids are dropped and the rest is merged.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetUser(user) => state.user = Some(user),
        Action::UpdateUser(update) => {
            if let Some(user) = state.user.as_mut() {
                update.apply(user);
            }
        }
        Action::SetNutritionTargets(targets) => state.nutrition_targets = Some(targets),
        Action::SetEquipment(equipment) => state.equipment = Some(equipment),
        Action::UpdatePlateCount { weight, delta } => {
            if let Some(equipment) = state.equipment.as_mut() {
                if let Err(err) = equipment.available_plates.adjust(weight, delta) {
                    tracing::warn!("Ignoring plate count change: {}", err);
                }
            }
        }

        Action::SetWorkoutPlans(plans) => state.workout_plans = plans,
        Action::AddWorkoutPlan(plan) => state.workout_plans.push(plan),
        Action::UpdateWorkoutPlan { id, update, at } => {
            if let Some(plan) = state.workout_plans.iter_mut().find(|p| p.id == id) {
                update_plan(plan, update, at);
            }
        }
        Action::StartWorkout { workout_id, at } => {
            state.active_workout = ActiveWorkoutState::started(workout_id, at);
        }
        Action::EndWorkout => state.active_workout = ActiveWorkoutState::default(),
        Action::ToggleWarmupMode => {
            state.active_workout.warmup_mode = !state.active_workout.warmup_mode;
        }
        Action::ToggleDeloadMode => {
            state.active_workout.deload_mode = !state.active_workout.deload_mode;
        }
        Action::SetCurrentExercise(index) => state.active_workout.current_exercise_index = index,
        Action::StartRestTimer { seconds } => state.active_workout.rest_timer.start(seconds),
        Action::UpdateRestTimer { elapsed } => {
            state.active_workout.rest_timer.elapsed_seconds = elapsed;
        }
        Action::TickRestTimer => {
            state.active_workout.rest_timer.tick();
        }
        Action::StopRestTimer => state.active_workout.rest_timer.stop(),

        Action::AddBodyMeasurement(measurement) => state.body_measurements.push(measurement),
        Action::AddPhysiqueScan(scan) => state.physique_scans.push(scan),
        Action::AddCardioLog(log) => state.cardio_logs.push(log),

        Action::UpdateSettings(update) => update.apply(&mut state.settings),
        Action::AddBlacklistedExercise(exercise_id) => {
            if !state.settings.is_blacklisted(&exercise_id) {
                state.settings.blacklisted_exercises.push(exercise_id);
            }
        }
        Action::RemoveBlacklistedExercise(exercise_id) => {
            state
                .settings
                .blacklisted_exercises
                .retain(|id| *id != exercise_id);
        }

        Action::UpdateOnboarding(update) => update.apply(&mut state.onboarding),
        Action::CompleteOnboarding => state.onboarding.completed = true,
        Action::ResetOnboarding => state.onboarding = OnboardingData::default(),

        Action::ResetStore => state = AppState::default(),
    }
    state
}

fn update_plan(plan: &mut WorkoutPlan, mut update: WorkoutPlanUpdate, at: DateTime<Utc>) {
    if let Some(next) = update.status {
        if !plan.status.can_transition_to(next) {
            tracing::warn!(plan = %plan.id, "Dropping status change {} -> {}", plan.status, next);
            update.status = None;
        }
    }
    if plan.is_completed() && update.exercises.take().is_some() {
        tracing::warn!(plan = %plan.id, "Dropping exercise changes to a completed plan");
    }

    if let Err(err) = update.apply_checked(plan, at) {
        tracing::warn!(plan = %plan.id, "Workout plan update rejected: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use symmetry_core::{
        CardioType, Exercise, ExperienceLevel, Gender, Goal, Intensity, MuscleGroup, SetLog,
        UserUpdate, WeightUnit, WorkoutExercise, WorkoutStatus,
    };

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            height_cm: 178.0,
            weight_kg: 80.0,
            age: 30,
            gender: Gender::Female,
            experience_level: ExperienceLevel::Advanced,
            goal: Goal::Cut,
            training_frequency: 5,
            training_days: vec![],
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn plan(id: &str) -> WorkoutPlan {
        WorkoutPlan {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: "Legs".to_string(),
            day_name: "Friday".to_string(),
            target_muscles: vec![],
            exercises: vec![],
            status: WorkoutStatus::Scheduled,
            scheduled_date: Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap(),
            completed_at: None,
            duration_minutes: None,
        }
    }

    fn squat() -> WorkoutExercise {
        WorkoutExercise {
            id: "we1".to_string(),
            exercise_id: "squat".to_string(),
            exercise: Exercise {
                id: "squat".to_string(),
                name: "Back Squat".to_string(),
                target_muscle: MuscleGroup::Quads,
                secondary_muscles: vec![MuscleGroup::Glutes],
                video_url: None,
                is_unilateral: false,
                superset_id: None,
                notes: None,
                equipment_required: vec![],
            },
            sets: vec![SetLog::planned("s1", 1, WeightUnit::Lbs)],
            target_sets: 1,
            target_reps: "5".to_string(),
            rest_seconds: 180,
            superset_id: None,
            order: 0,
        }
    }

    fn cardio(id: &str) -> CardioLog {
        CardioLog {
            id: id.to_string(),
            user_id: "u1".to_string(),
            date: Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap(),
            kind: CardioType::Rowing,
            duration_minutes: 20,
            intensity: Intensity::Hiit,
            calories_burned: None,
            distance: None,
            notes: None,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, hour, 0, 0).unwrap()
    }

    fn apply_all(actions: Vec<Action>) -> AppState {
        actions.into_iter().fold(AppState::default(), reduce)
    }

    #[test]
    fn test_update_user_without_user_is_noop() {
        let update = UserUpdate {
            age: Some(31),
            ..Default::default()
        };
        let state = reduce(AppState::default(), Action::UpdateUser(update.clone()));
        assert!(state.user.is_none());

        let state = apply_all(vec![Action::SetUser(user()), Action::UpdateUser(update)]);
        assert_eq!(state.user.map(|u| u.age), Some(31));
    }

    #[test]
    fn test_logs_append_in_order() {
        let state = apply_all(vec![
            Action::AddCardioLog(cardio("c1")),
            Action::AddCardioLog(cardio("c2")),
        ]);
        let ids: Vec<&str> = state.cardio_logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(state.latest_cardio().map(|l| l.id.as_str()), Some("c2"));
    }

    #[test]
    fn test_start_workout_resets_session() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 18, 0, 0).unwrap();
        let state = apply_all(vec![
            Action::AddWorkoutPlan(plan("p1")),
            Action::StartWorkout {
                workout_id: "p0".to_string(),
                at,
            },
            Action::ToggleDeloadMode,
            Action::SetCurrentExercise(3),
            Action::StartRestTimer { seconds: 120 },
            Action::StartWorkout {
                workout_id: "p1".to_string(),
                at,
            },
        ]);

        let active = &state.active_workout;
        assert!(active.is_active);
        assert_eq!(active.workout_id.as_deref(), Some("p1"));
        assert_eq!(active.start_time, Some(at));
        assert!(!active.deload_mode);
        assert_eq!(active.current_exercise_index, 0);
        assert!(!active.rest_timer.is_running);
        assert_eq!(state.active_plan().map(|p| p.name.as_str()), Some("Legs"));

        let ended = reduce(state, Action::EndWorkout);
        assert_eq!(ended.active_workout, ActiveWorkoutState::default());
    }

    #[test]
    fn test_rest_timer_actions() {
        let state = apply_all(vec![
            Action::StartRestTimer { seconds: 2 },
            Action::TickRestTimer,
        ]);
        assert!(state.active_workout.rest_timer.is_running);

        let state = reduce(state, Action::TickRestTimer);
        assert!(!state.active_workout.rest_timer.is_running);
        assert_eq!(state.active_workout.rest_timer.elapsed_seconds, 2);

        let state = reduce(state, Action::UpdateRestTimer { elapsed: 1 });
        assert_eq!(state.active_workout.rest_timer.elapsed_seconds, 1);
    }

    #[test]
    fn test_update_workout_plan() {
        let state = apply_all(vec![
            Action::AddWorkoutPlan(plan("p1")),
            Action::AddWorkoutPlan(plan("p2")),
            Action::UpdateWorkoutPlan {
                id: "p2".to_string(),
                update: WorkoutPlanUpdate::status(WorkoutStatus::Skipped),
                at: at(19),
            },
            Action::UpdateWorkoutPlan {
                id: "missing".to_string(),
                update: WorkoutPlanUpdate::status(WorkoutStatus::Active),
                at: at(19),
            },
        ]);
        assert_eq!(state.workout_plans[0].status, WorkoutStatus::Scheduled);
        assert_eq!(state.workout_plans[1].status, WorkoutStatus::Skipped);
    }

    #[test]
    fn test_completing_plan_stamps_completed_at() {
        let state = apply_all(vec![
            Action::AddWorkoutPlan(plan("p1")),
            Action::UpdateWorkoutPlan {
                id: "p1".to_string(),
                update: WorkoutPlanUpdate::status(WorkoutStatus::Active),
                at: at(18),
            },
            Action::UpdateWorkoutPlan {
                id: "p1".to_string(),
                update: WorkoutPlanUpdate {
                    status: Some(WorkoutStatus::Completed),
                    duration_minutes: Some(55),
                    ..Default::default()
                },
                at: at(19),
            },
        ]);
        let completed = &state.workout_plans[0];
        assert_eq!(completed.status, WorkoutStatus::Completed);
        assert_eq!(completed.completed_at, Some(at(19)));
        assert_eq!(completed.duration_minutes, Some(55));

        let persisted = state.to_persisted();
        assert_eq!(persisted.workout_plans[0].completed_at, Some(at(19)));
    }

    #[test]
    fn test_disallowed_status_change_is_dropped() {
        let state = apply_all(vec![
            Action::AddWorkoutPlan(plan("p1")),
            Action::UpdateWorkoutPlan {
                id: "p1".to_string(),
                update: WorkoutPlanUpdate {
                    name: Some("Legs (heavy)".to_string()),
                    status: Some(WorkoutStatus::Completed),
                    ..Default::default()
                },
                at: at(19),
            },
        ]);
        let kept = &state.workout_plans[0];
        assert_eq!(kept.status, WorkoutStatus::Scheduled);
        assert_eq!(kept.completed_at, None);
        assert_eq!(kept.name, "Legs (heavy)");
    }

    #[test]
    fn test_completed_plan_exercises_are_frozen() {
        let mut done = plan("p1");
        done.exercises.push(squat());
        done.status = WorkoutStatus::Completed;
        done.completed_at = Some(at(19));

        let state = apply_all(vec![
            Action::AddWorkoutPlan(done.clone()),
            Action::UpdateWorkoutPlan {
                id: "p1".to_string(),
                update: WorkoutPlanUpdate {
                    exercises: Some(vec![]),
                    duration_minutes: Some(40),
                    ..Default::default()
                },
                at: at(20),
            },
        ]);
        assert_eq!(state.workout_plans[0].exercises, done.exercises);
        assert_eq!(state.workout_plans[0].completed_at, Some(at(19)));
        assert_eq!(state.workout_plans[0].duration_minutes, Some(40));
    }

    #[test]
    fn test_bad_plate_weight_leaves_equipment_alone() {
        let state = apply_all(vec![
            Action::SetEquipment(EquipmentProfile::standard_gym(WeightUnit::Lbs)),
            Action::UpdatePlateCount {
                weight: -45.0,
                delta: 3,
            },
            Action::UpdatePlateCount {
                weight: f64::NAN,
                delta: 1,
            },
        ]);
        assert_eq!(
            state.equipment,
            Some(EquipmentProfile::standard_gym(WeightUnit::Lbs))
        );
    }

    #[test]
    fn test_blacklist_has_no_duplicates() {
        let state = apply_all(vec![
            Action::AddBlacklistedExercise("deadlift".to_string()),
            Action::AddBlacklistedExercise("deadlift".to_string()),
            Action::AddBlacklistedExercise("dips".to_string()),
            Action::RemoveBlacklistedExercise("deadlift".to_string()),
            Action::RemoveBlacklistedExercise("never-added".to_string()),
        ]);
        assert_eq!(state.settings.blacklisted_exercises, vec!["dips".to_string()]);
    }

    #[test]
    fn test_plate_count_requires_equipment() {
        let state = reduce(
            AppState::default(),
            Action::UpdatePlateCount {
                weight: 45.0,
                delta: 2,
            },
        );
        assert!(state.equipment.is_none());

        let state = apply_all(vec![
            Action::SetEquipment(EquipmentProfile::standard_gym(WeightUnit::Lbs)),
            Action::UpdatePlateCount {
                weight: 35.0,
                delta: -5,
            },
        ]);
        let plates = &state.equipment.unwrap().available_plates;
        assert_eq!(plates.count(35.0), 0);
        assert_eq!(plates.count(45.0), 4);
    }

    #[test]
    fn test_onboarding_flow() {
        let state = apply_all(vec![
            Action::UpdateOnboarding(crate::onboarding::OnboardingUpdate::step(4)),
            Action::CompleteOnboarding,
        ]);
        assert_eq!(state.onboarding.step, 4);
        assert!(state.onboarding.completed);

        let state = reduce(state, Action::ResetOnboarding);
        assert_eq!(state.onboarding, OnboardingData::default());
    }

    #[test]
    fn test_reset_store() {
        let state = apply_all(vec![
            Action::SetUser(user()),
            Action::AddCardioLog(cardio("c1")),
            Action::AddBlacklistedExercise("dips".to_string()),
            Action::ResetStore,
        ]);
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_persisted_roundtrip_drops_session() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 18, 0, 0).unwrap();
        let state = apply_all(vec![
            Action::SetUser(user()),
            Action::AddWorkoutPlan(plan("p1")),
            Action::StartWorkout {
                workout_id: "p1".to_string(),
                at,
            },
        ]);
        let restored = AppState::from_persisted(state.to_persisted());

        assert_eq!(restored.user, state.user);
        assert_eq!(restored.workout_plans, state.workout_plans);
        assert!(!restored.active_workout.is_active);
    }
}
