//! Every state transition the application can request.

use chrono::{DateTime, Utc};
use symmetry_core::{
    BodyMeasurement, CardioLog, EquipmentProfile, NutritionTargets, PhysiqueScan, User,
    UserUpdate, WorkoutPlan, WorkoutPlanUpdate,
};

use crate::onboarding::OnboardingUpdate;
use crate::settings::SettingsUpdate;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User
    SetUser(User),
    /// Ignored when no user is set.
    UpdateUser(UserUpdate),
    SetNutritionTargets(NutritionTargets),
    SetEquipment(EquipmentProfile),
    /// Ignored when no equipment is set.
    UpdatePlateCount { weight: f64, delta: i64 },

    // Workout
    SetWorkoutPlans(Vec<WorkoutPlan>),
    AddWorkoutPlan(WorkoutPlan),
    /// `at` stamps `completed_at` when the plan moves to completed without one.
    UpdateWorkoutPlan {
        id: String,
        update: WorkoutPlanUpdate,
        at: DateTime<Utc>,
    },
    StartWorkout { workout_id: String, at: DateTime<Utc> },
    EndWorkout,
    ToggleWarmupMode,
    ToggleDeloadMode,
    SetCurrentExercise(usize),
    StartRestTimer { seconds: u32 },
    UpdateRestTimer { elapsed: u32 },
    TickRestTimer,
    StopRestTimer,

    // Progress
    AddBodyMeasurement(BodyMeasurement),
    AddPhysiqueScan(PhysiqueScan),
    AddCardioLog(CardioLog),

    // Settings
    UpdateSettings(SettingsUpdate),
    AddBlacklistedExercise(String),
    RemoveBlacklistedExercise(String),

    // Onboarding
    UpdateOnboarding(OnboardingUpdate),
    CompleteOnboarding,
    ResetOnboarding,

    ResetStore,
}

impl Action {
    /// Whether the action can change the persisted part of the state.
    pub fn touches_persisted(&self) -> bool {
        !matches!(
            self,
            Action::StartWorkout { .. }
                | Action::EndWorkout
                | Action::ToggleWarmupMode
                | Action::ToggleDeloadMode
                | Action::SetCurrentExercise(_)
                | Action::StartRestTimer { .. }
                | Action::UpdateRestTimer { .. }
                | Action::TickRestTimer
                | Action::StopRestTimer
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetUser(_) => "setUser",
            Action::UpdateUser(_) => "updateUser",
            Action::SetNutritionTargets(_) => "setNutritionTargets",
            Action::SetEquipment(_) => "setEquipment",
            Action::UpdatePlateCount { .. } => "updatePlateCount",
            Action::SetWorkoutPlans(_) => "setWorkoutPlans",
            Action::AddWorkoutPlan(_) => "addWorkoutPlan",
            Action::UpdateWorkoutPlan { .. } => "updateWorkoutPlan",
            Action::StartWorkout { .. } => "startWorkout",
            Action::EndWorkout => "endWorkout",
            Action::ToggleWarmupMode => "toggleWarmupMode",
            Action::ToggleDeloadMode => "toggleDeloadMode",
            Action::SetCurrentExercise(_) => "setCurrentExercise",
            Action::StartRestTimer { .. } => "startRestTimer",
            Action::UpdateRestTimer { .. } => "updateRestTimer",
            Action::TickRestTimer => "tickRestTimer",
            Action::StopRestTimer => "stopRestTimer",
            Action::AddBodyMeasurement(_) => "addBodyMeasurement",
            Action::AddPhysiqueScan(_) => "addPhysiqueScan",
            Action::AddCardioLog(_) => "addCardioLog",
            Action::UpdateSettings(_) => "updateSettings",
            Action::AddBlacklistedExercise(_) => "addBlacklistedExercise",
            Action::RemoveBlacklistedExercise(_) => "removeBlacklistedExercise",
            Action::UpdateOnboarding(_) => "updateOnboarding",
            Action::CompleteOnboarding => "completeOnboarding",
            Action::ResetOnboarding => "resetOnboarding",
            Action::ResetStore => "resetStore",
        }
    }
}
