//! Domain entities persisted by the data layer.
//!
//! Field names serialize in camelCase so stored collections stay readable by
//! every client that shares the store.

mod equipment;
mod progress;
mod user;
mod workout;

pub use equipment::{EquipmentProfile, EquipmentType, PlateInventory};
pub use progress::{
    BodyMeasurement, CardioLog, CardioType, Circumferences, Intensity, MuscleAnalysis,
    MuscleStatus, PhysiqueScan, Pose,
};
pub use user::{ExperienceLevel, Gender, Goal, NutritionTargets, User, UserUpdate};
pub use workout::{
    Exercise, MuscleGroup, SetLog, SetTag, WorkoutExercise, WorkoutPlan, WorkoutPlanUpdate,
    WorkoutStatus,
};

use serde::{Deserialize, Serialize};

/// Unit used for loads and body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl WeightUnit {
    /// Short label as stored ("lbs" or "kg").
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lbs" | "lb" => Ok(WeightUnit::Lbs),
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            other => Err(format!("unknown weight unit: {}", other)),
        }
    }
}
