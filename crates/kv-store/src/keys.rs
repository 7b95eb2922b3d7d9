//! Fixed storage keys, one per entity collection.

pub const WORKOUT_PLANS: &str = "workout_plans";
pub const BODY_MEASUREMENTS: &str = "body_measurements";
pub const PHYSIQUE_SCANS: &str = "physique_scans";
pub const CARDIO_LOGS: &str = "cardio_logs";
pub const USER: &str = "user";
pub const NUTRITION_TARGETS: &str = "nutrition_targets";
pub const EQUIPMENT: &str = "equipment";

/// Versioned snapshot of the application state store.
pub const APP_STATE: &str = "symmetry-storage";
