//! Append-only progress logs: body measurements, physique scans, cardio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MuscleGroup, WeightUnit};

/// Optional circumference readings, in the user's measurement unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circumferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_arm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_arm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_thigh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_thigh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulders: Option<f64>,
}

/// Body weight snapshot. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurement {
    pub id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub unit: WeightUnit,
    #[serde(default)]
    pub measurements: Circumferences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pose {
    FrontDoubleBicep,
    BackDoubleBicep,
    SideChest,
    FrontRelaxed,
    BackRelaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleStatus {
    Strong,
    Balanced,
    Lagging,
}

/// Per-muscle result of a symmetry assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleAnalysis {
    pub muscle: MuscleGroup,
    pub status: MuscleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_score: Option<f64>,
    /// Percentage difference between left and right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// A timestamped symmetry assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiqueScan {
    pub id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub pose: Pose,
    pub symmetry_score: f64,
    #[serde(default)]
    pub muscle_analysis: Vec<MuscleAnalysis>,
    pub overall_assessment: String,
}

impl PhysiqueScan {
    /// Muscles flagged as lagging, in analysis order.
    pub fn lagging_muscles(&self) -> impl Iterator<Item = MuscleGroup> + '_ {
        self.muscle_analysis
            .iter()
            .filter(|a| a.status == MuscleStatus::Lagging)
            .map(|a| a.muscle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardioType {
    Running,
    Cycling,
    Walking,
    Swimming,
    Rowing,
    Stairs,
    Elliptical,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Hiit,
}

/// A cardio session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioLog {
    pub id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: CardioType,
    /// Minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
