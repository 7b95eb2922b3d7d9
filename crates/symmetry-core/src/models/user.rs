//! User profile and derived nutrition targets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Training goal, drives the calorie adjustment in the macro calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Bulk,
    Cut,
    Maintain,
    Recomp,
}

/// The single user of an installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier, supplied by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Height in centimetres.
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Body weight in kilograms.
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    pub age: u32,
    pub gender: Gender,
    pub experience_level: ExperienceLevel,
    pub goal: Goal,
    /// Sessions per week (3 to 6).
    pub training_frequency: u8,
    /// Weekday names, e.g. `["Monday", "Wednesday"]`.
    pub training_days: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update for a [`User`]; only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "height")]
    pub height_cm: Option<f64>,
    #[serde(rename = "weight")]
    pub weight_kg: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub experience_level: Option<ExperienceLevel>,
    pub goal: Option<Goal>,
    pub training_frequency: Option<u8>,
    pub training_days: Option<Vec<String>>,
}

impl UserUpdate {
    /// Shallow-merge this update into `user`.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(height) = self.height_cm {
            user.height_cm = height;
        }
        if let Some(weight) = self.weight_kg {
            user.weight_kg = weight;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(level) = self.experience_level {
            user.experience_level = level;
        }
        if let Some(goal) = self.goal {
            user.goal = goal;
        }
        if let Some(frequency) = self.training_frequency {
            user.training_frequency = frequency;
        }
        if let Some(days) = self.training_days {
            user.training_days = days;
        }
    }

    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Daily macro targets. Recomputed wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Kilocalories.
    pub calories: u32,
    /// Grams.
    pub protein: u32,
    /// Grams.
    pub carbs: u32,
    /// Grams.
    pub fats: u32,
}

#[cfg(test)]
pub(crate) fn sample_user(id: &str) -> User {
    use chrono::TimeZone;

    User {
        id: id.to_string(),
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        height_cm: 180.0,
        weight_kg: 82.5,
        age: 29,
        gender: Gender::Male,
        experience_level: ExperienceLevel::Intermediate,
        goal: Goal::Recomp,
        training_frequency: 4,
        training_days: vec!["Monday".to_string(), "Thursday".to_string()],
        created_at: Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut user = sample_user("u1");
        let before = user.clone();

        UserUpdate {
            weight_kg: Some(80.0),
            goal: Some(Goal::Cut),
            ..Default::default()
        }
        .apply(&mut user);

        assert_eq!(user.weight_kg, 80.0);
        assert_eq!(user.goal, Goal::Cut);
        assert_eq!(user.name, before.name);
        assert_eq!(user.training_days, before.training_days);
        assert_eq!(user.created_at, before.created_at);
    }

    #[test]
    fn test_user_json_uses_stored_field_names() {
        let json = serde_json::to_value(sample_user("u1")).unwrap();
        assert_eq!(json["height"], 180.0);
        assert_eq!(json["weight"], 82.5);
        assert_eq!(json["experienceLevel"], "intermediate");
        assert_eq!(json["trainingFrequency"], 4);
    }

    #[test]
    fn test_empty_update() {
        assert!(UserUpdate::default().is_empty());
        let update = UserUpdate {
            age: Some(30),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
