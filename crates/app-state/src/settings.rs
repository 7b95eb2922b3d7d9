//! User-facing application settings.

use serde::{Deserialize, Serialize};
use symmetry_core::WeightUnit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

/// Unit for body circumference measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    In,
    Cm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    #[default]
    Free,
    Pro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub workout_reminders: bool,
    pub rest_timer_sound: bool,
    pub progress_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            workout_reminders: true,
            rest_timer_sound: true,
            progress_updates: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub unit: WeightUnit,
    pub measurement_unit: MeasurementUnit,
    pub notifications: NotificationSettings,
    pub subscription: Subscription,
    /// Exercise ids the user never wants programmed.
    pub blacklisted_exercises: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            unit: WeightUnit::Lbs,
            measurement_unit: MeasurementUnit::In,
            notifications: NotificationSettings::default(),
            subscription: Subscription::Free,
            blacklisted_exercises: Vec::new(),
        }
    }
}

impl AppSettings {
    pub fn is_blacklisted(&self, exercise_id: &str) -> bool {
        self.blacklisted_exercises.iter().any(|id| id == exercise_id)
    }
}

/// Partial update for [`AppSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub unit: Option<WeightUnit>,
    pub measurement_unit: Option<MeasurementUnit>,
    pub notifications: Option<NotificationSettings>,
    pub subscription: Option<Subscription>,
    pub blacklisted_exercises: Option<Vec<String>>,
}

impl SettingsUpdate {
    pub fn apply(self, settings: &mut AppSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(unit) = self.unit {
            settings.unit = unit;
        }
        if let Some(unit) = self.measurement_unit {
            settings.measurement_unit = unit;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
        if let Some(subscription) = self.subscription {
            settings.subscription = subscription;
        }
        if let Some(ids) = self.blacklisted_exercises {
            settings.blacklisted_exercises = ids;
        }
    }
}
