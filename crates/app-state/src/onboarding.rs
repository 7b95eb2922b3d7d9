//! Onboarding progress collected before a user exists.

use serde::{Deserialize, Serialize};
use symmetry_core::{EquipmentProfile, ExperienceLevel, Gender, Goal};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub level: ExperienceLevel,
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Sessions per week, 3 to 6.
    pub frequency: u8,
    pub days: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub biometric_privacy: bool,
    pub age_verification: bool,
    pub terms_accepted: bool,
}

impl Consent {
    pub fn is_complete(&self) -> bool {
        self.biometric_privacy && self.age_verification && self.terms_accepted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingData {
    /// 1-based wizard step.
    pub step: u32,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometrics: Option<Biometrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<EquipmentProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<Consent>,
}

impl Default for OnboardingData {
    fn default() -> Self {
        Self {
            step: 1,
            completed: false,
            biometrics: None,
            experience: None,
            equipment: None,
            schedule: None,
            consent: None,
        }
    }
}

/// Partial update for [`OnboardingData`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingUpdate {
    pub step: Option<u32>,
    pub completed: Option<bool>,
    pub biometrics: Option<Biometrics>,
    pub experience: Option<Experience>,
    pub equipment: Option<EquipmentProfile>,
    pub schedule: Option<Schedule>,
    pub consent: Option<Consent>,
}

impl OnboardingUpdate {
    pub fn step(step: u32) -> Self {
        Self {
            step: Some(step),
            ..Default::default()
        }
    }

    pub fn apply(self, data: &mut OnboardingData) {
        if let Some(step) = self.step {
            data.step = step;
        }
        if let Some(completed) = self.completed {
            data.completed = completed;
        }
        if self.biometrics.is_some() {
            data.biometrics = self.biometrics;
        }
        if self.experience.is_some() {
            data.experience = self.experience;
        }
        if self.equipment.is_some() {
            data.equipment = self.equipment;
        }
        if self.schedule.is_some() {
            data.schedule = self.schedule;
        }
        if self.consent.is_some() {
            data.consent = self.consent;
        }
    }
}
