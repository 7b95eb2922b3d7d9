//! Macro calculator based on the Mifflin-St Jeor equation.

use serde::{Deserialize, Serialize};

use crate::models::{Gender, Goal, NutritionTargets};

const KG_PER_LB: f64 = 0.453592;
const CM_PER_IN: f64 = 2.54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Calculator inputs, in imperial units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroInput {
    pub age: u32,
    pub gender: Gender,
    pub weight_lbs: f64,
    pub height_in: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroCalculation {
    pub bmr: u32,
    pub tdee: u32,
    pub targets: NutritionTargets,
    pub activity_level: ActivityLevel,
}

fn whole(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

/// Work out daily targets.
///
/// Cutting removes 500 kcal from maintenance and bulking adds 300. Protein
/// is one gram per pound of body weight, fats a quarter of calories, carbs
/// whatever is left. Everything is rounded to whole units at the end.
pub fn calculate_macros(input: &MacroInput) -> MacroCalculation {
    let base = 10.0 * input.weight_lbs * KG_PER_LB + 6.25 * input.height_in * CM_PER_IN
        - 5.0 * f64::from(input.age);
    let bmr = match input.gender {
        Gender::Male => base + 5.0,
        _ => base - 161.0,
    };

    let tdee = bmr * input.activity.multiplier();
    let calories = match input.goal {
        Goal::Cut => tdee - 500.0,
        Goal::Bulk => tdee + 300.0,
        Goal::Maintain | Goal::Recomp => tdee,
    };

    let protein = input.weight_lbs;
    let fats = calories * 0.25 / 9.0;
    let carbs = (calories - protein * 4.0 - fats * 9.0) / 4.0;

    MacroCalculation {
        bmr: whole(bmr),
        tdee: whole(tdee),
        targets: NutritionTargets {
            calories: whole(calories),
            protein: whole(protein),
            carbs: whole(carbs),
            fats: whole(fats),
        },
        activity_level: input.activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_maintenance() {
        let result = calculate_macros(&MacroInput {
            age: 30,
            gender: Gender::Male,
            weight_lbs: 180.0,
            height_in: 70.0,
            activity: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        });

        assert_eq!(result.bmr, 1783);
        assert_eq!(result.tdee, 2763);
        assert_eq!(
            result.targets,
            NutritionTargets {
                calories: 2763,
                protein: 180,
                carbs: 338,
                fats: 77,
            }
        );
    }

    #[test]
    fn test_female_cut() {
        let result = calculate_macros(&MacroInput {
            age: 25,
            gender: Gender::Female,
            weight_lbs: 140.0,
            height_in: 65.0,
            activity: ActivityLevel::Light,
            goal: Goal::Cut,
        });

        assert_eq!(result.bmr, 1381);
        assert_eq!(result.tdee, 1899);
        assert_eq!(result.targets.calories, 1399);
        assert_eq!(result.targets.protein, 140);
        assert_eq!(result.targets.fats, 39);
        assert_eq!(result.targets.carbs, 122);
    }

    #[test]
    fn test_bulk_adds_surplus() {
        let input = MacroInput {
            age: 30,
            gender: Gender::Male,
            weight_lbs: 180.0,
            height_in: 70.0,
            activity: ActivityLevel::Moderate,
            goal: Goal::Bulk,
        };
        let result = calculate_macros(&input);
        assert_eq!(result.targets.calories, 3063);
    }

    #[test]
    fn test_activity_serializes_camel_case() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"veryActive\"");
    }
}
