//! Plate calculator.
//!
//! Loads are worked out greedily, heaviest plate first, in hundredths of a
//! unit so fractional plates (2.5, 1.25) never accumulate float error.

use serde::Serialize;

use crate::models::{EquipmentProfile, WeightUnit};

/// Standard kilogram plates, heaviest first.
pub const KG_PLATES: [f64; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

/// Standard pound plates, heaviest first.
pub const LBS_PLATES: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

impl WeightUnit {
    pub fn standard_plates(self) -> &'static [f64] {
        match self {
            WeightUnit::Kg => &KG_PLATES,
            WeightUnit::Lbs => &LBS_PLATES,
        }
    }

    /// Olympic bar weight in this unit.
    pub fn default_bar_weight(self) -> f64 {
        match self {
            WeightUnit::Kg => 20.0,
            WeightUnit::Lbs => 45.0,
        }
    }
}

/// Plates of one weight to put on each side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateLoad {
    pub weight: f64,
    pub count: u32,
}

/// Result of loading a bar from a limited inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateBreakdown {
    pub per_side: Vec<PlateLoad>,
    pub bar_weight: f64,
    /// Bar plus everything loaded on both sides.
    pub total: f64,
    /// Weight that could not be loaded with the plates available.
    pub shortfall: f64,
}

fn hundredths(weight: f64) -> u64 {
    (weight * 100.0).round() as u64
}

fn per_side_hundredths(target: f64, bar_weight: f64) -> u64 {
    let per_side = (target - bar_weight) / 2.0;
    if !per_side.is_finite() || per_side <= 0.0 {
        return 0;
    }
    (per_side * 100.0 + 1e-6).floor() as u64
}

fn load_greedy(mut remaining: u64, plates: impl Iterator<Item = (f64, Option<u32>)>) -> Vec<PlateLoad> {
    let mut loads = Vec::new();
    for (weight, limit) in plates {
        let plate = hundredths(weight);
        if plate == 0 {
            continue;
        }
        let mut count = remaining / plate;
        if let Some(limit) = limit {
            count = count.min(u64::from(limit));
        }
        if count > 0 {
            loads.push(PlateLoad {
                weight,
                count: count as u32,
            });
            remaining -= count * plate;
        }
    }
    loads
}

/// Per-side plates for `target` on a `bar_weight` bar, assuming unlimited
/// standard plates in `unit`.
///
/// A target at or below the bar weight needs no plates.
pub fn calculate_plates(target: f64, bar_weight: f64, unit: WeightUnit) -> Vec<PlateLoad> {
    let remaining = per_side_hundredths(target, bar_weight);
    load_greedy(
        remaining,
        unit.standard_plates().iter().map(|weight| (*weight, None)),
    )
}

/// Like [`calculate_plates`], but limited to the pairs in `profile`'s
/// inventory and its bar weight.
pub fn calculate_plates_with_inventory(target: f64, profile: &EquipmentProfile) -> PlateBreakdown {
    let remaining = per_side_hundredths(target, profile.bar_weight);
    let per_side = load_greedy(
        remaining,
        profile
            .available_plates
            .heaviest_first()
            .map(|(weight, pairs)| (weight, Some(pairs))),
    );

    let loaded: f64 = per_side.iter().map(|p| p.weight * f64::from(p.count)).sum();
    let total = profile.bar_weight + loaded * 2.0;
    PlateBreakdown {
        per_side,
        bar_weight: profile.bar_weight,
        total,
        shortfall: (target - total).max(0.0),
    }
}
