//! Training environment and plate inventory.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::WeightUnit;
use crate::error::DataError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Gym,
    Home,
}

/// Where the user trains and what they can load onto a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentProfile {
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    /// Bar weight in `unit`.
    pub bar_weight: f64,
    pub unit: WeightUnit,
    pub available_plates: PlateInventory,
}

impl EquipmentProfile {
    /// A commercial gym profile with the usual plate set for `unit`.
    pub fn standard_gym(unit: WeightUnit) -> Self {
        let available_plates = match unit {
            WeightUnit::Lbs => PlateInventory::from_pairs([
                (45.0, 4),
                (35.0, 2),
                (25.0, 4),
                (10.0, 4),
                (5.0, 4),
                (2.5, 2),
            ]),
            WeightUnit::Kg => PlateInventory::from_pairs([
                (25.0, 4),
                (20.0, 4),
                (15.0, 2),
                (10.0, 4),
                (5.0, 4),
                (2.5, 2),
                (1.25, 2),
            ]),
        };
        Self {
            kind: EquipmentType::Gym,
            bar_weight: unit.default_bar_weight(),
            unit,
            available_plates,
        }
    }
}

/// Plate weight to number of pairs available.
///
/// Weights are kept at hundredth precision so that `2.5` and `1.25` compare
/// exactly. Counts never go below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateInventory {
    pairs: BTreeMap<u32, u32>,
}

fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && to_key(weight) > 0
}

fn to_key(weight: f64) -> u32 {
    (weight * 100.0).round() as u32
}

fn from_key(key: u32) -> f64 {
    f64::from(key) / 100.0
}

impl PlateInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from `(weight, pairs)` entries.
    ///
    /// Entries whose weight is not a positive, finite number are skipped.
    pub fn from_pairs(entries: impl IntoIterator<Item = (f64, u32)>) -> Self {
        let pairs = entries
            .into_iter()
            .filter(|(weight, _)| is_valid_weight(*weight))
            .map(|(weight, count)| (to_key(weight), count))
            .collect();
        Self { pairs }
    }

    /// Pairs available at `weight` (zero when unknown).
    pub fn count(&self, weight: f64) -> u32 {
        self.pairs.get(&to_key(weight)).copied().unwrap_or(0)
    }

    pub fn set(&mut self, weight: f64, count: u32) -> crate::Result<()> {
        if !is_valid_weight(weight) {
            return Err(DataError::InvalidPlateWeight(weight));
        }
        self.pairs.insert(to_key(weight), count);
        Ok(())
    }

    /// Add `delta` pairs at `weight`, clamping at zero. Returns the new count.
    pub fn adjust(&mut self, weight: f64, delta: i64) -> crate::Result<u32> {
        let current = i64::from(self.count(weight));
        let next = (current + delta).clamp(0, i64::from(u32::MAX)) as u32;
        self.set(weight, next)?;
        Ok(next)
    }

    /// Entries ordered from the heaviest plate down.
    pub fn heaviest_first(&self) -> impl Iterator<Item = (f64, u32)> + '_ {
        self.pairs.iter().rev().map(|(k, v)| (from_key(*k), *v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Serialize for PlateInventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, count) in &self.pairs {
            map.serialize_entry(&from_key(*key).to_string(), count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlateInventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut inventory = PlateInventory::new();
        for (weight, count) in raw {
            let parsed: f64 = weight
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(InvalidWeight(weight.clone())))?;
            inventory
                .set(parsed, count)
                .map_err(|_| de::Error::custom(InvalidWeight(weight)))?;
        }
        Ok(inventory)
    }
}

struct InvalidWeight(String);

impl fmt::Display for InvalidWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid plate weight key: {:?}", self.0)
    }
}
