//! Warm-up and deload helpers.

use serde::Serialize;

/// Warm-up ramp as fractions of the working weight.
pub const WARMUP_RAMP: [f64; 3] = [0.5, 0.7, 0.9];

/// Reps for every warm-up set.
pub const WARMUP_REPS: u32 = 8;

/// Fraction of the usual load lifted in a deload week.
pub const DELOAD_FACTOR: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarmupSet {
    pub weight: f64,
    pub reps: u32,
}

/// Three ramp-up sets leading into `working_weight`.
pub fn warmup_ramp(working_weight: f64) -> Vec<WarmupSet> {
    WARMUP_RAMP
        .iter()
        .map(|pct| WarmupSet {
            weight: (working_weight * pct).round(),
            reps: WARMUP_REPS,
        })
        .collect()
}

pub fn deload_weight(weight: f64) -> f64 {
    (weight * DELOAD_FACTOR).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_ramp() {
        let sets = warmup_ramp(200.0);
        let weights: Vec<f64> = sets.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![100.0, 140.0, 180.0]);
        assert!(sets.iter().all(|s| s.reps == 8));
    }

    #[test]
    fn test_deload() {
        assert_eq!(deload_weight(85.0), 51.0);
        assert_eq!(deload_weight(0.0), 0.0);
    }
}
