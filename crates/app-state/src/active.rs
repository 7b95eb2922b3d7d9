//! Ephemeral state of the workout in progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default rest between sets.
pub const DEFAULT_REST_SECONDS: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestTimer {
    pub is_running: bool,
    pub target_seconds: u32,
    pub elapsed_seconds: u32,
}

impl Default for RestTimer {
    fn default() -> Self {
        Self {
            is_running: false,
            target_seconds: DEFAULT_REST_SECONDS,
            elapsed_seconds: 0,
        }
    }
}

impl RestTimer {
    /// Restart counting from zero towards `target_seconds`.
    ///
    /// A zero target is already finished, so the timer stays stopped.
    pub fn start(&mut self, target_seconds: u32) {
        *self = Self {
            is_running: target_seconds > 0,
            target_seconds,
            elapsed_seconds: 0,
        };
    }

    /// Pause without resetting the elapsed count.
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Advance one second. Stops on reaching the target.
    ///
    /// Returns whether the timer is still running afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        if self.elapsed_seconds >= self.target_seconds {
            self.is_running = false;
        }
        self.is_running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.target_seconds.saturating_sub(self.elapsed_seconds)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_seconds >= self.target_seconds
    }
}

/// The session currently on screen. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveWorkoutState {
    pub is_active: bool,
    pub workout_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub current_exercise_index: usize,
    pub warmup_mode: bool,
    pub deload_mode: bool,
    pub rest_timer: RestTimer,
}

impl ActiveWorkoutState {
    /// A fresh session for `workout_id` starting at `at`.
    pub fn started(workout_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            is_active: true,
            workout_id: Some(workout_id.into()),
            start_time: Some(at),
            ..Default::default()
        }
    }
}
