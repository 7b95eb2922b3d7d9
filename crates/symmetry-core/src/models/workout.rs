//! Workout plans, their exercises and logged sets.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WeightUnit;
use crate::error::{DataError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
    Traps,
    Lats,
}

/// A movement from the exercise library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub target_muscle: MuscleGroup,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_muscles: Vec<MuscleGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub is_unilateral: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub equipment_required: Vec<String>,
}

/// Lifecycle of a workout plan.
///
/// Progresses scheduled -> active -> completed, or scheduled -> skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    Scheduled,
    Active,
    Completed,
    Skipped,
}

impl WorkoutStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutStatus::Scheduled => "scheduled",
            WorkoutStatus::Active => "active",
            WorkoutStatus::Completed => "completed",
            WorkoutStatus::Skipped => "skipped",
        }
    }

    /// Whether moving from `self` to `next` is allowed. Staying put always is.
    pub fn can_transition_to(self, next: WorkoutStatus) -> bool {
        use WorkoutStatus::*;

        matches!(
            (self, next),
            (Scheduled, Active) | (Scheduled, Skipped) | (Active, Completed)
        ) || self == next
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetTag {
    Failure,
    Dropset,
    Pause,
    SlowNegative,
    Cluster,
}

/// One logged (or planned) set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    pub id: String,
    pub set_number: u32,
    pub weight: f64,
    pub reps: u32,
    /// Rate of perceived exertion, 1-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
    pub is_warmup: bool,
    #[serde(default)]
    pub tags: Vec<SetTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_reps: Option<u32>,
    pub unit: WeightUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_rest_seconds: Option<u32>,
}

impl SetLog {
    /// An empty working set waiting to be filled in.
    pub fn planned(id: impl Into<String>, set_number: u32, unit: WeightUnit) -> Self {
        Self {
            id: id.into(),
            set_number,
            weight: 0.0,
            reps: 0,
            rpe: None,
            is_warmup: false,
            tags: Vec::new(),
            completed_at: None,
            previous_weight: None,
            previous_reps: None,
            unit,
            actual_rest_seconds: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Tags behave as a set: adding an existing tag is a no-op.
    pub fn add_tag(&mut self, tag: SetTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub exercise_id: String,
    pub exercise: Exercise,
    pub sets: Vec<SetLog>,
    pub target_sets: u32,
    /// Rep range as shown to the user, e.g. "8-12".
    pub target_reps: String,
    pub rest_seconds: u32,
    /// Adjacent exercises sharing an id are performed back to back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_id: Option<String>,
    pub order: u32,
}

/// A scheduled or completed training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub day_name: String,
    #[serde(default)]
    pub target_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    pub status: WorkoutStatus,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Session length in minutes.
    #[serde(default, rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl WorkoutPlan {
    fn transition(&mut self, next: WorkoutStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(DataError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn start(&mut self) -> Result<()> {
        self.transition(WorkoutStatus::Active)
    }

    pub fn skip(&mut self) -> Result<()> {
        self.transition(WorkoutStatus::Skipped)
    }

    /// Mark the plan completed at `at`, recording the session length.
    pub fn complete(&mut self, at: DateTime<Utc>, duration_minutes: Option<u32>) -> Result<()> {
        self.transition(WorkoutStatus::Completed)?;
        self.completed_at = Some(at);
        if duration_minutes.is_some() {
            self.duration_minutes = duration_minutes;
        }
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status == WorkoutStatus::Completed
    }

    fn set_mut(&mut self, exercise_id: &str, set_id: &str) -> Result<&mut SetLog> {
        if self.is_completed() {
            return Err(DataError::PlanCompleted {
                id: self.id.clone(),
            });
        }
        let exercise = self
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| DataError::not_found("WorkoutExercise", exercise_id))?;
        exercise
            .sets
            .iter_mut()
            .find(|s| s.id == set_id)
            .ok_or_else(|| DataError::not_found("SetLog", set_id))
    }

    /// Record weight and reps for a set.
    pub fn log_set(&mut self, exercise_id: &str, set_id: &str, weight: f64, reps: u32) -> Result<()> {
        let set = self.set_mut(exercise_id, set_id)?;
        set.weight = weight;
        set.reps = reps;
        Ok(())
    }

    /// Mark a set done at `at`.
    pub fn complete_set(&mut self, exercise_id: &str, set_id: &str, at: DateTime<Utc>) -> Result<()> {
        let set = self.set_mut(exercise_id, set_id)?;
        set.completed_at = Some(at);
        Ok(())
    }

    /// Exercise indices grouped by superset.
    ///
    /// Only adjacent exercises sharing a `superset_id` end up in one group;
    /// everything else forms a group of one.
    pub fn superset_groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut previous: Option<&str> = None;

        for (idx, exercise) in self.exercises.iter().enumerate() {
            let current = exercise.superset_id.as_deref();
            let joins = matches!((previous, current), (Some(prev), Some(cur)) if prev == cur);
            match groups.last_mut() {
                Some(group) if joins => group.push(idx),
                _ => groups.push(vec![idx]),
            }
            previous = current;
        }

        groups
    }

    /// Rest to take after finishing the exercise at `index`.
    ///
    /// Zero while moving inside a superset; the exercise's own rest at the
    /// end of its group. Out-of-range indices rest zero.
    pub fn rest_after(&self, index: usize) -> u32 {
        let Some(exercise) = self.exercises.get(index) else {
            return 0;
        };
        let next_in_superset = match (&exercise.superset_id, self.exercises.get(index + 1)) {
            (Some(id), Some(next)) => next.superset_id.as_deref() == Some(id.as_str()),
            _ => false,
        };
        if next_in_superset {
            0
        } else {
            exercise.rest_seconds
        }
    }

    pub fn completed_set_count(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.is_completed())
            .count()
    }
}

/// Partial update for a [`WorkoutPlan`]; only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutPlanUpdate {
    pub name: Option<String>,
    pub day_name: Option<String>,
    pub target_muscles: Option<Vec<MuscleGroup>>,
    pub exercises: Option<Vec<WorkoutExercise>>,
    pub status: Option<WorkoutStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
}

impl WorkoutPlanUpdate {
    pub fn status(status: WorkoutStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Shallow-merge this update into `plan` without any lifecycle checks.
    pub fn apply(self, plan: &mut WorkoutPlan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(day_name) = self.day_name {
            plan.day_name = day_name;
        }
        if let Some(muscles) = self.target_muscles {
            plan.target_muscles = muscles;
        }
        if let Some(exercises) = self.exercises {
            plan.exercises = exercises;
        }
        if let Some(status) = self.status {
            plan.status = status;
        }
        if let Some(date) = self.scheduled_date {
            plan.scheduled_date = date;
        }
        if let Some(at) = self.completed_at {
            plan.completed_at = Some(at);
        }
        if let Some(minutes) = self.duration_minutes {
            plan.duration_minutes = Some(minutes);
        }
    }

    /// Merge into `plan` while enforcing the workout lifecycle.
    ///
    /// Status changes must follow [`WorkoutStatus::can_transition_to`], a
    /// plan moving to completed is stamped with `now` unless the update
    /// carries its own `completed_at`, and exercises of an already completed
    /// plan are frozen.
    pub fn apply_checked(self, plan: &mut WorkoutPlan, now: DateTime<Utc>) -> Result<()> {
        if plan.is_completed() && self.exercises.is_some() {
            return Err(DataError::PlanCompleted {
                id: plan.id.clone(),
            });
        }
        if let Some(next) = self.status {
            if !plan.status.can_transition_to(next) {
                return Err(DataError::InvalidTransition {
                    from: plan.status,
                    to: next,
                });
            }
        }

        self.apply(plan);
        if plan.is_completed() && plan.completed_at.is_none() {
            plan.completed_at = Some(now);
        }
        Ok(())
    }
}
