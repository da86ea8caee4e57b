use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::skill::Category;

/// Unique identifier for a saved workout, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(pub Uuid);

impl WorkoutId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for WorkoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An exercise that can be added to a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: Category,
}

/// One logged set. `reps` is empty until the user fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSet {
    #[serde(default)]
    pub reps: Option<u32>,
}

/// An exercise entry inside a workout with its sets and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub notes: String,
    /// Whether a rest period follows this exercise.
    #[serde(default)]
    pub rest: bool,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Fresh entry for an exercise: no notes, rest off, one empty set.
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            category: exercise.category,
            notes: String::new(),
            rest: false,
            sets: vec![WorkoutSet::default()],
        }
    }

    /// Total reps across sets that have been filled in.
    pub fn total_reps(&self) -> u32 {
        self.sets
            .iter()
            .filter_map(|s| s.reps)
            .fold(0u32, u32::saturating_add)
    }
}

/// A named, saved workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
}
