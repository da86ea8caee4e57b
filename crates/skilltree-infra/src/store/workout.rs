//! JSON workout store.
//!
//! Implements `WorkoutRepository` over `workouts.json`, a list of saved
//! workouts in creation order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use skilltree_core::repository::workout::WorkoutRepository;
use skilltree_types::error::RepositoryError;
use skilltree_types::workout::{Workout, WorkoutId};

use crate::filesystem::{read_json, workouts_path, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct WorkoutFile {
    #[serde(default)]
    workouts: Vec<Workout>,
}

/// File-backed implementation of `WorkoutRepository`.
pub struct JsonWorkoutStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonWorkoutStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: workouts_path(data_dir),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkoutRepository for JsonWorkoutStore {
    async fn create(&self, workout: &Workout) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut file: WorkoutFile = read_json(&self.path).await?;
        file.workouts.push(workout.clone());
        write_json_atomic(&self.path, &file).await?;
        tracing::debug!(workout_id = %workout.id, name = %workout.name, "Saved workout");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Workout>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let file: WorkoutFile = read_json(&self.path).await?;
        Ok(file.workouts)
    }

    async fn get(&self, id: &WorkoutId) -> Result<Option<Workout>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let file: WorkoutFile = read_json(&self.path).await?;
        Ok(file.workouts.into_iter().find(|w| w.id == *id))
    }

    async fn delete(&self, id: &WorkoutId) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut file: WorkoutFile = read_json(&self.path).await?;
        let before = file.workouts.len();
        file.workouts.retain(|w| w.id != *id);
        if file.workouts.len() == before {
            return Ok(false);
        }
        write_json_atomic(&self.path, &file).await?;
        tracing::debug!(workout_id = %id, "Deleted workout");
        Ok(true)
    }
}
