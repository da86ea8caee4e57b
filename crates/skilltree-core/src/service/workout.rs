//! Saved workout service.
//!
//! Validates and stores named workouts composed from the exercise list.

use skilltree_types::error::{RepositoryError, WorkoutError};
use skilltree_types::workout::{Workout, WorkoutExercise, WorkoutId};

use crate::repository::workout::WorkoutRepository;

pub struct WorkoutService<W: WorkoutRepository> {
    repo: W,
}

impl<W: WorkoutRepository> WorkoutService<W> {
    pub fn new(repo: W) -> Self {
        Self { repo }
    }

    /// Save a workout under a name.
    ///
    /// The name is trimmed and must not be empty.
    pub async fn save_workout(
        &self,
        name: &str,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Workout, WorkoutError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkoutError::InvalidName("name cannot be empty".to_string()));
        }

        let workout = Workout {
            id: WorkoutId::new(),
            name: name.to_string(),
            exercises,
            created_at: chrono::Utc::now(),
        };

        self.repo.create(&workout).await.map_err(storage_error)?;
        tracing::info!(id = %workout.id, name = %workout.name, "Workout saved");
        Ok(workout)
    }

    pub async fn list_workouts(&self) -> Result<Vec<Workout>, WorkoutError> {
        self.repo.list().await.map_err(storage_error)
    }

    pub async fn get_workout(&self, id: &WorkoutId) -> Result<Workout, WorkoutError> {
        self.repo
            .get(id)
            .await
            .map_err(storage_error)?
            .ok_or(WorkoutError::NotFound)
    }

    pub async fn delete_workout(&self, id: &WorkoutId) -> Result<(), WorkoutError> {
        if self.repo.delete(id).await.map_err(storage_error)? {
            tracing::info!(%id, "Workout deleted");
            Ok(())
        } else {
            Err(WorkoutError::NotFound)
        }
    }
}

fn storage_error(err: RepositoryError) -> WorkoutError {
    WorkoutError::StorageError(err.to_string())
}
