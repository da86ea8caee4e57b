//! Workout repository trait definition.

use skilltree_types::error::RepositoryError;
use skilltree_types::workout::{Workout, WorkoutId};

/// Storage for saved workouts.
pub trait WorkoutRepository: Send + Sync {
    fn create(
        &self,
        workout: &Workout,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All saved workouts, oldest first.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Workout>, RepositoryError>> + Send;

    fn get(
        &self,
        id: &WorkoutId,
    ) -> impl std::future::Future<Output = Result<Option<Workout>, RepositoryError>> + Send;

    /// Remove a workout. Returns whether it existed.
    fn delete(
        &self,
        id: &WorkoutId,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
