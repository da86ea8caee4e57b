//! Progress repository trait definition.

use skilltree_types::error::RepositoryError;
use skilltree_types::progress::ProgressState;

/// Storage for per-profile progress snapshots.
///
/// A profile is a local user name; each has exactly one snapshot.
pub trait ProgressRepository: Send + Sync {
    /// Load the snapshot for a profile. Returns None if none was ever saved.
    fn load(
        &self,
        profile: &str,
    ) -> impl std::future::Future<Output = Result<Option<ProgressState>, RepositoryError>> + Send;

    /// Store the snapshot for a profile, replacing any previous one.
    fn save(
        &self,
        profile: &str,
        progress: &ProgressState,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Names of every profile with a stored snapshot, sorted.
    fn list_profiles(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, RepositoryError>> + Send;

    /// Remove a profile's snapshot. Returns whether one existed.
    fn delete(
        &self,
        profile: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
