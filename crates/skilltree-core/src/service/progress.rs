//! Progress tracking service.
//!
//! Wires the [`SkillGraph`] evaluator to a [`ProgressRepository`]: every
//! operation loads the profile's snapshot, runs the evaluator, and writes
//! the snapshot back when it changed. Load-commit-save cycles are serialized
//! so that two commits racing from the same process see each other's result.

use std::sync::Arc;

use tokio::sync::Mutex;

use skilltree_types::error::TrackerError;
use skilltree_types::level::LevelReport;
use skilltree_types::progress::ProgressState;
use skilltree_types::skill::{Category, CommitOutcome, UnlockAttempt};

use crate::level;
use crate::repository::progress::ProgressRepository;
use crate::skill::{Classification, SkillGraph};

pub struct ProgressService<R: ProgressRepository> {
    graph: Arc<SkillGraph>,
    repo: R,
    xp_per_level: u32,
    write_lock: Mutex<()>,
}

impl<R: ProgressRepository> ProgressService<R> {
    /// Create a new ProgressService.
    ///
    /// - `graph`: the validated skill catalog, shared with other consumers
    /// - `repo`: persistence for per-profile snapshots
    /// - `xp_per_level`: divisor for level computation (floored at 1)
    pub fn new(graph: Arc<SkillGraph>, repo: R, xp_per_level: u32) -> Self {
        Self {
            graph,
            repo,
            xp_per_level: xp_per_level.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn graph(&self) -> &SkillGraph {
        &self.graph
    }

    pub fn xp_per_level(&self) -> u32 {
        self.xp_per_level
    }

    /// Load a profile's progress.
    ///
    /// A profile with no snapshot starts empty. A snapshot that no longer
    /// matches the catalog (skills removed, hand-edited file) is repaired in
    /// memory; the repaired form is written back on the next change.
    pub async fn load_progress(&self, profile: &str) -> Result<ProgressState, TrackerError> {
        let Some(mut progress) = self.repo.load(profile).await? else {
            tracing::debug!(profile, "No saved progress, starting empty");
            return Ok(ProgressState::new());
        };

        if let Err(err) = self.graph.validate_progress(&progress) {
            tracing::warn!(profile, %err, "Saved progress does not match catalog, repairing");
            let dropped = self.graph.repair(&mut progress);
            tracing::debug!(profile, dropped, "Progress repaired");
        }

        Ok(progress)
    }

    /// Classification of a category for a profile.
    pub async fn classify(
        &self,
        profile: &str,
        category: Category,
    ) -> Result<Classification<'_>, TrackerError> {
        let progress = self.load_progress(profile).await?;
        Ok(self.graph.classify(category, &progress))
    }

    /// Validation phase of an unlock for a profile. Never writes.
    pub async fn attempt_unlock(
        &self,
        profile: &str,
        category: Category,
        skill_id: &str,
    ) -> Result<UnlockAttempt, TrackerError> {
        let progress = self.load_progress(profile).await?;
        Ok(self.graph.attempt_unlock(category, skill_id, &progress)?)
    }

    /// Commit phase of an unlock for a profile.
    ///
    /// Re-validates against the snapshot as it is now and saves only when
    /// the skill was actually unlocked.
    pub async fn commit_unlock(
        &self,
        profile: &str,
        category: Category,
        skill_id: &str,
    ) -> Result<CommitOutcome, TrackerError> {
        let _guard = self.write_lock.lock().await;

        let mut progress = self.load_progress(profile).await?;
        let outcome = self.graph.commit_unlock(category, skill_id, &mut progress)?;

        if outcome.is_applied() {
            self.repo.save(profile, &progress).await?;
        }
        Ok(outcome)
    }

    pub async fn reset_category(
        &self,
        profile: &str,
        category: Category,
    ) -> Result<ProgressState, TrackerError> {
        let _guard = self.write_lock.lock().await;

        let mut progress = self.load_progress(profile).await?;
        self.graph.reset_category(category, &mut progress);
        self.repo.save(profile, &progress).await?;
        Ok(progress)
    }

    pub async fn reset_all(&self, profile: &str) -> Result<ProgressState, TrackerError> {
        let _guard = self.write_lock.lock().await;

        let mut progress = self.load_progress(profile).await?;
        self.graph.reset_all(&mut progress);
        self.repo.save(profile, &progress).await?;
        Ok(progress)
    }

    /// Level breakdown for a profile.
    pub async fn levels(&self, profile: &str) -> Result<LevelReport, TrackerError> {
        let progress = self.load_progress(profile).await?;
        Ok(level::level_report(&progress, self.xp_per_level))
    }

    pub async fn profiles(&self) -> Result<Vec<String>, TrackerError> {
        Ok(self.repo.list_profiles().await?)
    }

    pub async fn delete_profile(&self, profile: &str) -> Result<bool, TrackerError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.repo.delete(profile).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use skilltree_types::error::{RepositoryError, SkillError};
    use skilltree_types::skill::UnlockStatus;

    /// In-memory repository that counts saves.
    #[derive(Default)]
    struct MemoryProgressRepo {
        snapshots: std::sync::Mutex<BTreeMap<String, ProgressState>>,
        saves: AtomicUsize,
    }

    impl ProgressRepository for MemoryProgressRepo {
        async fn load(&self, profile: &str) -> Result<Option<ProgressState>, RepositoryError> {
            Ok(self.snapshots.lock().unwrap().get(profile).cloned())
        }

        async fn save(&self, profile: &str, progress: &ProgressState) -> Result<(), RepositoryError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.snapshots
                .lock()
                .unwrap()
                .insert(profile.to_string(), progress.clone());
            Ok(())
        }

        async fn list_profiles(&self) -> Result<Vec<String>, RepositoryError> {
            Ok(self.snapshots.lock().unwrap().keys().cloned().collect())
        }

        async fn delete(&self, profile: &str) -> Result<bool, RepositoryError> {
            Ok(self.snapshots.lock().unwrap().remove(profile).is_some())
        }
    }

    fn service() -> ProgressService<MemoryProgressRepo> {
        ProgressService::new(
            Arc::new(SkillGraph::builtin().unwrap()),
            MemoryProgressRepo::default(),
            10,
        )
    }

    #[tokio::test]
    async fn test_missing_profile_starts_empty() {
        let service = service();
        let progress = service.load_progress("alex").await.unwrap();
        assert!(progress.is_empty());
    }

    #[tokio::test]
    async fn test_commit_persists_and_attempt_does_not() {
        let service = service();

        let attempt = service
            .attempt_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        assert_eq!(attempt, UnlockAttempt::ReadyToConfirm(Vec::new()));
        assert_eq!(service.repo.saves.load(Ordering::SeqCst), 0);

        let outcome = service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Unlocked { xp_awarded: 2 });

        let progress = service.load_progress("alex").await.unwrap();
        assert_eq!(progress.xp(Category::Pull), 2);
        assert_eq!(service.repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_noop_commit_does_not_save() {
        let service = service();
        service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        service
            .commit_unlock("alex", Category::Pull, "pullups")
            .await
            .unwrap();
        assert_eq!(service.repo.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_double_commit_awards_once() {
        let service = Arc::new(service());
        let a = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service.commit_unlock("alex", Category::Legs, "wallSit").await
            })
        };
        let b = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service.commit_unlock("alex", Category::Legs, "wallSit").await
            })
        };

        let outcomes = [a.await.unwrap().unwrap(), b.await.unwrap().unwrap()];
        assert_eq!(outcomes.iter().filter(|o| o.is_applied()).count(), 1);

        let progress = service.load_progress("alex").await.unwrap();
        assert_eq!(progress.unlocked(Category::Legs), ["wallSit"]);
        assert_eq!(progress.xp(Category::Legs), 2);
    }

    #[tokio::test]
    async fn test_profiles_are_independent() {
        let service = service();
        service
            .commit_unlock("alex", Category::Core, "deadBug")
            .await
            .unwrap();

        let sam = service.load_progress("sam").await.unwrap();
        assert!(sam.is_empty());
        assert_eq!(service.profiles().await.unwrap(), ["alex"]);
    }

    #[tokio::test]
    async fn test_reset_category_persists() {
        let service = service();
        service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        service
            .commit_unlock("alex", Category::Push, "kneePushups")
            .await
            .unwrap();

        let progress = service.reset_category("alex", Category::Pull).await.unwrap();
        assert_eq!(progress.xp(Category::Pull), 0);

        let reloaded = service.load_progress("alex").await.unwrap();
        assert!(reloaded.unlocked(Category::Pull).is_empty());
        assert_eq!(reloaded.unlocked(Category::Push), ["kneePushups"]);
    }

    #[tokio::test]
    async fn test_reset_all_persists() {
        let service = service();
        service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        service.reset_all("alex").await.unwrap();
        assert!(service.load_progress("alex").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_repaired_on_load() {
        let service = service();
        let mut bad = ProgressState::new();
        bad.record_unlock(Category::Pull, "scapularPulls", 2);
        bad.record_unlock(Category::Legs, "wallSit", 40);
        service.repo.save("alex", &bad).await.unwrap();

        let progress = service.load_progress("alex").await.unwrap();
        assert!(progress.unlocked(Category::Pull).is_empty());
        assert_eq!(progress.xp(Category::Legs), 2);
        assert!(service.graph().validate_progress(&progress).is_ok());
    }

    #[tokio::test]
    async fn test_classify_and_levels() {
        let service = service();
        for id in ["deadHang", "scapularPulls", "negativePullups", "pullups"] {
            service.commit_unlock("alex", Category::Pull, id).await.unwrap();
        }

        let classification = service.classify("alex", Category::Pull).await.unwrap();
        assert_eq!(classification.count(UnlockStatus::Unlocked), 4);
        assert_eq!(classification.get("archer"), Some(UnlockStatus::Eligible));
        assert_eq!(classification.get("explosivePullups"), Some(UnlockStatus::Eligible));
        assert_eq!(classification.get("muscleup"), Some(UnlockStatus::Locked));

        let report = service.levels("alex").await.unwrap();
        assert_eq!(report.overall.total_xp, 11);
        assert_eq!(report.overall.level, 1);
    }

    #[tokio::test]
    async fn test_unknown_skill_surfaces_error() {
        let service = service();
        let err = service
            .commit_unlock("alex", Category::Pull, "backLever")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Skill(SkillError::UnknownSkillId { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let service = service();
        service
            .commit_unlock("alex", Category::Pull, "deadHang")
            .await
            .unwrap();
        assert!(service.delete_profile("alex").await.unwrap());
        assert!(!service.delete_profile("alex").await.unwrap());
        assert!(service.profiles().await.unwrap().is_empty());
    }
}
