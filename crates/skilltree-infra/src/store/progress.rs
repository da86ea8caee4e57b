//! JSON progress store.
//!
//! Implements `ProgressRepository` from `skilltree-core` over a single
//! `progress.json` holding every profile's snapshot:
//!
//! ```json
//! { "profiles": { "default": { "unlocked_skills": { ... }, "xp": { ... } } } }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use skilltree_core::repository::progress::ProgressRepository;
use skilltree_types::error::RepositoryError;
use skilltree_types::progress::ProgressState;

use crate::filesystem::{progress_path, read_json, write_json_atomic};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    profiles: BTreeMap<String, ProgressState>,
}

/// File-backed implementation of `ProgressRepository`.
pub struct JsonProgressStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonProgressStore {
    /// Store rooted at `{data_dir}/progress.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self::at_path(progress_path(data_dir))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressRepository for JsonProgressStore {
    async fn load(&self, profile: &str) -> Result<Option<ProgressState>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut file: ProgressFile = read_json(&self.path).await?;
        Ok(file.profiles.remove(profile))
    }

    async fn save(&self, profile: &str, progress: &ProgressState) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut file: ProgressFile = read_json(&self.path).await?;
        file.profiles.insert(profile.to_string(), progress.clone());
        write_json_atomic(&self.path, &file).await?;
        tracing::debug!(profile, "Saved progress snapshot");
        Ok(())
    }

    async fn list_profiles(&self) -> Result<Vec<String>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let file: ProgressFile = read_json(&self.path).await?;
        Ok(file.profiles.into_keys().collect())
    }

    async fn delete(&self, profile: &str) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut file: ProgressFile = read_json(&self.path).await?;
        if file.profiles.remove(profile).is_none() {
            return Ok(false);
        }
        write_json_atomic(&self.path, &file).await?;
        tracing::debug!(profile, "Deleted progress snapshot");
        Ok(true)
    }
}
