//! Filesystem helpers: data directory layout and JSON file I/O.
//!
//! All operations go through `tokio::fs`. Writes land in a sibling temp file
//! that is renamed over the target, so a crash mid-write never leaves a
//! truncated snapshot behind.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use skilltree_types::error::RepositoryError;

/// Progress snapshots for every profile.
pub const PROGRESS_FILE: &str = "progress.json";

/// Saved workouts.
pub const WORKOUTS_FILE: &str = "workouts.json";

pub fn progress_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROGRESS_FILE)
}

pub fn workouts_path(data_dir: &Path) -> PathBuf {
    data_dir.join(WORKOUTS_FILE)
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SKILLTREE_DATA_DIR` environment variable
/// 2. `~/.skilltree`
/// 3. `./.skilltree`
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var("SKILLTREE_DATA_DIR").ok(), dirs::home_dir())
}

fn data_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".skilltree");
    }

    PathBuf::from(".skilltree")
}

/// Read and deserialize a JSON file. A missing file yields `T::default()`.
pub async fn read_json<T>(path: &Path) -> Result<T, RepositoryError>
where
    T: DeserializeOwned + Default,
{
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => return Err(RepositoryError::Io(format!("{}: {err}", path.display()))),
    };

    serde_json::from_str(&content)
        .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", path.display())))
}

/// Serialize `value` as pretty JSON and atomically replace `path`.
///
/// Parent directories are created as needed.
pub async fn write_json_atomic<T>(path: &Path, value: &T) -> Result<(), RepositoryError>
where
    T: Serialize + ?Sized,
{
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepositoryError::Io(format!("{}: {e}", parent.display())))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, content)
        .await
        .map_err(|e| RepositoryError::Io(format!("{}: {e}", tmp_path.display())))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| RepositoryError::Io(format!("{}: {e}", path.display())))?;

    tracing::trace!(path = %path.display(), "Wrote JSON file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let value: BTreeMap<String, u32> = read_json(&dir.path().join("none.json")).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");
        let mut value = BTreeMap::new();
        value.insert("push".to_string(), 9u32);

        write_json_atomic(&path, &value).await.unwrap();
        let read: BTreeMap<String, u32> = read_json(&path).await.unwrap();
        assert_eq!(read, value);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_read_corrupt_file_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = read_json::<BTreeMap<String, u32>>(&path).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn test_data_dir_priority() {
        assert_eq!(
            data_dir_from(Some("/tmp/trees".into()), Some(PathBuf::from("/home/u"))),
            PathBuf::from("/tmp/trees")
        );
        assert_eq!(
            data_dir_from(Some(String::new()), Some(PathBuf::from("/home/u"))),
            PathBuf::from("/home/u/.skilltree")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from(".skilltree"));
    }

    #[test]
    fn test_file_paths() {
        let data_dir = PathBuf::from("/home/user/.skilltree");
        assert_eq!(
            progress_path(&data_dir),
            PathBuf::from("/home/user/.skilltree/progress.json")
        );
        assert_eq!(
            workouts_path(&data_dir),
            PathBuf::from("/home/user/.skilltree/workouts.json")
        );
    }
}
