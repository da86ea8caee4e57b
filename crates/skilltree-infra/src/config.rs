//! Global configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.skilltree/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use skilltree_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Resolve the profile to operate on.
///
/// Priority:
/// 1. `--profile` flag
/// 2. `default_profile` from `config.toml`
pub fn resolve_profile(global_config: &GlobalConfig, flag: Option<&str>) -> String {
    flag.map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(global_config.default_profile.as_str())
        .to_string()
}

/// XP per level, floored at 1.
pub fn resolve_xp_per_level(global_config: &GlobalConfig) -> u32 {
    global_config.xp_per_level.max(1)
}

/// Absolute path of the custom catalog, if one is configured.
///
/// Relative paths are taken relative to the data directory.
pub fn resolve_catalog_path(data_dir: &Path, global_config: &GlobalConfig) -> Option<PathBuf> {
    global_config.catalog_path.as_ref().map(|path| {
        if path.is_absolute() {
            path.clone()
        } else {
            data_dir.join(path)
        }
    })
}
