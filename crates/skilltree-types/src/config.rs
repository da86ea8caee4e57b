//! Global configuration types.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory. Every field has a default so an empty file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::DEFAULT_XP_PER_LEVEL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Profile used when `--profile` is not given.
    #[serde(default = "default_profile")]
    pub default_profile: String,

    /// Optional TOML skill catalog that replaces the built-in one.
    /// Relative paths are resolved against the data directory.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// XP needed per level.
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u32,
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_xp_per_level() -> u32 {
    DEFAULT_XP_PER_LEVEL
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            catalog_path: None,
            xp_per_level: default_xp_per_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.default_profile, "default");
        assert!(config.catalog_path.is_none());
        assert_eq!(config.xp_per_level, 10);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.default_profile, "default");
        assert_eq!(config.xp_per_level, 10);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
default_profile = "alex"
catalog_path = "catalog.toml"
xp_per_level = 25
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_profile, "alex");
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.toml")));
        assert_eq!(config.xp_per_level, 25);
    }
}
