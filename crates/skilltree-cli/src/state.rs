//! Application state wiring all services together.
//!
//! Services are generic over repository traits; AppState pins them to the
//! JSON file stores in `skilltree-infra`.

use std::path::PathBuf;
use std::sync::Arc;

use skilltree_core::service::progress::ProgressService;
use skilltree_core::service::workout::WorkoutService;
use skilltree_infra::catalog::load_skill_graph;
use skilltree_infra::config::{
    load_global_config, resolve_catalog_path, resolve_profile, resolve_xp_per_level,
};
use skilltree_infra::filesystem::resolve_data_dir;
use skilltree_infra::store::{JsonProgressStore, JsonWorkoutStore};
use skilltree_types::config::GlobalConfig;

pub type ConcreteProgressService = ProgressService<JsonProgressStore>;

pub type ConcreteWorkoutService = WorkoutService<JsonWorkoutStore>;

/// Shared application state holding all services.
pub struct AppState {
    pub progress_service: Arc<ConcreteProgressService>,
    pub workout_service: Arc<ConcreteWorkoutService>,
    pub config: GlobalConfig,
    /// Profile selected by `--profile` or `default_profile`.
    pub profile: String,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config and catalog, wire services.
    pub async fn init(profile_flag: Option<&str>) -> anyhow::Result<Self> {
        Self::init_at(resolve_data_dir(), profile_flag).await
    }

    /// Same as [`AppState::init`] with an explicit data directory.
    pub async fn init_at(data_dir: PathBuf, profile_flag: Option<&str>) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let profile = resolve_profile(&config, profile_flag);

        let catalog_path = resolve_catalog_path(&data_dir, &config);
        let graph = load_skill_graph(catalog_path.as_deref()).await?;

        let progress_service = ProgressService::new(
            Arc::new(graph),
            JsonProgressStore::new(&data_dir),
            resolve_xp_per_level(&config),
        );
        let workout_service = WorkoutService::new(JsonWorkoutStore::new(&data_dir));

        tracing::debug!(
            data_dir = %data_dir.display(),
            profile = %profile,
            "Application state initialized"
        );

        Ok(Self {
            progress_service: Arc::new(progress_service),
            workout_service: Arc::new(workout_service),
            config,
            profile,
            data_dir,
        })
    }
}
