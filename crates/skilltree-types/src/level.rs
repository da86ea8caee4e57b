//! Level breakdown types.
//!
//! Levels are derived from XP and never stored. The computation lives in
//! `skilltree-core::level`.

use serde::{Deserialize, Serialize};

use crate::skill::Category;

/// XP needed per level unless overridden in `config.toml`.
pub const DEFAULT_XP_PER_LEVEL: u32 = 10;

/// Level standing for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub category: Category,
    pub xp: u32,
    pub level: u32,
    /// XP earned toward the next level (`xp % xp_per_level`).
    pub progress: u32,
}

/// Level across all categories combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallLevel {
    pub total_xp: u32,
    pub level: u32,
}

/// Full breakdown as shown on the levels screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    pub overall: OverallLevel,
    pub categories: Vec<LevelSummary>,
    pub xp_per_level: u32,
}
