//! Level computation.
//!
//! A level is `xp / xp_per_level`, per category and over the summed XP of
//! all categories. Progress toward the next level is the remainder.

use skilltree_types::level::{LevelReport, LevelSummary, OverallLevel};
use skilltree_types::progress::ProgressState;
use skilltree_types::skill::Category;

/// Level reached with `xp` points. A zero divisor is treated as 1.
pub fn level_for(xp: u32, xp_per_level: u32) -> u32 {
    xp / xp_per_level.max(1)
}

pub fn category_level(progress: &ProgressState, category: Category, xp_per_level: u32) -> LevelSummary {
    let xp = progress.xp(category);
    LevelSummary {
        category,
        xp,
        level: level_for(xp, xp_per_level),
        progress: xp % xp_per_level.max(1),
    }
}

pub fn overall_level(progress: &ProgressState, xp_per_level: u32) -> OverallLevel {
    let total_xp = progress.total_xp();
    OverallLevel {
        total_xp,
        level: level_for(total_xp, xp_per_level),
    }
}

/// Overall level plus one summary per category, in display order.
pub fn level_report(progress: &ProgressState, xp_per_level: u32) -> LevelReport {
    LevelReport {
        overall: overall_level(progress, xp_per_level),
        categories: Category::ALL
            .iter()
            .map(|c| category_level(progress, *c, xp_per_level))
            .collect(),
        xp_per_level: xp_per_level.max(1),
    }
}
