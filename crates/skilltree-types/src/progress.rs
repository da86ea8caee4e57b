//! Per-user progress snapshot.
//!
//! `ProgressState` is a plain owned value: the evaluator in `skilltree-core`
//! mutates it through `&mut` and the infra layer persists it as JSON. The
//! mutators here keep the unlocked set and the XP counter in step so that
//! `xp[c]` always equals the XP of the skills unlocked in `c`, provided
//! callers pass the catalog's XP value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::skill::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Unlocked ids per category, oldest first.
    #[serde(default)]
    unlocked_skills: BTreeMap<Category, Vec<String>>,
    #[serde(default)]
    xp: BTreeMap<Category, u32>,
}

impl ProgressState {
    /// An empty progress: nothing unlocked, zero XP everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlocked ids for a category in unlock order.
    pub fn unlocked(&self, category: Category) -> &[String] {
        self.unlocked_skills
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_unlocked(&self, category: Category, skill_id: &str) -> bool {
        self.unlocked(category).iter().any(|id| id == skill_id)
    }

    pub fn xp(&self, category: Category) -> u32 {
        self.xp.get(&category).copied().unwrap_or(0)
    }

    /// XP summed over all categories, saturating at `u32::MAX`.
    pub fn total_xp(&self) -> u32 {
        Category::ALL
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(self.xp(*c)))
    }

    /// Total number of unlocked skills across all categories.
    pub fn unlocked_count(&self) -> usize {
        self.unlocked_skills.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked_count() == 0 && self.total_xp() == 0
    }

    /// Record a first-time unlock, adding the id and its XP together.
    ///
    /// Returns `false` and changes nothing if the id is already unlocked.
    pub fn record_unlock(&mut self, category: Category, skill_id: &str, xp_value: u32) -> bool {
        if self.is_unlocked(category, skill_id) {
            return false;
        }
        let xp = self.xp(category).saturating_add(xp_value);
        self.unlocked_skills
            .entry(category)
            .or_default()
            .push(skill_id.to_string());
        self.xp.insert(category, xp);
        true
    }

    /// Replace a category's unlocked ids and XP wholesale.
    ///
    /// Used when repairing a persisted snapshot against the catalog.
    pub fn rebuild_category(&mut self, category: Category, unlocked: Vec<String>, xp: u32) {
        self.unlocked_skills.insert(category, unlocked);
        self.xp.insert(category, xp);
    }

    pub fn reset_category(&mut self, category: Category) {
        self.unlocked_skills.insert(category, Vec::new());
        self.xp.insert(category, 0);
    }

    pub fn reset_all(&mut self) {
        for category in Category::ALL {
            self.reset_category(category);
        }
    }
}
