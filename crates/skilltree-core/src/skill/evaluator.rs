//! Skill graph evaluator.
//!
//! [`SkillGraph`] owns a validated [`SkillCatalog`] and answers every question
//! about a user's standing in it: which skills are unlocked, eligible, or
//! locked, whether an unlock may proceed, and how to commit one.
//!
//! Unlocking is split into two phases. [`SkillGraph::attempt_unlock`] is a
//! read-only dry run that the presentation layer uses to decide between a
//! "you still need..." message and a confirmation prompt.
//! [`SkillGraph::commit_unlock`] runs after the user confirms and re-checks
//! everything against the progress as it is *now*, so a commit that went
//! stale in between (double click, second window) is a silent no-op.
//!
//! Prerequisites are checked within the skill's own category only.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use skilltree_types::error::{CatalogError, ProgressError, SkillError};
use skilltree_types::progress::ProgressState;
use skilltree_types::skill::{Category, CommitOutcome, Skill, UnlockAttempt, UnlockStatus};

use super::catalog::SkillCatalog;

/// Immutable, validated skill graph for all four categories.
#[derive(Debug, Clone)]
pub struct SkillGraph {
    catalog: SkillCatalog,
    /// Per category: skill id -> position in the catalog table.
    index: HashMap<Category, HashMap<String, usize>>,
}

/// A skill paired with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassifiedSkill<'a> {
    pub skill: &'a Skill,
    pub status: UnlockStatus,
}

/// Classification of every skill in a category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classification<'a> {
    entries: Vec<ClassifiedSkill<'a>>,
}

impl<'a> Classification<'a> {
    /// Status of one skill, or `None` if the id is not in this category.
    pub fn get(&self, skill_id: &str) -> Option<UnlockStatus> {
        self.entries
            .iter()
            .find(|entry| entry.skill.id == skill_id)
            .map(|entry| entry.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedSkill<'a>> {
        self.entries.iter()
    }

    pub fn count(&self, status: UnlockStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SkillGraph {
    /// Validate a catalog and build the evaluator over it.
    pub fn new(catalog: SkillCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;

        let index = Category::ALL
            .iter()
            .map(|category| {
                let ids = catalog
                    .skills(*category)
                    .iter()
                    .enumerate()
                    .map(|(pos, skill)| (skill.id.clone(), pos))
                    .collect();
                (*category, ids)
            })
            .collect();

        tracing::debug!(skills = catalog.len(), "Built skill graph");
        Ok(Self { catalog, index })
    }

    /// Evaluator over the built-in progression trees.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(SkillCatalog::builtin())
    }

    pub fn skills(&self, category: Category) -> &[Skill] {
        self.catalog.skills(category)
    }

    /// Look up a skill by id within a category.
    pub fn skill(&self, category: Category, skill_id: &str) -> Result<&Skill, SkillError> {
        self.index
            .get(&category)
            .and_then(|ids| ids.get(skill_id))
            .map(|&pos| &self.catalog.skills(category)[pos])
            .ok_or_else(|| SkillError::UnknownSkillId {
                category,
                skill_id: skill_id.to_string(),
            })
    }

    /// Skills that list `skill_id` as a prerequisite, in catalog order.
    pub fn dependents(&self, category: Category, skill_id: &str) -> Result<Vec<&Skill>, SkillError> {
        self.skill(category, skill_id)?;
        Ok(self
            .skills(category)
            .iter()
            .filter(|s| s.prerequisites.iter().any(|p| p == skill_id))
            .collect())
    }

    /// Classify every skill in a category against `progress`.
    ///
    /// Pure: identical inputs always give identical output.
    pub fn classify(&self, category: Category, progress: &ProgressState) -> Classification<'_> {
        let entries = self
            .skills(category)
            .iter()
            .map(|skill| ClassifiedSkill {
                skill,
                status: status_of(category, skill, progress),
            })
            .collect();
        Classification { entries }
    }

    /// Validation phase of an unlock. Never mutates `progress`.
    pub fn attempt_unlock(
        &self,
        category: Category,
        skill_id: &str,
        progress: &ProgressState,
    ) -> Result<UnlockAttempt, SkillError> {
        let skill = self.skill(category, skill_id)?;

        if progress.is_unlocked(category, skill_id) {
            tracing::debug!(%category, skill_id, "Skill already unlocked");
            return Ok(UnlockAttempt::AlreadyUnlocked);
        }

        let missing = missing_prerequisites(category, skill, progress);
        if !missing.is_empty() {
            tracing::debug!(%category, skill_id, ?missing, "Unlock blocked by prerequisites");
            return Ok(UnlockAttempt::BlockedByPrerequisites(missing));
        }

        Ok(UnlockAttempt::ReadyToConfirm(skill.prerequisites.clone()))
    }

    /// Commit phase of an unlock, run after the user has confirmed.
    ///
    /// Adds the skill and its XP together, or leaves `progress` untouched if
    /// the skill is already unlocked or a prerequisite is no longer met. Only
    /// an unknown id is an error.
    pub fn commit_unlock(
        &self,
        category: Category,
        skill_id: &str,
        progress: &mut ProgressState,
    ) -> Result<CommitOutcome, SkillError> {
        let skill = self.skill(category, skill_id)?;

        if progress.is_unlocked(category, skill_id) {
            return Ok(CommitOutcome::AlreadyUnlocked);
        }
        if !missing_prerequisites(category, skill, progress).is_empty() {
            tracing::debug!(%category, skill_id, "Stale commit ignored, prerequisites unmet");
            return Ok(CommitOutcome::PrerequisitesUnmet);
        }

        progress.record_unlock(category, &skill.id, skill.xp_value);
        tracing::info!(
            %category,
            skill_id,
            xp_awarded = skill.xp_value,
            category_xp = progress.xp(category),
            "Skill unlocked"
        );
        Ok(CommitOutcome::Unlocked {
            xp_awarded: skill.xp_value,
        })
    }

    /// Lock every skill in one category again and zero its XP.
    pub fn reset_category(&self, category: Category, progress: &mut ProgressState) {
        progress.reset_category(category);
        tracing::info!(%category, "Category progress reset");
    }

    /// Lock every skill in every category and zero all XP.
    pub fn reset_all(&self, progress: &mut ProgressState) {
        progress.reset_all();
        tracing::info!("All progress reset");
    }

    /// Check a snapshot against this catalog.
    ///
    /// Every unlocked id must exist, appear once, have its prerequisites
    /// unlocked, and the XP counter must equal the sum of unlocked XP values.
    pub fn validate_progress(&self, progress: &ProgressState) -> Result<(), ProgressError> {
        for category in Category::ALL {
            let unlocked = progress.unlocked(category);
            let mut seen = HashSet::new();
            let mut expected_xp = 0u32;

            for skill_id in unlocked {
                let skill =
                    self.skill(category, skill_id)
                        .map_err(|_| ProgressError::UnknownSkill {
                            category,
                            skill_id: skill_id.clone(),
                        })?;
                if !seen.insert(skill_id.as_str()) {
                    return Err(ProgressError::DuplicateUnlock {
                        category,
                        skill_id: skill_id.clone(),
                    });
                }
                if let Some(prerequisite) = skill
                    .prerequisites
                    .iter()
                    .find(|p| !unlocked.contains(p))
                {
                    return Err(ProgressError::UnsoundPrerequisite {
                        category,
                        skill_id: skill_id.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
                expected_xp = expected_xp.saturating_add(skill.xp_value);
            }

            let actual = progress.xp(category);
            if actual != expected_xp {
                return Err(ProgressError::XpMismatch {
                    category,
                    expected: expected_xp,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Bring a snapshot back in line with this catalog.
    ///
    /// Drops unknown and duplicate ids, then repeatedly drops ids whose
    /// prerequisites are not unlocked until nothing changes, and recomputes
    /// XP from what is left. Unlock order of the surviving ids is kept.
    /// Returns how many ids were dropped.
    pub fn repair(&self, progress: &mut ProgressState) -> usize {
        let mut dropped = 0;

        for category in Category::ALL {
            let original_len = progress.unlocked(category).len();
            let mut seen = HashSet::new();
            let mut kept: Vec<String> = progress
                .unlocked(category)
                .iter()
                .filter(|id| self.skill(category, id).is_ok() && seen.insert(id.to_string()))
                .cloned()
                .collect();

            loop {
                let before = kept.len();
                let snapshot: HashSet<String> = kept.iter().cloned().collect();
                kept.retain(|id| {
                    self.skill(category, id)
                        .map(|s| s.prerequisites.iter().all(|p| snapshot.contains(p)))
                        .unwrap_or(false)
                });
                if kept.len() == before {
                    break;
                }
            }

            let xp = kept
                .iter()
                .filter_map(|id| self.skill(category, id).ok())
                .fold(0u32, |acc, s| acc.saturating_add(s.xp_value));

            let removed = original_len - kept.len();
            if removed > 0 || progress.xp(category) != xp {
                tracing::warn!(%category, removed, xp, "Repaired progress snapshot");
                progress.rebuild_category(category, kept, xp);
            }
            dropped += removed;
        }

        dropped
    }
}

fn status_of(category: Category, skill: &Skill, progress: &ProgressState) -> UnlockStatus {
    if progress.is_unlocked(category, &skill.id) {
        UnlockStatus::Unlocked
    } else if skill
        .prerequisites
        .iter()
        .all(|p| progress.is_unlocked(category, p))
    {
        UnlockStatus::Eligible
    } else {
        UnlockStatus::Locked
    }
}

fn missing_prerequisites(category: Category, skill: &Skill, progress: &ProgressState) -> Vec<String> {
    skill
        .prerequisites
        .iter()
        .filter(|p| !progress.is_unlocked(category, p))
        .cloned()
        .collect()
}
