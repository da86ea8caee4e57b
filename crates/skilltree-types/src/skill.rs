use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::SkillError;

/// One of the four independent progression trees.
///
/// Each category owns its own skill catalog, unlocked set, and XP counter.
/// Prerequisites never cross category boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Push,
    Pull,
    Core,
    Legs,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Push,
        Category::Pull,
        Category::Core,
        Category::Legs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Push => "push",
            Category::Pull => "pull",
            Category::Core => "core",
            Category::Legs => "legs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "push" => Ok(Category::Push),
            "pull" => Ok(Category::Pull),
            "core" => Ok(Category::Core),
            "legs" => Ok(Category::Legs),
            _ => Err(SkillError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single progression milestone within a category.
///
/// Skills are immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique within its category (e.g. "deadHang").
    pub id: String,
    /// Human-readable name with an optional rep/set/time suffix,
    /// e.g. "Dead Hang (30s)".
    pub display_name: String,
    /// XP awarded the first time this skill is unlocked.
    pub xp_value: u32,
    /// Ids in the same category that must be unlocked first, in declaration order.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        xp_value: u32,
        prerequisites: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            xp_value,
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Display name without its parenthetical suffix.
    ///
    /// ```
    /// use skilltree_types::skill::Skill;
    ///
    /// let skill = Skill::new("deadHang", "Dead Hang (30s)", 2, &[]);
    /// assert_eq!(skill.short_name(), "Dead Hang");
    /// ```
    pub fn short_name(&self) -> &str {
        let name = self.display_name.as_str();
        match name.find('(') {
            Some(open) if name[open..].contains(')') => name[..open].trim_end(),
            _ => name,
        }
    }

    /// Base skills have no prerequisites and are eligible from the start.
    pub fn is_base(&self) -> bool {
        self.prerequisites.is_empty()
    }
}

/// Classification of a skill against the current progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockStatus {
    Unlocked,
    Eligible,
    Locked,
}

impl fmt::Display for UnlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnlockStatus::Unlocked => write!(f, "unlocked"),
            UnlockStatus::Eligible => write!(f, "eligible"),
            UnlockStatus::Locked => write!(f, "locked"),
        }
    }
}

/// Outcome of the validation phase of an unlock.
///
/// None of these are errors: the caller branches on them to decide what to
/// tell the user. No state is changed while producing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "prerequisites", rename_all = "snake_case")]
pub enum UnlockAttempt {
    AlreadyUnlocked,
    /// Prerequisites that are still locked, in declaration order.
    BlockedByPrerequisites(Vec<String>),
    /// Every prerequisite is satisfied; carries the full prerequisite list for
    /// the confirmation message.
    ReadyToConfirm(Vec<String>),
}

/// Outcome of the commit phase of an unlock.
///
/// Stale commits (already unlocked, prerequisites lost since validation) are
/// reported here rather than as errors, and leave the progress untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommitOutcome {
    Unlocked { xp_awarded: u32 },
    AlreadyUnlocked,
    PrerequisitesUnmet,
}

impl CommitOutcome {
    /// Whether the commit changed the progress state.
    pub fn is_applied(&self) -> bool {
        matches!(self, CommitOutcome::Unlocked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_is_case_insensitive() {
        assert_eq!("PULL".parse::<Category>().unwrap(), Category::Pull);
        assert_eq!(" legs ".parse::<Category>().unwrap(), Category::Legs);
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        let err = "arms".parse::<Category>().unwrap_err();
        assert!(matches!(err, SkillError::InvalidCategory(ref c) if c == "arms"));
        assert_eq!(err.to_string(), "invalid category: 'arms'");
    }

    #[test]
    fn test_category_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_short_name_strips_suffix() {
        let skill = Skill::new("pullups", "Pull-Ups (2x5)", 4, &["negativePullups"]);
        assert_eq!(skill.short_name(), "Pull-Ups");

        let plain = Skill::new("x", "Muscle-Up", 12, &[]);
        assert_eq!(plain.short_name(), "Muscle-Up");
    }

    #[test]
    fn test_short_name_keeps_unclosed_paren() {
        let skill = Skill::new("x", "Odd (name", 1, &[]);
        assert_eq!(skill.short_name(), "Odd (name");
    }

    #[test]
    fn test_skill_deserialize_defaults_prerequisites() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":"deadHang","display_name":"Dead Hang (30s)","xp_value":2}"#,
        )
        .unwrap();
        assert!(skill.is_base());
    }

    #[test]
    fn test_unlock_attempt_serializes_tagged() {
        let attempt = UnlockAttempt::BlockedByPrerequisites(vec!["deadHang".into()]);
        let json = serde_json::to_value(&attempt).unwrap();
        assert_eq!(json["outcome"], "blocked_by_prerequisites");
        assert_eq!(json["prerequisites"][0], "deadHang");
    }

    #[test]
    fn test_commit_outcome_is_applied() {
        assert!(CommitOutcome::Unlocked { xp_awarded: 2 }.is_applied());
        assert!(!CommitOutcome::AlreadyUnlocked.is_applied());
        assert!(!CommitOutcome::PrerequisitesUnmet.is_applied());
    }
}
