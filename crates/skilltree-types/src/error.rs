use thiserror::Error;

use crate::skill::Category;

/// Precondition violations when calling into the skill evaluator.
///
/// Blocked or repeated unlocks are not errors; see `UnlockAttempt` and
/// `CommitOutcome`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    #[error("invalid category: '{0}'")]
    InvalidCategory(String),

    #[error("unknown skill '{skill_id}' in category '{category}'")]
    UnknownSkillId { category: Category, skill_id: String },
}

/// Errors raised while building a skill catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate skill id '{skill_id}' in category '{category}'")]
    DuplicateId { category: Category, skill_id: String },

    #[error("skill '{skill_id}' in '{category}' requires unknown skill '{prerequisite}'")]
    UnknownPrerequisite {
        category: Category,
        skill_id: String,
        prerequisite: String,
    },

    #[error("skill '{skill_id}' in '{category}' lists itself as a prerequisite")]
    SelfPrerequisite { category: Category, skill_id: String },

    #[error("skill '{skill_id}' in '{category}' must award a positive XP value")]
    ZeroXp { category: Category, skill_id: String },

    #[error("circular prerequisites in '{category}' involving skill '{skill_id}'")]
    Cycle { category: Category, skill_id: String },

    #[error("invalid catalog file: {0}")]
    Parse(String),

    #[error("failed to read catalog file: {0}")]
    Io(String),
}

/// A persisted snapshot that does not match the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("snapshot references unknown skill '{skill_id}' in '{category}'")]
    UnknownSkill { category: Category, skill_id: String },

    #[error("snapshot lists skill '{skill_id}' in '{category}' more than once")]
    DuplicateUnlock { category: Category, skill_id: String },

    #[error("skill '{skill_id}' in '{category}' is unlocked but '{prerequisite}' is not")]
    UnsoundPrerequisite {
        category: Category,
        skill_id: String,
        prerequisite: String,
    },

    #[error("xp for '{category}' is {actual}, expected {expected}")]
    XpMismatch {
        category: Category,
        expected: u32,
        actual: u32,
    },
}

/// Errors related to saved workouts.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("workout not found")]
    NotFound,

    #[error("invalid workout name: {0}")]
    InvalidName(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in skilltree-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by the progress service: caller misuse or storage failure.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_error_display() {
        let err = SkillError::UnknownSkillId {
            category: Category::Pull,
            skill_id: "backLever".to_string(),
        };
        assert_eq!(err.to_string(), "unknown skill 'backLever' in category 'pull'");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Cycle {
            category: Category::Core,
            skill_id: "lSit".to_string(),
        };
        assert!(err.to_string().contains("circular"));
        assert!(err.to_string().contains("lSit"));
    }

    #[test]
    fn test_progress_error_display() {
        let err = ProgressError::XpMismatch {
            category: Category::Legs,
            expected: 5,
            actual: 7,
        };
        assert_eq!(err.to_string(), "xp for 'legs' is 7, expected 5");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Io("permission denied".to_string());
        assert_eq!(err.to_string(), "io error: permission denied");
    }
}
