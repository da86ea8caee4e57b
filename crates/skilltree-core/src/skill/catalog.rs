//! Skill catalogs: the built-in progression trees and catalog validation.
//!
//! A catalog is four ordered tables of [`Skill`] records, one per category.
//! Before a catalog is handed to the evaluator it is checked for duplicate
//! ids, dangling or self-referencing prerequisites, zero XP values, and
//! cycles. Cycle detection builds a petgraph `DiGraph` per category and runs
//! a topological sort.

use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use serde::Deserialize;

use skilltree_types::error::CatalogError;
use skilltree_types::skill::{Category, Skill};

/// Ordered skill tables keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    categories: BTreeMap<Category, Vec<Skill>>,
}

/// On-disk TOML layout: one array of tables per category.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    push: Vec<Skill>,
    #[serde(default)]
    pull: Vec<Skill>,
    #[serde(default)]
    core: Vec<Skill>,
    #[serde(default)]
    legs: Vec<Skill>,
}

impl SkillCatalog {
    /// An empty catalog (every category has no skills).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the skill table for one category.
    pub fn with_category(mut self, category: Category, skills: Vec<Skill>) -> Self {
        self.categories.insert(category, skills);
        self
    }

    pub fn skills(&self, category: Category) -> &[Skill] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The progression trees shipped with the application.
    pub fn builtin() -> Self {
        Self::new()
            .with_category(Category::Push, push_skills())
            .with_category(Category::Pull, pull_skills())
            .with_category(Category::Core, core_skills())
            .with_category(Category::Legs, leg_skills())
    }

    /// Parse a catalog from TOML text.
    ///
    /// ```toml
    /// [[pull]]
    /// id = "deadHang"
    /// display_name = "Dead Hang (30s)"
    /// xp_value = 2
    /// ```
    ///
    /// The result is validated before it is returned.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let catalog = Self::new()
            .with_category(Category::Push, file.push)
            .with_category(Category::Pull, file.pull)
            .with_category(Category::Core, file.core)
            .with_category(Category::Legs, file.legs);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every category's table for structural problems.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in Category::ALL {
            validate_category(category, self.skills(category))?;
        }
        Ok(())
    }
}

fn validate_category(category: Category, skills: &[Skill]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for skill in skills {
        if !seen.insert(skill.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                category,
                skill_id: skill.id.clone(),
            });
        }
        if skill.xp_value == 0 {
            return Err(CatalogError::ZeroXp {
                category,
                skill_id: skill.id.clone(),
            });
        }
    }

    let mut graph = DiGraph::<&str, ()>::new();
    let node_indices: HashMap<&str, _> = skills
        .iter()
        .map(|skill| (skill.id.as_str(), graph.add_node(skill.id.as_str())))
        .collect();

    for skill in skills {
        let idx = node_indices[skill.id.as_str()];
        for prerequisite in &skill.prerequisites {
            if prerequisite == &skill.id {
                return Err(CatalogError::SelfPrerequisite {
                    category,
                    skill_id: skill.id.clone(),
                });
            }
            let Some(&prereq_idx) = node_indices.get(prerequisite.as_str()) else {
                return Err(CatalogError::UnknownPrerequisite {
                    category,
                    skill_id: skill.id.clone(),
                    prerequisite: prerequisite.clone(),
                });
            };
            // Edge from prerequisite -> dependent skill
            graph.add_edge(prereq_idx, idx, ());
        }
    }

    toposort(&graph, None).map_err(|cycle| CatalogError::Cycle {
        category,
        skill_id: graph[cycle.node_id()].to_string(),
    })?;

    Ok(())
}

fn push_skills() -> Vec<Skill> {
    vec![
        // Beginner path
        Skill::new("kneePushups", "Knee Push-Ups (2x8)", 2, &[]),
        Skill::new("inclinePushups", "Incline Push-Ups (2x8)", 3, &["kneePushups"]),
        Skill::new("pushups", "Push-Ups (2x8)", 4, &["inclinePushups"]),
        // Chest
        Skill::new("archerPushups", "Archer Push-Ups (2x6)", 6, &["pushups"]),
        Skill::new("oneArmPushups", "One-Arm Push-Ups (2x3)", 8, &["archerPushups"]),
        Skill::new("ninetyPushup", "90° Push-Up (2x2)", 12, &["oneArmPushups"]),
        // Triceps
        Skill::new("benchDips", "Bench Dips (2x10)", 2, &["pushups"]),
        Skill::new("straightBarDips", "Straight Bar Dips (2x6)", 4, &["benchDips"]),
        Skill::new("koreanDips", "Korean Dips (2x5)", 6, &["straightBarDips"]),
        Skill::new("ringDips", "Ring Dips (2x4)", 7, &["koreanDips"]),
        Skill::new("weightedDips", "Weighted Dips (2x3)", 9, &["ringDips"]),
        // Shoulders
        Skill::new("wallPike", "Wall Pike PU (2x6)", 2, &["pushups"]),
        Skill::new("pike", "Pike Push-Ups (2x6)", 3, &["wallPike"]),
        Skill::new("elevatedPike", "Elevated Pike PU (2x5)", 5, &["pike"]),
        Skill::new("wallHandstand", "Wall HSPU (2x3)", 7, &["elevatedPike"]),
        Skill::new("freestanding", "Freestanding HSPU (1–3)", 10, &["wallHandstand"]),
        // Explosive
        Skill::new("clappingPushups", "Clapping Push-Ups (2x5)", 5, &["pushups"]),
        // Planche
        Skill::new("plancheLean", "Planche Lean (20s)", 3, &["pushups"]),
        Skill::new("tuckPlanche", "Tuck Planche (10s)", 5, &["plancheLean"]),
        Skill::new("advTuckPlanche", "Advanced Tuck Planche (10s)", 6, &["tuckPlanche"]),
        Skill::new("straddlePlanche", "Straddle Planche (10s)", 8, &["advTuckPlanche"]),
        Skill::new("fullPlanche", "Full Planche (10s)", 10, &["straddlePlanche"]),
    ]
}

fn pull_skills() -> Vec<Skill> {
    vec![
        Skill::new("deadHang", "Dead Hang (30s)", 2, &[]),
        Skill::new("scapularPulls", "Scapular Pulls (2x6)", 2, &["deadHang"]),
        Skill::new("negativePullups", "Negative Pull-Ups (2x5)", 3, &["scapularPulls"]),
        Skill::new("pullups", "Pull-Ups (2x5)", 4, &["negativePullups"]),
        Skill::new("archer", "Archer Pull-Ups (2x3)", 6, &["pullups"]),
        Skill::new("typewriter", "Typewriter Pull-Ups (2x3)", 7, &["archer"]),
        Skill::new("oneArmHold", "One-Arm Hold (10s)", 8, &["typewriter"]),
        Skill::new("oneArmPull", "One-Arm Pull-Up (1x1)", 10, &["oneArmHold"]),
        Skill::new("explosivePullups", "Explosive Pull-Ups (2x3)", 5, &["pullups"]),
        Skill::new(
            "muscleup",
            "Muscle-Up (1x1)",
            12,
            &["explosivePullups", "typewriter"],
        ),
    ]
}

fn core_skills() -> Vec<Skill> {
    vec![
        Skill::new("deadBug", "Dead Bug (2x20s)", 2, &[]),
        Skill::new("hollowHold", "Hollow Hold (2x20s)", 3, &["deadBug"]),
        Skill::new("hollowRocks", "Hollow Rocks (2x10)", 4, &["hollowHold"]),
        Skill::new("lyingLegRaises", "Lying Leg Raises (2x10)", 2, &[]),
        Skill::new("hangingKneeRaises", "Hanging Knee Raises (2x5)", 3, &["lyingLegRaises"]),
        Skill::new("hangingLegRaises", "Hanging Leg Raises (2x5)", 5, &["hangingKneeRaises"]),
        Skill::new("lSit", "L-Sit (10s)", 6, &["hangingLegRaises"]),
        Skill::new("vUps", "V-Ups (2x8)", 4, &["hollowRocks"]),
        Skill::new("vToL", "V to L Transition (2x3)", 8, &["vUps", "lSit"]),
    ]
}

fn leg_skills() -> Vec<Skill> {
    vec![
        Skill::new("gluteBridge", "Glute Bridge (2x12)", 2, &[]),
        Skill::new("wallSit", "Wall Sit (2x30s)", 2, &[]),
        Skill::new("stepUps", "Step-Ups (2x10)", 3, &["gluteBridge"]),
        Skill::new("lunges", "Lunges (2x8)", 4, &["stepUps"]),
        Skill::new("shrimpSquat", "Shrimp Squat (2x5)", 6, &["lunges"]),
        Skill::new("pistolSquat", "Pistol Squat (2x3)", 8, &["shrimpSquat"]),
        Skill::new("wallSitPulse", "Wall Sit Pulses (2x10)", 3, &["wallSit"]),
        Skill::new("splitSquat", "Split Squat (2x8)", 5, &["wallSitPulse"]),
        Skill::new("jumpLunge", "Jump Lunge (2x6)", 7, &["splitSquat"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.skills(Category::Push).len(), 22);
        assert_eq!(catalog.skills(Category::Pull).len(), 10);
        assert_eq!(catalog.skills(Category::Core).len(), 9);
        assert_eq!(catalog.skills(Category::Legs).len(), 9);
    }

    #[test]
    fn test_builtin_join_points() {
        let catalog = SkillCatalog::builtin();
        let muscleup = catalog
            .skills(Category::Pull)
            .iter()
            .find(|s| s.id == "muscleup")
            .unwrap();
        assert_eq!(muscleup.prerequisites, ["explosivePullups", "typewriter"]);

        let v_to_l = catalog
            .skills(Category::Core)
            .iter()
            .find(|s| s.id == "vToL")
            .unwrap();
        assert_eq!(v_to_l.prerequisites, ["vUps", "lSit"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog = SkillCatalog::new().with_category(
            Category::Legs,
            vec![
                Skill::new("wallSit", "Wall Sit", 2, &[]),
                Skill::new("wallSit", "Wall Sit Again", 2, &[]),
            ],
        );
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref skill_id, .. } if skill_id == "wallSit"));
    }

    #[test]
    fn test_unknown_prerequisite_rejected() {
        let catalog = SkillCatalog::new().with_category(
            Category::Pull,
            vec![Skill::new("pullups", "Pull-Ups", 4, &["deadHang"])],
        );
        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownPrerequisite { ref prerequisite, .. } if prerequisite == "deadHang"
        ));
    }

    #[test]
    fn test_prerequisite_from_other_category_rejected() {
        let catalog = SkillCatalog::new()
            .with_category(Category::Push, vec![Skill::new("pushups", "Push-Ups", 4, &[])])
            .with_category(
                Category::Pull,
                vec![Skill::new("pullups", "Pull-Ups", 4, &["pushups"])],
            );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownPrerequisite { category: Category::Pull, .. })
        ));
    }

    #[test]
    fn test_self_prerequisite_rejected() {
        let catalog = SkillCatalog::new().with_category(
            Category::Core,
            vec![Skill::new("lSit", "L-Sit", 6, &["lSit"])],
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::SelfPrerequisite { .. })
        ));
    }

    #[test]
    fn test_zero_xp_rejected() {
        let catalog = SkillCatalog::new().with_category(
            Category::Core,
            vec![Skill::new("deadBug", "Dead Bug", 0, &[])],
        );
        assert!(matches!(catalog.validate(), Err(CatalogError::ZeroXp { .. })));
    }

    #[test]
    fn test_cycle_detected() {
        let catalog = SkillCatalog::new().with_category(
            Category::Push,
            vec![
                Skill::new("a", "A", 1, &["c"]),
                Skill::new("b", "B", 1, &["a"]),
                Skill::new("c", "C", 1, &["b"]),
            ],
        );
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::Cycle { category: Category::Push, .. }));
        assert!(
            err.to_string().contains("circular"),
            "Expected cycle error, got: {err}"
        );
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let catalog = SkillCatalog::new().with_category(
            Category::Legs,
            vec![
                Skill::new("d", "D", 1, &[]),
                Skill::new("b", "B", 1, &["d"]),
                Skill::new("c", "C", 1, &["d"]),
                Skill::new("a", "A", 1, &["b", "c"]),
            ],
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let toml_str = r#"
[[pull]]
id = "deadHang"
display_name = "Dead Hang (30s)"
xp_value = 2

[[pull]]
id = "scapularPulls"
display_name = "Scapular Pulls (2x6)"
xp_value = 2
prerequisites = ["deadHang"]
"#;
        let catalog = SkillCatalog::from_toml_str(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.skills(Category::Push).is_empty());
        assert_eq!(catalog.skills(Category::Pull)[1].prerequisites, ["deadHang"]);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_category() {
        let toml_str = r#"
[[arms]]
id = "curl"
display_name = "Curl"
xp_value = 1
"#;
        assert!(matches!(
            SkillCatalog::from_toml_str(toml_str),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_toml_str_validates() {
        let toml_str = r#"
[[legs]]
id = "lunges"
display_name = "Lunges"
xp_value = 4
prerequisites = ["stepUps"]
"#;
        assert!(matches!(
            SkillCatalog::from_toml_str(toml_str),
            Err(CatalogError::UnknownPrerequisite { .. })
        ));
    }
}
