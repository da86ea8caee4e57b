//! Skill tree business logic.
//!
//! Catalog construction and validation, and the evaluator that classifies
//! skills and performs unlock transitions. The domain types live in
//! `skilltree-types::skill`.

pub mod catalog;
pub mod evaluator;

pub use catalog::SkillCatalog;
pub use evaluator::{Classification, ClassifiedSkill, SkillGraph};
