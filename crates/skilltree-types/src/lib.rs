//! Shared domain types for the skill tree engine.
//!
//! Categories, skills, progress snapshots, level summaries, saved workouts,
//! global configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod level;
pub mod progress;
pub mod skill;
pub mod workout;
