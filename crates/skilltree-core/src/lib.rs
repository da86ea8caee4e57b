//! Business logic and repository trait definitions for the skill tree engine.
//!
//! This crate holds the skill graph evaluator, the built-in catalog, level
//! computation, and the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `skilltree-types` -- never on
//! `skilltree-infra` or any IO crate.

pub mod exercise;
pub mod level;
pub mod repository;
pub mod service;
pub mod skill;
