//! Infrastructure layer for the skill tree tracker.
//!
//! Contains implementations of the repository traits defined in `skilltree-core`:
//! JSON file stores, the config loader, catalog file loading and data
//! directory resolution.

pub mod catalog;
pub mod config;
pub mod filesystem;
pub mod store;
