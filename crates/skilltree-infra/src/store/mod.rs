//! JSON file-backed repository implementations.
//!
//! Each store owns one file under the data directory and serializes access
//! through a `tokio::sync::Mutex`, so read-modify-write cycles from the same
//! process never interleave.

pub mod progress;
pub mod workout;

pub use progress::JsonProgressStore;
pub use workout::JsonWorkoutStore;
