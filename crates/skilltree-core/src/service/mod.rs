//! Service layer orchestrating business logic.
//!
//! Services are generic over repository traits so that skilltree-core never
//! depends on skilltree-infra.

pub mod progress;
pub mod workout;
