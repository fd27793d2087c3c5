pub mod types;
pub mod error;
pub mod cards;
pub mod legality;
pub mod trick;
pub mod bidding;
pub mod setup;
pub mod engine;
pub mod invariants;
pub mod visibility;


pub use types::*;
pub use error::{InvariantViolation, RuleViolation};
pub use engine::Action;
