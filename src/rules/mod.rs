//! Move rules.
//!
//! - `validator`: pure legality predicates and `IllegalMove` reasons
//! - `engine`: the `RulesEngine` trait and move/game outcome types

pub mod validator;
pub mod engine;

pub use validator::IllegalMove;
pub use engine::{GameResult, MoveError, MoveOutcome, RulesEngine};
