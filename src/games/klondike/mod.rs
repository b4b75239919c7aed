//! Klondike patience.
//!
//! - 52 cards: 28 dealt into 7 cascading columns, 24 left in the stock
//! - The stock cycles one card at a time, forever
//! - Build columns down in alternating colours, foundations up by suit
//! - Fill all four foundations to win

mod dealer;
mod game;
mod selection;

pub use dealer::Dealer;
pub use game::{CommandError, CommandOutcome, GameEngine};
pub use selection::{resolve, Selection, SelectionError, SelectionResult, SelectionState};
