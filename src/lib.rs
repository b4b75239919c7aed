//! # rust-klondike
//!
//! A game-state engine for Klondike patience.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No drawing, layout or input handling. A front end
//!    queries snapshots and forwards player intents as commands.
//!
//! 2. **Cards by identity**: All cards live in a fixed arena; piles hold
//!    `CardId`s, so a card is in exactly one pile and is never copied.
//!
//! 3. **Atomic moves**: Every move is validated before anything changes.
//!    It either fully commits or leaves the table untouched.
//!
//! ## Modules
//!
//! - `core`: Card ids, configuration, RNG, pile references, snapshots
//! - `cards`: Cards, suits and the card arena
//! - `zones`: Stock, tableau columns, foundations and the table
//! - `rules`: Move validation and the `RulesEngine` trait
//! - `games`: The Klondike dealer, selection machine and game engine
//!
//! ## Example
//!
//! ```
//! use rust_klondike::{Command, GameEngine, PileKind, StockResult};
//! use rust_klondike::games::klondike::CommandOutcome;
//!
//! let mut engine = GameEngine::with_seed(42);
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.stock_count(), 24);
//! assert_eq!(snapshot.column(6).unwrap().len(), 7);
//!
//! let outcome = engine.execute(Command::Reveal).unwrap();
//! assert!(matches!(outcome, CommandOutcome::Stock(StockResult::Revealed(_))));
//!
//! // Try to play the revealed card onto the first column
//! engine.execute(Command::Select { pile: PileKind::Stock, index: 0, offset: 0 }).unwrap();
//! let _ = engine.execute(Command::Move { pile: PileKind::Tableau, index: 0 });
//! assert_eq!(engine.snapshot().card_count(), 52);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameConfig, GameRng,
    Command, MoveRequest, PileKind, PileRef,
    CardView, PileSnapshot, StockResult, TableSnapshot,
};

pub use crate::cards::{Card, CardArena, Colour, Suit};

pub use crate::zones::{Foundation, InvariantViolation, Pile, Stock, Table, TableauColumn};

pub use crate::rules::{GameResult, IllegalMove, MoveError, MoveOutcome, RulesEngine};

pub use crate::games::klondike::{
    CommandError, CommandOutcome, Dealer, GameEngine,
    Selection, SelectionError, SelectionResult, SelectionState,
};
