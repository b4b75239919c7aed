//! Core engine types: card ids, configuration, RNG, pile references, views.
//!
//! This module holds the vocabulary shared by piles, rules and the game
//! engine. None of it mutates a table.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{GameConfig, STANDARD_MAX_RANK, STANDARD_TABLEAU_COLUMNS};
pub use action::{Command, MoveRequest, PileKind, PileRef};
pub use state::{CardView, PileSnapshot, StockResult, TableSnapshot};
