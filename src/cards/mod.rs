//! Cards and the arena that owns them.
//!
//! ## Key Types
//!
//! - `Card`: suit and rank (immutable) plus face state (mutable)
//! - `Suit` / `Colour`: colour is always derived from suit
//! - `CardArena`: the fixed set of card slots for one deal, indexed by `CardId`

pub mod card;
pub mod arena;

pub use card::{rank_token, Card, Colour, Suit, MAX_RANK};
pub use arena::CardArena;
