//! Card identification.
//!
//! Every card of a deal lives in a fixed slot of the [`CardArena`]. A
//! `CardId` is the index of that slot. Piles hold ids, never cards, so a
//! card changes piles by moving its id and is never copied.
//!
//! ## ID Layout
//!
//! Ids are allocated suit-major by the arena:
//! - `0..max_rank`: clubs, ace first
//! - `max_rank..2 * max_rank`: spades
//! - and so on for diamonds and hearts
//!
//! ```
//! use rust_klondike::core::CardId;
//!
//! let id = CardId::new(12);
//! assert_eq!(id.index(), 12);
//! assert_eq!(format!("{}", id), "Card(12)");
//! ```
//!
//! [`CardArena`]: crate::cards::CardArena

use serde::{Deserialize, Serialize};

/// Stable identifier of a card within one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID from an arena slot.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Arena slot as a `usize` index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for CardId {
    fn from(slot: u8) -> Self {
        Self(slot)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
