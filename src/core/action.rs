//! Pile references, move requests and the command surface.
//!
//! An input layer never touches piles directly. It names a pile with a
//! `PileRef` (or a `PileKind` plus index), describes a relocation with a
//! `MoveRequest`, and drives the engine with `Command` values.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Kind of pile, as named by the command surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// The face-down draw pile.
    Stock,
    /// One of the cascading columns.
    Tableau,
    /// One of the per-suit ascending stacks.
    Foundation,
}

/// Reference to a single pile on the table.
///
/// Foundation indices follow [`Suit::ALL`]: foundation 0 holds clubs,
/// foundation 3 holds hearts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Stock,
    Tableau(usize),
    Foundation(usize),
}

impl PileRef {
    /// Build a reference from a kind and index. The index is ignored for the stock.
    #[must_use]
    pub const fn new(kind: PileKind, index: usize) -> Self {
        match kind {
            PileKind::Stock => PileRef::Stock,
            PileKind::Tableau => PileRef::Tableau(index),
            PileKind::Foundation => PileRef::Foundation(index),
        }
    }

    /// The foundation collecting `suit`.
    #[must_use]
    pub const fn foundation_for(suit: Suit) -> Self {
        PileRef::Foundation(suit.index())
    }

    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileRef::Stock => PileKind::Stock,
            PileRef::Tableau(_) => PileKind::Tableau,
            PileRef::Foundation(_) => PileKind::Foundation,
        }
    }

    /// Index within the kind (always 0 for the stock).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileRef::Stock => 0,
            PileRef::Tableau(i) | PileRef::Foundation(i) => i,
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileRef::Tableau(_))
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "stock"),
            PileRef::Tableau(i) => write!(f, "tableau {i}"),
            PileRef::Foundation(i) => write!(f, "foundation {i}"),
        }
    }
}

/// A proposed relocation of a card or run.
///
/// `source_offset` addresses the first moved card within the source pile:
/// for the stock it is counted from the front, for tableau columns and
/// foundations from the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: PileRef,
    pub source_offset: usize,
    pub destination: PileRef,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(source: PileRef, source_offset: usize, destination: PileRef) -> Self {
        Self {
            source,
            source_offset,
            destination,
        }
    }
}

/// Player intents, one per call, as forwarded by an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Cycle the stock by one card.
    Reveal,
    /// Pick the card at `offset` of a pile as the move source.
    Select { pile: PileKind, index: usize, offset: usize },
    /// Move the pending selection onto a pile.
    Move { pile: PileKind, index: usize },
    /// Deal a fresh game.
    NewGame { seed: Option<u64> },
}
