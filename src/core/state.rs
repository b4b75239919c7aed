//! Read-only views of the table for a presentation layer.
//!
//! ## CardView
//!
//! Everything needed to draw one card: identity, suit, rank, face state.
//!
//! ## TableSnapshot
//!
//! Every pile, every card, in offset order. Two snapshots compare equal iff
//! every card sits in the same pile at the same offset with the same face
//! state. `fingerprint()` encodes a snapshot to bytes for bit-level
//! comparison.

use serde::{Deserialize, Serialize};

use super::action::PileRef;
use super::entity::CardId;
use crate::cards::{Card, Colour, Suit};

/// Renderable state of a single card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl CardView {
    #[must_use]
    pub fn new(id: CardId, card: &Card) -> Self {
        Self {
            id,
            suit: card.suit(),
            rank: card.rank(),
            face_up: card.is_face_up(),
        }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.suit.colour()
    }
}

/// Contents of one pile in offset order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileSnapshot {
    pub pile: PileRef,
    pub cards: Vec<CardView>,
}

impl PileSnapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card a player would take: the front of the stock, the last card
    /// of any other pile.
    #[must_use]
    pub fn top(&self) -> Option<&CardView> {
        match self.pile {
            PileRef::Stock => self.cards.first(),
            PileRef::Tableau(_) | PileRef::Foundation(_) => self.cards.last(),
        }
    }
}

/// Whole-table snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub stock: PileSnapshot,
    pub tableau: Vec<PileSnapshot>,
    pub foundations: Vec<PileSnapshot>,
}

impl TableSnapshot {
    /// Revealed stock card, if the front card is face up.
    #[must_use]
    pub fn stock_top(&self) -> Option<&CardView> {
        self.stock.top().filter(|card| card.face_up)
    }

    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&PileSnapshot> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn foundation_top(&self, index: usize) -> Option<&CardView> {
        self.foundations.get(index).and_then(PileSnapshot::top)
    }

    /// All piles: stock, then columns, then foundations.
    pub fn piles(&self) -> impl Iterator<Item = &PileSnapshot> {
        std::iter::once(&self.stock)
            .chain(self.tableau.iter())
            .chain(self.foundations.iter())
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(PileSnapshot::len).sum()
    }

    /// Locate a card: its pile, offset and view.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<(PileRef, usize, &CardView)> {
        self.piles().find_map(|pile| {
            pile.cards
                .iter()
                .position(|card| card.id == id)
                .map(|offset| (pile.pile, offset, &pile.cards[offset]))
        })
    }

    /// Binary encoding of the snapshot.
    pub fn fingerprint(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }
}

/// Outcome of cycling the stock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockResult {
    /// The stock rotated and this card is now face up at the front.
    Revealed(CardView),
    /// Nothing to cycle.
    Empty,
}
