//! The stock: a circular draw pile.
//!
//! Stored as an index-rotated array. `front` marks the logical front; a
//! reveal moves `front` one slot forward, which is the same as retiring the
//! front card to the back. Offsets are counted from the front, so offset 0 is
//! always the reveal position.
//!
//! ```
//! use rust_klondike::core::CardId;
//! use rust_klondike::zones::{Pile, Stock};
//!
//! let mut stock = Stock::from_ids(vec![CardId(1), CardId(2), CardId(3)]);
//! assert_eq!(stock.front(), Some(CardId(1)));
//!
//! stock.rotate();
//! assert_eq!(stock.front(), Some(CardId(2)));
//! assert_eq!(stock.card_ids(), vec![CardId(2), CardId(3), CardId(1)]);
//! ```

use crate::core::action::PileKind;
use crate::core::entity::CardId;

use super::pile::Pile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    cards: Vec<CardId>,
    front: usize,
}

impl Stock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stock whose front is the first id.
    #[must_use]
    pub fn from_ids(cards: Vec<CardId>) -> Self {
        Self { cards, front: 0 }
    }

    /// Card at the reveal position.
    #[must_use]
    pub fn front(&self) -> Option<CardId> {
        self.cards.get(self.front).copied()
    }

    /// Move the front card to the back.
    pub fn rotate(&mut self) {
        if !self.cards.is_empty() {
            self.front = (self.front + 1) % self.cards.len();
        }
    }

    /// Remove and return the front card. The next card becomes the front.
    pub fn take_front(&mut self) -> Option<CardId> {
        if self.cards.is_empty() {
            return None;
        }
        let id = self.cards.remove(self.front);
        if self.front >= self.cards.len() {
            self.front = 0;
        }
        Some(id)
    }

    fn slot(&self, offset: usize) -> Option<usize> {
        (offset < self.cards.len()).then(|| (self.front + offset) % self.cards.len())
    }
}

impl Pile for Stock {
    fn kind(&self) -> PileKind {
        PileKind::Stock
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card_at(&self, offset: usize) -> Option<CardId> {
        self.slot(offset).map(|slot| self.cards[slot])
    }

    fn top_offset(&self) -> Option<usize> {
        (!self.cards.is_empty()).then_some(0)
    }
}
