//! Foundation stacks: one ascending pile per suit.

use crate::cards::Suit;
use crate::core::action::PileKind;
use crate::core::entity::CardId;

use super::pile::Pile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<CardId>,
}

impl Foundation {
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::new(),
        }
    }

    /// Suit this foundation collects.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Ace-to-top view of the stack.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }
}

impl Pile for Foundation {
    fn kind(&self) -> PileKind {
        PileKind::Foundation
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn card_at(&self, offset: usize) -> Option<CardId> {
        self.cards.get(offset).copied()
    }

    fn top_offset(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }
}
