//! Fixed arena of card slots.
//!
//! The arena owns every `Card` of a deal. It is built once, never grows or
//! shrinks, and is indexed by `CardId`. Piles store ids into it.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, MAX_RANK};
use crate::core::entity::CardId;

/// Owner of all cards in a deal.
///
/// ```
/// use rust_klondike::cards::{CardArena, Suit};
/// use rust_klondike::core::CardId;
///
/// let arena = CardArena::new(13);
/// assert_eq!(arena.len(), 52);
///
/// let ace_of_spades = arena.find(Suit::Spades, 1).unwrap();
/// assert_eq!(ace_of_spades, CardId::new(13));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardArena {
    cards: Vec<Card>,
    max_rank: u8,
}

impl CardArena {
    /// Build one card per (suit, rank) pair, suit-major, all face down.
    #[must_use]
    pub fn new(max_rank: u8) -> Self {
        assert!((1..=MAX_RANK).contains(&max_rank), "Max rank must be 1-{MAX_RANK}");

        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (1..=max_rank).map(move |rank| Card::new(suit, rank)))
            .collect();

        Self { cards, max_rank }
    }

    /// Highest rank per suit.
    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.max_rank
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All ids, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u8).map(CardId)
    }

    /// Look up a card.
    ///
    /// Ids only come from this arena, so an unknown id is a defect and panics.
    #[must_use]
    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    pub fn get_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// Id of the card with the given suit and rank.
    #[must_use]
    pub fn find(&self, suit: Suit, rank: u8) -> Option<CardId> {
        if rank == 0 || rank > self.max_rank {
            return None;
        }
        let slot = suit.index() * self.max_rank as usize + (rank as usize - 1);
        Some(CardId(slot as u8))
    }

    pub fn flip_up(&mut self, id: CardId) {
        self.get_mut(id).flip_up();
    }

    pub fn flip_down(&mut self, id: CardId) {
        self.get_mut(id).flip_down();
    }

    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.get(id).is_face_up()
    }
}
