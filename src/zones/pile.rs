//! Behaviour shared by every pile variant.

use crate::core::action::PileKind;
use crate::core::entity::CardId;

/// Read access common to the stock, tableau columns and foundations.
///
/// Offsets are pile-specific: the stock counts from its front (the reveal
/// position), tableau columns and foundations count from the bottom card.
pub trait Pile {
    fn kind(&self) -> PileKind;

    fn len(&self) -> usize;

    /// Card at `offset`, or `None` past the end.
    fn card_at(&self, offset: usize) -> Option<CardId>;

    /// Offset of the card a player would take from this pile.
    fn top_offset(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The card a player would take from this pile.
    fn top(&self) -> Option<CardId> {
        self.top_offset().and_then(|offset| self.card_at(offset))
    }

    /// Cards in offset order.
    fn card_ids(&self) -> Vec<CardId> {
        (0..self.len()).filter_map(|offset| self.card_at(offset)).collect()
    }

    fn contains(&self, id: CardId) -> bool {
        (0..self.len()).any(|offset| self.card_at(offset) == Some(id))
    }
}
