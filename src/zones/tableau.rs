//! Tableau columns.
//!
//! A column is a bottom-to-top sequence. Only the face-up suffix is in play;
//! face state itself lives on the cards in the arena.

use smallvec::SmallVec;

use crate::core::action::PileKind;
use crate::core::entity::CardId;

use super::pile::Pile;

/// Cards lifted off a pile in one move. A run never exceeds a full suit.
pub type Run = SmallVec<[CardId; 13]>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauColumn {
    cards: Vec<CardId>,
}

impl TableauColumn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bottom-to-top view of the column.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    /// Place a run on top, keeping its order.
    pub fn push_run(&mut self, run: &[CardId]) {
        self.cards.extend_from_slice(run);
    }

    /// Lift every card from `offset` upwards.
    pub fn split_off(&mut self, offset: usize) -> Run {
        if offset >= self.cards.len() {
            return Run::new();
        }
        self.cards.drain(offset..).collect()
    }
}

impl Pile for TableauColumn {
    fn kind(&self) -> PileKind {
        PileKind::Tableau
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_top() {
        let mut column = TableauColumn::new();
        assert_eq!(column.top(), None);

        column.push(CardId(4));
        column.push(CardId(9));

        assert_eq!(column.top(), Some(CardId(9)));
        assert_eq!(column.top_offset(), Some(1));
        assert_eq!(column.cards(), &[CardId(4), CardId(9)]);
    }

    #[test]
    fn test_split_off_run() {
        let mut column = TableauColumn::new();
        column.push_run(&[CardId(1), CardId(2), CardId(3)]);

        let run = column.split_off(1);

        assert_eq!(run.as_slice(), &[CardId(2), CardId(3)]);
        assert_eq!(column.cards(), &[CardId(1)]);
    }

    #[test]
    fn test_split_off_past_end_is_empty() {
        let mut column = TableauColumn::new();
        column.push(CardId(1));

        assert!(column.split_off(1).is_empty());
        assert_eq!(column.len(), 1);
    }
}
