//! Two-state source selection.
//!
//! An input layer picks a source card first and a destination second.
//! Between the two calls the engine holds a `Pending` selection; completing,
//! failing or cancelling a move returns it to `Idle`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, PileRef};
use crate::rules::validator::check_run;
use crate::zones::{Pile, Table};

/// A validated move source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub pile: PileRef,
    pub offset: usize,
    /// The selected card (bottom of the run for a column).
    pub card: CardId,
    /// Cards that would move with it, itself included.
    pub run_len: usize,
}

/// Selection machine state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    Pending(Selection),
}

/// Result of a selection command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionResult {
    /// The card is now the pending source.
    Selected(Selection),
    /// A pending selection was dropped.
    Cancelled,
}

/// Why a card cannot be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionError {
    NoSuchPile,
    EmptyPile,
    OffsetOutOfRange,
    /// The card is face down.
    FaceDown,
    /// The stock front has not been revealed.
    NotRevealed,
    /// Only the top card of the stock or a foundation can be taken.
    NotTopmost,
    /// The cards above a column card are not a face-up run.
    NotRunStart,
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::NoSuchPile => "no such pile",
            Self::EmptyPile => "pile is empty",
            Self::OffsetOutOfRange => "no card at that offset",
            Self::FaceDown => "card is face down",
            Self::NotRevealed => "stock card has not been revealed",
            Self::NotTopmost => "only the top card can be taken",
            Self::NotRunStart => "card does not start a run",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for SelectionError {}

/// Check that `offset` of `pile` is a card the player may pick up.
pub fn resolve(table: &Table, pile: PileRef, offset: usize) -> Result<Selection, SelectionError> {
    let source = table.pile(pile).ok_or(SelectionError::NoSuchPile)?;
    if source.is_empty() {
        return Err(SelectionError::EmptyPile);
    }
    let card = source.card_at(offset).ok_or(SelectionError::OffsetOutOfRange)?;

    let run_len = match pile {
        PileRef::Stock | PileRef::Foundation(_) => {
            if Some(offset) != source.top_offset() {
                return Err(SelectionError::NotTopmost);
            }
            if !table.card(card).is_face_up() {
                return Err(SelectionError::NotRevealed);
            }
            1
        }
        PileRef::Tableau(_) => {
            if !table.card(card).is_face_up() {
                return Err(SelectionError::FaceDown);
            }
            let run: Vec<&Card> = (offset..source.len())
                .filter_map(|i| source.card_at(i))
                .map(|id| table.card(id))
                .collect();
            check_run(&run).map_err(|_| SelectionError::NotRunStart)?;
            run.len()
        }
    };

    Ok(Selection {
        pile,
        offset,
        card,
        run_len,
    })
}
