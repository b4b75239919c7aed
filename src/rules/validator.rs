//! Move legality.
//!
//! Pure predicates over the table. Nothing here mutates state; the engine
//! applies a move only after [`validate`] returns `Ok`.
//!
//! ## Rules
//!
//! - Empty column: only a card of the deck's maximum rank
//! - Non-empty column: opposite colour, exactly one rank lower
//! - Foundation: matching suit; an ace on empty, else exactly one rank higher
//! - Columns give up whole face-up runs; only single cards go to a foundation
//! - The stock gives up only its revealed front card

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::action::{MoveRequest, PileRef};
use crate::zones::{Pile, Run, Table};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMove {
    /// Rank is not the one the destination needs.
    RankMismatch,
    /// Same colour as the destination's top card.
    ColourMismatch,
    /// Wrong suit for the foundation.
    SuitMismatch,
    /// The source card is not the one that can be taken from its pile.
    NotTopmost,
    /// The cards above the source card are not a face-up alternating run.
    BrokenRun,
    /// The stock front has not been revealed yet.
    FaceDown,
    /// Nothing to move.
    SourceEmpty,
    /// Offset past the end of the source pile.
    NoSuchCard,
    /// Pile index out of range.
    NoSuchPile,
    /// More than one card sent to a foundation.
    RunToFoundation,
    /// Source and destination are the same pile.
    SamePile,
    /// Cards never move into the stock.
    InvalidDestination,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::RankMismatch => "rank does not fit the destination",
            Self::ColourMismatch => "colour must alternate",
            Self::SuitMismatch => "suit does not match the foundation",
            Self::NotTopmost => "card is not the topmost playable card",
            Self::BrokenRun => "cards above are not a face-up run",
            Self::FaceDown => "card is face down",
            Self::SourceEmpty => "source pile is empty",
            Self::NoSuchCard => "no card at that offset",
            Self::NoSuchPile => "no such pile",
            Self::RunToFoundation => "only single cards go to a foundation",
            Self::SamePile => "source and destination are the same pile",
            Self::InvalidDestination => "cards cannot be moved there",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for IllegalMove {}

/// Can `upper` rest directly on `lower` inside a column?
#[must_use]
pub fn stacks_on(upper: &Card, lower: &Card) -> bool {
    upper.colour() != lower.colour() && upper.rank() + 1 == lower.rank()
}

/// Check a card against a tableau destination whose top is `target_top`.
pub fn check_tableau_target(moving: &Card, target_top: Option<&Card>, empty_column_rank: u8) -> Result<(), IllegalMove> {
    match target_top {
        None if moving.rank() == empty_column_rank => Ok(()),
        None => Err(IllegalMove::RankMismatch),
        Some(top) if moving.colour() == top.colour() => Err(IllegalMove::ColourMismatch),
        Some(top) if moving.rank() + 1 != top.rank() => Err(IllegalMove::RankMismatch),
        Some(_) => Ok(()),
    }
}

/// Check a single card against a foundation of `suit` whose top is `target_top`.
pub fn check_foundation_target(moving: &Card, suit: Suit, target_top: Option<&Card>) -> Result<(), IllegalMove> {
    if moving.suit() != suit {
        return Err(IllegalMove::SuitMismatch);
    }
    let next_rank = target_top.map_or(1, |top| top.rank() + 1);
    if moving.rank() == next_rank {
        Ok(())
    } else {
        Err(IllegalMove::RankMismatch)
    }
}

/// Check that `cards` (bottom to top) form a movable run.
pub fn check_run(cards: &[&Card]) -> Result<(), IllegalMove> {
    if cards.iter().any(|card| !card.is_face_up()) {
        return Err(IllegalMove::BrokenRun);
    }
    if cards.windows(2).all(|pair| stacks_on(pair[1], pair[0])) {
        Ok(())
    } else {
        Err(IllegalMove::BrokenRun)
    }
}

/// Collect the cards a request would lift, checking the source side.
pub fn source_run(table: &Table, source: PileRef, offset: usize) -> Result<Run, IllegalMove> {
    let pile = table.pile(source).ok_or(IllegalMove::NoSuchPile)?;
    if pile.is_empty() {
        return Err(IllegalMove::SourceEmpty);
    }
    if offset >= pile.len() {
        return Err(IllegalMove::NoSuchCard);
    }

    match source {
        PileRef::Stock | PileRef::Foundation(_) => {
            if Some(offset) != pile.top_offset() {
                return Err(IllegalMove::NotTopmost);
            }
            let id = pile.card_at(offset).ok_or(IllegalMove::NoSuchCard)?;
            if !table.card(id).is_face_up() {
                return Err(IllegalMove::FaceDown);
            }
            Ok(std::iter::once(id).collect())
        }
        PileRef::Tableau(_) => {
            let run: Run = (offset..pile.len()).filter_map(|i| pile.card_at(i)).collect();
            let cards: Vec<&Card> = run.iter().map(|&id| table.card(id)).collect();
            check_run(&cards)?;
            Ok(run)
        }
    }
}

/// Judge a complete move request against the current table.
pub fn validate(table: &Table, request: &MoveRequest) -> Result<(), IllegalMove> {
    if request.source == request.destination {
        return Err(IllegalMove::SamePile);
    }

    let run = source_run(table, request.source, request.source_offset)?;
    let moving = table.card(run[0]);

    match request.destination {
        PileRef::Stock => Err(IllegalMove::InvalidDestination),
        PileRef::Tableau(i) => {
            let column = table.column(i).ok_or(IllegalMove::NoSuchPile)?;
            let top = column.top().map(|id| table.card(id));
            check_tableau_target(moving, top, table.max_rank())
        }
        PileRef::Foundation(i) => {
            let foundation = table.foundation(i).ok_or(IllegalMove::NoSuchPile)?;
            if run.len() > 1 {
                return Err(IllegalMove::RunToFoundation);
            }
            let top = foundation.top().map(|id| table.card(id));
            check_foundation_target(moving, foundation.suit(), top)
        }
    }
}
