//! The table: every pile of a game plus the card arena.
//!
//! `Table` tracks where each card is and performs the physical side of play:
//! - Placing dealt cards (each card exactly once)
//! - Cycling the stock
//! - Transferring a card or run between piles and exposing the card beneath
//!
//! It does not judge legality. Callers validate with
//! [`crate::rules::validator`] first; a transfer on an unvalidated request is
//! a programming error.
//!
//! ## Invariants
//!
//! - Every arena card is in exactly one pile, and the location index agrees
//! - Stock cards are face down except, optionally, the front card
//! - No tableau card is face down above a face-up card; column tops are face up
//! - Foundation `i` holds `Suit::ALL[i]` with ranks exactly `1..=k`
//!
//! `verify` reports the first violation; `assert_consistent` panics on it.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardArena, Suit};
use crate::core::action::PileRef;
use crate::core::entity::CardId;
use crate::core::state::{CardView, PileSnapshot, StockResult, TableSnapshot};

use super::foundation::Foundation;
use super::pile::Pile;
use super::stock::Stock;
use super::tableau::{Run, TableauColumn};

/// Result of a committed transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    /// Number of cards moved.
    pub moved: usize,
    /// Card flipped face up because it was uncovered (tableau) or moved to
    /// the front (stock).
    pub exposed: Option<CardId>,
}

/// A broken table invariant. Always a defect, never a player error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A card appears in more than one pile slot.
    DuplicateCard(CardId),
    /// An arena card is in no pile.
    MissingCard(CardId),
    /// The location index disagrees with the piles.
    LocationMismatch(CardId),
    /// A stock card other than the front is face up.
    StockFaceUp(CardId),
    /// A face-down card sits above a face-up card.
    FaceDownAboveFaceUp { column: usize },
    /// The top card of a non-empty column is face down.
    HiddenColumnTop { column: usize },
    /// Foundation ranks are not exactly `1..=k` of its suit, or a card is face down.
    FoundationOrder { foundation: usize },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCard(id) => write!(f, "{id} is in more than one pile"),
            Self::MissingCard(id) => write!(f, "{id} is in no pile"),
            Self::LocationMismatch(id) => write!(f, "location index for {id} is stale"),
            Self::StockFaceUp(id) => write!(f, "{id} is face up behind the stock front"),
            Self::FaceDownAboveFaceUp { column } => {
                write!(f, "column {column} has a face-down card above a face-up card")
            }
            Self::HiddenColumnTop { column } => write!(f, "column {column} has a face-down top card"),
            Self::FoundationOrder { foundation } => {
                write!(f, "foundation {foundation} is not an ascending run of its suit")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// All piles of one game.
///
/// Outside the crate a table is only laid out and inspected; cards move
/// through the engine, which validates first.
///
/// ```compile_fail
/// use rust_klondike::{CardArena, PileRef, Table};
///
/// let mut table = Table::new(CardArena::new(13), 7);
/// table.transfer(PileRef::Stock, 0, PileRef::Tableau(0));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    arena: CardArena,
    stock: Stock,
    tableau: Vec<TableauColumn>,
    foundations: Vec<Foundation>,
    /// Card locations: card_id -> pile
    locations: FxHashMap<CardId, PileRef>,
}

impl Table {
    /// Create an empty table over `arena` with `columns` tableau columns.
    #[must_use]
    pub fn new(arena: CardArena, columns: usize) -> Self {
        Self {
            arena,
            stock: Stock::new(),
            tableau: (0..columns).map(|_| TableauColumn::new()).collect(),
            foundations: Suit::ALL.iter().map(|&suit| Foundation::new(suit)).collect(),
            locations: FxHashMap::default(),
        }
    }

    /// Deal a card face down onto a tableau column.
    ///
    /// Panics if the card is already on the table.
    pub fn deal_to_column(&mut self, id: CardId, column: usize) {
        self.claim(id, PileRef::Tableau(column));
        self.arena.flip_down(id);
        self.tableau[column].push(id);
    }

    /// Put the remaining cards into the stock, front first, all face down.
    ///
    /// Panics if any card is already on the table.
    pub fn fill_stock(&mut self, ids: Vec<CardId>) {
        for &id in &ids {
            self.claim(id, PileRef::Stock);
            self.arena.flip_down(id);
        }
        self.stock = Stock::from_ids(ids);
    }

    /// Turn the top card of a column face up.
    pub fn flip_column_top(&mut self, column: usize) -> Option<CardId> {
        let top = self.tableau.get(column)?.top()?;
        self.arena.flip_up(top);
        Some(top)
    }

    fn claim(&mut self, id: CardId, pile: PileRef) {
        if let Some(existing) = self.locations.insert(id, pile) {
            panic!("{id} already placed in {existing}");
        }
    }

    // === Queries ===

    #[must_use]
    pub fn arena(&self) -> &CardArena {
        &self.arena
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        self.arena.get(id)
    }

    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.arena.max_rank()
    }

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&TableauColumn> {
        self.tableau.get(index)
    }

    #[must_use]
    pub fn columns(&self) -> &[TableauColumn] {
        &self.tableau
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Foundation> {
        self.foundations.get(index)
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    /// Resolve a pile reference.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&dyn Pile> {
        match pile {
            PileRef::Stock => Some(&self.stock as &dyn Pile),
            PileRef::Tableau(i) => self.tableau.get(i).map(|c| c as &dyn Pile),
            PileRef::Foundation(i) => self.foundations.get(i).map(|f| f as &dyn Pile),
        }
    }

    /// Pile currently holding `id`.
    #[must_use]
    pub fn location(&self, id: CardId) -> Option<PileRef> {
        self.locations.get(&id).copied()
    }

    /// Front stock card, if it is face up.
    #[must_use]
    pub fn revealed_stock_card(&self) -> Option<CardId> {
        self.stock.front().filter(|&id| self.arena.is_face_up(id))
    }

    /// All four foundations complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let full = self.max_rank() as usize;
        self.foundations.iter().all(|f| f.len() == full)
    }

    // === Mutation ===

    /// Retire the front stock card to the back and reveal the new front.
    pub fn reveal_stock(&mut self) -> StockResult {
        let Some(front) = self.stock.front() else {
            return StockResult::Empty;
        };

        self.arena.flip_down(front);
        self.stock.rotate();

        match self.stock.front() {
            Some(next) => {
                self.arena.flip_up(next);
                StockResult::Revealed(CardView::new(next, self.arena.get(next)))
            }
            None => StockResult::Empty,
        }
    }

    /// Move the card at `offset` of `source` (and, for a column, everything
    /// above it) onto `destination`.
    ///
    /// The caller must have validated the move; bad references panic.
    pub(crate) fn transfer(&mut self, source: PileRef, offset: usize, destination: PileRef) -> Transfer {
        let run: Run = match source {
            PileRef::Stock => self.stock.take_front().into_iter().collect(),
            PileRef::Tableau(i) => self.tableau[i].split_off(offset),
            PileRef::Foundation(i) => self.foundations[i].pop().into_iter().collect(),
        };

        for &id in &run {
            self.locations.insert(id, destination);
        }

        match destination {
            PileRef::Tableau(i) => self.tableau[i].push_run(&run),
            PileRef::Foundation(i) => {
                for &id in &run {
                    self.foundations[i].push(id);
                }
            }
            PileRef::Stock => panic!("cards cannot be moved into the stock"),
        }

        let exposed = match source {
            PileRef::Stock => self.stock.front().filter(|&id| !self.arena.is_face_up(id)),
            PileRef::Tableau(i) => self.tableau[i].top().filter(|&id| !self.arena.is_face_up(id)),
            PileRef::Foundation(_) => None,
        };
        if let Some(id) = exposed {
            self.arena.flip_up(id);
        }

        Transfer {
            moved: run.len(),
            exposed,
        }
    }

    // === Snapshots ===

    fn pile_snapshot(&self, pile: PileRef, ids: Vec<CardId>) -> PileSnapshot {
        PileSnapshot {
            pile,
            cards: ids.into_iter().map(|id| CardView::new(id, self.arena.get(id))).collect(),
        }
    }

    /// Full read-only copy of every pile.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            stock: self.pile_snapshot(PileRef::Stock, self.stock.card_ids()),
            tableau: self
                .tableau
                .iter()
                .enumerate()
                .map(|(i, c)| self.pile_snapshot(PileRef::Tableau(i), c.cards().to_vec()))
                .collect(),
            foundations: self
                .foundations
                .iter()
                .enumerate()
                .map(|(i, f)| self.pile_snapshot(PileRef::Foundation(i), f.cards().to_vec()))
                .collect(),
        }
    }

    // === Invariants ===

    /// Check every table invariant.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashMap<CardId, PileRef> = FxHashMap::default();
        let piles = std::iter::once(PileRef::Stock)
            .chain((0..self.tableau.len()).map(PileRef::Tableau))
            .chain((0..self.foundations.len()).map(PileRef::Foundation));

        for pile_ref in piles {
            let Some(pile) = self.pile(pile_ref) else { continue };
            for id in pile.card_ids() {
                if seen.insert(id, pile_ref).is_some() {
                    return Err(InvariantViolation::DuplicateCard(id));
                }
                if self.location(id) != Some(pile_ref) {
                    return Err(InvariantViolation::LocationMismatch(id));
                }
            }
        }

        if let Some(missing) = self.arena.ids().find(|id| !seen.contains_key(id)) {
            return Err(InvariantViolation::MissingCard(missing));
        }
        if self.locations.len() != seen.len() {
            let stale = self.locations.keys().find(|id| !seen.contains_key(*id)).copied();
            return Err(InvariantViolation::LocationMismatch(stale.unwrap_or(CardId(0))));
        }

        for id in self.stock.card_ids().into_iter().skip(1) {
            if self.arena.is_face_up(id) {
                return Err(InvariantViolation::StockFaceUp(id));
            }
        }

        for (column, pile) in self.tableau.iter().enumerate() {
            let faces: Vec<bool> = pile.cards().iter().map(|&id| self.arena.is_face_up(id)).collect();
            if faces.windows(2).any(|pair| pair[0] && !pair[1]) {
                return Err(InvariantViolation::FaceDownAboveFaceUp { column });
            }
            if faces.last() == Some(&false) {
                return Err(InvariantViolation::HiddenColumnTop { column });
            }
        }

        for (index, foundation) in self.foundations.iter().enumerate() {
            let ordered = foundation.cards().iter().enumerate().all(|(i, &id)| {
                let card = self.arena.get(id);
                card.suit() == foundation.suit() && card.rank() as usize == i + 1 && card.is_face_up()
            });
            if !ordered {
                return Err(InvariantViolation::FoundationOrder { foundation: index });
            }
        }

        Ok(())
    }

    /// Halt on a broken invariant rather than play on with a corrupt table.
    pub fn assert_consistent(&self) {
        if let Err(violation) = self.verify() {
            panic!("table invariant violated: {violation}");
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stock: {}", self.stock.len())?;
        if let Some(id) = self.revealed_stock_card() {
            write!(f, " (showing {})", self.arena.get(id))?;
        }
        writeln!(f)?;

        let tops: Vec<String> = self
            .foundations
            .iter()
            .map(|foundation| match foundation.top() {
                Some(id) => self.arena.get(id).label(),
                None => format!("{}-", foundation.suit().symbol()),
            })
            .collect();
        writeln!(f, "foundations: {}", tops.join(" "))?;

        for column in &self.tableau {
            let cards: Vec<String> = column
                .cards()
                .iter()
                .map(|&id| {
                    let card = self.arena.get(id);
                    if card.is_face_up() {
                        card.label()
                    } else {
                        "??".to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", cards.join(" "))?;
        }
        Ok(())
    }
}
