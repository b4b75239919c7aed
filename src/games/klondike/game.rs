//! Klondike game engine.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::dealer::Dealer;
use super::selection::{resolve, Selection, SelectionError, SelectionResult, SelectionState};
use crate::cards::Card;
use crate::core::{Command, GameConfig, GameRng, MoveRequest, PileKind, PileRef, StockResult, TableSnapshot};
use crate::rules::validator::{check_foundation_target, check_tableau_target, validate};
use crate::rules::{GameResult, IllegalMove, MoveError, MoveOutcome, RulesEngine};
use crate::zones::{Pile, Table};

/// Outcome of a dispatched command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Stock(StockResult),
    Selection(SelectionResult),
    Move(MoveOutcome),
    /// A new game was dealt from this seed.
    NewGame { seed: u64 },
}

/// Why a command was rejected. The table is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    Selection(SelectionError),
    Move(MoveError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selection(err) => write!(f, "cannot select: {err}"),
            Self::Move(err) => write!(f, "cannot move: {err}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Selection(err) => Some(err),
            Self::Move(err) => Some(err),
        }
    }
}

impl From<SelectionError> for CommandError {
    fn from(err: SelectionError) -> Self {
        Self::Selection(err)
    }
}

impl From<MoveError> for CommandError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

/// Owns the table of one game and runs every player intent against it.
///
/// Calls are synchronous and run to completion. Independent engines share
/// no state.
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    table: Table,
    selection: SelectionState,
}

impl GameEngine {
    /// Deal a new game. Uses the configured seed, or an OS seed if none.
    ///
    /// Panics if the configuration cannot be dealt.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        config.validate();
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let table = Dealer::new(&config).deal(&mut rng);
        Self {
            config,
            rng,
            table,
            selection: SelectionState::Idle,
        }
    }

    /// Resume play on an already laid-out table.
    ///
    /// Panics if the table does not match the configuration or breaks a
    /// table invariant.
    #[must_use]
    pub fn from_table(config: GameConfig, table: Table) -> Self {
        config.validate();
        assert_eq!(table.max_rank(), config.max_rank, "Table deck does not match config");
        assert_eq!(table.columns().len(), config.tableau_columns, "Table columns do not match config");
        table.assert_consistent();

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            rng,
            table,
            selection: SelectionState::Idle,
        }
    }

    /// Standard game from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// Replace the table with a fresh deal.
    ///
    /// Without a seed, the next seed is forked from the current game's RNG,
    /// so a chain of games from one starting seed is reproducible.
    pub fn new_game(&mut self, seed: Option<u64>) -> u64 {
        let mut rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => self.rng.fork(),
        };
        self.table = Dealer::new(&self.config).deal(&mut rng);
        self.rng = rng;
        self.selection = SelectionState::Idle;
        info!("new game, seed {}", self.rng.seed());
        self.rng.seed()
    }

    // === Queries ===

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Every foundation holds its full suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.table.is_complete()
    }

    /// Heuristic: no productive move is visible and no stock card can ever
    /// be played as things stand.
    ///
    /// This is not a solver. It returns `false` whenever some legal move
    /// exists, even one that leads nowhere, and does not look ahead.
    #[must_use]
    pub fn has_no_moves(&self) -> bool {
        let productive = self.legal_moves().iter().any(|request| self.is_productive(request));
        !productive && !self.stock_has_playable_card()
    }

    /// A king run sliding from one empty column to another changes nothing.
    fn is_productive(&self, request: &MoveRequest) -> bool {
        let from_column_bottom = request.source.is_tableau() && request.source_offset == 0;
        let to_empty_column = matches!(
            request.destination,
            PileRef::Tableau(i) if self.table.column(i).is_some_and(|c| c.is_empty())
        );
        !(from_column_bottom && to_empty_column)
    }

    /// Could any stock card, once cycled to the front, be played right now?
    fn stock_has_playable_card(&self) -> bool {
        self.table.stock().card_ids().iter().any(|&id| self.card_playable(self.table.card(id)))
    }

    fn card_playable(&self, card: &Card) -> bool {
        let empty_rank = self.config.empty_column_rank();
        let to_column = self
            .table
            .columns()
            .iter()
            .any(|c| check_tableau_target(card, c.top().map(|id| self.table.card(id)), empty_rank).is_ok());
        let to_foundation = self.table.foundations().iter().any(|f| {
            check_foundation_target(card, f.suit(), f.top().map(|id| self.table.card(id))).is_ok()
        });
        to_column || to_foundation
    }

    // === Commands ===

    /// Cycle the stock by one card.
    ///
    /// A pending stock selection is cancelled: its card leaves the front.
    pub fn cycle_stock(&mut self) -> StockResult {
        if let SelectionState::Pending(current) = self.selection {
            if current.pile == PileRef::Stock {
                debug!("stock selection cancelled by reveal");
                self.selection = SelectionState::Idle;
            }
        }
        let result = self.table.reveal_stock();
        self.table.assert_consistent();
        match &result {
            StockResult::Revealed(card) => debug!("stock reveals {:?} {}", card.suit, card.rank),
            StockResult::Empty => trace!("stock is empty, nothing to reveal"),
        }
        result
    }

    /// Pick a move source.
    ///
    /// With a selection already pending, picking the same pile again, or
    /// involving the stock or a foundation on either side, cancels it.
    /// Picking a card in another column replaces it.
    pub fn select_source(&mut self, pile: PileRef, offset: usize) -> Result<SelectionResult, SelectionError> {
        if let SelectionState::Pending(current) = self.selection {
            if current.pile == pile || !current.pile.is_tableau() || !pile.is_tableau() {
                debug!("selection on {} cancelled", current.pile);
                self.selection = SelectionState::Idle;
                return Ok(SelectionResult::Cancelled);
            }
        }

        let selection = resolve(&self.table, pile, offset).map_err(|err| {
            trace!("selection of {pile} offset {offset} rejected: {err}");
            err
        })?;
        self.selection = SelectionState::Pending(selection);
        Ok(SelectionResult::Selected(selection))
    }

    /// Pick a move source by kind and index.
    pub fn select(&mut self, kind: PileKind, index: usize, offset: usize) -> Result<SelectionResult, SelectionError> {
        self.select_source(PileRef::new(kind, index), offset)
    }

    /// Try to move `selection` onto `destination`.
    ///
    /// Moving onto the selection's own pile cancels. A selection whose card
    /// is no longer at its pile and offset is rejected as `NotTopmost`. The
    /// selection machine returns to idle whatever the outcome.
    pub fn attempt_move(&mut self, selection: &Selection, destination: PileRef) -> Result<MoveOutcome, MoveError> {
        self.selection = SelectionState::Idle;
        let current = self.table.pile(selection.pile).and_then(|pile| pile.card_at(selection.offset));
        if current != Some(selection.card) {
            trace!("stale selection of {} on {} rejected", selection.card, selection.pile);
            return Err(MoveError::Illegal(IllegalMove::NotTopmost));
        }
        if destination == selection.pile {
            debug!("move onto {destination} cancelled");
            return Ok(MoveOutcome::Cancelled);
        }
        self.apply_move(&MoveRequest::new(selection.pile, selection.offset, destination))
    }

    /// Move the pending selection onto a pile.
    pub fn move_to(&mut self, destination: PileRef) -> Result<MoveOutcome, MoveError> {
        match self.selection {
            SelectionState::Idle => Err(MoveError::NoSelection),
            SelectionState::Pending(selection) => self.attempt_move(&selection, destination),
        }
    }

    /// Dispatch one command from the input layer.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        let outcome = match command {
            Command::Reveal => CommandOutcome::Stock(self.cycle_stock()),
            Command::Select { pile, index, offset } => CommandOutcome::Selection(self.select(pile, index, offset)?),
            Command::Move { pile, index } => CommandOutcome::Move(self.move_to(PileRef::new(pile, index))?),
            Command::NewGame { seed } => CommandOutcome::NewGame {
                seed: self.new_game(seed),
            },
        };
        Ok(outcome)
    }
}

impl RulesEngine for GameEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self) -> Vec<MoveRequest> {
        let mut sources = Vec::new();
        if self.table.revealed_stock_card().is_some() {
            sources.push((PileRef::Stock, 0));
        }
        for (i, column) in self.table.columns().iter().enumerate() {
            for offset in 0..column.len() {
                sources.push((PileRef::Tableau(i), offset));
            }
        }
        for (i, foundation) in self.table.foundations().iter().enumerate() {
            if let Some(top) = foundation.top_offset() {
                sources.push((PileRef::Foundation(i), top));
            }
        }

        let destinations: Vec<PileRef> = (0..self.table.columns().len())
            .map(PileRef::Tableau)
            .chain((0..self.table.foundations().len()).map(PileRef::Foundation))
            .collect();

        sources
            .into_iter()
            .flat_map(|(source, offset)| {
                destinations
                    .iter()
                    .map(move |&destination| MoveRequest::new(source, offset, destination))
            })
            .filter(|request| validate(&self.table, request).is_ok())
            .collect()
    }

    fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveOutcome, MoveError> {
        if let Err(reason) = validate(&self.table, request) {
            trace!(
                "move {} offset {} -> {} rejected: {reason}",
                request.source,
                request.source_offset,
                request.destination
            );
            return Err(MoveError::Illegal(reason));
        }

        let transfer = self.table.transfer(request.source, request.source_offset, request.destination);
        self.table.assert_consistent();
        self.selection = SelectionState::Idle;
        debug!(
            "moved {} card(s) {} -> {}",
            transfer.moved, request.source, request.destination
        );

        Ok(MoveOutcome::Moved {
            cards: transfer.moved,
            exposed: transfer.exposed,
        })
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_won() {
            Some(GameResult::Won)
        } else if self.has_no_moves() {
            Some(GameResult::NoMovesLeft)
        } else {
            None
        }
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "seed: {}", self.seed())?;
        write!(f, "{}", self.table)
    }
}
