//! Rules engine trait.
//!
//! Implementors define:
//! - Which moves are legal in the current state
//! - How a move modifies state
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::MoveRequest;
use crate::core::config::GameConfig;
use crate::core::entity::CardId;

use super::validator::IllegalMove;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every foundation is complete.
    Won,
    /// No productive move is visible. Heuristic, see `RulesEngine::is_terminal`.
    NoMovesLeft,
}

/// A move that went through (or was called off).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Cards were relocated.
    Moved {
        /// Number of cards moved.
        cards: usize,
        /// Card turned face up by the move, if any.
        exposed: Option<CardId>,
    },
    /// The selection was dropped without moving anything.
    Cancelled,
}

/// Why a move did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// A move was requested with nothing selected.
    NoSelection,
    /// The move breaks a rule. The table is unchanged.
    Illegal(IllegalMove),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => f.write_str("no card selected"),
            Self::Illegal(reason) => write!(f, "illegal move: {reason}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoSelection => None,
            Self::Illegal(reason) => Some(reason),
        }
    }
}

impl From<IllegalMove> for MoveError {
    fn from(reason: IllegalMove) -> Self {
        Self::Illegal(reason)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: every request that would pass validation right now
/// - `apply_move`: atomic; on error the state must be untouched
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate legal moves from the visible state.
    fn legal_moves(&self) -> Vec<MoveRequest>;

    /// Validate and apply a move.
    fn apply_move(&mut self, request: &MoveRequest) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    ///
    /// `NoMovesLeft` is a best-effort judgement over visible cards, not a
    /// solver verdict.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }
}
