//! Game configuration.
//!
//! A `GameConfig` fixes the shape of a deal:
//! - `max_rank`: highest rank per suit (13 for a full deck)
//! - `tableau_columns`: number of cascading columns (7 for Klondike)
//! - `seed`: optional seed for a reproducible shuffle
//!
//! The empty-column acceptance rank always equals `max_rank`, so truncated
//! decks keep the "only the highest card opens a column" rule intact.

use serde::{Deserialize, Serialize};

use crate::cards::{Suit, MAX_RANK};

/// Ranks in a full suit.
pub const STANDARD_MAX_RANK: u8 = MAX_RANK;

/// Columns in a standard Klondike tableau.
pub const STANDARD_TABLEAU_COLUMNS: usize = 7;

/// Complete game configuration.
///
/// ```
/// use rust_klondike::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.deck_size(), 52);
/// assert_eq!(config.tableau_card_count(), 28);
/// assert_eq!(config.stock_size(), 24);
/// assert_eq!(config.empty_column_rank(), 13);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest rank in each suit (1-13).
    pub max_rank: u8,

    /// Number of tableau columns. Column `i` is dealt `i + 1` cards.
    pub tableau_columns: usize,

    /// Shuffle seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rank: STANDARD_MAX_RANK,
            tableau_columns: STANDARD_TABLEAU_COLUMNS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Standard Klondike configuration with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highest rank per suit.
    #[must_use]
    pub fn with_max_rank(mut self, max_rank: u8) -> Self {
        self.max_rank = max_rank;
        self.validate();
        self
    }

    /// Set the number of tableau columns.
    #[must_use]
    pub fn with_tableau_columns(mut self, columns: usize) -> Self {
        self.tableau_columns = columns;
        self.validate();
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        Suit::ALL.len() * self.max_rank as usize
    }

    /// Cards dealt into the tableau triangle.
    #[must_use]
    pub fn tableau_card_count(&self) -> usize {
        self.tableau_columns * (self.tableau_columns + 1) / 2
    }

    /// Cards left in the stock after the deal.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.deck_size() - self.tableau_card_count()
    }

    /// Rank a card must have to move onto an empty tableau column.
    #[must_use]
    pub fn empty_column_rank(&self) -> u8 {
        self.max_rank
    }

    /// Check the shape can be dealt.
    ///
    /// Builders call this on every change. A config built field by field
    /// (or deserialised) is checked when a game is dealt from it.
    ///
    /// Panics on a max rank outside `1..=13`, zero columns, or a tableau
    /// triangle larger than the deck.
    pub fn validate(&self) {
        assert!(
            (1..=MAX_RANK).contains(&self.max_rank),
            "Max rank must be 1-{MAX_RANK}, got {}",
            self.max_rank
        );
        assert!(self.tableau_columns > 0, "Must have at least 1 tableau column");
        assert!(
            self.tableau_card_count() <= self.deck_size(),
            "Tableau needs {} cards but the deck has {}",
            self.tableau_card_count(),
            self.deck_size()
        );
    }
}
