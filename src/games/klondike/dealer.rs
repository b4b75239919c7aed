//! Building, shuffling and dealing the deck.

use log::info;

use crate::cards::CardArena;
use crate::core::{CardId, GameConfig, GameRng};
use crate::zones::Table;

/// Deals a fresh table for a configuration.
///
/// ```
/// use rust_klondike::core::{GameConfig, GameRng};
/// use rust_klondike::games::klondike::Dealer;
/// use rust_klondike::zones::Pile;
///
/// let config = GameConfig::default();
/// let table = Dealer::new(&config).deal(&mut GameRng::new(7));
///
/// assert_eq!(table.stock().len(), 24);
/// assert_eq!(table.column(6).unwrap().len(), 7);
/// ```
pub struct Dealer<'a> {
    config: &'a GameConfig,
}

impl<'a> Dealer<'a> {
    /// Panics if the configuration cannot be dealt (see [`GameConfig::validate`]).
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        config.validate();
        Self { config }
    }

    /// Every card of the configured deck, shuffled.
    #[must_use]
    pub fn shuffled_deck(&self, rng: &mut GameRng) -> (CardArena, Vec<CardId>) {
        let arena = CardArena::new(self.config.max_rank);
        let mut deck: Vec<CardId> = arena.ids().collect();
        rng.shuffle(&mut deck);
        (arena, deck)
    }

    /// Shuffle and lay out a table.
    ///
    /// Column `i` gets the next `i + 1` cards of the shuffled deck, face down
    /// except its last card. The rest become the stock, all face down, in
    /// deck order.
    #[must_use]
    pub fn deal(&self, rng: &mut GameRng) -> Table {
        let (arena, deck) = self.shuffled_deck(rng);
        let (tableau_cards, stock_cards) = deck.split_at(self.config.tableau_card_count());

        let mut table = Table::new(arena, self.config.tableau_columns);
        for column in 0..self.config.tableau_columns {
            let start = column * (column + 1) / 2;
            for &id in &tableau_cards[start..=start + column] {
                table.deal_to_column(id, column);
            }
            table.flip_column_top(column);
        }
        table.fill_stock(stock_cards.to_vec());

        table.assert_consistent();
        info!(
            "dealt seed {}: {} columns, {} stock cards",
            rng.seed(),
            self.config.tableau_columns,
            stock_cards.len()
        );
        table
    }
}
