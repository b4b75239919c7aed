//! Deal and shuffle tests.
//!
//! These tests verify the dealer lays out a complete, correctly oriented
//! table and that the shuffle is uniform.

use rust_klondike::core::{GameConfig, GameRng, PileRef};
use rust_klondike::games::klondike::Dealer;
use rust_klondike::{GameEngine, Suit};

// =============================================================================
// Layout
// =============================================================================

/// Column i holds i + 1 cards with only the last face up; the stock holds
/// 24 face-down cards.
#[test]
fn test_standard_layout() {
    let snapshot = GameEngine::with_seed(42).snapshot();

    let first = snapshot.column(0).unwrap();
    assert_eq!(first.len(), 1);
    assert!(first.cards[0].face_up);

    let last = snapshot.column(6).unwrap();
    assert_eq!(last.len(), 7);
    assert_eq!(last.cards.iter().filter(|c| !c.face_up).count(), 6);
    assert!(last.cards[6].face_up);

    assert_eq!(snapshot.stock_count(), 24);
    assert!(snapshot.stock.cards.iter().all(|c| !c.face_up));
    assert!(snapshot.stock_top().is_none());
    assert!(snapshot.foundations.iter().all(|f| f.is_empty()));
}

/// Every column follows the same face pattern.
#[test]
fn test_every_column_shape() {
    let snapshot = GameEngine::with_seed(8).snapshot();

    for (i, column) in snapshot.tableau.iter().enumerate() {
        assert_eq!(column.pile, PileRef::Tableau(i));
        assert_eq!(column.len(), i + 1);
        for (offset, card) in column.cards.iter().enumerate() {
            assert_eq!(card.face_up, offset == i, "column {i} offset {offset}");
        }
    }
}

// =============================================================================
// Conservation
// =============================================================================

/// The dealt cards are exactly the 52-card deck.
#[test]
fn test_deal_conserves_deck() {
    for seed in 0..20 {
        let snapshot = GameEngine::with_seed(seed).snapshot();

        let mut dealt: Vec<(Suit, u8)> = snapshot
            .piles()
            .flat_map(|pile| pile.cards.iter().map(|c| (c.suit, c.rank)))
            .collect();
        dealt.sort();

        let mut deck: Vec<(Suit, u8)> = Suit::ALL
            .iter()
            .flat_map(|&suit| (1..=13).map(move |rank| (suit, rank)))
            .collect();
        deck.sort();

        assert_eq!(dealt, deck, "seed {seed}");
    }
}

/// Every card's location agrees with the snapshot.
#[test]
fn test_locations_agree_with_piles() {
    let engine = GameEngine::with_seed(3);
    let snapshot = engine.snapshot();

    for id in engine.table().arena().ids() {
        let (pile, _, _) = snapshot.find(id).expect("card missing from snapshot");
        assert_eq!(engine.table().location(id), Some(pile));
    }
}

/// A truncated deck deals the same triangle and a smaller stock.
#[test]
fn test_truncated_deck() {
    let engine = GameEngine::new(GameConfig::new().with_max_rank(8).with_seed(1));
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.card_count(), 32);
    assert_eq!(snapshot.stock_count(), 4);
    assert!(snapshot.piles().flat_map(|p| p.cards.iter()).all(|c| c.rank <= 8));
}

// =============================================================================
// Shuffle
// =============================================================================

/// Seeds reproduce deals; different seeds give different deals.
#[test]
fn test_seeded_deals() {
    assert_eq!(GameEngine::with_seed(9).snapshot(), GameEngine::with_seed(9).snapshot());
    assert_ne!(GameEngine::with_seed(9).snapshot(), GameEngine::with_seed(10).snapshot());
}

fn chi_square(counts: &[u32], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&observed| {
            let diff = f64::from(observed) - expected;
            diff * diff / expected
        })
        .sum()
}

/// Each card lands at a given stock position with uniform frequency.
///
/// 51 degrees of freedom: mean 51, sd ~10. A bound of 110 fails a uniform
/// shuffle with probability well under one in a million.
#[test]
fn test_stock_position_uniformity() {
    let config = GameConfig::default();
    let trials = 5200u32;
    let positions = [0usize, 11, 23];
    let mut counts = vec![[0u32; 52]; positions.len()];

    for seed in 0..u64::from(trials) {
        let table = Dealer::new(&config).deal(&mut GameRng::new(seed));
        let stock = table.snapshot().stock;
        for (slot, &position) in positions.iter().enumerate() {
            counts[slot][stock.cards[position].id.index()] += 1;
        }
    }

    let expected = f64::from(trials) / 52.0;
    for (slot, row) in counts.iter().enumerate() {
        let statistic = chi_square(row, expected);
        assert!(
            statistic < 110.0,
            "stock position {} chi-square {statistic:.1}",
            positions[slot]
        );
    }
}

/// The shuffled deck itself is uniform at its first position.
#[test]
fn test_deck_first_card_uniformity() {
    let config = GameConfig::default();
    let dealer = Dealer::new(&config);
    let mut rng = GameRng::new(77);
    let trials = 5200u32;
    let mut counts = [0u32; 52];

    for _ in 0..trials {
        let (_, deck) = dealer.shuffled_deck(&mut rng);
        counts[deck[0].index()] += 1;
    }

    let statistic = chi_square(&counts, f64::from(trials) / 52.0);
    assert!(statistic < 110.0, "chi-square {statistic:.1}");
}
