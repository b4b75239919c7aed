//! Move validation and execution tests on hand-built tables.
//!
//! Each scenario lays out a few columns explicitly; every card not listed
//! goes to the stock face down.

use rust_klondike::core::{CardId, GameConfig, MoveRequest, PileRef};
use rust_klondike::{
    CardArena, GameEngine, IllegalMove, MoveError, MoveOutcome, RulesEngine, SelectionError, SelectionResult,
    SelectionState, Suit, Table,
};

/// (suit, rank, face up)
type Slot = (Suit, u8, bool);

const C: Suit = Suit::Clubs;
const S: Suit = Suit::Spades;
const D: Suit = Suit::Diamonds;
const H: Suit = Suit::Hearts;

fn layout(config: &GameConfig, columns: &[&[Slot]]) -> Table {
    let arena = CardArena::new(config.max_rank);
    let mut table = Table::new(arena.clone(), config.tableau_columns);
    let mut placed = Vec::new();

    for (column, slots) in columns.iter().enumerate() {
        for &(suit, rank, face_up) in slots.iter() {
            let id = arena.find(suit, rank).unwrap();
            table.deal_to_column(id, column);
            if face_up {
                table.flip_column_top(column);
            }
            placed.push(id);
        }
    }

    let stock: Vec<CardId> = arena.ids().filter(|id| !placed.contains(id)).collect();
    table.fill_stock(stock);
    table
}

fn engine(columns: &[&[Slot]]) -> GameEngine {
    let config = GameConfig::default().with_seed(0);
    let table = layout(&config, columns);
    GameEngine::from_table(config, table)
}

fn id(engine: &GameEngine, suit: Suit, rank: u8) -> CardId {
    engine.table().arena().find(suit, rank).unwrap()
}

fn column_ids(engine: &GameEngine, column: usize) -> Vec<CardId> {
    engine.table().column(column).unwrap().cards().to_vec()
}

fn select(engine: &mut GameEngine, pile: PileRef, offset: usize) {
    let result = engine.select_source(pile, offset).unwrap();
    assert!(matches!(result, SelectionResult::Selected(_)), "{pile} offset {offset} not selected");
}

// =============================================================================
// Tableau to tableau
// =============================================================================

#[test]
fn test_same_colour_rejected_atomically() {
    let mut engine = engine(&[&[(S, 6, true)], &[(C, 5, true)]]);
    let before = engine.snapshot().fingerprint().unwrap();

    select(&mut engine, PileRef::Tableau(1), 0);
    assert_eq!(
        engine.move_to(PileRef::Tableau(0)),
        Err(MoveError::Illegal(IllegalMove::ColourMismatch))
    );

    assert_eq!(engine.snapshot().fingerprint().unwrap(), before);
    assert_eq!(engine.selection(), SelectionState::Idle);
}

#[test]
fn test_wrong_rank_rejected() {
    let mut engine = engine(&[&[(S, 6, true)], &[(H, 4, true)]]);

    select(&mut engine, PileRef::Tableau(1), 0);
    assert_eq!(
        engine.move_to(PileRef::Tableau(0)),
        Err(MoveError::Illegal(IllegalMove::RankMismatch))
    );
}

#[test]
fn test_single_card_move() {
    let mut engine = engine(&[&[(S, 6, true)], &[(C, 9, false), (H, 5, true)]]);

    select(&mut engine, PileRef::Tableau(1), 1);
    let outcome = engine.move_to(PileRef::Tableau(0)).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            cards: 1,
            exposed: Some(id(&engine, C, 9)),
        }
    );
    assert_eq!(column_ids(&engine, 0), vec![id(&engine, S, 6), id(&engine, H, 5)]);
    assert!(engine.table().card(id(&engine, C, 9)).is_face_up());
}

/// A red 6 carrying a black 5 moves as one unit and uncovers the card below.
#[test]
fn test_run_moves_whole_and_exposes() {
    let mut engine = engine(&[&[(D, 2, false), (H, 6, true), (C, 5, true)], &[(S, 7, true)]]);

    let result = engine.select_source(PileRef::Tableau(0), 1).unwrap();
    let SelectionResult::Selected(selection) = result else {
        panic!("run not selected");
    };
    assert_eq!(selection.run_len, 2);

    let outcome = engine.move_to(PileRef::Tableau(1)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            cards: 2,
            exposed: Some(id(&engine, D, 2)),
        }
    );

    assert_eq!(
        column_ids(&engine, 1),
        vec![id(&engine, S, 7), id(&engine, H, 6), id(&engine, C, 5)]
    );
    assert_eq!(column_ids(&engine, 0), vec![id(&engine, D, 2)]);
    assert!(engine.table().card(id(&engine, D, 2)).is_face_up());
}

/// Selecting inside a run takes it from that card upward.
#[test]
fn test_partial_run_move() {
    let mut engine = engine(&[&[(S, 8, true), (H, 7, true), (C, 6, true)], &[(D, 7, true)]]);

    select(&mut engine, PileRef::Tableau(0), 2);
    let outcome = engine.move_to(PileRef::Tableau(1)).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved { cards: 1, exposed: None });
    assert_eq!(column_ids(&engine, 0), vec![id(&engine, S, 8), id(&engine, H, 7)]);
}

#[test]
fn test_broken_run_not_selectable() {
    let mut engine = engine(&[&[(H, 6, true), (D, 5, true)]]);

    assert_eq!(
        engine.select_source(PileRef::Tableau(0), 0),
        Err(SelectionError::NotRunStart)
    );
    assert_eq!(
        engine.apply_move(&MoveRequest::new(PileRef::Tableau(0), 0, PileRef::Tableau(1))),
        Err(MoveError::Illegal(IllegalMove::BrokenRun))
    );
}

// =============================================================================
// Empty columns
// =============================================================================

#[test]
fn test_king_to_empty_column() {
    let mut engine = engine(&[&[], &[(D, 3, false), (S, 13, true)]]);

    select(&mut engine, PileRef::Tableau(1), 1);
    let outcome = engine.move_to(PileRef::Tableau(0)).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            cards: 1,
            exposed: Some(id(&engine, D, 3)),
        }
    );
    assert_eq!(column_ids(&engine, 0), vec![id(&engine, S, 13)]);
}

#[test]
fn test_queen_not_allowed_on_empty_column() {
    let mut engine = engine(&[&[], &[(H, 12, true)]]);

    select(&mut engine, PileRef::Tableau(1), 0);
    assert_eq!(
        engine.move_to(PileRef::Tableau(0)),
        Err(MoveError::Illegal(IllegalMove::RankMismatch))
    );
}

/// With a truncated deck the highest remaining rank opens empty columns.
#[test]
fn test_empty_column_rank_follows_config() {
    let config = GameConfig::default().with_max_rank(8).with_seed(0);
    let table = layout(&config, &[&[], &[(S, 8, true)], &[(H, 7, true)]]);
    let mut engine = GameEngine::from_table(config, table);

    select(&mut engine, PileRef::Tableau(2), 0);
    assert_eq!(
        engine.move_to(PileRef::Tableau(0)),
        Err(MoveError::Illegal(IllegalMove::RankMismatch))
    );

    select(&mut engine, PileRef::Tableau(1), 0);
    assert!(engine.move_to(PileRef::Tableau(0)).is_ok());
}

// =============================================================================
// Foundations
// =============================================================================

#[test]
fn test_foundation_builds_up_by_suit() {
    let mut engine = engine(&[&[(S, 1, true)], &[(S, 2, true)], &[(S, 3, true)]]);
    let spades = PileRef::foundation_for(S);

    select(&mut engine, PileRef::Tableau(2), 0);
    assert_eq!(
        engine.move_to(spades),
        Err(MoveError::Illegal(IllegalMove::RankMismatch))
    );

    for column in 0..3 {
        select(&mut engine, PileRef::Tableau(column), 0);
        assert!(engine.move_to(spades).is_ok(), "column {column}");
    }

    let top = engine.snapshot().foundation_top(spades.index()).cloned().unwrap();
    assert_eq!((top.suit, top.rank), (S, 3));
}

#[test]
fn test_foundation_rejects_other_suit() {
    let mut engine = engine(&[&[(S, 1, true)]]);

    select(&mut engine, PileRef::Tableau(0), 0);
    assert_eq!(
        engine.move_to(PileRef::foundation_for(H)),
        Err(MoveError::Illegal(IllegalMove::SuitMismatch))
    );
}

#[test]
fn test_run_to_foundation_rejected() {
    let mut engine = engine(&[&[(H, 2, true), (C, 1, true)]]);
    let before = engine.snapshot();

    select(&mut engine, PileRef::Tableau(0), 0);
    assert_eq!(
        engine.move_to(PileRef::foundation_for(H)),
        Err(MoveError::Illegal(IllegalMove::RunToFoundation))
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_foundation_card_returns_to_tableau() {
    let mut engine = engine(&[&[(S, 1, true)], &[(S, 2, true)], &[(H, 3, true)]]);
    let spades = PileRef::foundation_for(S);

    for column in 0..2 {
        select(&mut engine, PileRef::Tableau(column), 0);
        engine.move_to(spades).unwrap();
    }

    assert_eq!(engine.select_source(spades, 0), Err(SelectionError::NotTopmost));

    select(&mut engine, spades, 1);
    let outcome = engine.move_to(PileRef::Tableau(2)).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved { cards: 1, exposed: None });
    assert_eq!(column_ids(&engine, 2), vec![id(&engine, H, 3), id(&engine, S, 2)]);
    assert_eq!(engine.table().foundation(spades.index()).unwrap().cards(), &[id(&engine, S, 1)]);
}

// =============================================================================
// Destinations
// =============================================================================

#[test]
fn test_stock_is_never_a_destination() {
    let mut engine = engine(&[&[(S, 6, true)]]);

    select(&mut engine, PileRef::Tableau(0), 0);
    assert_eq!(
        engine.move_to(PileRef::Stock),
        Err(MoveError::Illegal(IllegalMove::InvalidDestination))
    );
}

#[test]
fn test_out_of_range_destination() {
    let mut engine = engine(&[&[(S, 13, true)]]);

    select(&mut engine, PileRef::Tableau(0), 0);
    assert_eq!(
        engine.move_to(PileRef::Tableau(7)),
        Err(MoveError::Illegal(IllegalMove::NoSuchPile))
    );
}

// =============================================================================
// Legal move enumeration
// =============================================================================

#[test]
fn test_legal_moves_match_validation() {
    let mut engine = engine(&[&[(S, 1, true)], &[(C, 9, false), (H, 6, true)], &[(S, 7, true)], &[]]);
    let moves = engine.legal_moves();

    let ace_home = MoveRequest::new(PileRef::Tableau(0), 0, PileRef::foundation_for(S));
    let six_on_seven = MoveRequest::new(PileRef::Tableau(1), 1, PileRef::Tableau(2));
    assert!(moves.contains(&ace_home));
    assert!(moves.contains(&six_on_seven));

    let before = engine.snapshot();
    for request in &moves {
        let mut probe = GameEngine::from_table(engine.config().clone(), engine.table().clone());
        assert!(probe.apply_move(request).is_ok(), "{request:?}");
    }
    assert_eq!(engine.snapshot(), before);

    assert!(engine.apply_move(&six_on_seven).is_ok());
}
