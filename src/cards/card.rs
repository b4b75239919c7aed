//! Suits, colours and the card itself.
//!
//! A `Card` has an immutable identity (suit, rank) and one piece of mutable
//! state: whether it is face up. Colour is never stored; it is always
//! computed from the suit.

use serde::{Deserialize, Serialize};

/// Highest rank a suit can have (king).
pub const MAX_RANK: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    /// All suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    /// Position in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Diamonds => 2,
            Suit::Hearts => 3,
        }
    }

    #[must_use]
    pub const fn colour(self) -> Colour {
        match self {
            Suit::Clubs | Suit::Spades => Colour::Black,
            Suit::Diamonds | Suit::Hearts => Colour::Red,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Red,
}

/// Display token for a rank: `A`, `2`..`10`, `J`, `Q`, `K`.
#[must_use]
pub fn rank_token(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

/// A playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!((1..=MAX_RANK).contains(&rank), "Rank must be 1-{MAX_RANK}, got {rank}");
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank, 1 = ace, 11-13 = face cards.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.suit.colour()
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card face up. Re-applying has no further effect.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face down. Re-applying has no further effect.
    pub fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Suit symbol followed by rank token, e.g. `♥A` or `♠10`.
    ///
    /// Defined for face-down cards too; hiding them is the caller's job.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.suit.symbol(), rank_token(self.rank))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
