pub mod deck;
pub mod hand;

use serde::{Deserialize, Serialize};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

pub const ACE: i32 = 1;
pub const TEN: i32 = 10;
pub const JACK: i32 = 11;
pub const QUEEN: i32 = 12;
pub const KING: i32 = 13;

/// Suits never affect scoring. They only make two cards of the same rank
/// distinguishable when a card is removed from a deck.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// A dealt card. `number` encodes the rank as A=1, 2..=10 literally, J=11,
/// Q=12 and K=13.
///
/// The rank is not validated. Any integer is accepted and takes part in the
/// point arithmetic as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub number: i32,
    pub suit: Suit,
}

impl Card {
    pub fn new(number: i32, suit: Suit) -> Self {
        Card { number, suit }
    }

    /// Points this card adds to a hand before the modulo 10 reduction.
    /// Tens and face cards, and every rank above them, are worth nothing.
    pub fn point_value(&self) -> i64 {
        if self.number >= TEN {
            0
        } else {
            self.number as i64
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            ACE => write!(f, "A{}", self.suit.symbol()),
            2..=9 => write!(f, "{}{}", self.number, self.suit.symbol()),
            TEN => write!(f, "T{}", self.suit.symbol()),
            JACK => write!(f, "J{}", self.suit.symbol()),
            QUEEN => write!(f, "Q{}", self.suit.symbol()),
            KING => write!(f, "K{}", self.suit.symbol()),
            other => write!(f, "({}){}", other, self.suit.symbol()),
        }
    }
}
