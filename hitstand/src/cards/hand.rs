use serde::{Deserialize, Serialize};

use super::Card;

/// Reduces a sequence of cards to a total in `[0, 9]`: each card adds its
/// point value and the sum is taken modulo 10. An empty sequence totals 0.
///
/// Ranks are passed through unchecked. Negative ranks are folded back into
/// range by the Euclidean remainder.
pub fn hand_value(cards: &[Card]) -> u8 {
    let sum: i64 = cards.iter().map(Card::point_value).sum();
    sum.rem_euclid(10) as u8
}

/// The cards dealt to a single hand, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn get_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}
