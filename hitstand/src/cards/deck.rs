use strum::IntoEnumIterator;

use super::{Card, Suit};

const LOWEST_RANK: i32 = 1;
const HIGHEST_RANK: i32 = 9;

/// The cards not yet observed in the current batch. Cards only ever leave
/// the deck; it is never replenished or reshuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 36 card deck: every suit with ranks 1 to 9, ordered by
    /// suit and then by rank.
    ///
    /// Tens and face cards are absent, although hands may still hold them.
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(Suit::iter().count() * HIGHEST_RANK as usize);
        for suit in Suit::iter() {
            for number in LOWEST_RANK..=HIGHEST_RANK {
                cards.push(Card { number, suit });
            }
        }
        Deck { cards }
    }

    /// Removes the first card equal to `card` in the current ordering.
    /// Returns false and leaves the deck untouched when there is no match.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every given card once per occurrence and returns how many were
    /// actually found.
    pub fn remove_cards<'a, I>(&mut self, cards: I) -> usize
    where
        I: IntoIterator<Item = &'a Card>,
    {
        cards
            .into_iter()
            .filter(|card| self.remove_card(card))
            .count()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
