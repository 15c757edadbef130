use super::Strategy;
use crate::{Deck, Decision, Hand};

/// The improvement probability must be strictly above this to hit.
pub const HIT_PROBABILITY_THRESHOLD: f64 = 0.4;

/// Probability that one more card drawn from `deck` ends on a strictly
/// higher total than `total`. A draw that wraps past 9 lowers the total and
/// does not count.
///
/// An empty deck has nothing to draw, so the probability is 0.
pub fn improvement_probability(total: u8, deck: &Deck) -> f64 {
    if deck.is_empty() {
        return 0.0;
    }
    let total = total as i64;
    let improving = deck
        .iter()
        .filter(|card| (card.number as i64 + total).rem_euclid(10) > total)
        .count();
    improving as f64 / deck.len() as f64
}

/// Decides by looking at what is left in a 36 card deck once every card of
/// the batch has been taken out.
#[derive(Debug, Clone, Default)]
pub struct DeckAwareStrategy {
    deck: Deck,
}

impl DeckAwareStrategy {
    pub fn new() -> Self {
        DeckAwareStrategy { deck: Deck::new() }
    }

    /// Starts from a given deck instead of a full one.
    pub fn with_deck(deck: Deck) -> Self {
        DeckAwareStrategy { deck }
    }

    pub fn get_deck(&self) -> &Deck {
        &self.deck
    }
}

impl Strategy for DeckAwareStrategy {
    /// A single removal pass over the whole batch. Later decisions only read
    /// the deck, so every hand sees the same reduced deck.
    fn init_with_batch(&mut self, hands: &[Hand]) {
        for hand in hands {
            self.deck.remove_cards(hand.get_cards());
        }
    }

    fn make_decision(&mut self, hand: &Hand) -> Decision {
        if improvement_probability(hand.value(), &self.deck) > HIT_PROBABILITY_THRESHOLD {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}
