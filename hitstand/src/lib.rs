pub mod cards;
pub mod decision;
pub mod strategy;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use cards::{deck::Deck, hand::Hand, Card, Suit};
pub use decision::{decide_batch, GameType};
pub use strategy::{
    deck_aware::{improvement_probability, DeckAwareStrategy},
    threshold::ThresholdStrategy,
    Strategy,
};

/// The outcome for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_enum_str, Deserialize_enum_str)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Hit,
    Stand,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The game type selector is neither 1 nor 2. No decision is made for
    /// any hand of the batch.
    #[error("invalid game type {0}, expected 1 (threshold) or 2 (deck aware)")]
    InvalidInput(i64),
}
