use rand::Rng;
use strum_macros::EnumIter;

use crate::{
    strategy::{deck_aware::DeckAwareStrategy, threshold::ThresholdStrategy, Strategy},
    Decision, EngineError, Hand,
};

/// Selects the policy applied to a batch. The discriminants are the values
/// accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum GameType {
    Threshold = 1,
    DeckAware = 2,
}

impl TryFrom<i64> for GameType {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GameType::Threshold),
            2 => Ok(GameType::DeckAware),
            _ => Err(EngineError::InvalidInput(value)),
        }
    }
}

impl From<GameType> for i64 {
    fn from(game_type: GameType) -> Self {
        game_type as i64
    }
}

/// Decides every hand of a batch with the selected policy. The result has
/// one decision per hand, in input order.
///
/// An unknown selector fails before any hand is looked at. `rng` is only
/// drawn from by the threshold policy.
pub fn decide_batch<R: Rng + ?Sized>(
    hands: &[Hand],
    game_type: i64,
    rng: &mut R,
) -> Result<Vec<Decision>, EngineError> {
    let game_type = GameType::try_from(game_type)?;
    let decisions = match game_type {
        GameType::Threshold => play_batch(&mut ThresholdStrategy::new(rng), hands),
        GameType::DeckAware => play_batch(&mut DeckAwareStrategy::new(), hands),
    };
    Ok(decisions)
}

fn play_batch<T: Strategy>(strategy: &mut T, hands: &[Hand]) -> Vec<Decision> {
    strategy.init_with_batch(hands);
    hands
        .iter()
        .map(|hand| strategy.make_decision(hand))
        .collect()
}
