use std::cmp::Ordering;

use rand::Rng;

use super::Strategy;
use crate::{Decision, Hand};

/// Totals below this always hit, totals above it always stand.
pub const BOUNDARY_TOTAL: u8 = 5;
/// Chance of hitting when the total sits exactly on the boundary.
pub const BOUNDARY_HIT_PROBABILITY: f64 = 0.3;

/// Decides from the hand total alone, flipping a weighted coin on the
/// boundary total. The coin is drawn from the injected random source so the
/// boundary can be forced either way.
#[derive(Debug)]
pub struct ThresholdStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> ThresholdStrategy<R> {
    pub fn new(rng: R) -> Self {
        ThresholdStrategy { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Strategy for ThresholdStrategy<R> {
    fn init_with_batch(&mut self, _: &[Hand]) {}

    fn make_decision(&mut self, hand: &Hand) -> Decision {
        match hand.value().cmp(&BOUNDARY_TOTAL) {
            Ordering::Less => Decision::Hit,
            Ordering::Greater => Decision::Stand,
            Ordering::Equal => {
                if self.rng.gen::<f64>() < BOUNDARY_HIT_PROBABILITY {
                    Decision::Hit
                } else {
                    Decision::Stand
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Suit};
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    fn always_low() -> StepRng {
        StepRng::new(0, 0)
    }

    fn always_high() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn hand_with_total(total: i32) -> Hand {
        vec![Card::new(total, Suit::Hearts), Card::new(10, Suit::Spades)].into()
    }

    #[test]
    fn low_totals_always_hit() {
        for rng in [always_low(), always_high()] {
            let mut strategy = ThresholdStrategy::new(rng);
            for total in 0..5 {
                assert_eq!(strategy.make_decision(&hand_with_total(total)), Decision::Hit);
            }
        }
    }

    #[test]
    fn high_totals_always_stand() {
        for rng in [always_low(), always_high()] {
            let mut strategy = ThresholdStrategy::new(rng);
            for total in 6..=9 {
                assert_eq!(strategy.make_decision(&hand_with_total(total)), Decision::Stand);
            }
        }
    }

    #[test]
    fn pair_of_nines_stands() {
        let hand: Hand = vec![Card::new(9, Suit::Hearts), Card::new(9, Suit::Spades)].into();
        let mut strategy = ThresholdStrategy::new(always_low());
        assert_eq!(strategy.make_decision(&hand), Decision::Stand);
    }

    #[test]
    fn single_two_hits_regardless_of_coin() {
        let hand: Hand = vec![Card::new(2, Suit::Hearts)].into();
        let mut strategy = ThresholdStrategy::new(always_low());
        assert_eq!(strategy.make_decision(&hand), Decision::Hit);
        let mut strategy = ThresholdStrategy::new(always_high());
        assert_eq!(strategy.make_decision(&hand), Decision::Hit);
    }

    #[test]
    fn boundary_follows_the_coin() {
        let hand = hand_with_total(5);
        let mut strategy = ThresholdStrategy::new(always_low());
        assert_eq!(strategy.make_decision(&hand), Decision::Hit);
        let mut strategy = ThresholdStrategy::new(always_high());
        assert_eq!(strategy.make_decision(&hand), Decision::Stand);
    }

    #[test]
    fn boundary_hit_rate_converges() {
        let hand = hand_with_total(5);
        let mut strategy = ThresholdStrategy::new(StdRng::seed_from_u64(7));
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| strategy.make_decision(&hand) == Decision::Hit)
            .count();
        let rate = hits as f64 / trials as f64;
        assert!((rate - BOUNDARY_HIT_PROBABILITY).abs() < 0.02, "hit rate {}", rate);
    }

    #[test]
    fn works_with_a_borrowed_rng() {
        let mut rng = always_low();
        let mut strategy = ThresholdStrategy::new(&mut rng);
        assert_eq!(strategy.make_decision(&hand_with_total(5)), Decision::Hit);
    }
}
