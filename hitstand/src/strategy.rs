pub mod deck_aware;
pub mod threshold;

use crate::{Decision, Hand};

/// A hit-or-stand policy applied to every hand of a batch.
pub trait Strategy {
    /// Called once with all hands of the batch before the first decision.
    fn init_with_batch(&mut self, hands: &[Hand]);
    fn make_decision(&mut self, hand: &Hand) -> Decision;
}
