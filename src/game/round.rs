//! Record of a single round.

use crate::core::{DiceKind, Player, Scores};
use crate::rules::TurnOutcome;

/// Everything that happened during one round of the game loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number.
    pub number: u32,
    /// Player who moved.
    pub player: Player,
    /// Dice in play, chosen from the scores before the turn.
    pub dice: DiceKind,
    /// Dice requested by the player's strategy.
    pub num_rolls: u32,
    /// Dice rolled and points scored by the turn.
    pub turn: TurnOutcome,
    /// Player credited with `awarded` points.
    pub recipient: Player,
    /// Points added to the recipient's score.
    pub awarded: u32,
    /// Did Swine Swap exchange the scores after the award?
    pub swapped: bool,
    /// Scores at the end of the round.
    pub scores: Scores,
}

impl Round {
    /// Was this a free bacon turn?
    #[must_use]
    pub fn is_free_bacon(&self) -> bool {
        self.num_rolls == 0
    }
}
