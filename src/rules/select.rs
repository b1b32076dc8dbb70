//! Hog Wild: dice selection for the round.

use crate::core::DiceKind;

/// Four-sided dice when the two scores sum to a multiple of 7, six-sided
/// otherwise.
#[must_use]
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % 7 == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}
