//! Turn resolution: Pig Out, Free Bacon and Hogtimus Prime.
//!
//! A turn rolls `n` dice (1..=10) and scores their sum, unless any die shows
//! a 1, in which case it scores 0. A prime total jumps to the next prime.
//! Rolling zero dice instead scores `1 + max(tens, ones)` of the opponent's
//! score, again with the prime jump.
//!
//! A returned value of 0 is ambiguous on its own: it is a pig out only when
//! at least one die was rolled. Free bacon never scores 0.

use smallvec::SmallVec;

use crate::core::{Dice, HogError, Result, MAX_ROLLS};

use super::primes::prime_jump;

/// Face values rolled in one turn, kept inline.
pub type Outcomes = SmallVec<[u32; 10]>;

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Dice rolled, in order. Empty for free bacon.
    pub outcomes: Outcomes,
    /// Points scored by the turn.
    pub points: u32,
}

impl TurnOutcome {
    /// Did the turn roll at least one die and score nothing?
    #[must_use]
    pub fn is_pig_out(&self) -> bool {
        !self.outcomes.is_empty() && self.points == 0
    }
}

fn check_roll_count(num_rolls: u32) -> Result<()> {
    if num_rolls > MAX_ROLLS {
        return Err(HogError::InvalidRollCount(num_rolls));
    }
    Ok(())
}

/// Roll `dice` exactly `num_rolls` times.
///
/// Every die is rolled even after a 1 shows up, so the dice source advances
/// by exactly `num_rolls` outcomes.
pub fn roll_outcomes(num_rolls: u32, dice: &mut dyn Dice) -> Outcomes {
    (0..num_rolls).map(|_| dice.roll().get()).collect()
}

/// Sum of the outcomes, or 0 if any of them is a 1.
#[must_use]
pub fn score_outcomes(outcomes: &[u32]) -> u32 {
    if outcomes.contains(&1) {
        0
    } else {
        outcomes.iter().sum()
    }
}

/// Roll `num_rolls` dice and return the sum, or 0 on a pig out.
///
/// The prime jump is not applied here; see [`take_turn`].
pub fn roll_dice(num_rolls: u32, dice: &mut dyn Dice) -> Result<u32> {
    if num_rolls == 0 {
        return Err(HogError::NoRolls);
    }
    check_roll_count(num_rolls)?;

    Ok(score_outcomes(&roll_outcomes(num_rolls, dice)))
}

/// Free bacon value earned against `opponent_score`, prime jump included.
///
/// Consumes no dice, so strategies can evaluate it freely.
#[must_use]
pub fn free_bacon(opponent_score: u32) -> u32 {
    prime_jump(raw_bacon(opponent_score))
}

/// `1 + max(tens, ones)` of the opponent's score, before the prime jump.
#[must_use]
pub fn raw_bacon(opponent_score: u32) -> u32 {
    1 + (opponent_score % 10).max(opponent_score / 10)
}

/// Resolve a whole turn, keeping the dice that were rolled.
pub fn resolve_turn(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut dyn Dice,
    goal: u32,
) -> Result<TurnOutcome> {
    check_roll_count(num_rolls)?;
    if opponent_score >= goal {
        return Err(HogError::GameOver {
            score: opponent_score,
            goal,
        });
    }

    if num_rolls == 0 {
        return Ok(TurnOutcome {
            outcomes: Outcomes::new(),
            points: free_bacon(opponent_score),
        });
    }

    let outcomes = roll_outcomes(num_rolls, dice);
    let points = prime_jump(score_outcomes(&outcomes));
    Ok(TurnOutcome { outcomes, points })
}

/// Points scored by a turn of `num_rolls` dice (0 means free bacon).
///
/// ```
/// use rust_hog::core::TestDice;
/// use rust_hog::rules::take_turn;
///
/// let mut dice = TestDice::new(&[4, 3]).unwrap();
/// // 4 + 3 = 7 is prime, so the turn is worth 11.
/// assert_eq!(take_turn(2, 0, &mut dice, 100).unwrap(), 11);
/// // Free bacon against 35: 1 + max(3, 5) = 6.
/// assert_eq!(take_turn(0, 35, &mut dice, 100).unwrap(), 6);
/// ```
pub fn take_turn(num_rolls: u32, opponent_score: u32, dice: &mut dyn Dice, goal: u32) -> Result<u32> {
    resolve_turn(num_rolls, opponent_score, dice, goal).map(|turn| turn.points)
}
