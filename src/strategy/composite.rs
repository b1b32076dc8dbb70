//! The composite "final" strategy.
//!
//! A layered heuristic. Checks run in a fixed order and the first one that
//! fires decides the turn:
//!
//! 1. chase a swap by letting the opponent's score grow into our mirror
//! 2. take free bacon when it lands on a prime (before the bacon's own jump)
//! 3. take free bacon when it wins the game without a swap
//! 4. roll exactly the gap between the opponent and our mirrored score
//! 5. take free bacon when it produces a swap
//! 6. defer to [`BaconStrategy`] with margin 6
//! 7. defer to [`SwapStrategy`]
//! 8. take free bacon to steer away from Hog Wild sums
//! 9. otherwise roll 7 to 10 dice, depending on how far a swap is
//!
//! The order is tuned by experiment, not derived. It is not optimal play.

use serde::{Deserialize, Serialize};

use crate::core::{GOAL_SCORE, MAX_ROLLS};
use crate::rules::{is_prime, is_swap, prime_jump, raw_bacon};

use super::{BaconStrategy, Strategy, SwapStrategy};

/// Largest running sum step tried when steering away from Hog Wild.
const HOG_WILD_LOOKAHEAD: u32 = 6;

/// Layered heuristic combining the bacon and swap strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStrategy {
    /// Goal used to recognise a game-winning free bacon.
    pub goal: u32,
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self { goal: GOAL_SCORE }
    }
}

/// `hi` followed by the decimal digits of `lo`, e.g. (3, 1) -> 31.
fn concat_digits(hi: u32, lo: u32) -> u32 {
    let mut shift = 10;
    while shift <= lo {
        shift *= 10;
    }
    hi * shift + lo
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let (tens, ones) = (score / 10, score % 10);

        if tens < ones {
            if let Some(rolls) = (2..=MAX_ROLLS)
                .rev()
                .find(|&rolls| is_swap(score, opponent_score + rolls))
            {
                return rolls;
            }
        }

        let raw = raw_bacon(opponent_score);
        if is_prime(score + raw) {
            return 0;
        }

        let landed = score + prime_jump(raw);
        if landed >= self.goal && !is_swap(landed, opponent_score) {
            return 0;
        }

        if !is_swap(score, opponent_score) && opponent_score > score {
            let mirrored = concat_digits(ones, tens);
            if let Some(gap) = mirrored.checked_sub(opponent_score) {
                if gap <= MAX_ROLLS {
                    return gap;
                }
            }
        }

        if is_swap(landed, opponent_score) {
            return 0;
        }

        if BaconStrategy::new(6, super::BASELINE_ROLLS).num_rolls(score, opponent_score) == 0 {
            return 0;
        }

        if SwapStrategy::default().num_rolls(score, opponent_score) == 0 {
            return 0;
        }

        let mut running = score;
        for step in 1..=HOG_WILD_LOOKAHEAD {
            running += step;
            if (running + opponent_score) % 7 == 0 {
                return 0;
            }
        }

        let mut rolls = HOG_WILD_LOOKAHEAD + 1;
        let mut opponent = opponent_score;
        while !is_swap(running, opponent) && rolls < MAX_ROLLS {
            opponent += rolls;
            rolls += 1;
        }
        rolls
    }
}
