use serde::{Deserialize, Serialize};

use crate::rules::free_bacon;

use super::{Strategy, BASELINE_ROLLS};

/// Takes free bacon whenever it is worth at least `margin` points, and rolls
/// `num_rolls` dice otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl BaconStrategy {
    pub const fn new(margin: u32, num_rolls: u32) -> Self {
        Self { margin, num_rolls }
    }
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self::new(8, BASELINE_ROLLS)
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(BaconStrategy::default(), BaconStrategy::new(8, 5));
    }

    #[test]
    fn test_takes_large_bacon() {
        let strategy = BaconStrategy::default();
        // 1 + max(4, 7) = 8
        assert_eq!(strategy.num_rolls(0, 47), 0);
        // 1 + max(1, 2) = 3 -> 5
        assert_eq!(strategy.num_rolls(0, 12), 5);
    }

    #[test]
    fn test_margin_counts_the_prime_jump() {
        // 1 + max(0, 6) = 7 -> 11
        assert_eq!(BaconStrategy::new(11, 4).num_rolls(0, 6), 0);
        assert_eq!(BaconStrategy::new(12, 4).num_rolls(0, 6), 4);
    }
}
