use serde::{Deserialize, Serialize};

use crate::rules::{free_bacon, is_swap};

use super::{Strategy, BASELINE_ROLLS};

/// Takes free bacon when the resulting score would swap with a higher
/// opponent score, and rolls `num_rolls` dice otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStrategy {
    pub num_rolls: u32,
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self {
            num_rolls: BASELINE_ROLLS,
        }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let landed = score + free_bacon(opponent_score);
        if landed < opponent_score && is_swap(landed, opponent_score) {
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
    fn test_beneficial_swap() {
        // bacon against 41 is 1 + max(1, 4) = 5 -> 7; 7 + 7 = 14 mirrors 41
        assert_eq!(SwapStrategy::default().num_rolls(7, 41), 0);
    }

    #[test]
    fn test_no_swap() {
        assert_eq!(SwapStrategy::default().num_rolls(10, 41), 5);
        assert_eq!(SwapStrategy { num_rolls: 3 }.num_rolls(0, 0), 3);
    }

    #[test]
    fn test_harmful_swap_is_avoided() {
        // bacon against 12 is 3 -> 5; 16 + 5 = 21 mirrors 12 but is higher
        assert_eq!(SwapStrategy::default().num_rolls(16, 12), 5);
    }
}
