use serde::{Deserialize, Serialize};

use super::Strategy;

/// Always rolls the same number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysRoll(pub u32);

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_scores() {
        let strategy = AlwaysRoll(5);
        assert_eq!(strategy.num_rolls(0, 0), 5);
        assert_eq!(strategy.num_rolls(99, 99), 5);
        assert_eq!(AlwaysRoll(0).num_rolls(40, 12), 0);
    }
}
