//! Game configuration.
//!
//! Nothing about a match is global: goal, starting scores and the award
//! rules travel with the `HogConfig` handed to the game loop.

use serde::{Deserialize, Serialize};

use super::player::Scores;

/// The score a player must reach to end the game.
pub const GOAL_SCORE: u32 = 100;

/// Largest number of dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Who receives the points of a zero-dice (free bacon) turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusRecipient {
    /// The bonus goes to the opponent of the player who took it.
    #[default]
    Opponent,
    /// The bonus goes to the player who took it.
    Mover,
}

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogConfig {
    /// Score that ends the game (default: 100).
    pub goal: u32,

    /// Scores at the start of the game, first player first.
    pub start: Scores,

    /// Who is awarded the free bacon bonus.
    pub bonus_recipient: BonusRecipient,

    /// When set, a turn with at least one die that scores zero gives the
    /// opponent one point per die rolled.
    pub pig_out_gift: bool,
}

impl Default for HogConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            start: Scores::default(),
            bonus_recipient: BonusRecipient::Opponent,
            pig_out_gift: false,
        }
    }
}

impl HogConfig {
    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        assert!(goal > 0, "Goal must be positive");
        self.goal = goal;
        self
    }

    /// Set the starting scores.
    #[must_use]
    pub fn with_start(mut self, first: u32, second: u32) -> Self {
        self.start = Scores::new(first, second);
        self
    }

    /// Set who receives free bacon points.
    #[must_use]
    pub fn with_bonus_recipient(mut self, recipient: BonusRecipient) -> Self {
        self.bonus_recipient = recipient;
        self
    }

    /// Enable or disable the pig-out gift.
    #[must_use]
    pub fn with_pig_out_gift(mut self, enabled: bool) -> Self {
        self.pig_out_gift = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HogConfig::default();
        assert_eq!(config.goal, 100);
        assert_eq!(config.start.pair(), (0, 0));
        assert_eq!(config.bonus_recipient, BonusRecipient::Opponent);
        assert!(!config.pig_out_gift);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HogConfig::default()
            .with_goal(50)
            .with_start(10, 20)
            .with_bonus_recipient(BonusRecipient::Mover)
            .with_pig_out_gift(true);

        assert_eq!(config.goal, 50);
        assert_eq!(config.start.pair(), (10, 20));
        assert_eq!(config.bonus_recipient, BonusRecipient::Mover);
        assert!(config.pig_out_gift);
    }

    #[test]
    #[should_panic(expected = "Goal must be positive")]
    fn test_zero_goal() {
        let _ = HogConfig::default().with_goal(0);
    }

    #[test]
    fn test_serialization() {
        let config = HogConfig::default().with_goal(77);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: HogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
