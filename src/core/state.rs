//! Game state for a single match.
//!
//! ## GameState
//!
//! - Both scores, in (first, second) order
//! - The player about to move
//! - The goal and the number of rounds played
//!
//! The state only changes through the game loop in `crate::game`.

use serde::{Deserialize, Serialize};

use super::config::HogConfig;
use super::player::{Player, Scores};

/// Whether the game still has rounds to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Finished,
}

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current scores.
    pub scores: Scores,

    /// Player who moves next.
    pub active_player: Player,

    /// Score that ends the game.
    pub goal: u32,

    /// Rounds played so far.
    pub rounds: u32,
}

impl GameState {
    /// Fresh state from a configuration. The first player moves first.
    #[must_use]
    pub fn new(config: &HogConfig) -> Self {
        Self {
            scores: config.start,
            active_player: Player::First,
            goal: config.goal,
            rounds: 0,
        }
    }

    /// Status as seen at the top of the next round.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.scores.reached(self.goal) {
            Status::Finished
        } else {
            Status::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status() == Status::Finished
    }

    /// Player with the strictly higher score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let (first, second) = self.scores.pair();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Player::First),
            std::cmp::Ordering::Less => Some(Player::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}
