//! Player identification and per-player scores.
//!
//! Hog is strictly a two-player game, so `Player` is an enum rather than an
//! open-ended index, and `Scores` is a fixed pair indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players. `First` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const BOTH: [Player; 2] = [Player::First, Player::Second];

    /// The other player.
    ///
    /// ```
    /// use rust_hog::core::Player;
    ///
    /// assert_eq!(Player::First.other(), Player::Second);
    /// assert_eq!(Player::Second.other(), Player::First);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Both players' scores, always stored in (first, second) order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Create from the first and second player's scores.
    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self { data: [first, second] }
    }

    /// Exchange the two scores.
    pub fn swap(&mut self) {
        self.data.swap(0, 1);
    }

    /// Highest of the two scores.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.data[0].max(self.data[1])
    }

    /// Has either score reached `goal`?
    #[must_use]
    pub fn reached(&self, goal: u32) -> bool {
        self.max() >= goal
    }

    /// (first, second) tuple.
    #[must_use]
    pub const fn pair(&self) -> (u32, u32) {
        (self.data[0], self.data[1])
    }

    /// Scores from `player`'s point of view: (own, opponent).
    #[must_use]
    pub fn perspective(&self, player: Player) -> (u32, u32) {
        (self[player], self[player.other()])
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

impl From<(u32, u32)> for Scores {
    fn from((first, second): (u32, u32)) -> Self {
        Self::new(first, second)
    }
}
