//! Strategies: how many dice to roll given the two scores.
//!
//! A strategy is a pure decision function `(score, opponent_score) -> rolls`
//! with `rolls` in `0..=10`. Zero asks for free bacon.
//!
//! Closures are strategies too:
//!
//! ```
//! use rust_hog::strategy::{AlwaysRoll, Strategy};
//!
//! let cautious = |score: u32, _opponent: u32| -> u32 { if score > 90 { 1 } else { 4 } };
//! assert_eq!(cautious.num_rolls(95, 0), 1);
//! assert_eq!(AlwaysRoll(5).num_rolls(99, 99), 5);
//! ```

pub mod always;
pub mod bacon;
pub mod composite;
pub mod swap;

pub use always::AlwaysRoll;
pub use bacon::BaconStrategy;
pub use composite::FinalStrategy;
pub use swap::SwapStrategy;

/// Chooses a number of dice for the player about to move.
pub trait Strategy: Send + Sync {
    /// Number of dice to roll, given the mover's score and the opponent's.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32 + Send + Sync,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

/// Default number of dice the bundled strategies fall back to.
pub const BASELINE_ROLLS: u32 = 5;
