//! # rust-hog
//!
//! A rules engine, strategy library and Monte-Carlo harness for Hog, the
//! two-player dice game where each turn you choose how many dice to roll.
//!
//! ## Rules
//!
//! - **Pig Out**: any die showing 1 makes the turn worth 0.
//! - **Free Bacon**: rolling zero dice scores `1 + max` of the opponent's
//!   two digits; by default those points go to the opponent.
//! - **Hogtimus Prime**: a prime turn score jumps to the next prime.
//! - **Hog Wild**: four-sided dice when the scores sum to a multiple of 7.
//! - **Swine Swap**: scores whose last two digits mirror each other trade
//!   places.
//!
//! ## Design Principles
//!
//! 1. **No global randomness**: dice are values (`Dice`, `DiceRack`) passed
//!    to whatever needs them. Tests replay fixed sequences.
//! 2. **Strategies are pure**: `Strategy` maps two scores to a roll count.
//! 3. **Fail fast**: contract violations return `HogError` and propagate.
//!
//! ## Modules
//!
//! - `core`: players, scores, state, dice, RNG, configuration, errors
//! - `rules`: turn resolution, Hog Wild, Swine Swap, primes
//! - `game`: the round-by-round game loop
//! - `strategy`: the `Strategy` trait and bundled strategies
//! - `eval`: Monte-Carlo averaging and strategy experiments

pub mod core;
pub mod eval;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    BonusRecipient, Dice, DiceKind, DiceRack, FairDice, GameRng, GameState, HogConfig, HogError,
    Player, Result, Scores, Status, TestDice, GOAL_SCORE, MAX_ROLLS,
};

pub use crate::rules::{
    free_bacon, is_prime, is_swap, next_prime, resolve_turn, roll_dice, select_dice, take_turn,
    TurnOutcome,
};

pub use crate::game::{play, winner, Game, Round};

pub use crate::strategy::{AlwaysRoll, BaconStrategy, FinalStrategy, Strategy, SwapStrategy};

pub use crate::eval::{
    average_win_rate, averaged, max_scoring_num_rolls, par_averaged, run_experiments, EvalConfig,
    ExperimentReport,
};
