//! Core engine types: players, scores, state, dice, RNG, configuration, errors.
//!
//! Everything above this module (rules, game loop, strategies, evaluation)
//! is built from these pieces.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{BonusRecipient, HogConfig, GOAL_SCORE, MAX_ROLLS};
pub use dice::{Dice, DiceKind, DiceRack, FairDice, TestDice};
pub use error::{HogError, Result};
pub use player::{Player, Scores};
pub use rng::GameRng;
pub use state::{GameState, Status};
