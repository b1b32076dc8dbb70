//! Contract violations raised by the rules engine.
//!
//! Every error here signals a programming mistake on the caller's side
//! (a strategy asking for 11 dice, a turn resolved after the game ended).
//! Nothing is retried; errors propagate with `?` up to whoever started
//! the game or experiment.

use thiserror::Error;

/// Errors produced by turn resolution, dice construction and the game loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HogError {
    #[error("cannot roll {0} dice: the roll count must be between 0 and 10")]
    InvalidRollCount(u32),

    #[error("must roll at least one die")]
    NoRolls,

    #[error("the game should be over: opponent score {score} has reached the goal {goal}")]
    GameOver { score: u32, goal: u32 },

    #[error("test dice need at least one outcome")]
    EmptyDice,

    #[error("dice outcome at position {position} is zero")]
    ZeroFace { position: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HogError>;
