//! The rules of Hog.
//!
//! Pure functions, no game state:
//! - `turn`: turn resolution (Pig Out, Free Bacon, Hogtimus Prime)
//! - `primes`: primality helpers
//! - `select`: Hog Wild dice selection
//! - `swap`: Swine Swap detection
//!
//! The game loop in `crate::game` composes them into rounds.

pub mod primes;
pub mod select;
pub mod swap;
pub mod turn;

pub use primes::{is_prime, next_prime, prime_jump};
pub use select::select_dice;
pub use swap::{is_swap, swap_digits};
pub use turn::{
    free_bacon, raw_bacon, resolve_turn, roll_dice, roll_outcomes, score_outcomes, take_turn,
    Outcomes, TurnOutcome,
};
