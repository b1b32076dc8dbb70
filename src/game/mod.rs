//! The game loop: two strategies, one dice rack, rounds until the goal.

mod play;
mod round;

pub use play::{play, winner, Game};
pub use round::Round;
