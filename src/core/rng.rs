//! Deterministic random number generation for dice and simulations.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches, one per dice configuration
//! - **Trial streams**: `for_trial` gives every Monte-Carlo trial its own
//!   stream, so trials can run on any thread in any order
//!
//! ```
//! use rust_hog::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut branch = rng.fork();
//!
//! // Original and fork produce different sequences
//! let a: Vec<_> = (0..8).map(|_| rng.roll(6)).collect();
//! let b: Vec<_> = (0..8).map(|_| branch.roll(6)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FORK_MIX: u64 = 0x9E3779B97F4A7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(self.seed.wrapping_add(self.fork_counter.wrapping_mul(FORK_MIX)))
    }

    /// Independent stream for the trial with the given index.
    ///
    /// Does not advance `self`, so the same (seed, index) pair always yields
    /// the same stream regardless of which trials ran before it.
    #[must_use]
    pub fn for_trial(&self, index: u64) -> Self {
        let mixed = (index.wrapping_add(1)).wrapping_mul(FORK_MIX).rotate_left(17);
        Self::new(self.seed ^ mixed)
    }

    /// Roll a single fair die with `sides` faces, returning 1..=sides.
    pub fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }
}
