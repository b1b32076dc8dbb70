//! Evaluation configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::HogConfig;

/// Monte-Carlo evaluation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Trials averaged per estimate (default: 1000).
    pub samples: usize,

    /// Base seed. Trial `i` always uses the stream derived from
    /// (seed, i), so results do not depend on scheduling.
    pub seed: u64,

    /// Spread trials over the rayon thread pool.
    pub parallel: bool,

    /// Rules for every simulated game.
    pub game: HogConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            seed: 42,
            parallel: true,
            game: HogConfig::default(),
        }
    }
}

impl EvalConfig {
    /// Set the number of samples.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        assert!(samples > 0, "Must average at least one sample");
        self.samples = samples;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run trials sequentially or in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the game rules.
    #[must_use]
    pub fn with_game(mut self, game: HogConfig) -> Self {
        self.game = game;
        self
    }
}
