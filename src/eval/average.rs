//! Averaging repeated stochastic trials.
//!
//! Trials are folded lazily: nothing is collected, each result is added as
//! it is produced. The seeded variants hand trial `i` its own `GameRng`
//! stream, which makes them safe to run on the rayon pool and gives the same
//! trials whichever way they run.

use rayon::prelude::*;

use crate::core::{GameRng, Result};

/// Mean of `samples` calls to `trial`.
///
/// ```
/// use rust_hog::core::{Dice, TestDice};
/// use rust_hog::eval::averaged;
///
/// let mut dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
/// assert_eq!(averaged(1000, || f64::from(dice.roll().get())), 3.75);
/// ```
pub fn averaged<F>(samples: usize, trial: F) -> f64
where
    F: FnMut() -> f64,
{
    assert!(samples > 0, "Must average at least one sample");
    let total: f64 = std::iter::repeat_with(trial).take(samples).sum();
    total / samples as f64
}

/// Mean of `samples` fallible trials; stops at the first error.
pub fn try_averaged<F>(samples: usize, trial: F) -> Result<f64>
where
    F: FnMut() -> Result<f64>,
{
    assert!(samples > 0, "Must average at least one sample");
    let total: f64 = std::iter::repeat_with(trial).take(samples).sum::<Result<f64>>()?;
    Ok(total / samples as f64)
}

/// Mean of `samples` seeded trials, run one after another.
pub fn seeded_averaged<F>(samples: usize, seed: u64, trial: F) -> Result<f64>
where
    F: Fn(GameRng) -> Result<f64>,
{
    let base = GameRng::new(seed);
    let mut index = 0u64;
    try_averaged(samples, || {
        let rng = base.for_trial(index);
        index += 1;
        trial(rng)
    })
}

/// Mean of `samples` seeded trials spread over the rayon pool.
///
/// Trial `i` sees the same RNG stream as in [`seeded_averaged`].
pub fn par_averaged<F>(samples: usize, seed: u64, trial: F) -> Result<f64>
where
    F: Fn(GameRng) -> Result<f64> + Sync + Send,
{
    assert!(samples > 0, "Must average at least one sample");
    let base = GameRng::new(seed);

    let total = (0..samples as u64)
        .into_par_iter()
        .map(|index| trial(base.for_trial(index)))
        .try_reduce(|| 0.0, |a, b| Ok(a + b))?;

    Ok(total / samples as f64)
}
