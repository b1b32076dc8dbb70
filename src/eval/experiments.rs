//! Strategy experiments built on the averaging harness.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Dice, DiceRack, FairDice, GameRng, Player, Result, MAX_ROLLS};
use crate::game::winner;
use crate::rules::roll_dice;
use crate::strategy::{AlwaysRoll, BaconStrategy, FinalStrategy, Strategy, SwapStrategy, BASELINE_ROLLS};

use super::average::{par_averaged, seeded_averaged, try_averaged};
use super::config::EvalConfig;

/// Number of dice (1 to 10) with the highest average raw roll over
/// `samples` rolls of `dice`. Ties go to the smaller count.
///
/// ```
/// use std::num::NonZeroU32;
/// use rust_hog::core::TestDice;
/// use rust_hog::eval::max_scoring_num_rolls;
///
/// let mut dice = TestDice::constant(NonZeroU32::new(3).unwrap());
/// assert_eq!(max_scoring_num_rolls(&mut dice, 1000).unwrap(), 10);
/// ```
pub fn max_scoring_num_rolls(dice: &mut dyn Dice, samples: usize) -> Result<u32> {
    let mut best = (1, f64::NEG_INFINITY);

    for num_rolls in 1..=MAX_ROLLS {
        let mean = try_averaged(samples, || roll_dice(num_rolls, &mut *dice).map(f64::from))?;
        if mean > best.1 {
            best = (num_rolls, mean);
        }
    }

    Ok(best.0)
}

/// Fraction of games in which `target` wins, `first` moving first.
pub fn win_rate(
    first: &dyn Strategy,
    second: &dyn Strategy,
    target: Player,
    seed: u64,
    config: &EvalConfig,
) -> Result<f64> {
    let trial = |rng: GameRng| -> Result<f64> {
        let mut rack = DiceRack::fair(rng);
        let won = winner(first, second, &mut rack, &config.game)? == target;
        Ok(if won { 1.0 } else { 0.0 })
    };

    if config.parallel {
        par_averaged(config.samples, seed, trial)
    } else {
        seeded_averaged(config.samples, seed, trial)
    }
}

/// Win rate of `strategy` against `baseline`, averaged over moving first
/// and moving second. A tied game counts for whoever moved second.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    config: &EvalConfig,
) -> Result<f64> {
    let as_first = win_rate(strategy, baseline, Player::First, config.seed, config)?;
    let as_second = win_rate(baseline, strategy, Player::Second, config.seed.wrapping_add(1), config)?;
    Ok((as_first + as_second) / 2.0)
}

/// Win rate of one named strategy against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinRate {
    pub strategy: String,
    pub rate: f64,
}

/// Results of [`run_experiments`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub six_sided_max: u32,
    pub four_sided_max: u32,
    pub baseline: String,
    pub win_rates: Vec<WinRate>,
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<40}{}", "max scoring num rolls (six-sided)", self.six_sided_max)?;
        writeln!(f, "{:<40}{}", "max scoring num rolls (four-sided)", self.four_sided_max)?;
        for win_rate in &self.win_rates {
            writeln!(
                f,
                "{:<40}{:.4}",
                format!("{} vs {}", win_rate.strategy, self.baseline),
                win_rate.rate
            )?;
        }
        Ok(())
    }
}

/// Best roll counts for both dice and the win rates of the bundled
/// strategies against always rolling 5.
pub fn run_experiments(config: &EvalConfig) -> Result<ExperimentReport> {
    let mut rng = GameRng::new(config.seed);

    let six_sided_max = max_scoring_num_rolls(&mut FairDice::six_sided(rng.fork()), config.samples)?;
    info!("{:<32}{:<32}", "max scoring rolls d6", six_sided_max);
    let four_sided_max = max_scoring_num_rolls(&mut FairDice::four_sided(rng.fork()), config.samples)?;
    info!("{:<32}{:<32}", "max scoring rolls d4", four_sided_max);

    let baseline = AlwaysRoll(BASELINE_ROLLS);
    let candidates: [(String, Box<dyn Strategy>); 4] = [
        ("always_roll(8)".to_string(), Box::new(AlwaysRoll(8))),
        ("bacon_strategy".to_string(), Box::new(BaconStrategy::default())),
        ("swap_strategy".to_string(), Box::new(SwapStrategy::default())),
        (
            "final_strategy".to_string(),
            Box::new(FinalStrategy {
                goal: config.game.goal,
            }),
        ),
    ];

    let mut win_rates = Vec::with_capacity(candidates.len());
    for (name, strategy) in candidates {
        let rate = average_win_rate(strategy.as_ref(), &baseline, config)?;
        info!("{:<32}{:<32.4}", name, rate);
        win_rates.push(WinRate { strategy: name, rate });
    }

    Ok(ExperimentReport {
        six_sided_max,
        four_sided_max,
        baseline: format!("always_roll({})", BASELINE_ROLLS),
        win_rates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestDice;
    use std::num::NonZeroU32;

    #[test]
    fn test_max_scoring_constant_dice() {
        let mut dice = TestDice::constant(NonZeroU32::new(3).unwrap());
        assert_eq!(max_scoring_num_rolls(&mut dice, 1000).unwrap(), 10);
    }

    #[test]
    fn test_max_scoring_ties_pick_fewest() {
        // Every count pigs out: all averages are 0.
        let mut dice = TestDice::constant(NonZeroU32::MIN);
        assert_eq!(max_scoring_num_rolls(&mut dice, 10).unwrap(), 1);
    }

    #[test]
    fn test_max_scoring_single_die() {
        // 6 then 1: one die averages 3, two or more dice always pig out.
        let mut dice = TestDice::new(&[6, 1]).unwrap();
        assert_eq!(max_scoring_num_rolls(&mut dice, 100).unwrap(), 1);
    }

    #[test]
    fn test_self_play_is_roughly_even() {
        let config = EvalConfig::default().with_samples(400);
        let rate = average_win_rate(&AlwaysRoll(5), &AlwaysRoll(5), &config).unwrap();
        assert!((0.35..=0.65).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let config = EvalConfig::default().with_samples(50);
        let parallel = average_win_rate(&BaconStrategy::default(), &AlwaysRoll(5), &config).unwrap();
        let sequential = average_win_rate(
            &BaconStrategy::default(),
            &AlwaysRoll(5),
            &config.clone().with_parallel(false),
        )
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_report_display() {
        let report = ExperimentReport {
            six_sided_max: 6,
            four_sided_max: 4,
            baseline: "always_roll(5)".to_string(),
            win_rates: vec![WinRate {
                strategy: "bacon_strategy".to_string(),
                rate: 0.5,
            }],
        };
        let text = report.to_string();
        assert!(text.contains("six-sided)"));
        assert!(text.contains("bacon_strategy vs always_roll(5)"));
        assert!(text.contains("0.5000"));
    }
}
