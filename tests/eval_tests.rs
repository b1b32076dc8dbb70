//! Evaluation harness integration tests.

use std::num::NonZeroU32;

use rust_hog::core::{Dice, DiceKind, FairDice, GameRng, HogConfig, TestDice};
use rust_hog::eval::{
    average_win_rate, averaged, max_scoring_num_rolls, run_experiments, try_averaged, EvalConfig,
    ExperimentReport,
};
use rust_hog::rules::{roll_dice, take_turn};
use rust_hog::strategy::{AlwaysRoll, BaconStrategy, FinalStrategy};

// =============================================================================
// Averaging
// =============================================================================

#[test]
fn test_averaged_test_dice() {
    let mut dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
    assert_eq!(averaged(1000, || f64::from(dice.roll().get())), 3.75);
}

#[test]
fn test_averaged_raw_roll_of_two() {
    // (3, 1) scores 0, (5, 6) scores 11
    let mut dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
    let mean = try_averaged(1000, || roll_dice(2, &mut dice).map(f64::from)).unwrap();
    assert_eq!(mean, 5.5);
}

#[test]
fn test_averaged_turn_of_two_applies_prime_jump() {
    // Same dice through the full turn: 11 is prime and becomes 13.
    let mut dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
    let mean = try_averaged(1000, || take_turn(2, 0, &mut dice, 100).map(f64::from)).unwrap();
    assert_eq!(mean, 6.5);
}

// =============================================================================
// Max Scoring Rolls
// =============================================================================

#[test]
fn test_max_scoring_num_rolls_constant_three() {
    let mut dice = TestDice::constant(NonZeroU32::new(3).unwrap());
    assert_eq!(max_scoring_num_rolls(&mut dice, 1000).unwrap(), 10);
}

#[test]
fn test_max_scoring_num_rolls_fair_dice() {
    // Expected raw roll with six sides peaks at 5 or 6 dice, with four sides
    // at 3 or 4.
    let mut six = FairDice::six_sided(GameRng::new(1));
    let best = max_scoring_num_rolls(&mut six, 4000).unwrap();
    assert!((4..=7).contains(&best), "six-sided best was {best}");

    let mut four = FairDice::new(DiceKind::FourSided.sides(), GameRng::new(2));
    let best = max_scoring_num_rolls(&mut four, 4000).unwrap();
    assert!((2..=5).contains(&best), "four-sided best was {best}");
}

// =============================================================================
// Win Rates
// =============================================================================

#[test]
fn test_win_rate_is_a_probability() {
    let config = EvalConfig::default().with_samples(200);
    let rate = average_win_rate(&FinalStrategy::default(), &AlwaysRoll(5), &config).unwrap();
    assert!((0.0..=1.0).contains(&rate));
}

#[test]
fn test_win_rate_is_reproducible() {
    let config = EvalConfig::default().with_samples(100).with_seed(3);
    let a = average_win_rate(&BaconStrategy::default(), &AlwaysRoll(5), &config).unwrap();
    let b = average_win_rate(&BaconStrategy::default(), &AlwaysRoll(5), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_win_rate_with_custom_goal() {
    let config = EvalConfig::default()
        .with_samples(100)
        .with_game(HogConfig::default().with_goal(40));
    let rate = average_win_rate(&AlwaysRoll(4), &AlwaysRoll(6), &config).unwrap();
    assert!((0.0..=1.0).contains(&rate));
}

// =============================================================================
// Experiments
// =============================================================================

#[test]
fn test_run_experiments_report() {
    let config = EvalConfig::default().with_samples(50);
    let report = run_experiments(&config).unwrap();

    assert!((1..=10).contains(&report.six_sided_max));
    assert!((1..=10).contains(&report.four_sided_max));
    assert_eq!(report.baseline, "always_roll(5)");

    let names: Vec<_> = report.win_rates.iter().map(|w| w.strategy.as_str()).collect();
    assert_eq!(
        names,
        vec!["always_roll(8)", "bacon_strategy", "swap_strategy", "final_strategy"]
    );
    assert!(report.win_rates.iter().all(|w| (0.0..=1.0).contains(&w.rate)));

    let json = serde_json::to_string(&report).unwrap();
    let back: ExperimentReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}
