//! Monte-Carlo evaluation of dice and strategies.
//!
//! - `average`: averaging repeated trials, sequentially or on rayon
//! - `experiments`: best roll counts, win rates, the experiment report
//! - `config`: sample count, seed and game rules for an evaluation

pub mod average;
pub mod config;
pub mod experiments;

pub use average::{averaged, par_averaged, seeded_averaged, try_averaged};
pub use config::EvalConfig;
pub use experiments::{
    average_win_rate, max_scoring_num_rolls, run_experiments, win_rate, ExperimentReport, WinRate,
};
