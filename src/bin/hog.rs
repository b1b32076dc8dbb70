//! Hog experiments binary.
//!
//! Options: --run-experiments, --samples, --seed, --goal, --sequential, --json

use clap::Parser;
use rust_hog::core::HogConfig;
use rust_hog::eval::{run_experiments, EvalConfig};

#[derive(Parser)]
#[command(author, version, about = "Play Hog", long_about = None)]
struct Args {
    #[arg(short, long, help = "Runs strategy experiments")]
    run_experiments: bool,

    #[arg(long, default_value_t = 1000, help = "Trials averaged per estimate")]
    samples: usize,

    #[arg(long, default_value_t = 42, help = "Base seed for every trial")]
    seed: u64,

    #[arg(long, default_value_t = rust_hog::core::GOAL_SCORE, help = "Score that ends a game")]
    goal: u32,

    #[arg(long, help = "Run trials on a single thread")]
    sequential: bool,

    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if !args.run_experiments {
        log::info!("nothing to do; pass --run-experiments");
        return;
    }

    if args.samples == 0 || args.goal == 0 {
        log::error!("--samples and --goal must be positive");
        std::process::exit(2);
    }

    let config = EvalConfig::default()
        .with_samples(args.samples)
        .with_seed(args.seed)
        .with_parallel(!args.sequential)
        .with_game(HogConfig::default().with_goal(args.goal));

    match run_experiments(&config) {
        Ok(report) if args.json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("failed to encode report: {err}");
                std::process::exit(1);
            }
        },
        Ok(report) => print!("{report}"),
        Err(err) => {
            log::error!("experiments failed: {err}");
            std::process::exit(1);
        }
    }
}
