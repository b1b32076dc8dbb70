use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_hog::core::{DiceRack, GameRng, HogConfig};
use rust_hog::eval::{average_win_rate, EvalConfig};
use rust_hog::game::play;
use rust_hog::strategy::{AlwaysRoll, FinalStrategy};

fn bench_single_game(c: &mut Criterion) {
    let config = HogConfig::default();
    let mut seed = 0u64;
    c.bench_function("play final vs always_roll(5)", |b| {
        b.iter(|| {
            seed += 1;
            let mut rack = DiceRack::fair(GameRng::new(seed));
            black_box(play(&FinalStrategy::default(), &AlwaysRoll(5), &mut rack, &config))
        })
    });
}

fn bench_win_rate(c: &mut Criterion) {
    let sequential = EvalConfig::default().with_samples(200).with_parallel(false);
    let parallel = EvalConfig::default().with_samples(200);

    c.bench_function("win rate 200 sequential", |b| {
        b.iter(|| black_box(average_win_rate(&FinalStrategy::default(), &AlwaysRoll(5), &sequential)))
    });
    c.bench_function("win rate 200 parallel", |b| {
        b.iter(|| black_box(average_win_rate(&FinalStrategy::default(), &AlwaysRoll(5), &parallel)))
    });
}

criterion_group!(benches, bench_single_game, bench_win_rate);
criterion_main!(benches);
