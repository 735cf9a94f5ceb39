use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indicatif::ProgressBar;
use war_simulator::card::{make_deck, shuffle, DEFAULT_RANK_SPAN};
use war_simulator::config::SimulationConfig;
use war_simulator::rng::GameRng;
use war_simulator::simulation::{run_batch, run_game};

fn benchmark_single_game(c: &mut Criterion) {
    let config = SimulationConfig::default();

    c.bench_function("single_game_seed_12345", |b| {
        b.iter(|| run_game(black_box(&config), GameRng::new(Some(black_box(12345)))))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let config = SimulationConfig {
        num_games: 100,
        seed: Some(0),
        ..Default::default()
    };

    c.bench_function("100_games", |b| {
        b.iter(|| run_batch(black_box(&config), &ProgressBar::hidden()))
    });
}

fn benchmark_shuffle(c: &mut Criterion) {
    let deck = make_deck(DEFAULT_RANK_SPAN);
    let mut rng = GameRng::new(Some(1));

    c.bench_function("shuffle_52", |b| {
        b.iter(|| shuffle(black_box(deck.clone()), &mut rng))
    });
}

criterion_group!(benches, benchmark_single_game, benchmark_batch, benchmark_shuffle);
criterion_main!(benches);
