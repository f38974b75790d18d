use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pentago_engine::core::{Board, Rotation, SimConfig};
use pentago_engine::rules::{evaluate, rotate};
use pentago_engine::sim::random_playout;
use pentago_engine::Player;

fn midgame_board() -> Board {
    "XO.X..
     ..OO.X
     X....O
     .X.O..
     OO..XX
     ..X.O."
        .parse()
        .expect("valid board")
}

fn bench_rotate(c: &mut Criterion) {
    let board = midgame_board();
    let rotations: Vec<Rotation> = Rotation::all().collect();

    c.bench_function("rotate_all_codes", |b| {
        b.iter(|| {
            for &rotation in &rotations {
                black_box(rotate(black_box(&board), rotation));
            }
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| black_box(evaluate(black_box(&board), Player::PlayerOne)))
    });
}

fn bench_playout(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            seed += 1;
            black_box(random_playout(&SimConfig::default().with_seed(seed)))
        })
    });
}

criterion_group!(benches, bench_rotate, bench_evaluate, bench_playout);
criterion_main!(benches);
