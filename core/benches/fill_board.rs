use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minesweep_core::*;

fn first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for difficulty in Difficulty::ALL {
        let config = difficulty.config();
        let center = (config.size / 2, config.size / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(difficulty.name()),
            &difficulty,
            |b, &difficulty| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    let mut game = GameState::from_difficulty(difficulty, seed);
                    black_box(game.reveal_cell(center).unwrap())
                });
            },
        );
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    // a single mine in the corner leaves one region covering the whole board
    let config = GameConfig::new(Difficulty::Expert.config().size, 1).unwrap();
    let size = config.size;

    c.bench_function("flood_fill_open_board", |b| {
        b.iter(|| {
            let generator = FixedMineGenerator::new(&[(0, 0)]);
            let mut game = GameState::with_generator(config, generator);
            game.reveal_cell((size - 1, size - 1)).unwrap();
            black_box(game.clear_adjacent_cells((size - 1, size - 1)).unwrap())
        });
    });
}

criterion_group!(benches, first_reveal, flood_fill);
criterion_main!(benches);
