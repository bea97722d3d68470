//! Puzzle generation throughput per mode.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use number_pyramid::core::{GameMode, PuzzleRng};
use number_pyramid::generator::{solver, PuzzleGenerator};

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::default();
    let mut group = c.benchmark_group("generate");

    for mode in GameMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            let mut rng = PuzzleRng::new(42);
            b.iter(|| generator.generate_mode(black_box(mode), &mut rng));
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let puzzle =
        PuzzleGenerator::default().generate_mode(GameMode::OhMyGod, &mut PuzzleRng::new(7));
    c.bench_function("solutions", |b| b.iter(|| solver::solutions(black_box(&puzzle))));
}

criterion_group!(benches, bench_generate, bench_solve);
criterion_main!(benches);
