//! Criterion benchmarks for whole-pose transforms.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use holefit::transform::{quantize, rotate, snap_to_hole, QuantizeMode};
use holefit::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for &n in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("rotate_then_round", n), &n, |b, &n| {
            let center = Point::new(50.0, 50.0);
            b.iter_batched(
                || random_points(n, 11),
                |v| {
                    let _q = quantize(&rotate(&v, center, 33.0), QuantizeMode::Round);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("snap_to_hole", n), &n, |b, &n| {
            let hole = random_points(n, 12);
            b.iter_batched(
                || random_points(n, 13),
                |v| {
                    let _s = snap_to_hole(&v, &hole, 2.0);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
