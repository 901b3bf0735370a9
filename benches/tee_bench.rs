//! Performance benchmarks

use advent_pipes::{last, map, scan, sum, take, tee_iter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_tee(c: &mut Criterion) {
    c.bench_function("tee_lockstep_100k", |b| {
        b.iter(|| {
            let (left, right) = tee_iter(0..100_000u64);
            black_box(left.zip(right).map(|(x, y)| x ^ y).sum::<u64>())
        });
    });

    c.bench_function("tee_left_then_right_100k", |b| {
        b.iter(|| {
            let (left, right) = tee_iter(0..100_000u64);
            let left_sum: u64 = left.sum();
            let right_sum: u64 = right.sum();
            black_box(left_sum + right_sum)
        });
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let depths: Vec<i64> = (0..10_000).map(|i| (i * 7919) % 1000).collect();

    c.bench_function("scan_last_10k", |b| {
        b.iter(|| {
            black_box(advent_pipes::pipe!(
                depths.iter().copied(),
                scan(
                    |count: i64, depth: &i64, i: usize, all: &[i64]| {
                        count + i64::from(i > 0 && all[i - 1] < *depth)
                    },
                    0,
                ),
                last(),
            ))
        });
    });

    c.bench_function("map_take_sum_10k", |b| {
        b.iter(|| {
            black_box(advent_pipes::pipe!(
                depths.iter().copied(),
                map(|x: i64| x * 2),
                take(5_000),
                sum(0),
            ))
        });
    });
}

criterion_group!(benches, benchmark_tee, benchmark_pipeline);
criterion_main!(benches);
