//! Benchmarks for the Ichimoku implementation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kumo_core::traits::SeriesIndicator;
use kumo_core::types::{Quote, QuoteSeries};
use kumo_indicators::{rolling_max, Ichimoku};

fn generate_series(size: usize) -> QuoteSeries {
    (0..size)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Quote::new("BENCH", base, base + 1.0, base - 1.0, base + 0.5)
        })
        .collect()
}

fn benchmark_ichimoku(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ichimoku");

    for size in [1000, 10000, 100000].iter() {
        let series = generate_series(*size);

        group.bench_with_input(BenchmarkId::new("compute", size), &series, |b, series| {
            let ichimoku = Ichimoku::new();
            b.iter(|| ichimoku.compute(black_box(series)))
        });
    }

    group.finish();
}

fn benchmark_rolling_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("RollingMax");

    for size in [1000, 10000, 100000].iter() {
        let data: Vec<f64> = (0..*size)
            .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("window_52", size), &data, |b, data| {
            b.iter(|| rolling_max(black_box(data), black_box(52)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ichimoku, benchmark_rolling_max);
criterion_main!(benches);
