//! Engine throughput: full profile assembly and the hot reductions.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numerology_engine::transit::transits;
use numerology_engine::{compute, reduce_master, sum_letters, Profile};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for name in ["Cher", "John Smith", "Mary Ann Jane Lee", "Jose O'Neil-Garcia de la Vega"] {
        let profile = Profile::new(name, NaiveDate::from_ymd_opt(1981, 5, 5).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(name), &profile, |b, p| {
            b.iter(|| compute(black_box(p), black_box(today())))
        });
    }
    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    c.bench_function("reduce_master", |b| {
        b.iter(|| (0u32..1_000).map(|n| reduce_master(black_box(n))).sum::<u32>())
    });
    c.bench_function("sum_letters", |b| {
        b.iter(|| sum_letters(black_box("Alexandria Ocasio-Cortez")))
    });
}

fn bench_transits(c: &mut Criterion) {
    c.bench_function("transits_timeline", |b| {
        b.iter(|| transits(black_box("Mary Ann Lee"), black_box(45)))
    });
}

criterion_group!(benches, bench_compute, bench_reductions, bench_transits);
criterion_main!(benches);
