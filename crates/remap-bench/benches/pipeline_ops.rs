//! Criterion benchmarks for whole-pipeline point and range conversion.

use criterion::{criterion_group, criterion_main, Criterion};
use remap_bench::{reference_profile, stress_profile};
use remap_pipeline::PipelineConfig;
use std::hint::black_box;

/// Benchmark: reference profile, seeds read as points.
fn bench_reference_points(c: &mut Criterion) {
    let profile = reference_profile(42);
    let pipeline = profile.pipeline(&PipelineConfig::default());
    let points = profile.points();

    c.bench_function("reference_points", |b| {
        b.iter(|| black_box(pipeline.lowest_point(black_box(&points))));
    });
}

/// Benchmark: stress profile ranges, serial, with and without merging.
fn bench_stress_ranges_serial(c: &mut Criterion) {
    let profile = stress_profile(42);
    let plain = profile.pipeline(&PipelineConfig::default());
    let merged = profile.pipeline(&PipelineConfig {
        merge_intervals: true,
        ..Default::default()
    });

    c.bench_function("stress_ranges_serial", |b| {
        b.iter(|| black_box(plain.lowest_range(black_box(&profile.ranges))));
    });
    c.bench_function("stress_ranges_serial_merged", |b| {
        b.iter(|| black_box(merged.lowest_range(black_box(&profile.ranges))));
    });
}

/// Benchmark: stress profile ranges across 4 worker threads.
fn bench_stress_ranges_parallel(c: &mut Criterion) {
    let profile = stress_profile(42);
    let pipeline = profile.pipeline(&PipelineConfig::default());

    c.bench_function("stress_ranges_parallel_4", |b| {
        b.iter(|| black_box(pipeline.lowest_range_parallel(black_box(&profile.ranges), 4)));
    });
}

criterion_group!(
    benches,
    bench_reference_points,
    bench_stress_ranges_serial,
    bench_stress_ranges_parallel
);
criterion_main!(benches);
