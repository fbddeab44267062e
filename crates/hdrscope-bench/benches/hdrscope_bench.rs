//! Benchmarks for hdrscope operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use hdrscope_core::{PixelTriplet, TransferMode, ViewSettings};
use hdrscope_io::pattern;
use hdrscope_ops::{probe, HistogramEngine};
use hdrscope_transfer::{curve, hlg, pq, srgb, SampleGrid, TransferFunction};

/// Scalar transfer functions over a batch of inputs.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::encode(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("pq_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| pq::encode(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("pq_signal_to_nits", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&s| pq::signal_to_nits(black_box(s)).unwrap_or(0.0))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("hlg_encode", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| hlg::encode(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Full chart redraw: every curve at chart resolution, both directions.
fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");

    for mode in [TransferMode::Oetf, TransferMode::Eotf] {
        let settings = ViewSettings { mode, ..ViewSettings::default() };
        group.bench_function(format!("sample_all_{}", mode), |b| {
            b.iter(|| curve::sample_all(black_box(&settings), 512))
        });
    }

    let settings = ViewSettings::default();
    let grid = SampleGrid::unit(4096).unwrap();
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("hlg_4096", |b| {
        b.iter(|| curve::sample(TransferFunction::Hlg, black_box(&grid), &settings))
    });

    group.finish();
}

/// Hover readout for one pixel; runs on every pointer move.
fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe");

    for mode in [TransferMode::Oetf, TransferMode::Eotf] {
        let settings = ViewSettings { mode, ..ViewSettings::default() };
        group.bench_function(format!("triplet_{}", mode), |b| {
            b.iter(|| probe::probe(black_box(PixelTriplet::new(200, 128, 30)), &settings))
        });
    }

    group.finish();
}

/// Histogram of rasters up to UHD.
fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    group.sample_size(20);

    let engine = HistogramEngine::default();
    for (w, h) in [(640u32, 360u32), (1920, 1080), (3840, 2160)] {
        let raster = pattern::color_bars(w, h);
        let label = format!("{}x{}", w, h);
        group.throughput(Throughput::Elements(w as u64 * h as u64));

        group.bench_with_input(BenchmarkId::new("serial", &label), &raster, |b, r| {
            b.iter(|| engine.calculate(black_box(&r.view())))
        });

        group.bench_with_input(BenchmarkId::new("parallel", &label), &raster, |b, r| {
            b.iter(|| engine.calculate_par(black_box(&r.view())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_curves, bench_probe, bench_histogram);
criterion_main!(benches);
