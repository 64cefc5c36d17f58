//! Criterion micro-benchmarks for rendering and export.

use criterion::{criterion_group, criterion_main, Criterion};
use gridforge_bench::{reference_profile, stress_profile};
use gridforge_core::GridType;
use gridforge_export::{ExportFormat, Exporter, GridSnapshot, MemorySink, RasterFormat};
use gridforge_geometry::GridDimensions;
use gridforge_render::{GridRenderer, RasterSurface};
use gridforge_test_utils::{FixedClock, RecordingSurface};
use std::hint::black_box;

/// Benchmark: draw-call generation for a 400x400 hex grid, no rasterization.
fn bench_render_calls_160k(c: &mut Criterion) {
    let p = stress_profile(GridType::HexPointyOdd, 11);
    let mut renderer = GridRenderer::new();

    c.bench_function("render_calls_hex_160k", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new(1, 1);
            let stats = renderer
                .render(&mut surface, p.grid_type, &p.config, &p.cells)
                .unwrap();
            black_box((stats, surface.calls.len()));
        });
    });
}

/// Benchmark: true-scale rasterization of a 100x100 grid per type.
fn bench_rasterize_10k(c: &mut Criterion) {
    for t in [GridType::Square, GridType::HexFlatEven] {
        let p = reference_profile(t, 11);
        let dims = GridDimensions::export(t, &p.config).unwrap();
        let mut renderer = GridRenderer::new();
        c.bench_function(&format!("rasterize_{t}_10k"), |b| {
            b.iter(|| {
                let mut surface = RasterSurface::new(dims.canvas_width, dims.canvas_height).unwrap();
                renderer.render(&mut surface, t, &p.config, &p.cells).unwrap();
                black_box(surface.pixel(0, 0));
            });
        });
    }
}

/// Benchmark: PNG and JSON export of a 100x100 square grid.
fn bench_export_10k(c: &mut Criterion) {
    let p = reference_profile(GridType::Square, 11);
    let snapshot = GridSnapshot::new(p.grid_type, &p.config, &p.cells);
    let exporter = Exporter::with_clock(FixedClock::default());

    for format in [ExportFormat::Raster(RasterFormat::Png), ExportFormat::Json] {
        c.bench_function(&format!("export_{format}_10k"), |b| {
            b.iter(|| {
                let mut sink = MemorySink::new();
                let report = exporter.export(format, &snapshot, &mut sink).unwrap();
                black_box(report.files[0].len);
            });
        });
    }
}

criterion_group!(
    benches,
    bench_render_calls_160k,
    bench_rasterize_10k,
    bench_export_10k
);
criterion_main!(benches);
