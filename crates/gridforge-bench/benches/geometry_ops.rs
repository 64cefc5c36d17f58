//! Criterion micro-benchmarks for layout and hit testing.

use criterion::{criterion_group, criterion_main, Criterion};
use gridforge_bench::reference_profile;
use gridforge_core::{GridType, Point, ViewState};
use gridforge_geometry::{GridDimensions, HexGeometry, HexLayout, HitTestMode, HitTester, ViewTransform};
use std::hint::black_box;

/// Benchmark: full hex layout of a 100x100 grid, with occupancy bounds.
fn bench_hex_layout_10k(c: &mut Criterion) {
    let p = reference_profile(GridType::HexFlatOdd, 7);
    let geometry = HexGeometry::from_grid(p.grid_type, &p.config).unwrap();

    c.bench_function("hex_layout_10k", |b| {
        b.iter(|| {
            let layout = HexLayout::compute(&geometry, Some(&p.cells));
            black_box(layout.canvas_size());
        });
    });
}

/// Benchmark: display and export sizing for every grid type.
fn bench_dimensions_all_types(c: &mut Criterion) {
    let profiles: Vec<_> = GridType::ALL
        .into_iter()
        .map(|t| reference_profile(t, 7))
        .collect();

    c.bench_function("dimensions_all_types", |b| {
        b.iter(|| {
            for p in &profiles {
                black_box(GridDimensions::display(p.grid_type, &p.config).unwrap());
                black_box(GridDimensions::export(p.grid_type, &p.config).unwrap());
            }
        });
    });
}

/// Benchmark: 10K screen-to-cell lookups, nearest vs exact.
fn bench_hit_test_10k(c: &mut Criterion) {
    let p = reference_profile(GridType::HexPointyEven, 7);
    let view = ViewTransform::new(
        &ViewState {
            pan: Point::new(-120.0, -80.0),
            zoom: 1.3,
        },
        1.0,
    );
    // Deterministic spread of probe points over the visible area.
    let probes: Vec<Point> = (0u64..10_000)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) % 3000) as f64;
            let y = (i.wrapping_mul(1442695040888963407) % 3000) as f64;
            Point::new(x, y)
        })
        .collect();

    for (name, mode) in [("hit_test_nearest_10k", HitTestMode::Nearest), ("hit_test_exact_10k", HitTestMode::Exact)] {
        let tester = HitTester::new(p.grid_type, &p.config, mode).unwrap();
        c.bench_function(name, |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(tester.locate(*probe, &view));
                }
            });
        });
    }
}

criterion_group!(
    benches,
    bench_hex_layout_10k,
    bench_dimensions_all_types,
    bench_hit_test_10k
);
criterion_main!(benches);
