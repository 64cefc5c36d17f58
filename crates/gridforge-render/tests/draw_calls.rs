//! Draw-call structure, observed through a recording surface.

use gridforge_core::{GridType, Rgb, BIOMES};
use gridforge_render::GridRenderer;
use gridforge_test_utils::fixtures::{checkerboard, default_config, painted};
use gridforge_test_utils::{DrawCall, RecordingSurface};

const FOREST: Rgb = Rgb::new(0x22, 0x8B, 0x22);

#[test]
fn border_background_comes_first() {
    let cfg = default_config(GridType::Square);
    let cells = painted(&cfg, &[(0, 0, FOREST)]);
    let mut surface = RecordingSurface::new(621, 621);
    GridRenderer::new()
        .render(&mut surface, GridType::Square, &cfg, &cells)
        .unwrap();
    assert_eq!(
        surface.calls[0],
        DrawCall::Rect {
            x: 0.0,
            y: 0.0,
            w: 621.0,
            h: 621.0,
            color: cfg.border_color,
        }
    );
    assert_eq!(
        surface.calls[1],
        DrawCall::Rect {
            x: 1.0,
            y: 1.0,
            w: 30.0,
            h: 30.0,
            color: FOREST,
        }
    );
    assert_eq!(surface.calls.len(), 2);
}

#[test]
fn no_border_draws_only_cells() {
    let mut cfg = default_config(GridType::HexFlatEven);
    cfg.border_width = 0;
    let cells = checkerboard(&cfg, FOREST, BIOMES[3].color);
    let mut surface = RecordingSurface::new(1, 1);
    let stats = GridRenderer::new()
        .render(&mut surface, GridType::HexFlatEven, &cfg, &cells)
        .unwrap();
    assert!(!stats.background_filled);
    assert_eq!(surface.rects().count(), 0);
    assert_eq!(surface.polygons().count(), (cfg.cols * cfg.rows) as usize);
    assert!(surface.polygons().all(|c| match c {
        DrawCall::Polygon { points, .. } => points.len() == 6,
        DrawCall::Rect { .. } => false,
    }));
}

#[test]
fn hex_cells_share_one_silhouette() {
    let cfg = default_config(GridType::HexPointyOdd);
    let cells = painted(&cfg, &[(0, 0, FOREST), (3, 7, FOREST), (10, 2, FOREST)]);
    let mut renderer = GridRenderer::new();
    let mut surface = RecordingSurface::new(1, 1);
    renderer
        .render(&mut surface, GridType::HexPointyOdd, &cfg, &cells)
        .unwrap();
    assert_eq!(renderer.silhouettes().len(), 1);

    // Every polygon is the same shape, translated.
    let shapes: Vec<Vec<(f64, f64)>> = surface
        .polygons()
        .map(|c| match c {
            DrawCall::Polygon { points, .. } => points
                .iter()
                .map(|p| ((p.x - points[0].x) * 1e6).round() / 1e6)
                .zip(points.iter().map(|p| ((p.y - points[0].y) * 1e6).round() / 1e6))
                .collect(),
            DrawCall::Rect { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(shapes.len(), 3);
    assert!(shapes.windows(2).all(|w| w[0] == w[1]));
}
