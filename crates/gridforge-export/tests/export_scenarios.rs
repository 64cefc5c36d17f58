//! End-to-end export scenarios against recording sinks.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gridforge_core::{GridType, Rgb, BIOMES};
use gridforge_export::{
    import_json, EnvironmentError, ExportError, ExportFormat, ExportOptions, ExportStep, Exporter,
    GridSnapshot, MemorySink, RasterFormat, ValidationError,
};
use gridforge_test_utils::fixtures::{biome_stripes, checkerboard, default_config, empty_for, painted};
use gridforge_test_utils::{FailingSink, FixedClock};

const FOREST: Rgb = Rgb::new(0x22, 0x8B, 0x22);

fn exporter() -> Exporter<FixedClock> {
    Exporter::with_clock(FixedClock::default())
}

// ── Preconditions ────────────────────────────────────────────────

#[test]
fn empty_grid_produces_no_files() {
    for t in GridType::ALL {
        let cfg = default_config(t);
        let cells = empty_for(&cfg);
        let mut sink = FailingSink::after(usize::MAX);
        for format in ExportFormat::ALL {
            let err = exporter()
                .export(format, &GridSnapshot::new(t, &cfg, &cells), &mut sink)
                .unwrap_err();
            assert_eq!(err.to_string(), "Grid is empty. Please generate a map first.");
        }
        assert_eq!(sink.attempts, 0);
    }
}

#[test]
fn uvtt_hex_fails_before_rendering() {
    let cfg = default_config(GridType::HexFlatOdd);
    let cells = biome_stripes(&cfg);
    let mut sink = FailingSink::after(usize::MAX);
    let err = exporter()
        .export(ExportFormat::Uvtt, &GridSnapshot::new(GridType::HexFlatOdd, &cfg, &cells), &mut sink)
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::HexUnsupported {
            grid_type: GridType::HexFlatOdd
        })
    ));
    assert_eq!(sink.attempts, 0);
}

#[test]
fn foundry_ppi_30_is_rejected() {
    let mut cfg = default_config(GridType::Square);
    cfg.ppi = 30;
    let cells = painted(&cfg, &[(0, 0, FOREST)]);
    let mut sink = MemorySink::new();
    let err = exporter()
        .export(ExportFormat::Foundry, &GridSnapshot::new(GridType::Square, &cfg, &cells), &mut sink)
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("less than 50"));
    assert!(sink.files.is_empty());
}

// ── Raster ───────────────────────────────────────────────────────

#[test]
fn square_png_is_621_pixels() {
    let cfg = default_config(GridType::Square);
    let cells = checkerboard(&cfg, FOREST, BIOMES[0].color);
    let mut sink = MemorySink::new();
    let report = exporter()
        .export(
            ExportFormat::Raster(RasterFormat::Png),
            &GridSnapshot::new(GridType::Square, &cfg, &cells),
            &mut sink,
        )
        .unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].len, sink.files[0].bytes.len());

    let img = image::load_from_memory(&sink.files[0].bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (621, 621));
    // Grout, then cell (0,0), then cell (0,1).
    assert_eq!(img.get_pixel(0, 10).0, Rgb::BLACK.to_rgba());
    assert_eq!(img.get_pixel(10, 10).0, FOREST.to_rgba());
    assert_eq!(img.get_pixel(40, 10).0, BIOMES[0].color.to_rgba());
}

#[test]
fn borderless_raster_has_white_background() {
    let mut cfg = default_config(GridType::HexPointyOdd);
    cfg.border_width = 0;
    let cells = painted(&cfg, &[(5, 5, FOREST)]);
    let mut sink = MemorySink::new();
    exporter()
        .export(
            ExportFormat::Raster(RasterFormat::Png),
            &GridSnapshot::new(GridType::HexPointyOdd, &cfg, &cells),
            &mut sink,
        )
        .unwrap();
    let img = image::load_from_memory(&sink.files[0].bytes).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, Rgb::WHITE.to_rgba());
    assert!(img.pixels().any(|p| p.0 == FOREST.to_rgba()));
}

// ── Documents ────────────────────────────────────────────────────

#[test]
fn json_export_reimports() {
    let cfg = default_config(GridType::HexPointyEven);
    let cells = painted(&cfg, &[(0, 0, FOREST), (29, 24, BIOMES[6].color)]);
    let mut sink = MemorySink::new();
    exporter()
        .export(ExportFormat::Json, &GridSnapshot::new(GridType::HexPointyEven, &cfg, &cells), &mut sink)
        .unwrap();
    let back = import_json(&sink.files[0].bytes).unwrap();
    assert_eq!(back.grid_type, GridType::HexPointyEven);
    assert_eq!(back.config, cfg);
    assert_eq!(back.cells, cells);
}

#[test]
fn uvtt_embeds_webp() {
    let cfg = default_config(GridType::Square);
    let cells = painted(&cfg, &[(3, 3, FOREST)]);
    let mut sink = MemorySink::new();
    exporter()
        .with_options(ExportOptions {
            software: "mapper".into(),
            creator: "dm".into(),
        })
        .export(ExportFormat::Uvtt, &GridSnapshot::new(GridType::Square, &cfg, &cells), &mut sink)
        .unwrap();
    assert!(sink.files[0].filename.ends_with(".uvtt"));
    let doc: serde_json::Value = serde_json::from_slice(&sink.files[0].bytes).unwrap();
    assert_eq!(doc["software"], "mapper");
    assert_eq!(doc["creator"], "dm");
    assert_eq!(doc["resolution"]["map_size"]["x"], 20);
    assert_eq!(doc["resolution"]["pixels_per_grid"], 30);

    let image = doc["image"].as_str().unwrap();
    assert!(!image.starts_with("data:"));
    let bytes = BASE64.decode(image).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (621, 621));
}

// ── Compound ─────────────────────────────────────────────────────

#[test]
fn foundry_delivers_scene_then_image() {
    let cfg = default_config(GridType::HexFlatEven);
    let cells = biome_stripes(&cfg);
    let mut sink = MemorySink::new();
    let report = exporter()
        .export(ExportFormat::Foundry, &GridSnapshot::new(GridType::HexFlatEven, &cfg, &cells), &mut sink)
        .unwrap();
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].media_type, "application/json");
    assert_eq!(report.files[1].media_type, "image/webp");

    let scene: serde_json::Value = serde_json::from_slice(&sink.files[0].bytes).unwrap();
    assert_eq!(scene["gridType"], 4);
    assert_eq!(scene["grid"], 50);
    let img = image::load_from_memory(&sink.files[1].bytes).unwrap();
    assert_eq!(scene["width"], img.width());
    assert_eq!(scene["height"], img.height());
}

#[test]
fn foundry_second_step_failure_reports_first() {
    let cfg = default_config(GridType::Square);
    let cells = painted(&cfg, &[(0, 0, FOREST)]);
    let mut sink = FailingSink::after(1);
    let err = exporter()
        .export(ExportFormat::Foundry, &GridSnapshot::new(GridType::Square, &cfg, &cells), &mut sink)
        .unwrap_err();
    let ExportError::Partial {
        format,
        completed,
        failed,
        source,
    } = err
    else {
        panic!("expected a partial export");
    };
    assert_eq!(format, ExportFormat::Foundry);
    assert_eq!(failed, ExportStep::Image);
    assert!(matches!(source, EnvironmentError::Delivery { .. }));
    assert_eq!(completed.files.len(), 1);
    assert_eq!(sink.delivered.len(), 1);
    assert_eq!(sink.attempts, 2);
    assert_eq!(completed.files[0].filename, sink.delivered[0].filename);
}
