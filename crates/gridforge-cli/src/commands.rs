use crate::args::{DimsArgs, PresetArgs, RenderArgs};
use anyhow::{Context, Result};
use gridforge::export::{
    import_json, DirectorySink, EncodeWorker, ExportFormat, ExportOptions, ExportReport, Exporter,
    GridSnapshot,
};
use gridforge::geometry::{DisplayPreset, GridDimensions};
use gridforge::interact::{ConfigSession, ConfigStore, GridScene};
use gridforge::types::{GridFamily, GridLimits};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;

pub fn render<S: ConfigStore>(store: S, limits: GridLimits, args: RenderArgs) -> Result<()> {
    let session = ConfigSession::new(store, args.grid_type, limits);
    let config = args.overrides.apply(&session.config(), limits);
    let mut scene = GridScene::new(args.grid_type, config, limits);

    match &args.from {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let imported = import_json(&bytes).with_context(|| format!("importing {}", path.display()))?;
            tracing::info!(grid_type = %imported.grid_type, path = %path.display(), "imported snapshot");
            imported.config.validate(limits).with_context(|| {
                format!("{} exceeds the standard grid limits; rerun with --accelerated", path.display())
            })?;
            scene.set_grid_type(imported.grid_type, imported.config);
            scene.replace_cells(imported.cells);
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            tracing::info!(seed, "filling grid");
            scene.regenerate(&mut ChaCha8Rng::seed_from_u64(seed));
        }
    }

    let exporter = Exporter::new().with_options(ExportOptions {
        creator: args.creator,
        ..ExportOptions::default()
    });
    let snapshot = GridSnapshot::new(scene.grid_type(), scene.config(), scene.cells());
    let mut sink = DirectorySink::new(&args.out);

    let report: ExportReport = match args.format {
        ExportFormat::Raster(raster) => {
            let worker = EncodeWorker::spawn()?;
            let pending = exporter.export_raster_deferred(raster, &snapshot, &worker)?;
            tracing::debug!(filename = pending.filename(), "waiting for encoder");
            pending.finish(&mut sink)?
        }
        format => exporter.export(format, &snapshot, &mut sink)?,
    };

    for file in &report.files {
        println!("{}", sink.dir().join(&file.filename).display());
    }
    Ok(())
}

pub fn dims<S: ConfigStore>(store: S, limits: GridLimits, args: DimsArgs) -> Result<()> {
    let session = ConfigSession::new(store, args.grid_type, limits);
    let config = args.overrides.apply(&session.config(), limits);
    let display = GridDimensions::display(args.grid_type, &config)?;
    let export = GridDimensions::export(args.grid_type, &config)?;

    println!("grid:    {} {}x{} tile {}px", args.grid_type, config.cols, config.rows, config.tile_size);
    println!("raw:     {:.2} x {:.2}", display.raw_width, display.raw_height);
    println!(
        "display: {} x {} (scale {:.4})",
        display.canvas_width, display.canvas_height, display.scale
    );
    println!("export:  {} x {}", export.canvas_width, export.canvas_height);
    println!("tile:    {:.3} in at {} ppi", config.tile_inches(), config.ppi);
    Ok(())
}

pub fn preset<S: ConfigStore>(store: S, limits: GridLimits, args: PresetArgs) -> Result<()> {
    let preset = DisplayPreset::new(args.diagonal, args.resolution, args.tile)?;
    let mut session = ConfigSession::new(store, GridFamily::Square.default_type(), limits);
    session.apply_preset(&preset);

    println!("{preset}: {} ppi, {} px tiles", preset.ppi(), preset.tile_pixels());
    for family in GridFamily::ALL {
        let config = session.store().load(family);
        println!("{family}: {}", serde_json::to_string(&config)?);
    }
    Ok(())
}
