use clap::{Args, Parser, Subcommand};
use gridforge::export::ExportFormat;
use gridforge::geometry::{Resolution, TileMeasure};
use gridforge::types::{GridConfig, GridLimits, GridType, Rgb};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridforge", version, about = "Paint, size and export hex and square battle maps")]
pub struct Cli {
    /// Persisted per-family configs (JSON). Defaults are used when absent.
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Allow grids up to 50,000 cells per axis.
    #[arg(long, global = true)]
    pub accelerated: bool,

    /// Debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn limits(&self) -> GridLimits {
        GridLimits::for_capability(self.accelerated)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill a grid (randomly, or from a JSON export) and export it.
    Render(RenderArgs),
    /// Print raw, display and export sizes.
    Dims(DimsArgs),
    /// Compute a display preset and apply it to every family.
    Preset(PresetArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[arg(long, default_value = "square")]
    pub grid_type: GridType,

    /// RNG seed for the random fill. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a generic JSON export instead of a random fill.
    #[arg(long, conflicts_with = "seed")]
    pub from: Option<PathBuf>,

    /// webp, png, jpeg, json, uvtt or foundry.
    #[arg(long, default_value = "webp")]
    pub format: ExportFormat,

    /// Output directory.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// `creator` written into UVTT documents.
    #[arg(long, default_value = "gridforge")]
    pub creator: String,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Args, Debug)]
pub struct DimsArgs {
    #[arg(long, default_value = "square")]
    pub grid_type: GridType,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Screen diagonal in inches.
    #[arg(long)]
    pub diagonal: f64,

    /// 1080p, 1440p, 4k or 8k.
    #[arg(long)]
    pub resolution: Resolution,

    /// inch or 2cm.
    #[arg(long, default_value = "inch")]
    pub tile: TileMeasure,
}

/// Per-field config overrides. Not persisted.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    #[arg(long)]
    pub cols: Option<u32>,
    #[arg(long)]
    pub rows: Option<u32>,
    #[arg(long)]
    pub tile_size: Option<u32>,
    #[arg(long)]
    pub ppi: Option<u32>,
    #[arg(long)]
    pub border_width: Option<u32>,
    /// `#RRGGBB` or `#RGB`.
    #[arg(long)]
    pub border_color: Option<Rgb>,
}

impl ConfigOverrides {
    /// `config` with every given field replaced, clamped to `limits`.
    pub fn apply(&self, config: &GridConfig, limits: GridLimits) -> GridConfig {
        let mut c = config.clone();
        if let Some(v) = self.cols {
            c.cols = v;
        }
        if let Some(v) = self.rows {
            c.rows = v;
        }
        if let Some(v) = self.tile_size {
            c.tile_size = v;
        }
        if let Some(v) = self.ppi {
            c.ppi = v;
        }
        if let Some(v) = self.border_width {
            c.border_width = v;
        }
        if let Some(v) = self.border_color {
            c.border_color = v;
        }
        c.clamped(limits)
    }
}
