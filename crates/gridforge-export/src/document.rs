//! Serialized export documents.

use crate::clock::ExportStamp;
use crate::error::ImportError;
use gridforge_core::{CellMatrix, GridConfig, GridLimits, GridType, Rgb};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version written into, and accepted from, [`GridArchive`] documents.
pub const ARCHIVE_VERSION: &str = "1.0";

// ── Generic JSON ─────────────────────────────────────────────────

/// Complete, re-importable snapshot of a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridArchive {
    /// Document version.
    pub version: String,
    /// Export time, RFC 3339.
    pub timestamp: String,
    /// Grid topology.
    pub grid_type: GridType,
    /// Grid size.
    pub dimensions: ArchiveDimensions,
    /// Tile size in pixels.
    pub tile_size: u32,
    /// Pixels per inch.
    pub ppi: u32,
    /// Grout settings.
    pub border: ArchiveBorder,
    /// `[row][col]` colors, `null` for empty cells.
    pub biome_grid: Vec<Vec<Option<Rgb>>>,
}

/// `{cols, rows}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveDimensions {
    /// Columns.
    pub cols: u32,
    /// Rows.
    pub rows: u32,
}

/// `{width, color}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveBorder {
    /// Grout width in pixels.
    pub width: u32,
    /// Grout color.
    pub color: Rgb,
}

impl GridArchive {
    /// Snapshot `cells` under `config`.
    pub fn new(grid_type: GridType, config: &GridConfig, cells: &CellMatrix, stamp: &ExportStamp) -> Self {
        Self {
            version: ARCHIVE_VERSION.to_string(),
            timestamp: stamp.iso(),
            grid_type,
            dimensions: ArchiveDimensions {
                cols: config.cols,
                rows: config.rows,
            },
            tile_size: config.tile_size,
            ppi: config.ppi,
            border: ArchiveBorder {
                width: config.border_width,
                color: config.border_color,
            },
            biome_grid: cells.to_nested(),
        }
    }
}

/// A grid rebuilt from a [`GridArchive`].
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedGrid {
    /// Grid topology.
    pub grid_type: GridType,
    /// Reconstructed config.
    pub config: GridConfig,
    /// Painted cells, padded to the recorded dimensions.
    pub cells: CellMatrix,
}

/// Parse a generic JSON export.
///
/// The recorded settings must fit the largest supported grid; they are
/// checked before the cell matrix is allocated.
pub fn import_json(bytes: &[u8]) -> Result<ImportedGrid, ImportError> {
    let archive: GridArchive = serde_json::from_slice(bytes)?;
    if archive.version != ARCHIVE_VERSION {
        return Err(ImportError::UnsupportedVersion {
            found: archive.version,
        });
    }
    let ArchiveDimensions { cols, rows } = archive.dimensions;
    let config = GridConfig {
        cols,
        rows,
        tile_size: archive.tile_size,
        ppi: archive.ppi,
        border_width: archive.border.width,
        border_color: archive.border.color,
    };
    config.validate(GridLimits::ACCELERATED)?;
    Ok(ImportedGrid {
        grid_type: archive.grid_type,
        config,
        cells: CellMatrix::from_rows(rows, cols, &archive.biome_grid),
    })
}

// ── UVTT ─────────────────────────────────────────────────────────

/// Universal VTT map document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UvttDocument {
    /// Producing application.
    pub software: String,
    /// Author.
    pub creator: String,
    /// Schema version, always `1.0`.
    pub format: f64,
    /// Grid placement.
    pub resolution: UvttResolution,
    /// Vision blockers. Not modelled; always empty.
    pub line_of_sight: Vec<Value>,
    /// Object vision blockers. Not modelled; always empty.
    pub objects_line_of_sight: Vec<Value>,
    /// Doors. Not modelled; always empty.
    pub portals: Vec<Value>,
    /// Lighting environment.
    pub environment: UvttEnvironment,
    /// Light sources. Not modelled; always empty.
    pub lights: Vec<Value>,
    /// Base64 image, no data-URI prefix.
    pub image: String,
}

/// `resolution` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvttResolution {
    /// Top-left cell, always `{0, 0}`.
    pub map_origin: UvttVector,
    /// `{x: cols, y: rows}`.
    pub map_size: UvttVector,
    /// Tile size in pixels.
    pub pixels_per_grid: u32,
}

/// Integer `{x, y}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvttVector {
    /// x
    pub x: u32,
    /// y
    pub y: u32,
}

/// `environment` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvttEnvironment {
    /// Always `false`.
    pub baked_lighting: bool,
    /// Always `null`.
    pub ambient_light: Option<String>,
}

impl UvttDocument {
    /// Document for a square grid with an inline base64 image.
    pub fn new(config: &GridConfig, software: &str, creator: &str, image_base64: String) -> Self {
        Self {
            software: software.to_string(),
            creator: creator.to_string(),
            format: 1.0,
            resolution: UvttResolution {
                map_origin: UvttVector { x: 0, y: 0 },
                map_size: UvttVector {
                    x: config.cols,
                    y: config.rows,
                },
                pixels_per_grid: config.tile_size,
            },
            line_of_sight: Vec::new(),
            objects_line_of_sight: Vec::new(),
            portals: Vec::new(),
            environment: UvttEnvironment {
                baked_lighting: false,
                ambient_light: None,
            },
            lights: Vec::new(),
            image: image_base64,
        }
    }
}

// ── FoundryVTT ───────────────────────────────────────────────────

/// FoundryVTT numeric grid type.
pub fn foundry_grid_type(grid_type: GridType) -> u8 {
    match grid_type {
        GridType::Square => 1,
        GridType::HexPointyEven => 2,
        GridType::HexPointyOdd => 3,
        GridType::HexFlatEven => 4,
        GridType::HexFlatOdd => 5,
    }
}

/// FoundryVTT scene document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FoundryScene {
    pub name: String,
    pub navigation: bool,
    pub nav_order: u32,
    pub nav_name: String,
    /// Placeholder path the user relocates after import.
    pub img: String,
    pub foreground: Option<String>,
    pub thumb: Option<String>,
    pub initial: Option<Value>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    pub padding: u32,
    pub background_color: Rgb,
    /// See [`foundry_grid_type`].
    pub grid_type: u8,
    /// Grid unit in pixels.
    pub grid: u32,
    pub shift_x: i32,
    pub shift_y: i32,
    pub grid_color: Rgb,
    pub grid_alpha: f64,
    pub grid_distance: u32,
    pub grid_units: String,
    pub token_vision: bool,
    pub fog_exploration: bool,
    /// Epoch milliseconds.
    pub fog_reset: i64,
    pub global_light: bool,
    pub global_light_threshold: Option<f64>,
    pub darkness: u32,
    pub drawings: Vec<Value>,
    pub tokens: Vec<Value>,
    pub lights: Vec<Value>,
    pub notes: Vec<Value>,
    pub sounds: Vec<Value>,
    pub templates: Vec<Value>,
    pub tiles: Vec<Value>,
    pub walls: Vec<Value>,
    pub playlist: Option<String>,
    pub playlist_sound: Option<String>,
    pub journal: Option<String>,
    pub weather: String,
    pub flags: Map<String, Value>,
}

impl FoundryScene {
    /// Scene for `config` (already adjusted for Foundry) whose image is
    /// `width x height` pixels.
    pub fn new(
        name: String,
        grid_type: GridType,
        config: &GridConfig,
        (width, height): (u32, u32),
        stamp: &ExportStamp,
    ) -> Self {
        Self {
            img: format!("worlds/your-world/{name}.webp"),
            name,
            navigation: true,
            nav_order: 0,
            nav_name: String::new(),
            foreground: None,
            thumb: None,
            initial: None,
            width,
            height,
            padding: 0,
            background_color: Rgb::new(0x99, 0x99, 0x99),
            grid_type: foundry_grid_type(grid_type),
            grid: config.tile_size,
            shift_x: 0,
            shift_y: 0,
            grid_color: config.border_color,
            grid_alpha: 0.2,
            grid_distance: 5,
            grid_units: "ft".to_string(),
            token_vision: true,
            fog_exploration: true,
            fog_reset: stamp.epoch_millis(),
            global_light: false,
            global_light_threshold: None,
            darkness: 0,
            drawings: Vec::new(),
            tokens: Vec::new(),
            lights: Vec::new(),
            notes: Vec::new(),
            sounds: Vec::new(),
            templates: Vec::new(),
            tiles: Vec::new(),
            walls: Vec::new(),
            playlist: None,
            playlist_sound: None,
            journal: None,
            weather: String::new(),
            flags: Map::new(),
        }
    }
}
