//! The export pipeline.

use crate::clock::{Clock, ExportStamp, SystemClock};
use crate::document::{FoundryScene, GridArchive, UvttDocument};
use crate::error::{EnvironmentError, ExportError, ExportStep, ValidationError};
use crate::format::{ExportFormat, RasterFormat};
use crate::raster::{encode, render_snapshot};
use crate::sink::{DownloadSink, ExportFile};
use crate::worker::{EncodeWorker, PendingRaster};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gridforge_core::{CellMatrix, GridConfig, GridType};
use gridforge_geometry::{GridDimensions, GridLayout};
use serde::Serialize;

/// Smallest grid unit, in pixels, FoundryVTT accepts. Applies to both the
/// configured `ppi` and the exported tile size.
pub const FOUNDRY_MIN_GRID: u32 = 50;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Read-only view of the grid being exported.
#[derive(Clone, Copy, Debug)]
pub struct GridSnapshot<'a> {
    /// Grid topology.
    pub grid_type: GridType,
    /// Active config.
    pub config: &'a GridConfig,
    /// Painted cells.
    pub cells: &'a CellMatrix,
}

impl<'a> GridSnapshot<'a> {
    /// Bundle the three parts.
    pub fn new(grid_type: GridType, config: &'a GridConfig, cells: &'a CellMatrix) -> Self {
        Self {
            grid_type,
            config,
            cells,
        }
    }

    /// `grid_{type}_{cols}x{rows}_{stamp}`.
    fn base_name(&self, stamp: &ExportStamp) -> String {
        format!(
            "grid_{}_{}x{}_{}",
            self.grid_type,
            self.config.cols,
            self.config.rows,
            stamp.compact()
        )
    }
}

/// Attribution written into UVTT documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// `software` field.
    pub software: String,
    /// `creator` field.
    pub creator: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            software: "gridforge".to_string(),
            creator: "gridforge".to_string(),
        }
    }
}

/// One file handed to the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveredFile {
    /// Filename.
    pub filename: String,
    /// MIME type.
    pub media_type: &'static str,
    /// Size in bytes.
    pub len: usize,
}

/// Files delivered by one export, in delivery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Format requested.
    pub format: ExportFormat,
    /// Delivered files.
    pub files: Vec<DeliveredFile>,
}

impl ExportReport {
    pub(crate) fn new(format: ExportFormat) -> Self {
        Self {
            format,
            files: Vec::new(),
        }
    }

    /// Names of the delivered files.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.filename.as_str())
    }
}

/// Hand `file` to `sink` and record it.
pub(crate) fn deliver(
    sink: &mut dyn DownloadSink,
    file: ExportFile,
    report: &mut ExportReport,
) -> Result<(), EnvironmentError> {
    sink.deliver(&file)
        .map_err(|source| EnvironmentError::Delivery {
            filename: file.filename.clone(),
            source,
        })?;
    tracing::info!(filename = %file.filename, bytes = file.bytes.len(), "export delivered");
    report.files.push(DeliveredFile {
        filename: file.filename,
        media_type: file.media_type,
        len: file.bytes.len(),
    });
    Ok(())
}

fn to_json<T: Serialize>(doc: &T) -> Result<Vec<u8>, EnvironmentError> {
    serde_json::to_vec_pretty(doc).map_err(EnvironmentError::from)
}

/// Config FoundryVTT receives: tile at least [`FOUNDRY_MIN_GRID`], no grout.
pub fn foundry_config(config: &GridConfig) -> GridConfig {
    GridConfig {
        tile_size: config.tile_size.max(FOUNDRY_MIN_GRID),
        border_width: 0,
        ..config.clone()
    }
}

/// Runs exports against a [`Clock`].
///
/// Stateless between calls; each export takes one timestamp shared by all
/// files it produces.
#[derive(Clone, Debug, Default)]
pub struct Exporter<C: Clock = SystemClock> {
    clock: C,
    options: ExportOptions,
}

impl Exporter<SystemClock> {
    /// Exporter on the system clock with default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Exporter<C> {
    /// Exporter on `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            options: ExportOptions::default(),
        }
    }

    /// Replace the attribution options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Check `format`'s preconditions without producing anything.
    ///
    /// Order: empty grid, hex grid for UVTT, `ppi` for FoundryVTT, then
    /// the layout of the config actually rendered.
    pub fn validate(&self, format: ExportFormat, snapshot: &GridSnapshot<'_>) -> Result<(), ValidationError> {
        if !snapshot.cells.has_content() {
            return Err(ValidationError::EmptyGrid);
        }
        if format == ExportFormat::Uvtt && snapshot.grid_type.is_hex() {
            return Err(ValidationError::HexUnsupported {
                grid_type: snapshot.grid_type,
            });
        }
        let layout_config = if format == ExportFormat::Foundry {
            if snapshot.config.ppi < FOUNDRY_MIN_GRID {
                return Err(ValidationError::PpiTooLow {
                    ppi: snapshot.config.ppi,
                    min: FOUNDRY_MIN_GRID,
                });
            }
            foundry_config(snapshot.config)
        } else {
            snapshot.config.clone()
        };
        // JSON needs no layout, but a config with no layout is not worth
        // archiving either.
        GridLayout::new(snapshot.grid_type, &layout_config).map_err(ValidationError::InvalidGeometry)?;
        Ok(())
    }

    /// Export `snapshot` as `format` into `sink`.
    ///
    /// Validation failures deliver nothing. Environment failures are
    /// logged and returned; for FoundryVTT a failure after the scene
    /// document was delivered yields [`ExportError::Partial`].
    pub fn export(
        &self,
        format: ExportFormat,
        snapshot: &GridSnapshot<'_>,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportReport, ExportError> {
        self.validate(format, snapshot)?;
        let stamp = ExportStamp::now(&self.clock);
        let result = match format {
            ExportFormat::Raster(raster) => self.export_raster(raster, snapshot, &stamp, sink),
            ExportFormat::Json => self.export_json(snapshot, &stamp, sink),
            ExportFormat::Uvtt => self.export_uvtt(snapshot, &stamp, sink),
            ExportFormat::Foundry => self.export_foundry(snapshot, &stamp, sink),
        };
        if let Err(e) = &result {
            tracing::error!(format = %format, error = %e, "export failed");
        }
        result
    }

    /// Render now, encode on `worker`.
    ///
    /// Validation and rendering happen before this returns; the returned
    /// handle delivers the file once the encode completes.
    pub fn export_raster_deferred(
        &self,
        format: RasterFormat,
        snapshot: &GridSnapshot<'_>,
        worker: &EncodeWorker,
    ) -> Result<PendingRaster, ExportError> {
        self.validate(ExportFormat::Raster(format), snapshot)?;
        let stamp = ExportStamp::now(&self.clock);
        let image = render_snapshot(snapshot.grid_type, snapshot.config, snapshot.cells)?;
        let reply = worker.submit(image, format)?;
        let filename = format!("{}.{}", snapshot.base_name(&stamp), format.extension());
        tracing::debug!(filename = %filename, "raster encode queued");
        Ok(PendingRaster::new(filename, format, reply))
    }

    fn export_raster(
        &self,
        format: RasterFormat,
        snapshot: &GridSnapshot<'_>,
        stamp: &ExportStamp,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportReport, ExportError> {
        let image = render_snapshot(snapshot.grid_type, snapshot.config, snapshot.cells)?;
        let bytes = encode(&image, format)?;
        let mut report = ExportReport::new(ExportFormat::Raster(format));
        let file = ExportFile {
            filename: format!("{}.{}", snapshot.base_name(stamp), format.extension()),
            media_type: format.media_type(),
            bytes,
        };
        deliver(sink, file, &mut report)?;
        Ok(report)
    }

    fn export_json(
        &self,
        snapshot: &GridSnapshot<'_>,
        stamp: &ExportStamp,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportReport, ExportError> {
        let archive = GridArchive::new(snapshot.grid_type, snapshot.config, snapshot.cells, stamp);
        let mut report = ExportReport::new(ExportFormat::Json);
        let file = ExportFile {
            filename: format!("{}.json", snapshot.base_name(stamp)),
            media_type: JSON_MEDIA_TYPE,
            bytes: to_json(&archive)?,
        };
        deliver(sink, file, &mut report)?;
        Ok(report)
    }

    fn export_uvtt(
        &self,
        snapshot: &GridSnapshot<'_>,
        stamp: &ExportStamp,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportReport, ExportError> {
        let image = render_snapshot(snapshot.grid_type, snapshot.config, snapshot.cells)?;
        let webp = encode(&image, RasterFormat::Webp)?;
        let doc = UvttDocument::new(
            snapshot.config,
            &self.options.software,
            &self.options.creator,
            BASE64.encode(webp),
        );
        let mut report = ExportReport::new(ExportFormat::Uvtt);
        let file = ExportFile {
            filename: format!("{}.uvtt", snapshot.base_name(stamp)),
            media_type: JSON_MEDIA_TYPE,
            bytes: to_json(&doc)?,
        };
        deliver(sink, file, &mut report)?;
        Ok(report)
    }

    fn export_foundry(
        &self,
        snapshot: &GridSnapshot<'_>,
        stamp: &ExportStamp,
        sink: &mut dyn DownloadSink,
    ) -> Result<ExportReport, ExportError> {
        let config = foundry_config(snapshot.config);
        let base = snapshot.base_name(stamp);
        let dims = GridDimensions::export(snapshot.grid_type, &config)
            .map_err(ValidationError::InvalidGeometry)?;
        let mut report = ExportReport::new(ExportFormat::Foundry);

        // Step 1: the scene document. Nothing is delivered yet, so a
        // failure here is a plain environment error.
        let scene = FoundryScene::new(
            format!("{base}_scene"),
            snapshot.grid_type,
            &config,
            (dims.canvas_width, dims.canvas_height),
            stamp,
        );
        let file = ExportFile {
            filename: format!("{base}_foundry.json"),
            media_type: JSON_MEDIA_TYPE,
            bytes: to_json(&scene)?,
        };
        deliver(sink, file, &mut report)?;

        // Step 2: the companion image. The scene stays delivered.
        let image_step = render_snapshot(snapshot.grid_type, &config, snapshot.cells)
            .map_err(EnvironmentError::Surface)
            .and_then(|image| encode(&image, RasterFormat::Webp))
            .and_then(|bytes| {
                let file = ExportFile {
                    filename: format!("{base}.webp"),
                    media_type: RasterFormat::Webp.media_type(),
                    bytes,
                };
                deliver(sink, file, &mut report)
            });
        match image_step {
            Ok(()) => Ok(report),
            Err(source) => Err(ExportError::Partial {
                format: ExportFormat::Foundry,
                completed: report,
                failed: ExportStep::Image,
                source,
            }),
        }
    }
}
