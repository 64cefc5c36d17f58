//! Export pipeline for gridforge.
//!
//! An export takes a [`GridSnapshot`] (grid type, config and painted
//! cells), checks the format's preconditions, renders at true scale when
//! an image is needed, serializes, and hands the resulting files to a
//! [`DownloadSink`].
//!
//! # Formats
//!
//! - raster `webp` / `png` / `jpeg`
//! - generic JSON ([`GridArchive`]), re-importable with [`import_json`]
//! - UVTT ([`UvttDocument`]): square grids only, image inlined as base64
//! - FoundryVTT ([`FoundryScene`]): scene JSON plus a companion WebP
//!
//! # Failure
//!
//! Precondition failures are [`ValidationError`]s and happen before any
//! file is delivered. Rendering, encoding and delivery failures are
//! [`EnvironmentError`]s. The FoundryVTT export delivers two files in
//! order; if the second step fails the first file stays delivered and the
//! error is [`ExportError::Partial`], carrying the report of what succeeded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod document;
pub mod error;
pub mod format;
pub mod pipeline;
mod raster;
pub mod sink;
pub mod worker;

pub use clock::{Clock, ExportStamp, SystemClock};
pub use document::{
    foundry_grid_type, import_json, FoundryScene, GridArchive, ImportedGrid, UvttDocument,
    ARCHIVE_VERSION,
};
pub use error::{EnvironmentError, ExportError, ExportStep, ImportError, ValidationError};
pub use format::{ExportFormat, RasterFormat};
pub use pipeline::{
    foundry_config, DeliveredFile, ExportOptions, ExportReport, Exporter, GridSnapshot,
    FOUNDRY_MIN_GRID,
};
pub use sink::{DirectorySink, DownloadSink, ExportFile, MemorySink};
pub use worker::{EncodeWorker, PendingRaster};
