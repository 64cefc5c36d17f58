//! Export error taxonomy.

use crate::format::{ExportFormat, RasterFormat};
use crate::pipeline::ExportReport;
use gridforge_core::{ConfigError, GridType};
use gridforge_geometry::GeometryError;
use gridforge_render::RenderError;
use std::fmt;
use std::io;

/// A precondition the caller can fix. Raised before any file is delivered.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// No cell is painted.
    EmptyGrid,
    /// UVTT requested for a hex grid.
    HexUnsupported {
        /// The rejected grid type.
        grid_type: GridType,
    },
    /// FoundryVTT requested with too small a grid unit.
    PpiTooLow {
        /// Configured pixels per inch.
        ppi: u32,
        /// Required minimum.
        min: u32,
    },
    /// The config has no valid layout.
    InvalidGeometry(GeometryError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "Grid is empty. Please generate a map first."),
            Self::HexUnsupported { grid_type } => {
                write!(f, "UVTT does not support hex grids (got {grid_type})")
            }
            Self::PpiTooLow { ppi, min } => write!(
                f,
                "FoundryVTT does not support a grid size less than {min}! (ppi is {ppi})"
            ),
            Self::InvalidGeometry(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGeometry(e) => Some(e),
            _ => None,
        }
    }
}

/// A failure of the runtime environment: memory, codecs, serialization or
/// the download target.
#[derive(Debug)]
pub enum EnvironmentError {
    /// The off-screen surface could not be allocated.
    Surface(RenderError),
    /// The image encoder failed.
    Encode {
        /// Target encoding.
        format: RasterFormat,
        /// Codec error.
        source: image::ImageError,
    },
    /// A document could not be serialized.
    Serialize(serde_json::Error),
    /// The sink refused a file.
    Delivery {
        /// File being delivered.
        filename: String,
        /// Underlying error.
        source: io::Error,
    },
    /// The background encoder is gone.
    WorkerUnavailable {
        /// What happened.
        reason: String,
    },
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "{e}"),
            Self::Encode { format, source } => {
                write!(f, "{} encoding failed: {source}", format.extension())
            }
            Self::Serialize(e) => write!(f, "serialization failed: {e}"),
            Self::Delivery { filename, source } => {
                write!(f, "could not deliver {filename}: {source}")
            }
            Self::WorkerUnavailable { reason } => {
                write!(f, "encode worker unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for EnvironmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Encode { source, .. } => Some(source),
            Self::Serialize(e) => Some(e),
            Self::Delivery { source, .. } => Some(source),
            Self::WorkerUnavailable { .. } => None,
        }
    }
}

impl From<serde_json::Error> for EnvironmentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// A step of a multi-file export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportStep {
    /// The metadata document.
    Document,
    /// The companion image.
    Image,
}

impl fmt::Display for ExportStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document"),
            Self::Image => f.write_str("image"),
        }
    }
}

/// Any export failure.
#[derive(Debug)]
pub enum ExportError {
    /// Precondition failed; nothing was delivered.
    Validation(ValidationError),
    /// Environment failure; nothing was delivered.
    Environment(EnvironmentError),
    /// A multi-file export failed after delivering some files. Delivered
    /// files are not retracted.
    Partial {
        /// Format requested.
        format: ExportFormat,
        /// Files delivered before the failure.
        completed: ExportReport,
        /// The step that failed.
        failed: ExportStep,
        /// Why it failed.
        source: EnvironmentError,
    },
}

impl ExportError {
    /// True for caller-preventable failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Environment(e) => write!(f, "export failed: {e}"),
            Self::Partial {
                format,
                completed,
                failed,
                source,
            } => write!(
                f,
                "{format} export incomplete: delivered {} file(s), {failed} step failed: {source}",
                completed.files.len()
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Environment(e) => Some(e),
            Self::Partial { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for ExportError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<EnvironmentError> for ExportError {
    fn from(e: EnvironmentError) -> Self {
        Self::Environment(e)
    }
}

impl From<RenderError> for ExportError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Geometry(g) => Self::Validation(ValidationError::InvalidGeometry(g)),
            other => Self::Environment(EnvironmentError::Surface(other)),
        }
    }
}

/// A JSON snapshot could not be imported.
#[derive(Debug)]
pub enum ImportError {
    /// Not valid JSON, or not the expected shape.
    Parse(serde_json::Error),
    /// A `version` this build does not read.
    UnsupportedVersion {
        /// The version found.
        found: String,
    },
    /// The recorded settings are outside every supported range.
    InvalidConfig(ConfigError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "malformed grid snapshot: {e}"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported grid snapshot version {found:?}")
            }
            Self::InvalidConfig(e) => write!(f, "grid snapshot has invalid settings: {e}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::UnsupportedVersion { .. } => None,
            Self::InvalidConfig(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<ConfigError> for ImportError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
