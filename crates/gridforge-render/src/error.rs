//! Error types for rendering.

use gridforge_geometry::GeometryError;
use std::fmt;

/// Errors arising from rendering a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// The grid configuration has no valid layout.
    Geometry(GeometryError),
    /// A pixel buffer of the requested size could not be obtained.
    SurfaceAllocation {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "invalid grid geometry: {e}"),
            Self::SurfaceAllocation { width, height } => {
                write!(f, "could not allocate a {width}x{height} drawing surface")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::SurfaceAllocation { .. } => None,
        }
    }
}

impl From<GeometryError> for RenderError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
