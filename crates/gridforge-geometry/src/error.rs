//! Error types for layout construction.

use gridforge_core::GridType;
use std::fmt;

/// Errors arising from building a layout or preset.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// `cols` or `rows` is zero.
    EmptyGrid {
        /// Requested columns.
        cols: u32,
        /// Requested rows.
        rows: u32,
    },
    /// Tile size is zero, negative or not finite.
    InvalidTileSize {
        /// The offending value.
        value: f64,
    },
    /// Border width is negative or not finite.
    InvalidBorderWidth {
        /// The offending value.
        value: f64,
    },
    /// A hex-only operation was given a square grid type.
    NotHex {
        /// The grid type supplied.
        grid_type: GridType,
    },
    /// A display preset with a non-positive diagonal.
    InvalidDiagonal {
        /// The offending value in inches.
        inches: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { cols, rows } => {
                write!(f, "grid must have at least one cell, got {cols}x{rows}")
            }
            Self::InvalidTileSize { value } => {
                write!(f, "tile size must be positive and finite, got {value}")
            }
            Self::InvalidBorderWidth { value } => {
                write!(f, "border width must be non-negative and finite, got {value}")
            }
            Self::NotHex { grid_type } => {
                write!(f, "grid type {grid_type} is not a hex grid")
            }
            Self::InvalidDiagonal { inches } => {
                write!(f, "display diagonal must be positive, got {inches} in")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

pub(crate) fn check_dims(
    cols: u32,
    rows: u32,
    tile_size: f64,
    border_width: f64,
) -> Result<(), GeometryError> {
    if cols == 0 || rows == 0 {
        return Err(GeometryError::EmptyGrid { cols, rows });
    }
    if !(tile_size.is_finite() && tile_size > 0.0) {
        return Err(GeometryError::InvalidTileSize { value: tile_size });
    }
    if !(border_width.is_finite() && border_width >= 0.0) {
        return Err(GeometryError::InvalidBorderWidth {
            value: border_width,
        });
    }
    Ok(())
}
