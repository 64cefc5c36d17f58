//! Axis-aligned square grid layout.

use crate::error::{check_dims, GeometryError};
use gridforge_core::{CellIndex, GridConfig, Point};

/// A uniform square grid with `border_width` grout around every tile.
///
/// Cell `(r, c)` has its top-left corner at
/// `(c * pitch + bw, r * pitch + bw)` where `pitch = tile + bw`.
///
/// # Examples
///
/// ```
/// use gridforge_geometry::SquareLayout;
///
/// let sq = SquareLayout::new(20, 20, 30.0, 1.0).unwrap();
/// assert_eq!(sq.canvas_size(), (621, 621));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareLayout {
    cols: u32,
    rows: u32,
    tile_size: f64,
    border_width: f64,
}

impl SquareLayout {
    /// Validate and build.
    pub fn new(cols: u32, rows: u32, tile_size: f64, border_width: f64) -> Result<Self, GeometryError> {
        check_dims(cols, rows, tile_size, border_width)?;
        Ok(Self {
            cols,
            rows,
            tile_size,
            border_width,
        })
    }

    /// Build from a config.
    pub fn from_config(config: &GridConfig) -> Result<Self, GeometryError> {
        Self::new(
            config.cols,
            config.rows,
            f64::from(config.tile_size),
            f64::from(config.border_width),
        )
    }

    /// Tile edge in pixels.
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Grout width in pixels.
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Tile plus grout.
    pub fn pitch(&self) -> f64 {
        self.tile_size + self.border_width
    }

    /// Top-left corner of a cell on the surface.
    pub fn cell_origin(&self, idx: CellIndex) -> Point {
        let pitch = self.pitch();
        Point::new(
            f64::from(idx.col) * pitch + self.border_width,
            f64::from(idx.row) * pitch + self.border_width,
        )
    }

    /// Center of a cell on the surface.
    pub fn cell_center(&self, idx: CellIndex) -> Point {
        let half = self.tile_size / 2.0;
        self.cell_origin(idx).offset(half, half)
    }

    /// Unrounded surface size.
    pub fn raw_size(&self) -> (f64, f64) {
        let pitch = self.pitch();
        (
            f64::from(self.cols) * pitch + self.border_width,
            f64::from(self.rows) * pitch + self.border_width,
        )
    }

    /// Surface size in whole pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let (w, h) = self.raw_size();
        (w.ceil() as u32, h.ceil() as u32)
    }
}
