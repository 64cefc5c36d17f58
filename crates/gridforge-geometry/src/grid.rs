//! Layout dispatch by grid type.

use crate::error::GeometryError;
use crate::layout::HexGeometry;
use crate::square::SquareLayout;
use gridforge_core::{CellIndex, GridConfig, GridType, Point};

/// The layout engine selected by a [`GridType`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridLayout {
    /// Square tiles.
    Square(SquareLayout),
    /// Hexagonal tiles.
    Hex(HexGeometry),
}

impl GridLayout {
    /// Build the layout for `grid_type` under `config`.
    pub fn new(grid_type: GridType, config: &GridConfig) -> Result<Self, GeometryError> {
        if grid_type.is_hex() {
            HexGeometry::from_grid(grid_type, config).map(GridLayout::Hex)
        } else {
            SquareLayout::from_config(config).map(GridLayout::Square)
        }
    }

    /// Unrounded surface size.
    pub fn raw_size(&self) -> (f64, f64) {
        match self {
            GridLayout::Square(sq) => sq.raw_size(),
            GridLayout::Hex(hex) => hex.raw_size(),
        }
    }

    /// Cell center on the unscaled surface.
    pub fn cell_center(&self, idx: CellIndex) -> Point {
        match self {
            GridLayout::Square(sq) => sq.cell_center(idx),
            GridLayout::Hex(hex) => hex.cell_center(idx),
        }
    }
}
