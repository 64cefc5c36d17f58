//! Display and export canvas sizing.

use crate::error::GeometryError;
use crate::grid::GridLayout;
use gridforge_core::{GridConfig, GridType};

/// Hard cap on either display canvas dimension, in pixels.
pub const MAX_CANVAS_SIZE: f64 = 100_000.0;

/// Raw grid size plus the canvas it is drawn on.
///
/// For display, `scale` shrinks oversized grids under [`MAX_CANVAS_SIZE`];
/// callers compose it with the view zoom. Export always uses `scale = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDimensions {
    /// Unscaled width.
    pub raw_width: f64,
    /// Unscaled height.
    pub raw_height: f64,
    /// Display scale in `(0, 1]`.
    pub scale: f64,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
}

impl GridDimensions {
    /// Size of the live on-screen canvas.
    pub fn display(grid_type: GridType, config: &GridConfig) -> Result<Self, GeometryError> {
        let (w, h) = GridLayout::new(grid_type, config)?.raw_size();
        Ok(Self::display_for_raw(w, h))
    }

    /// Size of the export raster: always true scale.
    pub fn export(grid_type: GridType, config: &GridConfig) -> Result<Self, GeometryError> {
        let (w, h) = GridLayout::new(grid_type, config)?.raw_size();
        Ok(Self::export_for_raw(w, h))
    }

    /// Display sizing for an already-computed raw size.
    pub fn display_for_raw(raw_width: f64, raw_height: f64) -> Self {
        let largest = raw_width.max(raw_height);
        let scale = if largest > 0.0 {
            (MAX_CANVAS_SIZE / largest).min(1.0)
        } else {
            1.0
        };
        Self {
            raw_width,
            raw_height,
            scale,
            canvas_width: (raw_width * scale).round() as u32,
            canvas_height: (raw_height * scale).round() as u32,
        }
    }

    /// Export sizing for an already-computed raw size.
    pub fn export_for_raw(raw_width: f64, raw_height: f64) -> Self {
        Self {
            raw_width,
            raw_height,
            scale: 1.0,
            canvas_width: raw_width.ceil() as u32,
            canvas_height: raw_height.ceil() as u32,
        }
    }
}
