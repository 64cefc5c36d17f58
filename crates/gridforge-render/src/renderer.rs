//! Cell grid renderer.

use crate::cache::SilhouetteCache;
use crate::error::RenderError;
use crate::surface::Surface;
use gridforge_core::{CellMatrix, GridConfig, GridType, Point};
use gridforge_geometry::GridLayout;
use smallvec::SmallVec;

/// What a render pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderStats {
    /// Painted cells filled.
    pub cells_drawn: usize,
    /// Whether the grout background was filled.
    pub background_filled: bool,
    /// Unscaled grid extent that was drawn.
    pub extent: (f64, f64),
}

/// Draws painted cells as rectangles or hexagons.
///
/// When `border_width > 0` the grid extent is first filled with the border
/// color so the gaps between cells read as grout. With no border nothing
/// but the cells is drawn.
#[derive(Debug, Default)]
pub struct GridRenderer {
    silhouettes: SilhouetteCache,
}

impl GridRenderer {
    /// A renderer with an empty silhouette cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The silhouette table, for inspection.
    pub fn silhouettes(&self) -> &SilhouetteCache {
        &self.silhouettes
    }

    /// Paint `cells` laid out by `grid_type` / `config` onto `surface`.
    ///
    /// Coordinates are unscaled grid pixels; wrap the surface in a
    /// [`Transformed`](crate::Transformed) for an on-screen view. Cells
    /// outside the configured dimensions are skipped.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        grid_type: GridType,
        config: &GridConfig,
        cells: &CellMatrix,
    ) -> Result<RenderStats, RenderError> {
        let layout = GridLayout::new(grid_type, config)?;
        let extent = layout.raw_size();
        let mut stats = RenderStats {
            extent,
            ..RenderStats::default()
        };

        if config.border_width > 0 {
            // Whole pixels, so a fractional hex extent still reaches the last column and row.
            surface.fill_rect(0.0, 0.0, extent.0.ceil(), extent.1.ceil(), config.border_color);
            stats.background_filled = true;
        }

        let in_grid = |idx: &gridforge_core::CellIndex| idx.row < config.rows && idx.col < config.cols;
        match &layout {
            GridLayout::Square(sq) => {
                let tile = sq.tile_size();
                for (idx, color) in cells.iter_filled().filter(|(idx, _)| in_grid(idx)) {
                    let o = sq.cell_origin(idx);
                    surface.fill_rect(o.x, o.y, tile, tile, color);
                    stats.cells_drawn += 1;
                }
            }
            GridLayout::Hex(hex) => {
                let orientation = hex.params().orientation;
                let ring: SmallVec<[Point; 6]> = self
                    .silhouettes
                    .vertices(hex.metrics(), orientation)
                    .iter()
                    .copied()
                    .collect();
                let mut translated: SmallVec<[Point; 6]> = SmallVec::with_capacity(ring.len());
                for (idx, color) in cells.iter_filled().filter(|(idx, _)| in_grid(idx)) {
                    let c = hex.cell_center(idx);
                    translated.clear();
                    translated.extend(ring.iter().map(|v| v.offset(c.x, c.y)));
                    surface.fill_polygon(&translated, color);
                    stats.cells_drawn += 1;
                }
            }
        }

        tracing::debug!(
            grid_type = %grid_type,
            cells = stats.cells_drawn,
            silhouettes = self.silhouettes.len(),
            "rendered grid"
        );
        Ok(stats)
    }
}
