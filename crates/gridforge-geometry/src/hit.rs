//! Screen-to-cell inversion.
//!
//! A screen point is mapped back through the view in a fixed order: undo
//! pan, undo zoom, undo display scale. The result is a point on the unscaled
//! drawing surface, which the grid's layout then resolves to a cell.

use crate::error::GeometryError;
use crate::layout::HexGeometry;
use crate::square::SquareLayout;
use gridforge_core::{CellIndex, GridConfig, GridType, HexOrientation, Point, ViewState};
use smallvec::SmallVec;

/// The view transform between screen and drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Pan offset in screen pixels.
    pub pan: Point,
    /// Zoom factor.
    pub zoom: f64,
    /// Display scale from [`GridDimensions`](crate::GridDimensions).
    pub scale: f64,
}

impl ViewTransform {
    /// No pan, unit zoom, unit scale.
    pub const IDENTITY: ViewTransform = ViewTransform {
        pan: Point::ORIGIN,
        zoom: 1.0,
        scale: 1.0,
    };

    /// Combine live view state with a display scale.
    pub fn new(view: &ViewState, scale: f64) -> Self {
        Self {
            pan: view.pan,
            zoom: view.zoom,
            scale,
        }
    }

    /// Screen pixel to unscaled surface point.
    pub fn to_surface(&self, screen: Point) -> Point {
        Point::new(
            ((screen.x - self.pan.x) / self.zoom) / self.scale,
            ((screen.y - self.pan.y) / self.zoom) / self.scale,
        )
    }

    /// Unscaled surface point to screen pixel.
    pub fn to_screen(&self, surface: Point) -> Point {
        let k = self.zoom * self.scale;
        Point::new(surface.x * k + self.pan.x, surface.y * k + self.pan.y)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// How hex cells are resolved near their edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitTestMode {
    /// Round to the nearest row/column, one axis after the other. Points
    /// near a slanted edge may land in the neighbouring cell.
    #[default]
    Nearest,
    /// Accept a cell only when the point lies inside its tile. Grout and
    /// out-of-tile points resolve to `None`.
    Exact,
}

#[derive(Clone, Copy, Debug)]
enum Topology {
    Square(SquareLayout),
    Hex { geometry: HexGeometry, origin: Point },
}

/// Maps pointer positions to cells for one grid configuration.
#[derive(Clone, Copy, Debug)]
pub struct HitTester {
    topology: Topology,
    mode: HitTestMode,
    cols: i64,
    rows: i64,
}

impl HitTester {
    /// Build for `grid_type` under `config`.
    pub fn new(grid_type: GridType, config: &GridConfig, mode: HitTestMode) -> Result<Self, GeometryError> {
        let topology = if grid_type.is_hex() {
            let geometry = HexGeometry::from_grid(grid_type, config)?;
            Topology::Hex {
                geometry,
                origin: geometry.draw_offset(),
            }
        } else {
            Topology::Square(SquareLayout::from_config(config)?)
        };
        Ok(Self {
            topology,
            mode,
            cols: i64::from(config.cols),
            rows: i64::from(config.rows),
        })
    }

    /// The cell under a screen pixel, or `None` outside the grid.
    pub fn locate(&self, screen: Point, view: &ViewTransform) -> Option<CellIndex> {
        self.locate_surface(view.to_surface(screen))
    }

    /// The cell under an unscaled surface point.
    pub fn locate_surface(&self, p: Point) -> Option<CellIndex> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return None;
        }
        match &self.topology {
            Topology::Square(sq) => self.locate_square(sq, p),
            Topology::Hex { geometry, origin } => {
                // Raw layout space: undo the surface margin.
                let raw = Point::new(p.x - origin.x, p.y - origin.y);
                let (row, col) = nearest_hex(geometry, raw);
                match self.mode {
                    HitTestMode::Nearest => self.index(row, col),
                    HitTestMode::Exact => self.exact_hex(geometry, raw, row, col),
                }
            }
        }
    }

    fn locate_square(&self, sq: &SquareLayout, p: Point) -> Option<CellIndex> {
        let x = p.x - sq.border_width();
        let y = p.y - sq.border_width();
        // Divide by the pitch, not the tile size, so cells drawn at `cell_origin` map back to themselves.
        let pitch = sq.pitch();
        let col = (x / pitch).floor();
        let row = (y / pitch).floor();
        let idx = self.index(row as i64, col as i64)?;
        if self.mode == HitTestMode::Exact {
            let tile = sq.tile_size();
            if x - col * pitch >= tile || y - row * pitch >= tile {
                return None;
            }
        }
        Some(idx)
    }

    fn exact_hex(&self, g: &HexGeometry, raw: Point, row: i64, col: i64) -> Option<CellIndex> {
        let mut candidates: SmallVec<[(f64, i64, i64); 9]> = SmallVec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                let (r, c) = (row + dr, col + dc);
                if self.index(r, c).is_none() {
                    continue;
                }
                let center = g.raw_center_signed(r, c);
                candidates.push((center.distance_sq(raw), r, c));
            }
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        let orientation = g.params().orientation;
        candidates.into_iter().find_map(|(_, r, c)| {
            let center = g.raw_center_signed(r, c);
            g.metrics()
                .contains(orientation, raw.x - center.x, raw.y - center.y)
                .then(|| self.index(r, c))
                .flatten()
        })
    }

    fn index(&self, row: i64, col: i64) -> Option<CellIndex> {
        if (0..self.rows).contains(&row) && (0..self.cols).contains(&col) {
            Some(CellIndex::new(row as u32, col as u32))
        } else {
            None
        }
    }
}

/// Round to the nearest line on the offset axis, then solve the other axis
/// with that line's half-step removed.
fn nearest_hex(g: &HexGeometry, raw: Point) -> (i64, i64) {
    let parity = g.params().parity;
    match g.params().orientation {
        HexOrientation::Flat => {
            let col = (raw.x / g.h_spacing()).round() as i64;
            let shift = if parity.shifts(col) { g.shift() } else { 0.0 };
            let row = ((raw.y - shift) / g.v_spacing()).round() as i64;
            (row, col)
        }
        HexOrientation::Pointy => {
            let row = (raw.y / g.v_spacing()).round() as i64;
            let shift = if parity.shifts(row) { g.shift() } else { 0.0 };
            let col = ((raw.x - shift) / g.h_spacing()).round() as i64;
            (row, col)
        }
    }
}
