//! Offset-coordinate hex grid layout.
//!
//! Centers are computed in a raw space where cell `(0, 0)` of an unshifted
//! line sits at the origin. [`HexGeometry::draw_offset`] moves raw centers
//! onto the drawing surface, leaving exactly `border_width` of margin
//! outside the outermost hexagons.

use crate::error::{check_dims, GeometryError};
use crate::hex::HexMetrics;
use gridforge_core::{CellIndex, CellMatrix, GridConfig, GridType, HexOrientation, Parity, Point};

/// Inputs to the hex layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexParams {
    /// Column count, at least 1.
    pub cols: u32,
    /// Row count, at least 1.
    pub rows: u32,
    /// Long diagonal in pixels.
    pub tile_size: f64,
    /// Grout width in pixels.
    pub border_width: f64,
    /// Flat or pointy.
    pub orientation: HexOrientation,
    /// Which lines are shifted.
    pub parity: Parity,
}

impl HexParams {
    /// Validate and build.
    pub fn new(
        cols: u32,
        rows: u32,
        tile_size: f64,
        border_width: f64,
        orientation: HexOrientation,
        parity: Parity,
    ) -> Result<Self, GeometryError> {
        check_dims(cols, rows, tile_size, border_width)?;
        Ok(Self {
            cols,
            rows,
            tile_size,
            border_width,
            orientation,
            parity,
        })
    }

    /// Parameters for a hex grid type and its config.
    pub fn from_grid(grid_type: GridType, config: &GridConfig) -> Result<Self, GeometryError> {
        let (Some(orientation), Some(parity)) = (grid_type.orientation(), grid_type.parity())
        else {
            return Err(GeometryError::NotHex { grid_type });
        };
        Self::new(
            config.cols,
            config.rows,
            f64::from(config.tile_size),
            f64::from(config.border_width),
            orientation,
            parity,
        )
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest x.
    pub min_x: f64,
    /// Smallest y.
    pub min_y: f64,
    /// Largest x.
    pub max_x: f64,
    /// Largest y.
    pub max_y: f64,
}

impl Bounds {
    /// Tightest box around `points`; `None` for an empty iterator.
    pub fn around(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// `max_x - min_x`.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// `max_y - min_y`.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Spacing and extent constants of a hex grid, with O(1) per-cell centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexGeometry {
    params: HexParams,
    metrics: HexMetrics,
    h_spacing: f64,
    v_spacing: f64,
    shift: f64,
    width_radius: f64,
    height_radius: f64,
}

impl HexGeometry {
    /// Derive the constants for `params`.
    pub fn new(params: HexParams) -> Self {
        let metrics = HexMetrics::new(params.tile_size);
        let bw = params.border_width;
        let r_big = metrics.circumradius;
        let r = metrics.apothem;
        let (h_spacing, v_spacing) = match params.orientation {
            HexOrientation::Flat => (1.5 * r_big + bw, 2.0 * r + bw),
            HexOrientation::Pointy => (2.0 * r + bw, 1.5 * r_big + bw),
        };
        let (width_radius, height_radius) = metrics.radii(params.orientation);
        Self {
            params,
            metrics,
            h_spacing,
            v_spacing,
            shift: r + bw / 2.0,
            width_radius,
            height_radius,
        }
    }

    /// Shorthand for [`HexParams::from_grid`] then [`new`](Self::new).
    pub fn from_grid(grid_type: GridType, config: &GridConfig) -> Result<Self, GeometryError> {
        HexParams::from_grid(grid_type, config).map(Self::new)
    }

    /// The inputs.
    pub fn params(&self) -> &HexParams {
        &self.params
    }

    /// Hexagon measurements for the tile size.
    pub fn metrics(&self) -> &HexMetrics {
        &self.metrics
    }

    /// Distance between adjacent column centers.
    pub fn h_spacing(&self) -> f64 {
        self.h_spacing
    }

    /// Distance between adjacent row centers.
    pub fn v_spacing(&self) -> f64 {
        self.v_spacing
    }

    /// Half-step applied to shifted lines.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Horizontal half-extent of one hexagon.
    pub fn width_radius(&self) -> f64 {
        self.width_radius
    }

    /// Vertical half-extent of one hexagon.
    pub fn height_radius(&self) -> f64 {
        self.height_radius
    }

    /// Center of `(row, col)` in raw layout space. Indices may lie outside
    /// the grid; hit testing probes neighbours this way.
    pub fn raw_center_signed(&self, row: i64, col: i64) -> Point {
        let x = col as f64 * self.h_spacing;
        let y = row as f64 * self.v_spacing;
        match self.params.orientation {
            HexOrientation::Flat if self.params.parity.shifts(col) => Point::new(x, y + self.shift),
            HexOrientation::Pointy if self.params.parity.shifts(row) => Point::new(x + self.shift, y),
            _ => Point::new(x, y),
        }
    }

    /// Center of a cell in raw layout space.
    pub fn raw_center(&self, idx: CellIndex) -> Point {
        self.raw_center_signed(i64::from(idx.row), i64::from(idx.col))
    }

    /// Bounding box of every cell center, computed analytically.
    pub fn full_bounds(&self) -> Bounds {
        let p = &self.params;
        let (shifted_axis_len, cross_len) = match p.orientation {
            HexOrientation::Flat => (p.cols, p.rows),
            HexOrientation::Pointy => (p.rows, p.cols),
        };
        // Line 0 is shifted only under even parity.
        let any_shifted = match p.parity {
            Parity::Odd => shifted_axis_len >= 2,
            Parity::Even => true,
        };
        let any_unshifted = match p.parity {
            Parity::Odd => true,
            Parity::Even => shifted_axis_len >= 2,
        };
        let lo = if any_unshifted { 0.0 } else { self.shift };
        let hi_extra = if any_shifted { self.shift } else { 0.0 };
        let along = f64::from(shifted_axis_len.saturating_sub(1));
        let cross = f64::from(cross_len.saturating_sub(1));
        match p.orientation {
            HexOrientation::Flat => Bounds {
                min_x: 0.0,
                max_x: along * self.h_spacing,
                min_y: lo,
                max_y: cross * self.v_spacing + hi_extra,
            },
            HexOrientation::Pointy => Bounds {
                min_x: lo,
                max_x: cross * self.h_spacing + hi_extra,
                min_y: 0.0,
                max_y: along * self.v_spacing,
            },
        }
    }

    /// Translation from raw layout space to the drawing surface.
    pub fn draw_offset(&self) -> Point {
        self.offset_for(&self.full_bounds())
    }

    fn offset_for(&self, b: &Bounds) -> Point {
        let bw = self.params.border_width;
        Point::new(
            bw + self.width_radius - b.min_x,
            bw + self.height_radius - b.min_y,
        )
    }

    /// Center of a cell on the drawing surface.
    pub fn cell_center(&self, idx: CellIndex) -> Point {
        let raw = self.raw_center(idx);
        let off = self.draw_offset();
        raw.offset(off.x, off.y)
    }

    /// Unrounded surface size for the whole grid.
    pub fn raw_size(&self) -> (f64, f64) {
        let b = self.full_bounds();
        let bw = self.params.border_width;
        (
            b.width() + 2.0 * self.width_radius + 2.0 * bw,
            b.height() + 2.0 * self.height_radius + 2.0 * bw,
        )
    }
}

/// A cell center with its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPosition {
    /// Raw-space x.
    pub x: f64,
    /// Raw-space y.
    pub y: f64,
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

/// Materialized layout: every (or every occupied) cell center plus the
/// spacing and extent constants shared by drawing, sizing and export.
#[derive(Clone, Debug, PartialEq)]
pub struct HexLayout {
    /// Centers in row-major order.
    pub positions: Vec<CellPosition>,
    /// Box around `positions`; `None` when no cell was laid out.
    pub bounds: Option<Bounds>,
    /// Column-center spacing.
    pub h_spacing: f64,
    /// Row-center spacing.
    pub v_spacing: f64,
    /// Horizontal half-extent of one hexagon.
    pub width_radius: f64,
    /// Vertical half-extent of one hexagon.
    pub height_radius: f64,
    border_width: f64,
}

impl HexLayout {
    /// Lay out every cell, or only painted cells when `occupancy` is given.
    pub fn compute(geometry: &HexGeometry, occupancy: Option<&CellMatrix>) -> Self {
        let p = geometry.params();
        let mut positions = Vec::new();
        for row in 0..p.rows {
            for col in 0..p.cols {
                let idx = CellIndex::new(row, col);
                if occupancy.is_some_and(|m| m.get(idx).is_none()) {
                    continue;
                }
                let c = geometry.raw_center(idx);
                positions.push(CellPosition {
                    x: c.x,
                    y: c.y,
                    row,
                    col,
                });
            }
        }
        let bounds = Bounds::around(positions.iter().map(|p| Point::new(p.x, p.y)));
        Self {
            positions,
            bounds,
            h_spacing: geometry.h_spacing(),
            v_spacing: geometry.v_spacing(),
            width_radius: geometry.width_radius(),
            height_radius: geometry.height_radius(),
            border_width: p.border_width,
        }
    }

    /// Translation that fits this layout's bounds onto a surface.
    pub fn draw_offset(&self) -> Option<Point> {
        self.bounds.map(|b| {
            Point::new(
                self.border_width + self.width_radius - b.min_x,
                self.border_width + self.height_radius - b.min_y,
            )
        })
    }

    /// Surface size that fits this layout, `(0, 0)` when empty.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self.bounds {
            None => (0, 0),
            Some(b) => (
                (b.width() + 2.0 * self.width_radius + 2.0 * self.border_width).ceil() as u32,
                (b.height() + 2.0 * self.height_radius + 2.0 * self.border_width).ceil() as u32,
            ),
        }
    }
}
