//! Regular hexagon measurements.

use gridforge_core::{HexOrientation, Point};
use std::f64::consts::PI;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The derived measurements of a regular hexagon whose long diagonal is
/// the tile size.
///
/// All fields are pure functions of the tile size.
///
/// # Examples
///
/// ```
/// use gridforge_geometry::HexMetrics;
///
/// let m = HexMetrics::new(30.0);
/// assert_eq!(m.circumradius, 15.0);
/// assert_eq!(m.edge, 15.0);
/// assert!((m.apothem - 12.990_381).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexMetrics {
    /// `d`: vertex to opposite vertex. Equals the tile size.
    pub long_diagonal: f64,
    /// `R = d / 2`.
    pub circumradius: f64,
    /// `a = R`.
    pub edge: f64,
    /// `r = a * sqrt(3) / 2`, center to edge midpoint.
    pub apothem: f64,
    /// `s = a * sqrt(3)`, edge to opposite edge.
    pub short_diagonal: f64,
    /// `t = sqrt(a^2 - (s/2)^2)`, vertex to the short diagonal.
    pub vertex_offset: f64,
}

impl HexMetrics {
    /// Derive all measurements from the tile size.
    pub fn new(tile_size: f64) -> Self {
        let circumradius = tile_size / 2.0;
        let edge = circumradius;
        let apothem = edge * SQRT_3 / 2.0;
        let short_diagonal = edge * SQRT_3;
        let half_s = short_diagonal / 2.0;
        let vertex_offset = (edge * edge - half_s * half_s).max(0.0).sqrt();
        Self {
            long_diagonal: tile_size,
            circumradius,
            edge,
            apothem,
            short_diagonal,
            vertex_offset,
        }
    }

    /// Horizontal and vertical half-extent for an orientation.
    pub fn radii(&self, orientation: HexOrientation) -> (f64, f64) {
        match orientation {
            HexOrientation::Flat => (self.circumradius, self.apothem),
            HexOrientation::Pointy => (self.apothem, self.circumradius),
        }
    }

    /// Vertices relative to the center, clockwise in screen space.
    pub fn vertices(&self, orientation: HexOrientation) -> [Point; 6] {
        let phase = match orientation {
            HexOrientation::Flat => 0.0,
            HexOrientation::Pointy => PI / 6.0,
        };
        std::array::from_fn(|i| {
            let angle = PI / 3.0 * i as f64 + phase;
            Point::new(
                self.circumradius * angle.cos(),
                self.circumradius * angle.sin(),
            )
        })
    }

    /// Whether the offset `(dx, dy)` from the center lies inside the hexagon.
    pub fn contains(&self, orientation: HexOrientation, dx: f64, dy: f64) -> bool {
        // Rotate pointy into flat.
        let (u, v) = match orientation {
            HexOrientation::Flat => (dx.abs(), dy.abs()),
            HexOrientation::Pointy => (dy.abs(), dx.abs()),
        };
        const EPS: f64 = 1e-9;
        v <= self.apothem + EPS && SQRT_3 * u + v <= SQRT_3 * self.circumradius + EPS
    }
}
