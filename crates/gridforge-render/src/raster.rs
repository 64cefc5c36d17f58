//! In-memory RGBA raster surface.

use crate::error::RenderError;
use crate::surface::Surface;
use gridforge_core::{Point, Rgb};
use image::{Rgba, RgbaImage};
use smallvec::SmallVec;

/// An RGBA pixel buffer implementing [`Surface`].
///
/// A pixel is covered by a shape when its center is inside the shape, so
/// adjacent shapes sharing an edge never overlap or leave a gap.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A fully transparent surface.
    ///
    /// Fails with [`RenderError::SurfaceAllocation`] for a zero dimension or
    /// when the buffer cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let fail = || RenderError::SurfaceAllocation { width, height };
        if width == 0 || height == 0 {
            return Err(fail());
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(fail)?;
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| fail())?;
        buf.resize(len, 0);
        let image = RgbaImage::from_raw(width, height, buf).ok_or_else(fail)?;
        Ok(Self { image })
    }

    /// A surface pre-filled with `color`.
    pub fn with_background(width: u32, height: u32, color: Rgb) -> Result<Self, RenderError> {
        let mut s = Self::new(width, height)?;
        s.fill_all(color);
        Ok(s)
    }

    /// The pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.image.width() && y < self.image.height()).then(|| self.image.get_pixel(x, y).0)
    }

    /// Borrow the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn fill_span(&mut self, y: u32, x_start: f64, x_end: f64, color: Rgba<u8>) {
        let (x0, x1) = pixel_span(x_start, x_end, self.image.width());
        for x in x0..x1 {
            self.image.put_pixel(x, y, color);
        }
    }
}

/// Pixels whose centers fall in `[start, end)`, clipped to `[0, limit)`.
fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let clip = |v: f64| (v - 0.5).ceil().clamp(0.0, f64::from(limit)) as u32;
    (clip(start), clip(end))
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        let rgba = Rgba(color.to_rgba());
        let (y0, y1) = pixel_span(y, y + h, self.image.height());
        for py in y0..y1 {
            self.fill_span(py, x, x + w, rgba);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        if points.len() < 3 || points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return;
        }
        let rgba = Rgba(color.to_rgba());
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let (y0, y1) = pixel_span(min_y, max_y, self.image.height());
        let mut crossings: SmallVec<[f64; 8]> = SmallVec::new();
        for py in y0..y1 {
            let sy = f64::from(py) + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open so a vertex on the scanline is counted once.
                if (a.y <= sy) != (b.y <= sy) {
                    crossings.push(a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                self.fill_span(py, pair[0], pair[1], rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn count(s: &RasterSurface, color: Rgb) -> usize {
        s.image().pixels().filter(|p| p.0 == color.to_rgba()).count()
    }

    #[test]
    fn zero_size_is_an_allocation_error() {
        assert_eq!(
            RasterSurface::new(0, 10).unwrap_err(),
            RenderError::SurfaceAllocation {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn starts_transparent() {
        let s = RasterSurface::new(3, 2).unwrap();
        assert_eq!(s.pixel(2, 1), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(3, 0), None);
    }

    #[test]
    fn integer_rect_covers_exact_pixels() {
        let mut s = RasterSurface::new(10, 10).unwrap();
        s.fill_rect(1.0, 2.0, 3.0, 4.0, RED);
        assert_eq!(count(&s, RED), 12);
        assert_eq!(s.pixel(1, 2), Some(RED.to_rgba()));
        assert_eq!(s.pixel(3, 5), Some(RED.to_rgba()));
        assert_eq!(s.pixel(4, 5), Some([0, 0, 0, 0]));
        assert_eq!(s.pixel(0, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn rects_are_clipped() {
        let mut s = RasterSurface::new(4, 4).unwrap();
        s.fill_rect(-10.0, -10.0, 12.0, 100.0, RED);
        assert_eq!(count(&s, RED), 8);
    }

    #[test]
    fn adjacent_rects_tile_without_overlap_or_gap() {
        let mut s = RasterSurface::new(10, 1).unwrap();
        s.fill_rect(0.0, 0.0, 3.3, 1.0, RED);
        s.fill_rect(3.3, 0.0, 6.7, 1.0, Rgb::WHITE);
        assert_eq!(count(&s, RED) + count(&s, Rgb::WHITE), 10);
        assert_eq!(count(&s, RED), 3);
    }

    #[test]
    fn polygon_area_is_close_to_geometric_area() {
        let mut s = RasterSurface::new(40, 40).unwrap();
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(0.0, 40.0),
        ];
        s.fill_polygon(&tri, RED);
        let filled = count(&s, RED) as f64;
        assert!((filled - 800.0).abs() <= 40.0, "filled {filled}");
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut s = RasterSurface::new(5, 5).unwrap();
        s.fill_polygon(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)], RED);
        s.fill_polygon(&[Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)], RED);
        assert_eq!(count(&s, RED), 0);
    }

    #[test]
    fn background() {
        let s = RasterSurface::with_background(3, 3, Rgb::WHITE).unwrap();
        assert_eq!(count(&s, Rgb::WHITE), 9);
    }

    // ── Properties ────────────────────────────────────────────────

    proptest! {
        #[test]
        fn integer_rects_fill_the_clipped_area(
            x in -5i32..15,
            y in -5i32..15,
            w in 0i32..12,
            h in 0i32..12,
        ) {
            let mut s = RasterSurface::new(10, 10).unwrap();
            s.fill_rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h), RED);
            let overlap = |a: i32, len: i32| ((a + len).min(10) - a.max(0)).max(0) as usize;
            prop_assert_eq!(count(&s, RED), overlap(x, w) * overlap(y, h));
        }

        #[test]
        fn polygons_stay_inside_their_bounds(
            pts in prop::collection::vec((-20.0f64..40.0, -20.0f64..40.0), 3..8),
        ) {
            let points: Vec<Point> = pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let mut s = RasterSurface::new(20, 20).unwrap();
            s.fill_polygon(&points, RED);
            let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            for (px, py, pixel) in s.image().enumerate_pixels() {
                if pixel.0 == RED.to_rgba() {
                    let (cx, cy) = (f64::from(px) + 0.5, f64::from(py) + 0.5);
                    prop_assert!(cx >= min_x && cx <= max_x);
                    prop_assert!(cy >= min_y && cy <= max_y);
                }
            }
        }
    }
}
