//! The 2D drawing surface abstraction.

use gridforge_core::{Point, Rgb};
use gridforge_geometry::ViewTransform;
use smallvec::SmallVec;

/// A 2D target that can fill axis-aligned rectangles and polygons.
///
/// Coordinates are in the surface's own pixel space, `(0, 0)` top-left.
/// Shapes partially or wholly off the surface are clipped, never an error.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Fill the rectangle `[x, x + w) x [y, y + h)`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);

    /// Fill a simple polygon (even-odd rule).
    fn fill_polygon(&mut self, points: &[Point], color: Rgb);

    /// Fill the whole surface.
    fn fill_all(&mut self, color: Rgb) {
        let (w, h) = self.size();
        self.fill_rect(0.0, 0.0, f64::from(w), f64::from(h), color);
    }
}

/// Draws grid-space shapes onto a screen surface through a view transform.
///
/// Callers draw in unscaled grid coordinates; the adapter applies display
/// scale, zoom and pan before forwarding.
pub struct Transformed<'a, S: Surface + ?Sized> {
    inner: &'a mut S,
    view: ViewTransform,
}

impl<'a, S: Surface + ?Sized> Transformed<'a, S> {
    /// Wrap `inner`.
    pub fn new(inner: &'a mut S, view: ViewTransform) -> Self {
        Self { inner, view }
    }
}

impl<S: Surface + ?Sized> Surface for Transformed<'_, S> {
    fn size(&self) -> (u32, u32) {
        self.inner.size()
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let k = self.view.zoom * self.view.scale;
        let p = self.view.to_screen(Point::new(x, y));
        self.inner.fill_rect(p.x, p.y, w * k, h * k, color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) {
        let mapped: SmallVec<[Point; 6]> = points.iter().map(|p| self.view.to_screen(*p)).collect();
        self.inner.fill_polygon(&mapped, color);
    }
}
