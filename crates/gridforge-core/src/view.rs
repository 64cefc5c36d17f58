//! Pan and zoom state of the live view.

use crate::point::Point;

/// Pan offset and zoom level of the on-screen grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Screen-space translation in pixels. Unbounded.
    pub pan: Point,
    /// Zoom factor in `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f64,
}

impl ViewState {
    /// Lowest zoom.
    pub const MIN_ZOOM: f64 = 0.05;
    /// Highest zoom.
    pub const MAX_ZOOM: f64 = 5.0;
    /// Wheel factor when scrolling up.
    pub const WHEEL_IN: f64 = 1.1;
    /// Wheel factor when scrolling down.
    pub const WHEEL_OUT: f64 = 0.9;
    /// Zoom-in button factor.
    pub const STEP_IN: f64 = 1.2;
    /// Zoom-out button factor.
    pub const STEP_OUT: f64 = 0.8;

    /// Clamp a requested zoom into range.
    pub fn clamp_zoom(zoom: f64) -> f64 {
        zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM)
    }

    /// Set zoom to `requested` (clamped), keeping the screen point `anchor`
    /// visually fixed. Returns `false` and leaves the state untouched when
    /// the clamped value equals the current zoom or `requested` is NaN.
    pub fn update_zoom(&mut self, requested: f64, anchor: Point) -> bool {
        if requested.is_nan() {
            return false;
        }
        let next = Self::clamp_zoom(requested);
        if next == self.zoom {
            return false;
        }
        let ratio = next / self.zoom;
        self.pan = Point::new(
            anchor.x - (anchor.x - self.pan.x) * ratio,
            anchor.y - (anchor.y - self.pan.y) * ratio,
        );
        self.zoom = next;
        true
    }

    /// Multiply zoom by `factor` around `anchor`.
    pub fn zoom_by(&mut self, factor: f64, anchor: Point) -> bool {
        self.update_zoom(self.zoom * factor, anchor)
    }

    /// Button zoom-in. The pan offset is left as is.
    pub fn zoom_in(&mut self) -> bool {
        self.step(Self::STEP_IN)
    }

    /// Button zoom-out. The pan offset is left as is.
    pub fn zoom_out(&mut self) -> bool {
        self.step(Self::STEP_OUT)
    }

    fn step(&mut self, factor: f64) -> bool {
        let next = Self::clamp_zoom(self.zoom * factor);
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Translate the pan offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = self.pan.offset(dx, dy);
    }

    /// Back to `{0, 0}` / `1.0`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: Point::ORIGIN,
            zoom: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wheel_in_at_100_100() {
        let mut v = ViewState::default();
        assert!(v.zoom_by(ViewState::WHEEL_IN, Point::new(100.0, 100.0)));
        assert!((v.zoom - 1.1).abs() < 1e-12);
        assert!((v.pan.x + 10.0).abs() < 1e-9);
        assert!((v.pan.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn no_op_at_bound() {
        let mut v = ViewState {
            pan: Point::new(3.0, 4.0),
            zoom: ViewState::MAX_ZOOM,
        };
        assert!(!v.zoom_by(ViewState::WHEEL_IN, Point::new(50.0, 50.0)));
        assert_eq!(v.pan, Point::new(3.0, 4.0));
        assert!(!v.update_zoom(f64::NAN, Point::ORIGIN));
    }

    #[test]
    fn buttons_step_without_panning() {
        let mut v = ViewState {
            pan: Point::new(7.0, 8.0),
            zoom: 1.0,
        };
        assert!(v.zoom_in());
        assert!((v.zoom - 1.2).abs() < 1e-12);
        assert!(v.zoom_out());
        assert!((v.zoom - 0.96).abs() < 1e-12);
        assert_eq!(v.pan, Point::new(7.0, 8.0));
        v.reset();
        assert_eq!(v, ViewState::default());
    }

    #[test]
    fn anchor_stays_fixed() {
        let mut v = ViewState {
            pan: Point::new(-40.0, 25.0),
            zoom: 0.7,
        };
        let anchor = Point::new(320.0, 180.0);
        let before = ((anchor.x - v.pan.x) / v.zoom, (anchor.y - v.pan.y) / v.zoom);
        v.zoom_by(1.1, anchor);
        let after = ((anchor.x - v.pan.x) / v.zoom, (anchor.y - v.pan.y) / v.zoom);
        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn out_of_range_lands_on_bound(z in prop_oneof![-1e6f64..0.05, 5.0f64..1e6]) {
            let mut v = ViewState { pan: Point::ORIGIN, zoom: 1.0 };
            v.update_zoom(z, Point::new(10.0, 10.0));
            let expected = if z < 0.05 { ViewState::MIN_ZOOM } else { ViewState::MAX_ZOOM };
            prop_assert_eq!(v.zoom, expected);
        }
    }
}
