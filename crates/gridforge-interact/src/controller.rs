//! Pointer events to painting, panning and zooming.
//!
//! The controller owns at most one pointer session at a time. The button
//! that opened a session owns it until that button is released or the
//! pointer leaves the surface; other buttons pressed meanwhile are ignored.

use crate::scene::GridScene;
use gridforge_core::{CellIndex, Point, Rgb, ViewState};
use gridforge_geometry::HitTestMode;

/// A pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Usually left. Paints.
    Primary,
    /// Usually the wheel button. Unused.
    Auxiliary,
    /// Usually right. Pans.
    Secondary,
}

/// Bitmask of held buttons (primary = 1, secondary = 2, auxiliary = 4).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons(pub u8);

impl Buttons {
    /// Nothing held.
    pub const NONE: Buttons = Buttons(0);
    /// Primary held.
    pub const PRIMARY: Buttons = Buttons(1);
    /// Secondary held.
    pub const SECONDARY: Buttons = Buttons(2);
    /// Auxiliary held.
    pub const AUXILIARY: Buttons = Buttons(4);

    /// Whether `button` is held.
    pub fn contains(self, button: PointerButton) -> bool {
        let bit = match button {
            PointerButton::Primary => Self::PRIMARY.0,
            PointerButton::Secondary => Self::SECONDARY.0,
            PointerButton::Auxiliary => Self::AUXILIARY.0,
        };
        self.0 & bit != 0
    }
}

/// A pointer event in screen pixels relative to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Which button.
        button: PointerButton,
        /// Where.
        pos: Point,
    },
    /// The pointer moved.
    Move {
        /// Where to.
        pos: Point,
        /// Buttons held during the move.
        buttons: Buttons,
    },
    /// A button was released.
    Up {
        /// Which button.
        button: PointerButton,
    },
    /// The pointer left the surface.
    Leave,
    /// Wheel scroll. Positive `delta_y` scrolls down (zoom out).
    Wheel {
        /// Vertical scroll amount.
        delta_y: f64,
        /// Cursor position.
        pos: Point,
    },
    /// The platform context menu was requested.
    ContextMenu,
}

/// The active pointer session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Session {
    /// No button session.
    Idle,
    /// Primary held with a brush selected.
    Painting,
    /// Secondary held; `last` is the previous pointer position.
    Panning {
        /// Anchor for the next pan delta.
        last: Point,
    },
}

/// Cursor affordance for the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    /// Panning in progress.
    Grabbing,
    /// No brush selected; painting is disabled.
    NotAllowed,
    /// Ready to paint with this color.
    Brush(Rgb),
}

/// What handling an event did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Cells or the view changed; redraw.
    pub redraw: bool,
    /// The host should suppress the platform default action.
    pub suppress_default: bool,
    /// The cell painted by this event, if any.
    pub painted: Option<CellIndex>,
}

/// Translates pointer events into scene mutations.
#[derive(Clone, Debug)]
pub struct InteractionController {
    session: Session,
    brush: Option<Rgb>,
    mode: HitTestMode,
}

impl InteractionController {
    /// Idle, no brush.
    pub fn new(mode: HitTestMode) -> Self {
        Self {
            session: Session::Idle,
            brush: None,
            mode,
        }
    }

    /// The current session.
    pub fn session(&self) -> Session {
        self.session
    }

    /// The selected brush color.
    pub fn brush(&self) -> Option<Rgb> {
        self.brush
    }

    /// Select or clear the brush. Clearing it ends a painting session.
    pub fn select_brush(&mut self, brush: Option<Rgb>) {
        self.brush = brush;
        if brush.is_none() && self.session == Session::Painting {
            self.session = Session::Idle;
        }
    }

    /// Select `color`, or deselect it if it is already selected.
    pub fn toggle_brush(&mut self, color: Rgb) {
        let next = if self.brush == Some(color) { None } else { Some(color) };
        self.select_brush(next);
    }

    /// Cursor to show.
    pub fn cursor(&self) -> CursorHint {
        match (self.session, self.brush) {
            (Session::Panning { .. }, _) => CursorHint::Grabbing,
            (_, None) => CursorHint::NotAllowed,
            (_, Some(color)) => CursorHint::Brush(color),
        }
    }

    /// Apply one event to `scene`.
    pub fn handle(&mut self, event: PointerEvent, scene: &mut GridScene) -> EventOutcome {
        match event {
            PointerEvent::Down { button, pos } => self.on_down(button, pos, scene),
            PointerEvent::Move { pos, buttons } => self.on_move(pos, buttons, scene),
            PointerEvent::Up { button } => {
                let ends = matches!(
                    (self.session, button),
                    (Session::Painting, PointerButton::Primary)
                        | (Session::Panning { .. }, PointerButton::Secondary)
                );
                if ends {
                    self.end_session();
                }
                EventOutcome::default()
            }
            PointerEvent::Leave => {
                self.end_session();
                EventOutcome::default()
            }
            PointerEvent::Wheel { delta_y, pos } => {
                let factor = if delta_y > 0.0 {
                    ViewState::WHEEL_OUT
                } else if delta_y < 0.0 {
                    ViewState::WHEEL_IN
                } else {
                    return EventOutcome {
                        suppress_default: true,
                        ..EventOutcome::default()
                    };
                };
                EventOutcome {
                    redraw: scene.view_mut().zoom_by(factor, pos),
                    suppress_default: true,
                    painted: None,
                }
            }
            PointerEvent::ContextMenu => EventOutcome {
                suppress_default: true,
                ..EventOutcome::default()
            },
        }
    }

    fn on_down(&mut self, button: PointerButton, pos: Point, scene: &mut GridScene) -> EventOutcome {
        if self.session != Session::Idle {
            return EventOutcome::default();
        }
        match button {
            PointerButton::Primary => {
                if self.brush.is_none() {
                    return EventOutcome::default();
                }
                self.session = Session::Painting;
                tracing::debug!("painting session started");
                self.paint_at(pos, scene)
            }
            PointerButton::Secondary => {
                self.session = Session::Panning { last: pos };
                tracing::debug!("panning session started");
                EventOutcome {
                    suppress_default: true,
                    ..EventOutcome::default()
                }
            }
            PointerButton::Auxiliary => EventOutcome::default(),
        }
    }

    fn on_move(&mut self, pos: Point, buttons: Buttons, scene: &mut GridScene) -> EventOutcome {
        match self.session {
            Session::Idle => EventOutcome::default(),
            Session::Painting if buttons.contains(PointerButton::Primary) => self.paint_at(pos, scene),
            Session::Panning { last } if buttons.contains(PointerButton::Secondary) => {
                scene.view_mut().pan_by(pos.x - last.x, pos.y - last.y);
                self.session = Session::Panning { last: pos };
                EventOutcome {
                    redraw: pos != last,
                    ..EventOutcome::default()
                }
            }
            // The owning button was released outside our view of events.
            Session::Painting | Session::Panning { .. } => {
                self.end_session();
                EventOutcome::default()
            }
        }
    }

    fn paint_at(&mut self, pos: Point, scene: &mut GridScene) -> EventOutcome {
        let Some(color) = self.brush else {
            return EventOutcome::default();
        };
        let hit = scene
            .view_transform()
            .and_then(|view| Ok(scene.hit_tester(self.mode)?.locate(pos, &view)));
        let idx = match hit {
            Ok(Some(idx)) => idx,
            Ok(None) => return EventOutcome::default(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot hit-test current grid");
                return EventOutcome::default();
            }
        };
        let changed = scene.paint(idx, color);
        EventOutcome {
            redraw: changed,
            suppress_default: false,
            painted: Some(idx),
        }
    }

    fn end_session(&mut self) {
        if self.session != Session::Idle {
            tracing::debug!(session = ?self.session, "pointer session ended");
            self.session = Session::Idle;
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(HitTestMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridforge_core::{GridConfig, GridFamily, GridLimits, GridType};
    use proptest::prelude::*;

    const GREEN: Rgb = Rgb::new(0x22, 0x8B, 0x22);

    fn scene() -> GridScene {
        // 20x20 squares, tile 30, border 1: cell (r, c) spans 31c+1 .. 31c+31.
        GridScene::new(
            GridType::Square,
            GridConfig::default_for(GridFamily::Square),
            GridLimits::STANDARD,
        )
    }

    fn at(col: u32, row: u32) -> Point {
        Point::new(31.0 * f64::from(col) + 16.0, 31.0 * f64::from(row) + 16.0)
    }

    fn down(button: PointerButton, pos: Point) -> PointerEvent {
        PointerEvent::Down { button, pos }
    }

    fn drag(pos: Point, buttons: Buttons) -> PointerEvent {
        PointerEvent::Move { pos, buttons }
    }

    // ── Painting ──────────────────────────────────────────────────

    #[test]
    fn primary_without_brush_does_not_paint() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        assert_eq!(ctl.cursor(), CursorHint::NotAllowed);
        let out = ctl.handle(down(PointerButton::Primary, at(1, 1)), &mut s);
        assert_eq!(out, EventOutcome::default());
        assert_eq!(ctl.session(), Session::Idle);
        assert!(!s.cells().has_content());
    }

    #[test]
    fn drag_paints_a_stroke() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        let out = ctl.handle(down(PointerButton::Primary, at(0, 0)), &mut s);
        assert_eq!(out.painted, Some(CellIndex::new(0, 0)));
        assert!(out.redraw);
        for col in 1..5 {
            ctl.handle(drag(at(col, 2), Buttons::PRIMARY), &mut s);
        }
        // Repeat move over the same cell: no change, no redraw.
        let again = ctl.handle(drag(at(4, 2), Buttons::PRIMARY), &mut s);
        assert!(!again.redraw);
        assert_eq!(again.painted, Some(CellIndex::new(2, 4)));
        ctl.handle(PointerEvent::Up { button: PointerButton::Primary }, &mut s);
        assert_eq!(ctl.session(), Session::Idle);
        ctl.handle(drag(at(9, 9), Buttons::NONE), &mut s);
        assert_eq!(s.cells().filled_count(), 5);
    }

    #[test]
    fn painting_outside_the_grid_is_a_no_op() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        let out = ctl.handle(down(PointerButton::Primary, Point::new(-50.0, 10.0)), &mut s);
        assert_eq!(out.painted, None);
        assert_eq!(ctl.session(), Session::Painting);
        ctl.handle(drag(Point::new(5_000.0, 5.0), Buttons::PRIMARY), &mut s);
        assert!(!s.cells().has_content());
    }

    #[test]
    fn leaving_ends_painting() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        ctl.handle(down(PointerButton::Primary, at(0, 0)), &mut s);
        ctl.handle(PointerEvent::Leave, &mut s);
        assert_eq!(ctl.session(), Session::Idle);
        ctl.handle(drag(at(3, 3), Buttons::PRIMARY), &mut s);
        assert_eq!(s.cells().filled_count(), 1);
    }

    #[test]
    fn move_without_owning_button_ends_session() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        ctl.handle(down(PointerButton::Primary, at(0, 0)), &mut s);
        ctl.handle(drag(at(1, 0), Buttons::SECONDARY), &mut s);
        assert_eq!(ctl.session(), Session::Idle);
        assert_eq!(s.cells().filled_count(), 1);
    }

    #[test]
    fn toggling_the_brush() {
        let mut ctl = InteractionController::default();
        ctl.toggle_brush(GREEN);
        assert_eq!(ctl.cursor(), CursorHint::Brush(GREEN));
        ctl.toggle_brush(GREEN);
        assert_eq!(ctl.brush(), None);
    }

    // ── Panning ───────────────────────────────────────────────────

    #[test]
    fn secondary_drag_pans_by_deltas() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        let out = ctl.handle(down(PointerButton::Secondary, Point::new(100.0, 100.0)), &mut s);
        assert!(out.suppress_default);
        assert_eq!(ctl.cursor(), CursorHint::Grabbing);
        ctl.handle(drag(Point::new(110.0, 95.0), Buttons::SECONDARY), &mut s);
        ctl.handle(drag(Point::new(130.0, 90.0), Buttons::SECONDARY), &mut s);
        assert_eq!(s.view().pan, Point::new(30.0, -10.0));
        // Primary during a pan is ignored.
        ctl.handle(down(PointerButton::Primary, at(0, 0)), &mut s);
        assert!(!s.cells().has_content());
        ctl.handle(PointerEvent::Up { button: PointerButton::Secondary }, &mut s);
        assert_eq!(ctl.session(), Session::Idle);
        assert_eq!(ctl.cursor(), CursorHint::Brush(GREEN));
    }

    #[test]
    fn painting_follows_the_pan() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        ctl.select_brush(Some(GREEN));
        ctl.handle(down(PointerButton::Secondary, Point::ORIGIN), &mut s);
        ctl.handle(drag(Point::new(31.0, 62.0), Buttons::SECONDARY), &mut s);
        ctl.handle(PointerEvent::Up { button: PointerButton::Secondary }, &mut s);
        let out = ctl.handle(down(PointerButton::Primary, at(1, 2)), &mut s);
        assert_eq!(out.painted, Some(CellIndex::new(0, 0)));
    }

    // ── Zoom and context menu ─────────────────────────────────────

    #[test]
    fn wheel_zooms_around_cursor() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        let out = ctl.handle(
            PointerEvent::Wheel {
                delta_y: -120.0,
                pos: Point::new(100.0, 100.0),
            },
            &mut s,
        );
        assert!(out.redraw && out.suppress_default);
        assert!((s.view().zoom - 1.1).abs() < 1e-12);
        assert!((s.view().pan.x + 10.0).abs() < 1e-9);
        ctl.handle(
            PointerEvent::Wheel {
                delta_y: 120.0,
                pos: Point::new(100.0, 100.0),
            },
            &mut s,
        );
        assert!((s.view().zoom - 0.99).abs() < 1e-12);
    }

    #[test]
    fn wheel_at_limit_does_not_redraw() {
        let mut s = scene();
        s.view_mut().zoom = ViewState::MIN_ZOOM;
        let mut ctl = InteractionController::default();
        let out = ctl.handle(
            PointerEvent::Wheel {
                delta_y: 3.0,
                pos: Point::new(10.0, 10.0),
            },
            &mut s,
        );
        assert!(!out.redraw);
        assert_eq!(s.view().pan, Point::ORIGIN);
    }

    #[test]
    fn context_menu_always_suppressed() {
        let mut s = scene();
        let mut ctl = InteractionController::default();
        assert!(ctl.handle(PointerEvent::ContextMenu, &mut s).suppress_default);
        ctl.select_brush(Some(GREEN));
        ctl.handle(down(PointerButton::Primary, at(0, 0)), &mut s);
        assert!(ctl.handle(PointerEvent::ContextMenu, &mut s).suppress_default);
    }

    // ── Properties ────────────────────────────────────────────────

    proptest! {
        #[test]
        fn wheel_keeps_zoom_in_range(
            deltas in prop::collection::vec(-500.0f64..500.0, 0..60),
            x in -100.0f64..800.0,
            y in -100.0f64..800.0,
        ) {
            let mut s = scene();
            let mut ctl = InteractionController::default();
            for delta_y in deltas {
                ctl.handle(PointerEvent::Wheel { delta_y, pos: Point::new(x, y) }, &mut s);
                let zoom = s.view().zoom;
                prop_assert!((ViewState::MIN_ZOOM..=ViewState::MAX_ZOOM).contains(&zoom));
            }
        }

        #[test]
        fn a_click_paints_at_most_one_cell(x in -2_000.0f64..2_000.0, y in -2_000.0f64..2_000.0) {
            let mut s = scene();
            let mut ctl = InteractionController::default();
            ctl.select_brush(Some(GREEN));
            let out = ctl.handle(down(PointerButton::Primary, Point::new(x, y)), &mut s);
            prop_assert!(s.cells().filled_count() <= 1);
            prop_assert_eq!(out.painted.is_some(), out.redraw);
        }
    }
}
