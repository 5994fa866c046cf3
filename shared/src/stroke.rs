//! Pointer input to raster strokes.
//!
//! [`PointerStrokeController`] owns the [`CanvasSurface`] and the single
//! [`PaintSession`]. A press paints a dot, each move while drawing paints a
//! segment from the previous point, and release/leave/cancel end the stroke.

use log::debug;

use crate::raster::Raster;
use crate::surface::{CanvasSurface, SurfaceMetrics};
use crate::{BrushStyle, ClientPoint, Color, Point, ScreenRect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    Leave,
    Cancel,
}

/// One host pointer event. `client` is `None` when the event carried no
/// usable coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub client: Option<ClientPoint>,
}

impl PointerInput {
    pub fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            phase,
            client: Some(ClientPoint { x, y }),
        }
    }

    pub fn without_position(phase: PointerPhase) -> Self {
        Self {
            phase,
            client: None,
        }
    }
}

/// What a handled event painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOp {
    Dot(Point),
    Segment { from: Point, to: Point },
}

/// State of the in-progress stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PaintSession {
    #[default]
    Idle,
    Drawing { last_point: Option<Point> },
}

impl PaintSession {
    pub fn is_drawing(&self) -> bool {
        matches!(self, PaintSession::Drawing { .. })
    }

    pub fn last_point(&self) -> Option<Point> {
        match self {
            PaintSession::Drawing { last_point } => *last_point,
            PaintSession::Idle => None,
        }
    }

    /// Drops the stroke anchor. A stroke in progress stays active, so the
    /// next move starts over with a dot.
    pub fn forget_last_point(&mut self) {
        if let PaintSession::Drawing { last_point } = self {
            *last_point = None;
        }
    }

    pub fn end(&mut self) {
        *self = PaintSession::Idle;
    }
}

/// Maps a device-space point into the logical space of a surface shown in
/// `rect`. The result is not clamped to `[0, logical_size]`.
pub fn map_client_point(client: ClientPoint, rect: ScreenRect, logical_size: f64) -> Option<Point> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let point = Point {
        x: (client.x - rect.left) / rect.width * logical_size,
        y: (client.y - rect.top) / rect.height * logical_size,
    };
    point.is_finite().then_some(point)
}

pub struct PointerStrokeController<R: Raster> {
    surface: CanvasSurface<R>,
    session: PaintSession,
    style: BrushStyle,
}

impl<R: Raster> PointerStrokeController<R> {
    pub fn new(surface: CanvasSurface<R>, style: BrushStyle) -> Self {
        Self {
            surface,
            session: PaintSession::Idle,
            style,
        }
    }

    pub fn surface(&self) -> &CanvasSurface<R> {
        &self.surface
    }

    pub fn session(&self) -> PaintSession {
        self.session
    }

    pub fn style(&self) -> &BrushStyle {
        &self.style
    }

    /// Takes effect for the next paint call, including mid-stroke.
    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Reinitializes the surface at a new logical size. Painted content is
    /// lost and the stroke anchor is dropped so the next move cannot draw a
    /// line from a point in the old coordinate space.
    pub fn initialize(&mut self, logical_size: f64, device_pixel_ratio: f64) -> SurfaceMetrics {
        let metrics = self.surface.initialize(logical_size, device_pixel_ratio);
        self.session.forget_last_point();
        metrics
    }

    pub fn clear(&mut self) {
        self.surface.clear();
        self.session.forget_last_point();
    }

    /// Feeds one pointer event through the stroke state machine. `rect` is
    /// the current on-screen box of the painting area.
    pub fn handle(&mut self, input: PointerInput, rect: ScreenRect) -> Option<PaintOp> {
        match input.phase {
            PointerPhase::Press => {
                let point = self.map(input, rect)?;
                self.surface.paint_dot(point, &self.style);
                self.session = PaintSession::Drawing {
                    last_point: Some(point),
                };
                Some(PaintOp::Dot(point))
            }
            PointerPhase::Move => {
                let PaintSession::Drawing { last_point } = self.session else {
                    return None;
                };
                let point = self.map(input, rect)?;
                let op = match last_point {
                    Some(from) => {
                        self.surface.paint_segment(from, point, &self.style);
                        PaintOp::Segment { from, to: point }
                    }
                    None => {
                        self.surface.paint_dot(point, &self.style);
                        PaintOp::Dot(point)
                    }
                };
                self.session = PaintSession::Drawing {
                    last_point: Some(point),
                };
                Some(op)
            }
            PointerPhase::Release | PointerPhase::Leave | PointerPhase::Cancel => {
                self.session.end();
                None
            }
        }
    }

    fn map(&self, input: PointerInput, rect: ScreenRect) -> Option<Point> {
        let Some(logical_size) = self.surface.logical_size() else {
            debug!("Pointer {:?} ignored, surface not initialized", input.phase);
            return None;
        };
        let Some(client) = input.client else {
            debug!("Pointer {:?} ignored, no coordinates", input.phase);
            return None;
        };
        map_client_point(client, rect, logical_size)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PixelRaster;

    const RECT: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };

    fn controller() -> PointerStrokeController<PixelRaster> {
        let mut controller = PointerStrokeController::new(
            CanvasSurface::new(PixelRaster::new()),
            BrushStyle {
                color: Color::rgb(255, 0, 0),
                width: 10.0,
            },
        );
        controller.initialize(100.0, 1.0);
        controller
    }

    fn press(x: f64, y: f64) -> PointerInput {
        PointerInput::new(PointerPhase::Press, x, y)
    }

    fn drag(x: f64, y: f64) -> PointerInput {
        PointerInput::new(PointerPhase::Move, x, y)
    }

    #[test]
    fn mapping_is_affine_in_client_coordinates() {
        let rect = ScreenRect {
            left: 20.0,
            top: 40.0,
            width: 200.0,
            height: 200.0,
        };
        let map = |x, y| map_client_point(ClientPoint { x, y }, rect, 420.0).unwrap();
        assert_eq!(map(20.0, 40.0), Point::new(0.0, 0.0));
        assert_eq!(map(220.0, 240.0), Point::new(420.0, 420.0));
        assert_eq!(map(120.0, 90.0), Point::new(210.0, 105.0));
    }

    #[test]
    fn scaling_screen_rect_scales_mapped_point_inversely() {
        let client = ClientPoint { x: 50.0, y: 25.0 };
        let base = map_client_point(client, RECT, 420.0).unwrap();
        let doubled = ScreenRect {
            width: 200.0,
            height: 200.0,
            ..RECT
        };
        let scaled = map_client_point(client, doubled, 420.0).unwrap();
        assert_eq!(scaled, Point::new(base.x / 2.0, base.y / 2.0));
    }

    #[test]
    fn mapping_is_not_clamped() {
        let point = map_client_point(ClientPoint { x: -25.0, y: 150.0 }, RECT, 100.0);
        assert_eq!(point, Some(Point::new(-25.0, 150.0)));
    }

    #[test]
    fn degenerate_rect_maps_to_nothing() {
        let rect = ScreenRect {
            width: 0.0,
            ..RECT
        };
        assert_eq!(map_client_point(ClientPoint { x: 1.0, y: 1.0 }, rect, 100.0), None);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut controller = controller();
        assert_eq!(controller.handle(drag(10.0, 10.0), RECT), None);
        assert_eq!(controller.session(), PaintSession::Idle);
        assert!(controller.surface().raster().is_blank());
    }

    #[test]
    fn press_move_release_draws_dot_then_segments() {
        let mut controller = controller();
        let mut ops = vec![controller.handle(press(10.0, 10.0), RECT)];
        for x in [20.0, 30.0, 40.0] {
            ops.push(controller.handle(drag(x, 10.0), RECT));
        }
        ops.push(controller.handle(PointerInput::without_position(PointerPhase::Release), RECT));
        assert_eq!(
            ops,
            vec![
                Some(PaintOp::Dot(Point::new(10.0, 10.0))),
                Some(PaintOp::Segment {
                    from: Point::new(10.0, 10.0),
                    to: Point::new(20.0, 10.0),
                }),
                Some(PaintOp::Segment {
                    from: Point::new(20.0, 10.0),
                    to: Point::new(30.0, 10.0),
                }),
                Some(PaintOp::Segment {
                    from: Point::new(30.0, 10.0),
                    to: Point::new(40.0, 10.0),
                }),
                None,
            ]
        );
        assert_eq!(controller.session(), PaintSession::Idle);
        assert_eq!(controller.handle(drag(50.0, 10.0), RECT), None);
    }

    #[test]
    fn leave_and_cancel_end_the_stroke() {
        for phase in [PointerPhase::Leave, PointerPhase::Cancel] {
            let mut controller = controller();
            controller.handle(press(10.0, 10.0), RECT);
            controller.handle(PointerInput::new(phase, 12.0, 12.0), RECT);
            assert_eq!(controller.session(), PaintSession::Idle);
        }
    }

    #[test]
    fn malformed_events_keep_current_state() {
        let mut controller = controller();
        let missing = PointerInput::without_position(PointerPhase::Press);
        assert_eq!(controller.handle(missing, RECT), None);
        assert_eq!(controller.session(), PaintSession::Idle);

        controller.handle(press(10.0, 10.0), RECT);
        let missing = PointerInput::without_position(PointerPhase::Move);
        assert_eq!(controller.handle(missing, RECT), None);
        assert_eq!(controller.session().last_point(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn press_before_initialize_does_not_start_stroke() {
        let mut controller = PointerStrokeController::new(
            CanvasSurface::new(PixelRaster::new()),
            BrushStyle {
                color: Color::rgb(0, 0, 0),
                width: 4.0,
            },
        );
        assert_eq!(controller.handle(press(1.0, 1.0), RECT), None);
        assert!(!controller.session().is_drawing());
    }

    #[test]
    fn clear_drops_anchor_but_keeps_stroke_active() {
        let mut controller = controller();
        controller.handle(press(10.0, 10.0), RECT);
        controller.clear();
        assert!(controller.surface().raster().is_blank());
        assert_eq!(
            controller.handle(drag(30.0, 30.0), RECT),
            Some(PaintOp::Dot(Point::new(30.0, 30.0)))
        );
    }

    #[test]
    fn second_press_restarts_the_stroke() {
        let mut controller = controller();
        controller.handle(press(10.0, 10.0), RECT);
        controller.handle(press(70.0, 70.0), RECT);
        assert_eq!(
            controller.handle(drag(80.0, 70.0), RECT),
            Some(PaintOp::Segment {
                from: Point::new(70.0, 70.0),
                to: Point::new(80.0, 70.0),
            })
        );
    }
}
