use garden_shared::raster::Raster;
use garden_shared::{
    BoardConfig, BrushStyle, CanvasSurface, Color, ContainerSize, PaintOp, PixelRaster, Point,
    PointerInput, PointerPhase, PointerStrokeController, ResizeSynchronizer, ScreenRect,
};
use pretty_assertions::assert_eq;

const RED: Color = Color::rgb(0xff, 0x00, 0x00);
const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
const WIDTH: f64 = 26.0;

/// Counts paint calls while forwarding them to a pixel raster.
#[derive(Default)]
struct CountingRaster {
    pixels: PixelRaster,
    dots: usize,
    segments: usize,
}

impl Raster for CountingRaster {
    fn resize_backing(&mut self, width: u32, height: u32) {
        self.pixels.resize_backing(width, height);
    }

    fn set_scale(&mut self, scale: f64) {
        self.pixels.set_scale(scale);
    }

    fn set_round_line_style(&mut self) {
        self.pixels.set_round_line_style();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.pixels.clear_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.dots += 1;
        self.pixels.fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.segments += 1;
        self.pixels.stroke_line(from, to, width, color);
    }
}

/// On-screen box whose client coordinates equal logical coordinates.
fn identity_rect(size: f64) -> ScreenRect {
    ScreenRect {
        left: 0.0,
        top: 0.0,
        width: size,
        height: size,
    }
}

fn board<R: Raster>(raster: R, size: f64, dpr: f64) -> PointerStrokeController<R> {
    let mut controller = PointerStrokeController::new(
        CanvasSurface::new(raster),
        BrushStyle {
            color: RED,
            width: WIDTH,
        },
    );
    controller.initialize(size, dpr);
    controller
}

fn input(phase: PointerPhase, x: f64, y: f64) -> PointerInput {
    PointerInput::new(phase, x, y)
}

#[test]
fn moves_draw_one_segment_each_and_nothing_before_press() {
    let rect = identity_rect(200.0);
    let mut controller = board(CountingRaster::default(), 200.0, 1.0);
    controller.handle(input(PointerPhase::Move, 5.0, 5.0), rect);
    assert_eq!(controller.surface().raster().segments, 0);
    assert_eq!(controller.surface().raster().dots, 0);

    controller.handle(input(PointerPhase::Press, 10.0, 10.0), rect);
    for step in 1..=7 {
        controller.handle(input(PointerPhase::Move, 10.0 + step as f64 * 10.0, 40.0), rect);
    }
    controller.handle(input(PointerPhase::Release, 90.0, 40.0), rect);

    let raster = controller.surface().raster();
    assert_eq!(raster.dots, 1);
    assert_eq!(raster.segments, 7);
}

#[test]
fn scenario_a_press_paints_dot_of_brush_radius() {
    let rect = identity_rect(100.0);
    let mut controller = board(PixelRaster::new(), 100.0, 2.0);
    controller.set_color(Color::parse("#ff0000").unwrap());
    let op = controller.handle(input(PointerPhase::Press, 10.0, 10.0), rect);
    assert_eq!(op, Some(PaintOp::Dot(Point::new(10.0, 10.0))));

    let raster = controller.surface().raster();
    assert_eq!(raster.sample(Point::new(10.0, 10.0)), RED);
    assert_eq!(raster.sample(Point::new(10.0, 22.0)), RED);
    assert_eq!(raster.sample(Point::new(22.0, 10.0)), RED);
    assert_eq!(raster.sample(Point::new(10.0, 24.0)), Color::TRANSPARENT);
    assert_eq!(raster.sample(Point::new(20.0, 20.0)), Color::TRANSPARENT);
}

#[test]
fn scenario_b_drag_paints_capped_segment_without_gap() {
    let rect = identity_rect(100.0);
    let mut controller = board(PixelRaster::new(), 100.0, 1.0);
    controller.handle(input(PointerPhase::Press, 10.0, 10.0), rect);
    controller.handle(input(PointerPhase::Move, 50.0, 10.0), rect);

    let raster = controller.surface().raster();
    for x in (10..=50).step_by(5) {
        assert_eq!(raster.sample(Point::new(x as f64, 10.0)), RED, "gap at x={x}");
    }
    // round cap past the far end
    assert_eq!(raster.sample(Point::new(60.0, 10.0)), RED);
    assert_eq!(raster.sample(Point::new(64.0, 10.0)), Color::TRANSPARENT);
}

#[test]
fn scenario_c_resize_mid_stroke_clears_and_restarts_with_dot() {
    let config = BoardConfig::default();
    let mut sync = ResizeSynchronizer::new(config.default_board_size, config.resize_epsilon);
    let mut controller = board(CountingRaster::default(), config.default_board_size, 1.0);
    let before = identity_rect(420.0);

    controller.handle(input(PointerPhase::Press, 100.0, 100.0), before);
    controller.handle(input(PointerPhase::Move, 150.0, 100.0), before);
    assert!(!controller.surface().raster().pixels.is_blank());

    let size = sync
        .observe(ContainerSize {
            width: 300.0,
            height: 500.0,
        })
        .expect("size change should publish");
    controller.initialize(size, 1.0);
    assert!(controller.surface().raster().pixels.is_blank());

    let after = identity_rect(300.0);
    let segments_before = controller.surface().raster().segments;
    let op = controller.handle(input(PointerPhase::Move, 120.0, 60.0), after);
    assert_eq!(op, Some(PaintOp::Dot(Point::new(120.0, 60.0))));
    assert_eq!(controller.surface().raster().segments, segments_before);
    // nothing connects back to the pre-resize anchor
    let pixels = &controller.surface().raster().pixels;
    assert_eq!(pixels.sample(Point::new(140.0, 80.0)), Color::TRANSPARENT);
    assert_eq!(pixels.sample(Point::new(120.0, 60.0)), RED);
}

#[test]
fn scenario_d_color_change_mid_stroke_applies_to_next_segment() {
    let rect = identity_rect(200.0);
    let mut controller = board(PixelRaster::new(), 200.0, 1.0);
    controller.handle(input(PointerPhase::Press, 20.0, 100.0), rect);
    controller.handle(input(PointerPhase::Move, 80.0, 100.0), rect);
    controller.set_color(BLUE);
    controller.handle(input(PointerPhase::Move, 180.0, 100.0), rect);

    let raster = controller.surface().raster();
    assert_eq!(raster.sample(Point::new(50.0, 100.0)), RED);
    assert_eq!(raster.sample(Point::new(130.0, 100.0)), BLUE);
}

#[test]
fn same_relative_position_maps_to_same_logical_point_at_any_scale() {
    let mut dense = board(PixelRaster::new(), 100.0, 3.0);
    let mut sparse = board(PixelRaster::new(), 100.0, 1.0);
    let small = ScreenRect {
        left: 10.0,
        top: 10.0,
        width: 50.0,
        height: 50.0,
    };
    let large = ScreenRect {
        left: 100.0,
        top: 0.0,
        width: 400.0,
        height: 400.0,
    };
    let a = dense.handle(input(PointerPhase::Press, 35.0, 22.5), small);
    let b = sparse.handle(input(PointerPhase::Press, 300.0, 100.0), large);
    assert_eq!(a, b);
    assert_eq!(a, Some(PaintOp::Dot(Point::new(50.0, 25.0))));
}

#[test]
fn clear_twice_matches_clear_once() {
    let rect = identity_rect(100.0);
    let mut once = board(PixelRaster::new(), 100.0, 2.0);
    let mut twice = board(PixelRaster::new(), 100.0, 2.0);
    for controller in [&mut once, &mut twice] {
        controller.handle(input(PointerPhase::Press, 30.0, 30.0), rect);
        controller.handle(input(PointerPhase::Move, 70.0, 60.0), rect);
    }
    once.clear();
    twice.clear();
    twice.clear();
    assert!(once.surface().raster().is_blank());
    assert!(twice.surface().raster().is_blank());
    assert_eq!(once.surface().metrics(), twice.surface().metrics());
}
