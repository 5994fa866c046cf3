pub mod color;
pub mod config;
pub mod garden;
pub mod quest;
pub mod random;
pub mod raster;
pub mod resize;
pub mod shape;
pub mod stroke;
pub mod surface;

pub use color::{Color, ColorParseError};
pub use config::BoardConfig;
pub use raster::{PixelRaster, Raster};
pub use resize::ResizeSynchronizer;
pub use stroke::{PaintOp, PaintSession, PointerInput, PointerPhase, PointerStrokeController};
pub use surface::CanvasSurface;

/// A position in logical units of the painting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A position in device (viewport) coordinates, as carried by input events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

/// The on-screen bounding box of the painting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Observed size of the container that hosts the painting area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrushStyle {
    pub color: Color,
    pub width: f64,
}

impl BrushStyle {
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }
}
