use log::debug;

use crate::raster::Raster;
use crate::{BrushStyle, Point};

/// Geometry of an initialized surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub logical_size: f64,
    pub device_pixel_ratio: f64,
    /// Backing pixels per side.
    pub physical_size: u32,
}

/// Square drawable addressed in logical units regardless of the density of
/// the backing raster.
///
/// Paint calls made before the first [`initialize`](Self::initialize) are
/// ignored.
pub struct CanvasSurface<R: Raster> {
    raster: R,
    metrics: Option<SurfaceMetrics>,
}

pub fn sanitize_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

pub fn physical_extent(logical_size: f64, device_pixel_ratio: f64) -> u32 {
    let extent = logical_size * device_pixel_ratio;
    if extent.is_finite() && extent > 0.0 {
        extent as u32
    } else {
        0
    }
}

impl<R: Raster> CanvasSurface<R> {
    pub fn new(raster: R) -> Self {
        Self {
            raster,
            metrics: None,
        }
    }

    pub fn raster(&self) -> &R {
        &self.raster
    }

    pub fn metrics(&self) -> Option<SurfaceMetrics> {
        self.metrics
    }

    pub fn logical_size(&self) -> Option<f64> {
        self.metrics.map(|metrics| metrics.logical_size)
    }

    pub fn is_initialized(&self) -> bool {
        self.metrics.is_some()
    }

    /// Reallocates the backing raster for `logical_size` at the given pixel
    /// density and leaves it fully transparent.
    pub fn initialize(&mut self, logical_size: f64, device_pixel_ratio: f64) -> SurfaceMetrics {
        let device_pixel_ratio = sanitize_pixel_ratio(device_pixel_ratio);
        let physical_size = physical_extent(logical_size, device_pixel_ratio);
        debug!(
            "Initializing surface logical={logical_size} dpr={device_pixel_ratio} physical={physical_size}"
        );
        self.raster.resize_backing(physical_size, physical_size);
        self.raster.set_scale(device_pixel_ratio);
        self.raster.set_round_line_style();
        self.raster
            .clear_rect(0.0, 0.0, logical_size, logical_size);
        let metrics = SurfaceMetrics {
            logical_size,
            device_pixel_ratio,
            physical_size,
        };
        self.metrics = Some(metrics);
        metrics
    }

    /// Wipes the raster without reallocating it.
    pub fn clear(&mut self) {
        let Some(metrics) = self.metrics else {
            debug!("Clear ignored, surface not initialized");
            return;
        };
        self.raster.set_scale(metrics.device_pixel_ratio);
        self.raster
            .clear_rect(0.0, 0.0, metrics.logical_size, metrics.logical_size);
    }

    pub fn paint_dot(&mut self, point: Point, style: &BrushStyle) {
        if self.metrics.is_none() {
            return;
        }
        self.raster.fill_circle(point, style.radius(), style.color);
    }

    pub fn paint_segment(&mut self, from: Point, to: Point, style: &BrushStyle) {
        if self.metrics.is_none() {
            return;
        }
        self.raster.stroke_line(from, to, style.width, style.color);
    }
}
