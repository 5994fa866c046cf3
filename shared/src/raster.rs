//! Pixel backends for [`CanvasSurface`](crate::CanvasSurface).
//!
//! A [`Raster`] mirrors the handful of 2D-context operations the painting
//! core needs. Once [`Raster::set_scale`] has been called, every coordinate
//! and length passed in is in logical units and the backend maps it onto its
//! physical pixels.

use crate::{Color, Point};

pub trait Raster {
    /// Reallocates the backing store at the given physical size. Prior
    /// contents are discarded.
    fn resize_backing(&mut self, width: u32, height: u32);

    /// Replaces the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);

    /// Round caps and joins for line segments.
    fn set_round_line_style(&mut self);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);
}

/// Software RGBA8 raster with source-over blending.
///
/// Coverage is sampled at pixel centers without anti-aliasing, so a pixel is
/// either untouched or painted with the full brush color.
#[derive(Clone, Debug)]
pub struct PixelRaster {
    width: u32,
    height: u32,
    scale: f64,
    round_lines: bool,
    pixels: Vec<Color>,
}

impl Default for PixelRaster {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            scale: 1.0,
            round_lines: false,
            pixels: Vec::new(),
        }
    }
}

impl PixelRaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn has_round_lines(&self) -> bool {
        self.round_lines
    }

    /// Pixel at physical coordinates, transparent when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Pixel covering the given logical point.
    pub fn sample(&self, point: Point) -> Color {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return Color::TRANSPARENT;
        }
        let x = (point.x * self.scale).floor() as u32;
        let y = (point.y * self.scale).floor() as u32;
        self.pixel(x, y)
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| pixel.a == 0)
    }

    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.a != 0).count()
    }

    /// Physical pixel range covering the logical span `[min, max]`.
    fn span(&self, min: f64, max: f64, limit: u32) -> std::ops::Range<u32> {
        let start = (min * self.scale).floor().max(0.0);
        let end = (max * self.scale).ceil().max(0.0);
        let start = (start as u32).min(limit);
        let end = (end as u32).min(limit);
        start..end
    }

    /// Logical coordinates of a physical pixel center.
    fn logical_center(&self, x: u32, y: u32) -> (f64, f64) {
        (
            (x as f64 + 0.5) / self.scale,
            (y as f64 + 0.5) / self.scale,
        )
    }

    fn blend(&mut self, x: u32, y: u32, color: Color) {
        let index = (y * self.width + x) as usize;
        self.pixels[index] = source_over(color, self.pixels[index]);
    }

    fn fill_where(
        &mut self,
        min: Point,
        max: Point,
        color: Color,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        if self.pixels.is_empty() || color.a == 0 {
            return;
        }
        for y in self.span(min.y, max.y, self.height) {
            for x in self.span(min.x, max.x, self.width) {
                let (lx, ly) = self.logical_center(x, y);
                if inside(lx, ly) {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

impl Raster for PixelRaster {
    fn resize_backing(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::TRANSPARENT; width as usize * height as usize];
        self.scale = 1.0;
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    fn set_round_line_style(&mut self) {
        self.round_lines = true;
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        for py in self.span(y, y + height, self.height) {
            for px in self.span(x, x + width, self.width) {
                self.pixels[(py * self.width + px) as usize] = Color::TRANSPARENT;
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if !center.is_finite() || !(radius > 0.0) {
            return;
        }
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        let radius_sq = radius * radius;
        self.fill_where(min, max, color, |x, y| {
            let dx = x - center.x;
            let dy = y - center.y;
            dx * dx + dy * dy <= radius_sq
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        if !from.is_finite() || !to.is_finite() || !(width > 0.0) {
            return;
        }
        let half = width / 2.0;
        let min = Point::new(from.x.min(to.x) - half, from.y.min(to.y) - half);
        let max = Point::new(from.x.max(to.x) + half, from.y.max(to.y) + half);
        let round = self.round_lines;
        self.fill_where(min, max, color, |x, y| {
            if round {
                distance_to_segment(x, y, from.x, from.y, to.x, to.y) <= half
            } else {
                within_butt_segment(x, y, from, to, half)
            }
        });
    }
}

fn source_over(src: Color, dst: Color) -> Color {
    if src.a == 255 || dst.a == 0 {
        return src;
    }
    let sa = src.a as f64 / 255.0;
    let da = dst.a as f64 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let value = (s as f64 * sa + d as f64 * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}

fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = ((px - x1) * dx + (py - y1) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);
    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

fn within_butt_segment(px: f64, py: f64, from: Point, to: Point, half: f64) -> bool {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < f64::EPSILON {
        return false;
    }
    let t = ((px - from.x) * dx + (py - from.y) * dy) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let proj_x = from.x + t * dx;
    let proj_y = from.y + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt() <= half
}
