use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use garden_shared::{Color, Point, Raster};

/// [`Raster`] over a `<canvas>` 2D context.
pub struct ContextRaster {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl ContextRaster {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Raster for ContextRaster {
    fn resize_backing(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_scale(&mut self, scale: f64) {
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn set_round_line_style(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
