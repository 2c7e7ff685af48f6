use std::f64::consts::TAU;

use foundation::math::Vec2;
use globe::{Rgba, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// 2D canvas backend for [`Surface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Sizes the backing store to `logical_size` square. `None` when the
    /// browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement, logical_size: f64) -> Option<Self> {
        let size = logical_size.max(1.0) as u32;
        canvas.set_width(size);
        canvas.set_height(size);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn by_id(id: &str, logical_size: f64) -> Option<Self> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        Self::new(canvas, logical_size)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn circle(&self, center: Vec2, radius: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.x, s.y);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        if self.circle(center, radius).is_ok() {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
        if self.circle(center, radius).is_ok() {
            self.ctx.set_stroke_style_str(&color.css());
            self.ctx.set_line_width(width);
            self.ctx.stroke();
        }
    }
}
