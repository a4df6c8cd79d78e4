use crate::color::css_rgba;
use crafty_field::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` over a canvas 2D context. Field coordinates are CSS px; the
/// context transform scales them to the backing store on every clear.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        let sx = self.canvas.width() as f64 / width.max(1.0) as f64;
        let sy = self.canvas.height() as f64 / height.max(1.0) as f64;
        _ = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let ctx = &self.ctx;
        ctx.set_shadow_blur(0.0);
        ctx.set_stroke_style_str(&css_rgba(color));
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<f32>) {
        let ctx = &self.ctx;
        let css = css_rgba(color);
        match glow {
            Some(blur) => {
                ctx.set_shadow_blur(blur as f64);
                ctx.set_shadow_color(&css);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        ctx.set_fill_style_str(&css);
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        ctx.fill();
    }
}
