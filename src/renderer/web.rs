//! Browser backend: forwards draw calls to a `CanvasRenderingContext2d`

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::canvas::{Canvas, Color, TextAlign, css_color};

const FONT_FAMILY: &str = "'Trebuchet MS', Verdana, sans-serif";

/// 2D context of the game's canvas element
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self { ctx, width, height }
    }

    fn ellipse_path(&self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .ellipse(cx as f64, cy as f64, rx as f64, ry as f64, 0.0, 0.0, TAU)
        {
            log::warn!("ellipse failed: {:?}", e);
        }
    }
}

impl Canvas for WebCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(line_width as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.ellipse_path(cx, cy, rx, ry);
        self.ctx.fill();
    }

    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.ellipse_path(cx, cy, rx, ry);
        self.ctx.stroke();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill_path(&mut self) {
        self.ctx.fill();
    }

    fn stroke_path(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign) {
        self.ctx
            .set_font(&format!("bold {}px {}", size.round() as u32, FONT_FAMILY));
        self.ctx.set_text_align(align.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        if let Err(e) = self.ctx.translate(x as f64, y as f64) {
            log::warn!("translate failed: {:?}", e);
        }
    }

    fn rotate(&mut self, radians: f32) {
        if let Err(e) = self.ctx.rotate(radians as f64) {
            log::warn!("rotate failed: {:?}", e);
        }
    }
}
