//! Drawable surface abstraction
//!
//! The renderer only talks to this trait. The browser backend forwards to a
//! 2D canvas context; `DisplayList` records commands for tests and headless runs.

use serde::{Deserialize, Serialize};

/// Straight RGBA color, each channel in 0..=1
pub type Color = [f32; 4];

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A fixed-size 2D drawing surface with an affine transform stack.
///
/// Fill and stroke styles are sticky until changed, like a browser canvas.
pub trait Canvas {
    /// Surface size in device-independent pixels
    fn size(&self) -> (f32, f32);

    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color, line_width: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);
    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);
    fn fill_path(&mut self);
    fn stroke_path(&mut self);

    /// Draw text with its baseline at `y`, anchored at `x` per `align`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate subsequent drawing clockwise (y points down) by `radians`
    fn rotate(&mut self, radians: f32);

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.fill_ellipse(cx, cy, r, r);
    }

    /// Closed filled polygon
    fn fill_polygon(&mut self, points: &[(f32, f32)]) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.begin_path();
        self.move_to(x0, y0);
        for &(x, y) in rest {
            self.line_to(x, y);
        }
        self.close_path();
        self.fill_path();
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.stroke_path();
    }
}

/// CSS `rgba()` string for a color
pub fn css_color(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}
