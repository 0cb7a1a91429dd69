//! Recording canvas
//!
//! Captures every draw call as a `DrawCommand` so frames can be inspected in
//! tests or dumped as JSON by the headless runner.

use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, Color, TextAlign};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetFill { color: Color },
    SetStroke { color: Color, line_width: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeRect { x: f32, y: f32, w: f32, h: f32 },
    FillEllipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    StrokeEllipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    ClosePath,
    FillPath,
    StrokePath,
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: TextAlign,
    },
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Rotate { radians: f32 },
}

/// A canvas that records instead of drawing
#[derive(Debug, Clone, Serialize)]
pub struct DisplayList {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
    /// Current save/restore nesting
    depth: usize,
    /// Deepest nesting reached
    max_depth: usize,
    /// `restore` calls without a matching `save`
    unbalanced_restores: usize,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl DisplayList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            depth: 0,
            max_depth: 0,
            unbalanced_restores: 0,
        }
    }

    /// Drop recorded commands, keeping the surface size
    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
        self.unbalanced_restores = 0;
    }

    /// Every save was restored and no restore underflowed
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.unbalanced_restores == 0
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Filled rectangles, in order
    pub fn filled_rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillRect { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    /// Index of the first command matching the predicate
    pub fn position(&self, pred: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
        self.commands.iter().position(pred)
    }

    /// Index of the last command matching the predicate
    pub fn rposition(&self, pred: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
        self.commands.iter().rposition(pred)
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_fill(&mut self, color: Color) {
        self.push(DrawCommand::SetFill { color });
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        self.push(DrawCommand::SetStroke { color, line_width });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::StrokeRect { x, y, w, h });
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.push(DrawCommand::FillEllipse { cx, cy, rx, ry });
    }

    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.push(DrawCommand::StrokeEllipse { cx, cy, rx, ry });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn fill_path(&mut self) {
        self.push(DrawCommand::FillPath);
    }

    fn stroke_path(&mut self) {
        self.push(DrawCommand::StrokePath);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            align,
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            self.unbalanced_restores += 1;
        } else {
            self.depth -= 1;
        }
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.push(DrawCommand::Rotate { radians });
    }
}
