use crate::{Result, render::Color};

use super::{Rect, Surface, TextStyle};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Background fill
    Fill(Color),
    /// Text draw
    Text {
        /// Drawn text
        text: String,
        /// Target rectangle
        rect: Rect,
        /// Attributes
        style: TextStyle,
    },
    /// End of frame
    Present,
}

/// Headless surface that records every call, for previews and tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    primary: bool,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates a primary surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primary: true,
            ops: Vec::new(),
        }
    }

    /// Marks the surface as sitting on a secondary display.
    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }

    /// Changes the drawable size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Every call so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text drawn so far.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn is_primary(&self) -> bool {
        self.primary
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        self.ops.push(DrawOp::Fill(color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) -> Result<()> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            rect,
            style: style.clone(),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push(DrawOp::Present);
        Ok(())
    }
}
