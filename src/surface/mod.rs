//! Drawing surfaces the clock renders onto.
//!
//! Layout happens in points with the origin at the bottom-left corner and y
//! growing upwards. Surfaces translate that into their own coordinates.

mod recording;
mod svg;
mod terminal;

pub use recording::{DrawOp, RecordingSurface};
pub use svg::SvgSurface;
pub use terminal::TerminalSurface;

use crate::{Result, fonts::ResolvedFont, render::Color};

/// Axis-aligned rectangle, origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Attributes of drawn text. Text is always centered horizontally.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font to draw with
    pub font: ResolvedFont,
    /// Text color
    pub color: Color,
}

/// An output the clock can be drawn onto, one frame at a time.
pub trait Surface {
    /// Drawable size in points.
    fn size(&self) -> (f64, f64);

    /// Whether this surface sits on the primary display.
    fn is_primary(&self) -> bool;

    /// Starts a frame by filling the whole surface.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be written.
    fn fill(&mut self, color: Color) -> Result<()>;

    /// Draws one line of text centered horizontally in `rect`. `rect` spans
    /// the line height; the baseline sits one ascender below its top.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be written.
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) -> Result<()>;

    /// Ends the frame.
    ///
    /// # Errors
    /// Returns an error if the frame cannot be flushed.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
