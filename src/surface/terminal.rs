use std::{
    env,
    io::{self, Write},
};

use crate::{PadburyError, Result, render::Color};

use super::{Rect, Surface, TextStyle};

/// Points covered by one terminal cell horizontally.
pub const CELL_WIDTH: f64 = 8.0;
/// Points covered by one terminal cell vertically.
pub const CELL_HEIGHT: f64 = 16.0;

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_LINES: u16 = 24;

/// Draws frames into an ANSI truecolor terminal.
///
/// Each cell stands for a block of [`CELL_WIDTH`] by [`CELL_HEIGHT`] points;
/// text is written once, centered on the row holding the middle of its
/// capitals.
pub struct TerminalSurface<W: Write> {
    out: W,
    columns: u16,
    lines: u16,
    background: Color,
}

impl TerminalSurface<io::Stdout> {
    /// A surface on standard output, sized from `COLUMNS` and `LINES`.
    pub fn stdout() -> Self {
        let (columns, lines) = terminal_size();
        Self::new(io::stdout(), columns, lines)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// A surface of `columns` by `lines` cells writing to `out`.
    pub fn new(out: W, columns: u16, lines: u16) -> Self {
        Self {
            out,
            columns: columns.max(1),
            lines: lines.max(1),
            background: Color::BLACK,
        }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Restores the terminal's colors and cursor.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be written.
    pub fn restore(&mut self) -> Result<()> {
        self.out
            .write_all(b"\x1b[0m\x1b[2J\x1b[H\x1b[?25h")
            .and_then(|()| self.out.flush())
            .map_err(terminal_error)
    }

    fn row_for(&self, y: f64) -> u16 {
        let (_, height) = self.size();
        let from_top = ((height - y) / CELL_HEIGHT).floor();
        (from_top.max(0.0) as u16).min(self.lines - 1) + 1
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> (f64, f64) {
        (
            f64::from(self.columns) * CELL_WIDTH,
            f64::from(self.lines) * CELL_HEIGHT,
        )
    }

    fn is_primary(&self) -> bool {
        true
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        self.background = color;
        write!(
            self.out,
            "\x1b[?25l\x1b[48;2;{};{};{}m\x1b[2J\x1b[H",
            color.r, color.g, color.b
        )
        .map_err(terminal_error)
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) -> Result<()> {
        let font = &style.font;
        let baseline = rect.y + rect.height - font.ascender();
        let row = self.row_for(baseline + font.cap_height() / 2.0);

        let width = text.chars().count() as u16;
        let center = ((rect.x + rect.width / 2.0) / CELL_WIDTH).round() as u16;
        let column = center.saturating_sub(width / 2).max(1);

        let (fg, bg) = (style.color, self.background);
        write!(
            self.out,
            "\x1b[{row};{column}H\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{text}",
            bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
        )
        .map_err(terminal_error)
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush().map_err(terminal_error)
    }
}

fn terminal_error(error: io::Error) -> PadburyError {
    PadburyError::surface("terminal", error)
}

fn terminal_size() -> (u16, u16) {
    let read = |name: &str, default: u16| {
        env::var(name)
            .ok()
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(default)
    };

    (read("COLUMNS", DEFAULT_COLUMNS), read("LINES", DEFAULT_LINES))
}
