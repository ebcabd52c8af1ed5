use std::{fmt::Write as _, fs, path::Path};

use crate::{PadburyError, Result, render::Color};

use super::{Rect, Surface, TextStyle};

/// Renders a single frame into an SVG document.
///
/// SVG puts the origin at the top-left, so every y coordinate is flipped.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
}

impl SvgSurface {
    /// Creates an empty document of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
        }
    }

    /// The finished document.
    pub fn finish(&self) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height,
        );

        if let Some(background) = self.background {
            let _ = writeln!(
                out,
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
                background.hex()
            );
        }

        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Writes the document to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.finish()).map_err(|e| PadburyError::io(e, path))
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn is_primary(&self) -> bool {
        true
    }

    fn fill(&mut self, color: Color) -> Result<()> {
        self.background = Some(color);
        self.body.clear();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) -> Result<()> {
        let font = &style.font;
        let baseline = self.height - (rect.y + rect.height - font.ascender());
        let center = rect.x + rect.width / 2.0;

        let features = font
            .features
            .iter()
            .map(|feature| format!("\"{}\"", feature.tag()))
            .collect::<Vec<_>>()
            .join(", ");

        let _ = writeln!(
            self.body,
            "  <text x=\"{center:.2}\" y=\"{baseline:.2}\" text-anchor=\"middle\" \
             font-family=\"{family}\" font-weight=\"{weight}\" font-size=\"{size:.2}\" \
             style=\"font-feature-settings: {features}\" fill=\"{fill}\">{text}</text>",
            family = escape(font.css_family),
            weight = font.weight.numeric(),
            size = font.size,
            fill = style.color.hex(),
            text = escape(text),
        );

        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
