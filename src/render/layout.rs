use tracing::debug;

use crate::{
    config::Preferences,
    fonts::{FontSource, ResolvedFont, resolve_font},
    surface::Rect,
};

use super::{
    colors::{ColorScheme, select_scheme},
    time_format::{TimeFormat, sizing_string},
};

/// Point size the sizing string is measured at before scaling.
pub const MEASURE_SIZE: f64 = 100.0;

/// Everything needed to draw a frame, derived from preferences and the
/// drawable size.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Time format
    pub format: TimeFormat,
    /// Font sized to the drawable width
    pub font: ResolvedFont,
    /// Height of one line of text
    pub line_height: f64,
    /// Offset from the vertical midline to the bottom of the text rect
    pub v_offset: f64,
    /// Background and foreground
    pub colors: ColorScheme,
    /// Whether the night colors are in use
    pub night_active: bool,
    /// Only draw the time on the primary display
    pub main_screen_only: bool,
}

impl DisplayConfig {
    /// Lays the clock out for a drawable `width`.
    ///
    /// The sizing string is measured at [`MEASURE_SIZE`] and the font scaled so
    /// it spans the full width. A surface without width gets a zero size.
    pub fn compute(
        prefs: &Preferences,
        width: f64,
        fonts: &dyn FontSource,
        night_active: bool,
        system_is_dark: bool,
    ) -> Self {
        let format = TimeFormat::from_preferences(prefs);
        let sizing = sizing_string(prefs.use_am_pm, prefs.show_seconds, prefs.show_time_separators);

        let reference = resolve_font(fonts, prefs.font_family, prefs.font_weight, MEASURE_SIZE);
        let measured = reference.measure(&sizing);
        let size = if width.is_nan() || width <= 0.0 {
            0.0
        } else if measured > 0.0 {
            MEASURE_SIZE * width / measured
        } else {
            MEASURE_SIZE
        };
        let font = reference.with_size(size);

        let line_height = font.ascender() - font.descender() - font.leading();
        let v_offset = (font.descender() + font.leading()) - 0.5 * font.cap_height();
        let colors = select_scheme(night_active, prefs.appearance, system_is_dark);

        debug!(
            pattern = format.pattern(),
            face = %font.face_name,
            size = font.size,
            scheme = ?colors.kind,
            "Computed display configuration"
        );

        Self {
            format,
            font,
            line_height,
            v_offset,
            colors,
            night_active,
            main_screen_only: prefs.main_screen_only,
        }
    }

    /// Where the time goes on a `width` by `height` surface.
    pub fn text_rect(&self, width: f64, height: f64) -> Rect {
        Rect::new(0.0, height / 2.0 + self.v_offset, width, self.line_height)
    }
}
