use std::fmt;

use crate::config::Appearance;

/// First hour (inclusive) of the night window.
pub const NIGHT_START_HOUR: u32 = 22;
/// Hour (exclusive) the night window ends at.
pub const NIGHT_END_HOUR: u32 = 6;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// White
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Red of the original clock's night mode
    pub const NIGHT_RED: Color = Color::rgb(255, 59, 48);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Which of the three color pairs is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Red on black, inside the night window
    Night,
    /// White on black
    Dark,
    /// Black on white
    Light,
}

/// Background and foreground of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    /// Which pair this is
    pub kind: SchemeKind,
    /// Fill color
    pub background: Color,
    /// Text color
    pub foreground: Color,
}

impl ColorScheme {
    /// The pair for a kind.
    pub const fn of(kind: SchemeKind) -> Self {
        match kind {
            SchemeKind::Night => Self {
                kind,
                background: Color::BLACK,
                foreground: Color::NIGHT_RED,
            },
            SchemeKind::Dark => Self {
                kind,
                background: Color::BLACK,
                foreground: Color::WHITE,
            },
            SchemeKind::Light => Self {
                kind,
                background: Color::WHITE,
                foreground: Color::BLACK,
            },
        }
    }
}

/// Whether `hour` (0-23) falls in the night window, 22:00 to 06:00.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR
}

/// Night mode applies when enabled and inside the night window.
pub fn night_mode_active(night_time_mode: bool, hour: u32) -> bool {
    night_time_mode && is_night_hour(hour)
}

/// Picks the color pair. Night mode wins over the appearance setting.
pub fn select_scheme(night_active: bool, appearance: Appearance, system_is_dark: bool) -> ColorScheme {
    let kind = if night_active {
        SchemeKind::Night
    } else if appearance.is_dark(system_is_dark) {
        SchemeKind::Dark
    } else {
        SchemeKind::Light
    };

    ColorScheme::of(kind)
}
