//! Preference schema definitions.
//!
//! Defines the flat set of settings persisted in `preferences.toml`, their
//! defaults, and the tolerant loader that lets each field fall back to its
//! default independently.

mod appearance;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use appearance::Appearance;
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fonts::{FontFamily, FontWeight};

/// Preference file key of [`Preferences::appearance`].
pub const KEY_APPEARANCE: &str = "appearance";
/// Preference file key of [`Preferences::night_time_mode`].
pub const KEY_NIGHT_TIME_MODE: &str = "night_time_mode";
/// Preference file key of [`Preferences::use_am_pm`].
pub const KEY_USE_AM_PM: &str = "use_am_pm";
/// Preference file key of [`Preferences::show_seconds`].
pub const KEY_SHOW_SECONDS: &str = "show_seconds";
/// Preference file key of [`Preferences::show_time_separators`].
pub const KEY_SHOW_TIME_SEPARATORS: &str = "show_time_separators";
/// Preference file key of [`Preferences::font_family`].
pub const KEY_FONT_FAMILY: &str = "font_family";
/// Preference file key of [`Preferences::font_weight`].
pub const KEY_FONT_WEIGHT: &str = "font_weight";
/// Preference file key of [`Preferences::main_screen_only`].
pub const KEY_MAIN_SCREEN_ONLY: &str = "main_screen_only";
/// Preference file key of [`Preferences::plain_fonts_only`].
pub const KEY_PLAIN_FONTS_ONLY: &str = "plain_fonts_only";

/// Every preference key, in settings panel order.
pub const ALL_KEYS: [&str; 9] = [
    KEY_APPEARANCE,
    KEY_NIGHT_TIME_MODE,
    KEY_USE_AM_PM,
    KEY_SHOW_SECONDS,
    KEY_SHOW_TIME_SEPARATORS,
    KEY_FONT_FAMILY,
    KEY_FONT_WEIGHT,
    KEY_MAIN_SCREEN_ONLY,
    KEY_PLAIN_FONTS_ONLY,
];

/// User preferences of the clock.
///
/// Every field is persisted on its own; absence or an unreadable value
/// falls back to the field's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Preferences {
    /// Color theme used outside the night window.
    pub appearance: Appearance,

    /// Draw red digits on black between 22:00 and 06:00.
    pub night_time_mode: bool,

    /// Use a 12-hour clock with an AM/PM suffix instead of a 24-hour clock.
    pub use_am_pm: bool,

    /// Show seconds after hours and minutes.
    pub show_seconds: bool,

    /// Separate the time fields with colons instead of spaces.
    pub show_time_separators: bool,

    /// Font family display name.
    #[schemars(with = "String")]
    pub font_family: FontFamily,

    /// Font weight display name; replaced by the family's first weight if unavailable.
    #[schemars(with = "String")]
    pub font_weight: FontWeight,

    /// Only draw the time on the primary display.
    pub main_screen_only: bool,

    /// Only offer plain, system-like font families.
    pub plain_fonts_only: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            appearance: Appearance::Dark,
            night_time_mode: false,
            use_am_pm: false,
            show_seconds: true,
            show_time_separators: false,
            font_family: FontFamily::SanFrancisco,
            font_weight: FontWeight::UltraLight,
            main_screen_only: false,
            plain_fonts_only: false,
        }
    }
}

impl Preferences {
    /// The configured weight if the configured family has it, otherwise the
    /// family's first weight.
    pub fn effective_weight(&self) -> FontWeight {
        self.font_family.coerce_weight(self.font_weight)
    }
}
