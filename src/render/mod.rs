//! Clock layout and drawing.
//!
//! Turns a preference snapshot, the drawable size and the wall-clock time
//! into a [`DisplayConfig`], caches it, and draws the formatted time onto a
//! [`Surface`](crate::surface::Surface) each tick.

mod colors;
mod engine;
mod environment;
mod layout;
mod time_format;

#[cfg(test)]
mod tests;

pub use colors::{
    Color, ColorScheme, NIGHT_END_HOUR, NIGHT_START_HOUR, SchemeKind, is_night_hour,
    night_mode_active, select_scheme,
};
pub use engine::{ClockRenderer, RefreshHandle, RenderInputs};
pub use environment::{
    APPEARANCE_ENV, AppearanceSource, EnvAppearance, FixedAppearance, FixedTime, LocalTime,
    TimeSource,
};
pub use layout::{DisplayConfig, MEASURE_SIZE};
pub use time_format::{TimeFormat, sizing_string};
