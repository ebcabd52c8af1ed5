use std::env;

use chrono::{Local, NaiveDateTime};

/// Environment variable standing in for the system dark mode setting.
pub const APPEARANCE_ENV: &str = "PADBURY_APPEARANCE";

/// Supplies the local wall-clock time.
pub trait TimeSource: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveDateTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Answers whether the system is in dark mode.
pub trait AppearanceSource: Send + Sync {
    /// True when the system appearance is dark.
    fn system_is_dark(&self) -> bool;
}

/// Reads [`APPEARANCE_ENV`] on every query; only `dark` counts as dark, so
/// an unset or unrecognized value means light.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl EnvAppearance {
    fn is_dark(value: Option<&str>) -> bool {
        value.is_some_and(|value| value.trim().eq_ignore_ascii_case("dark"))
    }
}

impl AppearanceSource for EnvAppearance {
    fn system_is_dark(&self) -> bool {
        Self::is_dark(env::var(APPEARANCE_ENV).ok().as_deref())
    }
}

/// A fixed system appearance.
#[derive(Debug, Clone, Copy)]
pub struct FixedAppearance {
    /// Reported dark mode state
    pub dark: bool,
}

impl AppearanceSource for FixedAppearance {
    fn system_is_dark(&self) -> bool {
        self.dark
    }
}
