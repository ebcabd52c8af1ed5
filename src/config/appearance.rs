use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color theme of the clock outside the night window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// White digits on black.
    #[default]
    Dark,

    /// Black digits on white.
    Light,

    /// Follow the system dark mode setting.
    System,
}

impl Appearance {
    /// All appearances in selector order.
    pub const ALL: [Appearance; 3] = [Appearance::Dark, Appearance::Light, Appearance::System];

    /// Title shown in the appearance selector.
    pub fn title(self) -> &'static str {
        match self {
            Appearance::Dark => "Dark",
            Appearance::Light => "Light",
            Appearance::System => "System",
        }
    }

    /// Looks an appearance up by selector title or stored name, ignoring case.
    pub fn titled(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|appearance| appearance.title().eq_ignore_ascii_case(title.trim()))
    }

    /// Whether the dark color pair applies given the system dark mode state.
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            Appearance::Dark => true,
            Appearance::Light => false,
            Appearance::System => system_is_dark,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Dark => write!(f, "dark"),
            Appearance::Light => write!(f, "light"),
            Appearance::System => write!(f, "system"),
        }
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::titled(s).ok_or_else(|| format!("unknown appearance '{s}'"))
    }
}
