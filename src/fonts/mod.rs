//! Font catalog: supported families, their weights and typographic features.
//!
//! Every family is described by a static [`FamilySpec`] entry. Concrete faces
//! are resolved from (family, weight, size) through a [`FontSource`], falling
//! back to the system monospaced-digit font when a face cannot be loaded.

mod metrics;
mod resolve;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use metrics::FontMetrics;
pub use resolve::{BuiltinFontSource, FontSource, ResolvedFont, SYSTEM_FALLBACK_FACE, resolve_font};

/// Weight (style) of a font face.
///
/// Ordered from lightest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FontWeight {
    /// Ultra Light
    #[default]
    UltraLight,
    /// Thin
    Thin,
    /// Light
    Light,
    /// Regular
    Regular,
    /// Medium
    Medium,
    /// Semibold
    Semibold,
    /// Bold
    Bold,
    /// Heavy
    Heavy,
    /// Black
    Black,
}

impl FontWeight {
    /// All weights, lightest first.
    pub const ALL: [FontWeight; 9] = [
        FontWeight::UltraLight,
        FontWeight::Thin,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
        FontWeight::Heavy,
        FontWeight::Black,
    ];

    /// Display name used in the settings panel and the preference file.
    pub fn name(self) -> &'static str {
        match self {
            FontWeight::UltraLight => "Ultra Light",
            FontWeight::Thin => "Thin",
            FontWeight::Light => "Light",
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::Semibold => "Semibold",
            FontWeight::Bold => "Bold",
            FontWeight::Heavy => "Heavy",
            FontWeight::Black => "Black",
        }
    }

    /// Parses a display name. Unknown names resolve to [`FontWeight::Regular`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|weight| weight.name() == name)
            .unwrap_or(FontWeight::Regular)
    }

    /// CSS numeric weight (100-900).
    pub fn numeric(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Relative advance width multiplier; heavier strokes run wider.
    pub(crate) fn width_factor(self) -> f64 {
        1.0 + 0.015 * (self as i32 - FontWeight::Regular as i32) as f64
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// OpenType-style feature applied to a resolved face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFeature {
    /// Fixed-width digits so the clock doesn't jitter.
    MonospacedDigits,
    /// Proportional figures.
    ProportionalNumbers,
    /// Rounded, raised colon.
    AlternatePunctuation,
}

impl FontFeature {
    /// Four-letter feature tag.
    pub fn tag(self) -> &'static str {
        match self {
            FontFeature::MonospacedDigits => "tnum",
            FontFeature::ProportionalNumbers => "pnum",
            FontFeature::AlternatePunctuation => "case",
        }
    }
}

/// Glyph design a family is drawn with; selects the metric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontDesign {
    /// System sans serif
    SystemSans,
    /// System monospace
    SystemMono,
    /// System serif
    SystemSerif,
    /// Neo-grotesque
    Helvetica,
    /// Geometric sans
    Geometric,
    /// Modern (Didone) serif
    Didone,
}

/// Font families the clock can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// San Francisco, the system font
    #[default]
    SanFrancisco,
    /// San Francisco Mono
    SanFranciscoMono,
    /// New York, the system serif
    NewYork,
    /// Neue Helvetica, the face of the original Padbury clock
    NeueHelvetica,
    /// Futura
    Futura,
    /// Didot
    Didot,
}

/// Static catalog entry describing one family.
#[derive(Debug)]
pub struct FamilySpec {
    /// Family this entry describes
    pub family: FontFamily,
    /// Display name used in the panel and the preference file
    pub name: &'static str,
    /// Base face name; weights append their compact name
    pub face_base: &'static str,
    /// CSS `font-family` stack for vector output
    pub css_family: &'static str,
    /// Part of the plain (system-like) set
    pub plain: bool,
    /// Glyph design
    pub design: FontDesign,
    /// Available weights, in selector order
    pub weights: &'static [FontWeight],
    /// Features applied on resolution
    pub features: &'static [FontFeature],
}

const CATALOG: [FamilySpec; 6] = [
    FamilySpec {
        family: FontFamily::SanFrancisco,
        name: "San Francisco (System Font)",
        face_base: "SF Pro Display",
        css_family: "-apple-system, 'SF Pro Display', system-ui, sans-serif",
        plain: true,
        design: FontDesign::SystemSans,
        weights: &[
            FontWeight::UltraLight,
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
            FontWeight::Black,
        ],
        features: &[FontFeature::MonospacedDigits],
    },
    FamilySpec {
        family: FontFamily::SanFranciscoMono,
        name: "San Francisco Mono",
        face_base: "SF Mono",
        css_family: "'SF Mono', ui-monospace, monospace",
        plain: true,
        design: FontDesign::SystemMono,
        weights: &[
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
            FontWeight::Black,
        ],
        features: &[],
    },
    FamilySpec {
        family: FontFamily::NewYork,
        name: "New York",
        face_base: "New York",
        css_family: "'New York', ui-serif, serif",
        plain: true,
        design: FontDesign::SystemSerif,
        weights: &[
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
            FontWeight::Black,
        ],
        features: &[FontFeature::MonospacedDigits],
    },
    FamilySpec {
        family: FontFamily::NeueHelvetica,
        name: "Neue Helvetica (Padbury Original)",
        face_base: "Helvetica Neue",
        css_family: "'Helvetica Neue', Helvetica, Arial, sans-serif",
        plain: true,
        design: FontDesign::Helvetica,
        weights: &[
            FontWeight::UltraLight,
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Bold,
        ],
        features: &[
            FontFeature::ProportionalNumbers,
            FontFeature::AlternatePunctuation,
        ],
    },
    FamilySpec {
        family: FontFamily::Futura,
        name: "Futura",
        face_base: "Futura",
        css_family: "Futura, 'Century Gothic', sans-serif",
        plain: false,
        design: FontDesign::Geometric,
        weights: &[FontWeight::Medium, FontWeight::Bold],
        features: &[],
    },
    FamilySpec {
        family: FontFamily::Didot,
        name: "Didot",
        face_base: "Didot",
        css_family: "Didot, 'Bodoni 72', serif",
        plain: false,
        design: FontDesign::Didone,
        weights: &[FontWeight::Regular, FontWeight::Bold],
        features: &[FontFeature::ProportionalNumbers],
    },
];

impl FontFamily {
    /// All families in selector order.
    pub const ALL: [FontFamily; 6] = [
        FontFamily::SanFrancisco,
        FontFamily::SanFranciscoMono,
        FontFamily::NewYork,
        FontFamily::NeueHelvetica,
        FontFamily::Futura,
        FontFamily::Didot,
    ];

    /// Catalog entry for this family.
    pub fn spec(self) -> &'static FamilySpec {
        &CATALOG[self as usize]
    }

    /// Display name used in the settings panel and the preference file.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Looks a family up by display name, falling back to the default family.
    pub fn named(name: &str) -> Self {
        Self::find(name).unwrap_or_default()
    }

    /// Looks a family up by display name.
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }

    /// Families shown in the selector, optionally only the plain ones.
    pub fn selectable(plain_only: bool) -> Vec<FontFamily> {
        Self::ALL
            .into_iter()
            .filter(|family| !plain_only || family.is_plain())
            .collect()
    }

    /// Whether this family belongs to the plain set.
    pub fn is_plain(self) -> bool {
        self.spec().plain
    }

    /// Weights the family ships with, in selector order.
    pub fn available_weights(self) -> &'static [FontWeight] {
        self.spec().weights
    }

    /// Returns `weight` if the family has it, otherwise its first weight.
    pub fn coerce_weight(self, weight: FontWeight) -> FontWeight {
        let weights = self.available_weights();
        if weights.contains(&weight) {
            weight
        } else {
            weights.first().copied().unwrap_or(FontWeight::Regular)
        }
    }

    /// Face name for a weight, e.g. `Helvetica Neue UltraLight`.
    pub fn face_name(self, weight: FontWeight) -> String {
        let base = self.spec().face_base;
        match weight {
            FontWeight::Regular => base.to_string(),
            other => format!("{} {}", base, other.name().replace(' ', "")),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FontFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::named(&name))
    }
}
