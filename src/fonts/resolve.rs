use tracing::{debug, warn};

use super::{FontDesign, FontFamily, FontFeature, FontMetrics, FontWeight};

/// Face name of the fallback used when a family's face can't be loaded.
pub const SYSTEM_FALLBACK_FACE: &str = "System Monospaced Digits";

const SYSTEM_FALLBACK_CSS: &str = "ui-monospace, monospace";

/// Loads concrete faces by name.
///
/// The platform font system sits behind this trait; the crate ships
/// [`BuiltinFontSource`] backed by the catalog's metric tables.
pub trait FontSource: Send + Sync {
    /// Returns the em-unit metrics of the named face, if it is installed.
    fn load_face(&self, face_name: &str) -> Option<FontMetrics>;
}

/// Font source that knows every face in the catalog.
#[derive(Debug, Clone, Default)]
pub struct BuiltinFontSource {
    missing: Vec<String>,
}

impl BuiltinFontSource {
    /// Creates a source where every catalog face is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that pretends the given face names are not installed.
    pub fn without(missing: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}

impl FontSource for BuiltinFontSource {
    fn load_face(&self, face_name: &str) -> Option<FontMetrics> {
        if self.missing.iter().any(|name| name == face_name) {
            return None;
        }

        FontFamily::ALL.into_iter().find_map(|family| {
            family
                .available_weights()
                .iter()
                .find(|weight| family.face_name(**weight) == face_name)
                .map(|weight| FontMetrics::for_design(family.spec().design, *weight))
        })
    }
}

/// A face resolved at a point size, ready to measure and draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    /// Requested family
    pub family: FontFamily,
    /// Weight actually used
    pub weight: FontWeight,
    /// Name of the loaded face
    pub face_name: String,
    /// CSS `font-family` stack for vector output
    pub css_family: &'static str,
    /// Point size
    pub size: f64,
    /// Features applied to the face
    pub features: Vec<FontFeature>,
    /// Em-unit metrics
    pub metrics: FontMetrics,
    /// True when the family's face was unavailable and the system font stands in
    pub is_fallback: bool,
}

impl ResolvedFont {
    /// Ascender in points.
    pub fn ascender(&self) -> f64 {
        self.metrics.ascender * self.size
    }

    /// Descender in points, negative.
    pub fn descender(&self) -> f64 {
        self.metrics.descender * self.size
    }

    /// Leading in points.
    pub fn leading(&self) -> f64 {
        self.metrics.leading * self.size
    }

    /// Cap height in points.
    pub fn cap_height(&self) -> f64 {
        self.metrics.cap_height * self.size
    }

    /// Width of `text` in points, honouring the digit features.
    pub fn measure(&self, text: &str) -> f64 {
        let proportional = self.features.contains(&FontFeature::ProportionalNumbers);
        self.metrics.measure(text, proportional) * self.size
    }

    /// Same face at a different size.
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// Resolves a concrete face from (family, weight, size).
///
/// A weight the family doesn't ship with becomes the family's first weight.
/// When the face isn't available from `source`, the system monospaced-digit
/// font stands in at the same size and weight.
pub fn resolve_font(
    source: &dyn FontSource,
    family: FontFamily,
    weight: FontWeight,
    size: f64,
) -> ResolvedFont {
    let weight = family.coerce_weight(weight);
    let face_name = family.face_name(weight);
    let spec = family.spec();

    match source.load_face(&face_name) {
        Some(metrics) => {
            debug!(face = %face_name, size, "Resolved font face");
            ResolvedFont {
                family,
                weight,
                face_name,
                css_family: spec.css_family,
                size,
                features: spec.features.to_vec(),
                metrics,
                is_fallback: false,
            }
        }
        None => {
            warn!(face = %face_name, "Font face unavailable, using system fallback");
            ResolvedFont {
                family,
                weight,
                face_name: SYSTEM_FALLBACK_FACE.to_string(),
                css_family: SYSTEM_FALLBACK_CSS,
                size,
                features: vec![FontFeature::MonospacedDigits],
                metrics: FontMetrics::for_design(FontDesign::SystemSans, weight),
                is_fallback: true,
            }
        }
    }
}
