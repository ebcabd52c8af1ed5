use super::{FontDesign, FontWeight};

/// Vertical metrics and glyph advances of a face, in em units.
///
/// `descender` is negative (below the baseline), matching the usual
/// font-table convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Height above the baseline
    pub ascender: f64,
    /// Depth below the baseline, negative
    pub descender: f64,
    /// Extra line gap
    pub leading: f64,
    /// Height of flat capital letters
    pub cap_height: f64,
    /// Advance of every digit when digits are tabular
    pub digit: f64,
    /// Advance of the digit one when digits are proportional
    pub digit_one: f64,
    /// Advance of `:`
    pub colon: f64,
    /// Advance of a space
    pub space: f64,
    /// Average advance of capital letters
    pub capital: f64,
    /// Advance of `<` and `>`
    pub angle: f64,
    /// Advance of anything else
    pub other: f64,
}

impl FontMetrics {
    /// Built-in metric table for a design, adjusted for weight.
    pub fn for_design(design: FontDesign, weight: FontWeight) -> Self {
        let base = match design {
            FontDesign::SystemSans => FontMetrics {
                ascender: 0.952,
                descender: -0.241,
                leading: 0.0,
                cap_height: 0.705,
                digit: 0.62,
                digit_one: 0.62,
                colon: 0.29,
                space: 0.26,
                capital: 0.7,
                angle: 0.6,
                other: 0.55,
            },
            FontDesign::SystemMono => FontMetrics {
                ascender: 0.95,
                descender: -0.24,
                leading: 0.0,
                cap_height: 0.7,
                digit: 0.6,
                digit_one: 0.6,
                colon: 0.6,
                space: 0.6,
                capital: 0.6,
                angle: 0.6,
                other: 0.6,
            },
            FontDesign::SystemSerif => FontMetrics {
                ascender: 0.93,
                descender: -0.23,
                leading: 0.0,
                cap_height: 0.68,
                digit: 0.58,
                digit_one: 0.58,
                colon: 0.27,
                space: 0.25,
                capital: 0.72,
                angle: 0.58,
                other: 0.52,
            },
            FontDesign::Helvetica => FontMetrics {
                ascender: 0.952,
                descender: -0.213,
                leading: 0.028,
                cap_height: 0.714,
                digit: 0.556,
                digit_one: 0.4,
                colon: 0.278,
                space: 0.278,
                capital: 0.68,
                angle: 0.584,
                other: 0.52,
            },
            FontDesign::Geometric => FontMetrics {
                ascender: 0.96,
                descender: -0.24,
                leading: 0.0,
                cap_height: 0.75,
                digit: 0.55,
                digit_one: 0.55,
                colon: 0.25,
                space: 0.25,
                capital: 0.66,
                angle: 0.6,
                other: 0.5,
            },
            FontDesign::Didone => FontMetrics {
                ascender: 0.91,
                descender: -0.25,
                leading: 0.0,
                cap_height: 0.69,
                digit: 0.6,
                digit_one: 0.45,
                colon: 0.24,
                space: 0.25,
                capital: 0.74,
                angle: 0.57,
                other: 0.5,
            },
        };

        base.widened(weight.width_factor())
    }

    fn widened(self, factor: f64) -> Self {
        Self {
            digit: self.digit * factor,
            digit_one: self.digit_one * factor,
            colon: self.colon * factor,
            space: self.space * factor,
            capital: self.capital * factor,
            angle: self.angle * factor,
            other: self.other * factor,
            ..self
        }
    }

    /// Advance of a single character in em units.
    pub fn advance(&self, ch: char, proportional_digits: bool) -> f64 {
        match ch {
            '1' if proportional_digits => self.digit_one,
            '0'..='9' => self.digit,
            ':' => self.colon,
            ' ' => self.space,
            '<' | '>' => self.angle,
            c if c.is_ascii_uppercase() => self.capital,
            _ => self.other,
        }
    }

    /// Width of `text` in em units.
    pub fn measure(&self, text: &str, proportional_digits: bool) -> f64 {
        text.chars()
            .map(|ch| self.advance(ch, proportional_digits))
            .sum()
    }
}
