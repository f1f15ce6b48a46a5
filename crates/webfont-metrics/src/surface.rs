//! Measuring Surface
//!
//! The off-screen drawing surface capability and its configuration.

use serde::Serialize;

use crate::environment::BLANK_FONT_FAMILY;
use crate::identity::{FontStyle, FontWeight};

/// Raw text measurement reported by a surface
///
/// Field set mirrors the Canvas 2D `TextMetrics` dictionary. All values are
/// in surface units at the configured font size; normalization to fractions
/// of font size happens in the probe engine, not here.
#[derive(Debug, Clone, Default)]
pub struct TextMeasurement {
    pub width: f64,
    pub actual_bounding_box_left: f64,
    pub actual_bounding_box_right: f64,
    pub actual_bounding_box_ascent: f64,
    pub actual_bounding_box_descent: f64,
    pub font_bounding_box_ascent: f64,
    pub font_bounding_box_descent: f64,
    pub em_height_ascent: f64,
    pub em_height_descent: f64,
    pub hanging_baseline: f64,
    pub alphabetic_baseline: f64,
    pub ideographic_baseline: f64,
}

impl TextMeasurement {
    /// Every field as a `(name, value)` pair, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("width", self.width),
            ("actual_bounding_box_left", self.actual_bounding_box_left),
            ("actual_bounding_box_right", self.actual_bounding_box_right),
            ("actual_bounding_box_ascent", self.actual_bounding_box_ascent),
            ("actual_bounding_box_descent", self.actual_bounding_box_descent),
            ("font_bounding_box_ascent", self.font_bounding_box_ascent),
            ("font_bounding_box_descent", self.font_bounding_box_descent),
            ("em_height_ascent", self.em_height_ascent),
            ("em_height_descent", self.em_height_descent),
            ("hanging_baseline", self.hanging_baseline),
            ("alphabetic_baseline", self.alphabetic_baseline),
            ("ideographic_baseline", self.ideographic_baseline),
        ]
    }
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

/// Text baseline mode
///
/// `Serialize` because the baseline mode is part of the options that feed
/// the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

/// Off-screen text measurement surface
///
/// Must render a font specification containing two families with fallback
/// order, so unsupported glyphs fall through to the zero-width backup face.
pub trait MeasuringSurface {
    /// Set the active font specification, e.g. `"400 normal 100px Menlo, ..."`.
    fn set_font(&mut self, spec: &str);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Measure a string against the active font specification.
    fn measure_text(&self, text: &str) -> TextMeasurement;
}

/// Build the font specification string for a measurement surface.
///
/// The blank backup family is always appended so characters missing from the
/// requested family render at zero width instead of falling back to a system
/// font.
pub fn font_spec(family: &str, weight: FontWeight, style: FontStyle, font_size: f64) -> String {
    format!("{weight} {style} {font_size}px {family}, {BLANK_FONT_FAMILY}")
}

/// Configure a surface for measurement: active font specification, left text
/// alignment, and the requested baseline mode.
///
/// Runs after both fonts are confirmed ready and before any probe, exactly
/// once per constructed metrics instance.
pub fn configure<S: MeasuringSurface>(
    surface: &mut S,
    family: &str,
    weight: FontWeight,
    style: FontStyle,
    font_size: f64,
    baseline: TextBaseline,
) {
    surface.set_font(&font_spec(family, weight, style, font_size));
    surface.set_text_align(TextAlign::Left);
    surface.set_text_baseline(baseline);
}
