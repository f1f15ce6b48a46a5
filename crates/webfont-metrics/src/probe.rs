//! Probe Measurement Engine
//!
//! Anchor-character and full-range probes against a configured surface, with
//! normalization to fractions of font size.

use crate::surface::MeasuringSurface;

/// Known ligatures and the single code point each substitutes for.
///
/// Detection results are always reported in this declaration order,
/// independent of which subset a font supports.
pub const LIGATURES: [(&str, char); 4] = [
    ("ff", '\u{FB00}'),
    ("fi", '\u{FB01}'),
    ("fl", '\u{FB02}'),
    ("st", '\u{FB06}'),
];

/// Express a raw surface measurement as a fraction of font size.
///
/// An exact zero passes through unchanged (covers -0.0 as well): it is the
/// surface's "no measurable extent" signal and must stay distinguishable
/// from a computed small fraction.
pub(crate) fn normalize(value: f64, font_size: f64) -> f64 {
    if value == 0.0 {
        value
    } else {
        value / font_size
    }
}

/// Normalized ascent bound of an anchor character's bounding box. Used for
/// the cap height, x-height, ascent, and tittle probes.
pub(crate) fn top_extent<S: MeasuringSurface>(surface: &S, anchor: char, font_size: f64) -> f64 {
    let measurement = surface.measure_text(&anchor.to_string());
    normalize(measurement.actual_bounding_box_ascent, font_size)
}

/// Normalized descent bound of an anchor character's bounding box. Used for
/// the baseline and descent probes.
pub(crate) fn bottom_extent<S: MeasuringSurface>(surface: &S, anchor: char, font_size: f64) -> f64 {
    let measurement = surface.measure_text(&anchor.to_string());
    normalize(measurement.actual_bounding_box_descent, font_size)
}

/// Ligatures the configured font supports, in [`LIGATURES`] order.
///
/// A ligature is present when its substituted code point renders wider than
/// zero; the blank backup face guarantees unsupported ones measure zero.
pub(crate) fn detect_ligatures<S: MeasuringSurface>(surface: &S) -> Vec<&'static str> {
    LIGATURES
        .iter()
        .filter(|(_, point)| surface.measure_text(&point.to_string()).width > 0.0)
        .map(|(name, _)| *name)
        .collect()
}

/// Every character the configured font renders wider than zero, in ascending
/// code-point order over 0..=0xFFFF.
///
/// A full linear scan over the 16-bit range: slow, intended for opt-in
/// on-demand use only. Code points in the surrogate range are not Unicode
/// scalar values and are skipped.
pub(crate) fn scan_glyphs<S: MeasuringSurface>(surface: &S) -> Vec<char> {
    (0u32..=0xFFFF)
        .filter_map(char::from_u32)
        .filter(|point| surface.measure_text(&point.to_string()).width > 0.0)
        .collect()
}
