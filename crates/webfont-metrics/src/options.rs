//! Measurement Options
//!
//! Probe characters and surface settings for a metrics instance. Callers
//! override defaults per field with struct-update syntax:
//!
//! ```
//! use webfont_metrics::{MetricsOptions, ProbeChars};
//!
//! let options = MetricsOptions {
//!     font_size: 200.0,
//!     chars: ProbeChars {
//!         cap_height: 'H',
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! assert_eq!(options.chars.x_height, 'x');
//! ```

use serde::Serialize;

use crate::surface::TextBaseline;

/// Anchor characters for the vertical probes.
///
/// Each represents one vertical metric: the character's rendered bounding
/// box stands in for the font-wide measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeChars {
    /// Cap height anchor (default `'S'`).
    pub cap_height: char,
    /// Baseline anchor (default `'n'`).
    pub baseline: char,
    /// x-height anchor (default `'x'`).
    pub x_height: char,
    /// Descender anchor (default `'p'`).
    pub descent: char,
    /// Ascender anchor (default `'h'`).
    pub ascent: char,
    /// Tittle anchor, the dot of a lowercase i (default `'i'`).
    pub tittle: char,
}

impl Default for ProbeChars {
    fn default() -> Self {
        Self {
            cap_height: 'S',
            baseline: 'n',
            x_height: 'x',
            descent: 'p',
            ascent: 'h',
            tittle: 'i',
        }
    }
}

/// Options for constructing a metrics instance.
///
/// Part of the font identity: requests differing only in options get
/// independent cache entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsOptions {
    pub chars: ProbeChars,
    /// Font size the private surface is configured at. Must be positive;
    /// all reported metrics are fractions of this value.
    pub font_size: f64,
    /// Baseline mode the surface measures against.
    pub baseline: TextBaseline,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            chars: ProbeChars::default(),
            font_size: 100.0,
            baseline: TextBaseline::Alphabetic,
        }
    }
}
