//! webfont-metrics - Web Font Measurement
//!
//! Measures typographic properties of a web font by rendering probe
//! characters onto an off-screen measuring surface and reading back
//! bounding-box measurements, normalized to a fraction of font size:
//! - Vertical anchors (cap height, baseline, x-height, descent, ascent, tittle)
//! - Available ligatures (ff, fi, fl, st)
//! - Glyph coverage over the 16-bit code-point range
//!
//! The drawing surface and the font-loading signal are capabilities supplied
//! by the embedder (see [`MeasuringSurface`] and [`FontEnvironment`]); this
//! crate does not load or parse font files itself. Constructed metrics are
//! memoized per font identity by [`FontMetricsCache`], with at most one
//! construction in flight per identity.

mod backup;
pub mod cache;
pub mod environment;
pub mod identity;
pub mod metrics;
pub mod options;
mod probe;
mod readiness;
pub mod surface;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::FontMetricsCache;
pub use environment::{FontEnvironment, BLANK_FONT_FAMILY, BLANK_FONT_SOURCE};
pub use identity::{FontIdentity, FontStyle, FontWeight};
pub use metrics::FontMetrics;
pub use options::{MetricsOptions, ProbeChars};
pub use probe::LIGATURES;
pub use surface::{MeasuringSurface, TextAlign, TextBaseline, TextMeasurement};

/// Font loading error types
///
/// Surfaced verbatim from the embedder's font-loading signal when either the
/// requested font or the blank backup face fails to become ready. `Clone`
/// because a shared in-flight construction fans the same failure out to every
/// concurrent waiter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontLoadError {
    #[error("timed out waiting for font \"{family}\" to load")]
    Timeout { family: String },

    #[error("font \"{family}\" failed to load: {reason}")]
    Failed { family: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FontLoadError>;
