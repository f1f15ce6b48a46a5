//! Font Metrics Facade
//!
//! The constructed, cached value: precomputed vertical metrics plus
//! on-demand measurement methods bound to a private surface.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::options::MetricsOptions;
use crate::probe;
use crate::surface::MeasuringSurface;

/// Measured metrics for one font identity.
///
/// Scalar metrics are signed fractions of the configured font size, probed
/// eagerly at construction; a probe glyph the font does not support reports
/// the surface's raw zero. The instance owns its configured surface and
/// reuses it for all on-demand measurements.
#[derive(Debug)]
pub struct FontMetrics<S> {
    /// Ascent bound of the cap-height anchor.
    pub cap_height: f64,
    /// Descent bound of the baseline anchor.
    pub baseline: f64,
    /// Ascent bound of the x-height anchor.
    pub x_height: f64,
    /// Descent bound of the descender anchor.
    pub descent: f64,
    /// Ascent bound of the ascender anchor.
    pub ascent: f64,
    /// Ascent bound of the tittle anchor.
    pub tittle: f64,
    /// Supported ligatures, always in [`LIGATURES`](crate::LIGATURES) order.
    pub ligatures: Vec<&'static str>,
    font_size: f64,
    surface: S,
    width_cache: RefCell<HashMap<String, f64>>,
}

impl<S: MeasuringSurface> FontMetrics<S> {
    /// Run the eager probes against an already-configured surface and take
    /// ownership of it.
    pub(crate) fn probe(surface: S, options: &MetricsOptions) -> Self {
        let size = options.font_size;
        let chars = &options.chars;
        Self {
            cap_height: probe::top_extent(&surface, chars.cap_height, size),
            baseline: probe::bottom_extent(&surface, chars.baseline, size),
            x_height: probe::top_extent(&surface, chars.x_height, size),
            descent: probe::bottom_extent(&surface, chars.descent, size),
            ascent: probe::top_extent(&surface, chars.ascent, size),
            tittle: probe::top_extent(&surface, chars.tittle, size),
            ligatures: probe::detect_ligatures(&surface),
            font_size: size,
            surface,
            width_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Font size the surface was configured at.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Every character the font renders, in ascending code-point order over
    /// the 16-bit range.
    ///
    /// Recomputed on every call — a full scan of 65536 candidates. Never
    /// run eagerly; call only when coverage is actually needed.
    pub fn glyphs(&self) -> Vec<char> {
        probe::scan_glyphs(&self.surface)
    }

    /// Rendered width of a string as a fraction of font size.
    ///
    /// Memoized per distinct input for the life of the instance. Presence
    /// in the memo is checked explicitly, so a cached zero width is served
    /// from the memo like any other value.
    pub fn measure_width(&self, text: &str) -> f64 {
        if let Some(width) = self.width_cache.borrow().get(text) {
            return *width;
        }
        let width = probe::normalize(self.surface.measure_text(text).width, self.font_size);
        self.width_cache.borrow_mut().insert(text.to_string(), width);
        width
    }

    /// Every field of the surface's raw measurement for a string, each
    /// normalized under the same zero-passthrough rule as the anchor probes.
    pub fn measure_text(&self, text: &str) -> BTreeMap<&'static str, f64> {
        self.surface
            .measure_text(text)
            .fields()
            .into_iter()
            .map(|(name, value)| (name, probe::normalize(value, self.font_size)))
            .collect()
    }
}
