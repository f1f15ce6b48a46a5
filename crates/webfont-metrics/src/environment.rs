//! Font Environment
//!
//! External capabilities supplied by the embedder: surface creation, the
//! font-loading signal, and font-face declaration in the page's style
//! environment.

use crate::identity::{FontStyle, FontWeight};
use crate::surface::MeasuringSurface;
use crate::Result;

/// Family name under which the zero-width backup face is declared.
pub const BLANK_FONT_FAMILY: &str = "webfont-metrics-blank";

/// Source reference for the backup face: a build-time asset with zero glyph
/// coverage, so any character missing from the requested family renders at
/// zero width.
pub const BLANK_FONT_SOURCE: &str = "url(fonts/webfont-metrics-blank.woff2) format(\"woff2\")";

/// Embedder-supplied capabilities needed to construct font metrics.
///
/// Single-threaded by design; readiness futures need no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait FontEnvironment {
    /// `'static` because constructed metrics own their surface for the life
    /// of the cache entry.
    type Surface: MeasuringSurface + 'static;

    /// Create a fresh off-screen surface. Each constructed metrics instance
    /// owns one privately.
    fn create_surface(&self) -> Self::Surface;

    /// Suspend until the named family at the given weight/style is loaded
    /// and renderable.
    ///
    /// Fails with [`FontLoadError`](crate::FontLoadError) on the loading
    /// capability's own schedule; this crate imposes no timeout of its own
    /// and never retries.
    async fn wait_ready(&self, family: &str, weight: FontWeight, style: FontStyle) -> Result<()>;

    /// Declare a font-face rule in the page's style environment. Assumed to
    /// always succeed.
    fn register_font_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
        source: &str,
    );
}
