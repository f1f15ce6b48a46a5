//! Backup Face Registrar
//!
//! Declares the zero-width blank face at most once per (weight, style) pair.
//! Measuring an unsupported glyph against the requested font alone is
//! ambiguous: the renderer substitutes a system font, which may draw the
//! probe with nonzero width. Stacking the blank face after the requested
//! family makes missing glyphs measure as zero width instead.

use std::collections::HashSet;

use tracing::debug;

use crate::environment::{FontEnvironment, BLANK_FONT_FAMILY, BLANK_FONT_SOURCE};
use crate::identity::{FontStyle, FontWeight};

/// Append-only record of (weight, style) pairs already declared. Never
/// cleared for the life of the owning cache.
pub(crate) type BackupFaceRegistry = HashSet<(FontWeight, FontStyle)>;

/// Declare the blank backup face for a (weight, style) pair.
///
/// Idempotent and synchronous: the first call per pair declares the
/// font-face rule, repeat calls no-op. No error path.
pub(crate) fn ensure_backup_face<E: FontEnvironment>(
    env: &E,
    registry: &mut BackupFaceRegistry,
    weight: FontWeight,
    style: FontStyle,
) {
    if registry.insert((weight, style)) {
        debug!(%weight, %style, "declaring blank backup face");
        env.register_font_face(BLANK_FONT_FAMILY, weight, style, BLANK_FONT_SOURCE);
    }
}
