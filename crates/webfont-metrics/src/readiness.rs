//! Readiness Coordinator
//!
//! Waits for both the requested family and the blank backup face before any
//! probing starts.

use crate::environment::{FontEnvironment, BLANK_FONT_FAMILY};
use crate::identity::{FontStyle, FontWeight};
use crate::Result;

/// Suspend until the requested family and the backup face are both loaded
/// and renderable.
///
/// Either failure propagates verbatim; construction aborts with no cache
/// entry written.
pub(crate) async fn wait_for_fonts<E: FontEnvironment>(
    env: &E,
    family: &str,
    weight: FontWeight,
    style: FontStyle,
) -> Result<()> {
    env.wait_ready(family, weight, style).await?;
    env.wait_ready(BLANK_FONT_FAMILY, weight, style).await?;
    Ok(())
}
