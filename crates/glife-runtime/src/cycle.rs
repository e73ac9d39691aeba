#![forbid(unsafe_code)]

//! Advancing a single viewport by one generation.

use crate::host::{Host, HostError, ViewportId};

/// Step one viewport's visible content to the next generation.
///
/// Reads the currently visible region, steps it, and writes the result back
/// (the host resets the viewport's scroll to the top of the new region).
/// Dedicated viewports are skipped and left untouched. A zero-height
/// viewport reads as an empty region and steps to an empty region.
///
/// Returns whether the viewport was advanced. Mutates exactly this viewport
/// and no other.
pub fn advance_viewport<H: Host>(host: &mut H, id: ViewportId) -> Result<bool, HostError> {
    if host.is_dedicated(id) {
        tracing::trace!(viewport = id, "skipping dedicated viewport");
        return Ok(false);
    }

    let region = host.read_region(id)?;
    let next = region.step();
    tracing::trace!(
        viewport = id,
        rows_in = region.height(),
        rows_out = next.height(),
        live = next.live_count(),
        "viewport advanced"
    );
    host.write_region(id, next)?;
    Ok(true)
}
