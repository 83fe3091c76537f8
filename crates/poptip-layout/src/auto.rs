#![forbid(unsafe_code)]

//! Automatic side selection.
//!
//! Tries candidate sides in a fixed preference order and keeps the first
//! whose panel fits the bounds untouched. The order is policy, not law:
//! [`compute_auto_geometry_with`] accepts any candidate slice.

use crate::{GeometryRequest, PlacementResult, Side};

/// Candidate order tried by [`compute_auto_geometry`].
///
/// The trailing `Top` is the terminal fallback: when no side fits, the last
/// computed geometry is returned rather than nothing, and the caller is
/// expected to run the content-size clamper over it.
pub const AUTO_PLACEMENT_ORDER: [Side; 5] = [
    Side::Top,
    Side::Bottom,
    Side::Left,
    Side::Right,
    Side::Top,
];

/// Pick the first side in [`AUTO_PLACEMENT_ORDER`] whose panel fits.
pub fn compute_auto_geometry(req: &GeometryRequest) -> PlacementResult {
    compute_auto_geometry_with(req, &AUTO_PLACEMENT_ORDER)
}

/// Pick the first side in `order` whose panel fits.
///
/// A candidate fits when its origin keeps the full content inside the bounds
/// and the solver forced no size adjustment. When nothing fits, the result
/// of the final candidate is returned as-is; an empty `order` degrades to a
/// plain `Top` computation. Always a single deterministic pass.
pub fn compute_auto_geometry_with(req: &GeometryRequest, order: &[Side]) -> PlacementResult {
    let mut last = None;

    for &side in order {
        let candidate = side.compute(&req.oriented(side));
        if req.bounds.admits(candidate.origin, req.content_size)
            && candidate.adjusted_size.is_none()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(side = ?side, "auto placement selected");
            return candidate;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(side = ?side, "auto placement candidate rejected");
        last = Some(candidate);
    }

    last.unwrap_or_else(|| Side::Top.compute(&req.oriented(Side::Top)))
}
