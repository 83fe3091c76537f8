#![forbid(unsafe_code)]

//! Directional placement solvers.
//!
//! One pure function per cardinal side. Each positions the panel on its side
//! of the anchor, separated by the arrow's protrusion, centers it along the
//! anchor on the cross axis, keeps the arrow tip clear of the bounds edges,
//! and shrinks the content when the bounds leave too little room.
//!
//! The solvers expect `arrow_size` already oriented for their side; left and
//! right take the transposed footprint. [`crate::compute_geometry`] handles
//! the transposition for callers working from a [`crate::Placement`].
//!
//! All four functions are total: an anchor at a screen corner or content
//! larger than the bounds yields a zero or negative adjusted extent, never
//! an error.

use crate::{AdjustedSize, Extent, GeometryRequest, PlacementResult, ResolvedPlacement};
use poptip_core::bounds::Span;
use poptip_core::geometry::{Point, Size};

/// Clearance kept between a nudged arrow tip and the bounds edge.
pub const ARROW_EDGE_MARGIN: f32 = 8.0;

/// Keep the arrow tip inside the bounds along its cross axis.
///
/// `footprint` is the arrow's extent along the panel edge. A tip closer than
/// half of it to a bounds edge is pulled inward past the edge by the
/// footprint asymmetry plus [`ARROW_EDGE_MARGIN`], so the rendered triangle
/// never crosses into the inset region.
fn nudge_tip(tip: f32, footprint: f32, arrow: Size, span: Span) -> f32 {
    let inset = (arrow.width - arrow.height).abs() + ARROW_EDGE_MARGIN;
    if tip - footprint / 2.0 < span.min {
        span.min + inset
    } else if tip + footprint / 2.0 > span.max {
        span.max - inset
    } else {
        tip
    }
}

/// Bundle per-axis shrinks into an adjustment, or `None` when nothing moved.
fn adjusted(width: Option<f32>, height: Option<f32>) -> Option<AdjustedSize> {
    if width.is_none() && height.is_none() {
        return None;
    }
    Some(AdjustedSize {
        width: width.map_or(Extent::Unconstrained, Extent::Constrained),
        height: height.map_or(Extent::Unconstrained, Extent::Constrained),
    })
}

/// Panel above the anchor; arrow points down at the anchor's top edge.
pub fn compute_top_geometry(req: &GeometryRequest) -> PlacementResult {
    let GeometryRequest {
        anchor,
        content_size: content,
        arrow_size: arrow,
        bounds,
    } = *req;

    let origin = Point::new(
        bounds
            .x
            .clamp_origin(anchor.x + (anchor.width - content.width) / 2.0, content.width),
        (anchor.y - content.height - arrow.height).max(bounds.y.min),
    );
    let anchor_point = Point::new(
        nudge_tip(anchor.center_x(), arrow.width, arrow, bounds.x),
        anchor.y,
    );

    // Shrink rather than cross the arrow line below or the far bound beside.
    let arrow_line = anchor_point.y - arrow.height;
    let height = (origin.y + content.height > arrow_line).then(|| arrow_line - origin.y);
    let width = (origin.x + content.width > bounds.x.max).then(|| bounds.x.max - origin.x);

    PlacementResult {
        origin,
        anchor_point,
        placement: ResolvedPlacement::Top,
        adjusted_size: adjusted(width, height),
    }
}

/// Panel below the anchor; arrow points up at the anchor's bottom edge.
pub fn compute_bottom_geometry(req: &GeometryRequest) -> PlacementResult {
    let GeometryRequest {
        anchor,
        content_size: content,
        arrow_size: arrow,
        bounds,
    } = *req;

    let origin = Point::new(
        bounds
            .x
            .clamp_origin(anchor.x + (anchor.width - content.width) / 2.0, content.width),
        anchor.bottom() + arrow.height,
    );
    let anchor_point = Point::new(
        nudge_tip(anchor.center_x(), arrow.width, arrow, bounds.x),
        anchor.bottom(),
    );

    let height = (origin.y + content.height > bounds.y.max).then(|| bounds.y.max - origin.y);
    let width = (origin.x + content.width > bounds.x.max).then(|| bounds.x.max - origin.x);

    PlacementResult {
        origin,
        anchor_point,
        placement: ResolvedPlacement::Bottom,
        adjusted_size: adjusted(width, height),
    }
}

/// Panel to the left of the anchor; arrow points right at its left edge.
pub fn compute_left_geometry(req: &GeometryRequest) -> PlacementResult {
    let GeometryRequest {
        anchor,
        content_size: content,
        arrow_size: arrow,
        bounds,
    } = *req;

    let origin = Point::new(
        (anchor.x - content.width - arrow.width).max(bounds.x.min),
        bounds
            .y
            .clamp_origin(anchor.y + (anchor.height - content.height) / 2.0, content.height),
    );
    let anchor_point = Point::new(
        anchor.x,
        nudge_tip(anchor.center_y(), arrow.height, arrow, bounds.y),
    );

    let arrow_line = anchor_point.x - arrow.width;
    let width = (origin.x + content.width > arrow_line).then(|| arrow_line - origin.x);
    let height = (origin.y + content.height > bounds.y.max).then(|| bounds.y.max - origin.y);

    PlacementResult {
        origin,
        anchor_point,
        placement: ResolvedPlacement::Left,
        adjusted_size: adjusted(width, height),
    }
}

/// Panel to the right of the anchor; arrow points left at its right edge.
pub fn compute_right_geometry(req: &GeometryRequest) -> PlacementResult {
    let GeometryRequest {
        anchor,
        content_size: content,
        arrow_size: arrow,
        bounds,
    } = *req;

    let origin = Point::new(
        anchor.right() + arrow.width,
        bounds
            .y
            .clamp_origin(anchor.y + (anchor.height - content.height) / 2.0, content.height),
    );
    let anchor_point = Point::new(
        anchor.right(),
        nudge_tip(anchor.center_y(), arrow.height, arrow, bounds.y),
    );

    let width = (origin.x + content.width > bounds.x.max).then(|| bounds.x.max - origin.x);
    let height = (origin.y + content.height > bounds.y.max).then(|| bounds.y.max - origin.y);

    PlacementResult {
        origin,
        anchor_point,
        placement: ResolvedPlacement::Right,
        adjusted_size: adjusted(width, height),
    }
}
