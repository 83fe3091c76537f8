#![forbid(unsafe_code)]

//! Centered placement for anchorless tooltips.

use crate::{AdjustedSize, Extent, PlacementResult, ResolvedPlacement};
use poptip_core::bounds::{Bounds, Span};
use poptip_core::geometry::{Point, Size};

/// Center the panel inside the bounds with no anchor element.
///
/// Per axis: content that meets or exceeds the bounds span is pinned to it
/// with a [`Extent::Constrained`] extent; smaller content stays
/// [`Extent::Unconstrained`], the origin sits at the span start, and the
/// content centers itself inside a container already capped by the bounds.
/// The anchor point degenerates to the bounds center and the placement is
/// always [`ResolvedPlacement::Center`].
pub fn compute_center_geometry(content_size: Size, bounds: Bounds) -> PlacementResult {
    let (x, width) = center_axis(content_size.width, bounds.x);
    let (y, height) = center_axis(content_size.height, bounds.y);

    PlacementResult {
        origin: Point::new(x, y),
        anchor_point: bounds.center(),
        placement: ResolvedPlacement::Center,
        adjusted_size: Some(AdjustedSize { width, height }),
    }
}

fn center_axis(content: f32, span: Span) -> (f32, Extent) {
    let max = span.len();
    if content >= max {
        // Pinned: the leftover (max - max) / 2 collapses onto the span start.
        (span.min, Extent::Constrained(max))
    } else {
        (span.min, Extent::Unconstrained)
    }
}
