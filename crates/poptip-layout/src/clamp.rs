#![forbid(unsafe_code)]

//! Content clamping against the bounds.

use crate::GeometryRequest;
use poptip_core::bounds::Span;
use poptip_core::geometry::{Point, Size};

/// A panel origin and size guaranteed to fit the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedContent {
    /// Top-left of the clamped panel.
    pub origin: Point,
    /// Size of the clamped panel.
    pub size: Size,
}

/// Fit the panel rectangle inside the bounds without crossing the arrow.
///
/// Each axis is handled independently; they never interact. An origin short
/// of the near bound snaps to it and the size gives up everything past the
/// arrow's side of the anchor point, keeping the far edge pinned at the
/// arrow so it never points into clipped-away content. An overhang past the
/// far bound keeps the origin and surrenders the overhang instead.
pub fn compute_bound_content_size(
    req: &GeometryRequest,
    origin: Point,
    anchor_point: Point,
) -> BoundedContent {
    let (x, width) = clamp_axis(
        req.bounds.x,
        origin.x,
        req.content_size.width,
        anchor_point.x,
        req.arrow_size.width,
    );
    let (y, height) = clamp_axis(
        req.bounds.y,
        origin.y,
        req.content_size.height,
        anchor_point.y,
        req.arrow_size.height,
    );

    BoundedContent {
        origin: Point::new(x, y),
        size: Size::new(width, height),
    }
}

fn clamp_axis(span: Span, origin: f32, size: f32, anchor: f32, arrow: f32) -> (f32, f32) {
    if origin < span.min {
        (span.min, anchor - arrow - span.min)
    } else if origin + size > span.max {
        (origin, span.max - origin)
    } else {
        (origin, size)
    }
}
