#![forbid(unsafe_code)]

//! Arrow and transition geometry derived from a placement result.
//!
//! Renderers draw the caret with the border-triangle technique: a rect whose
//! borders form the triangle, rotated per side. These helpers hand them the
//! rect and the entrance-transition offset as plain geometry, so nothing
//! downstream re-derives the math.

use crate::{PlacementResult, ResolvedPlacement};
use poptip_core::geometry::{Point, Rect, Size};

/// Oversize allowance around the rendered arrow triangle.
///
/// The triangle is drawn slightly larger than its footprint so a scale
/// transition never clips the tip.
pub const ARROW_BOX_PADDING: f32 = 2.0;

/// The arrow's box in panel-local coordinates.
///
/// A rect of `width + 2` by `height * 2 + 2` centered on the anchor point,
/// shifted by the arrow protrusion on the bottom and right sides so the
/// visible half points at the anchor.
pub fn arrow_box(result: &PlacementResult, arrow_size: Size) -> Rect {
    let width = arrow_size.width + ARROW_BOX_PADDING;
    let height = arrow_size.height * 2.0 + ARROW_BOX_PADDING;

    let (margin_left, margin_top) = match result.placement {
        ResolvedPlacement::Bottom => (0.0, arrow_size.height),
        ResolvedPlacement::Right => (arrow_size.height, 0.0),
        _ => (0.0, 0.0),
    };

    Rect::new(
        result.anchor_point.x - result.origin.x - (width / 2.0 - margin_left),
        result.anchor_point.y - result.origin.y - (height / 2.0 - margin_top),
        width,
        height,
    )
}

/// Vector from the panel's center to the anchor point.
///
/// Callers seeding an entrance transition translate the panel by this offset
/// first, so it appears to grow out of the anchor.
pub fn translate_origin(result: &PlacementResult, content_size: Size) -> Point {
    let center = Point::new(
        result.origin.x + content_size.width / 2.0,
        result.origin.y + content_size.height / 2.0,
    );
    Point::new(
        result.anchor_point.x - center.x,
        result.anchor_point.y - center.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, GeometryRequest, Placement, compute_geometry};

    fn top_result() -> PlacementResult {
        compute_geometry(
            &GeometryRequest {
                anchor: Rect::new(150.0, 300.0, 64.0, 64.0),
                content_size: Size::new(200.0, 100.0),
                arrow_size: Size::new(16.0, 8.0),
                bounds: Bounds::from_area(Rect::new(0.0, 0.0, 375.0, 667.0)),
            },
            Placement::Top,
        )
    }

    #[test]
    fn top_arrow_box_straddles_the_panel_bottom_edge() {
        let r = top_result();
        let rect = arrow_box(&r, Size::new(16.0, 8.0));
        // origin (82, 192), anchor point (182, 300): panel-local tip at
        // (100, 108), box 18x18 centered on it.
        assert_eq!(rect, Rect::new(91.0, 99.0, 18.0, 18.0));
    }

    #[test]
    fn bottom_arrow_box_shifts_down_by_the_protrusion() {
        let r = PlacementResult {
            origin: Point::new(82.0, 372.0),
            anchor_point: Point::new(182.0, 364.0),
            placement: ResolvedPlacement::Bottom,
            adjusted_size: None,
        };
        let rect = arrow_box(&r, Size::new(16.0, 8.0));
        assert_eq!(rect, Rect::new(91.0, -9.0, 18.0, 18.0));
    }

    #[test]
    fn right_arrow_box_shifts_right_by_the_protrusion() {
        let r = PlacementResult {
            origin: Point::new(222.0, 282.0),
            anchor_point: Point::new(214.0, 332.0),
            placement: ResolvedPlacement::Right,
            adjusted_size: None,
        };
        // Oriented arrow beside the anchor: 8 wide, 16 along the edge.
        let rect = arrow_box(&r, Size::new(8.0, 16.0));
        assert_eq!(rect, Rect::new(3.0, 33.0, 10.0, 34.0));
    }

    #[test]
    fn translate_origin_points_from_panel_center_to_anchor() {
        let r = top_result();
        let offset = translate_origin(&r, Size::new(200.0, 100.0));
        // Panel center (182, 242), anchor point (182, 300).
        assert_eq!(offset, Point::new(0.0, 58.0));
    }
}
