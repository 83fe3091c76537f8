#![forbid(unsafe_code)]

//! Poptip public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the geometry and placement types from the internal crates and
//! offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use poptip::prelude::*;
//!
//! let request = GeometryRequest {
//!     anchor: Rect::new(150.0, 300.0, 64.0, 64.0),
//!     content_size: Size::new(200.0, 100.0),
//!     arrow_size: Size::new(16.0, 8.0),
//!     bounds: Bounds::from_viewport(Size::new(375.0, 667.0), Insets::all(24.0)),
//! };
//! let geom = compute_geometry(&request, Placement::Auto);
//! assert_eq!(geom.placement, ResolvedPlacement::Top);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use poptip_core::bounds::{Bounds, Span};
pub use poptip_core::geometry::{Insets, Point, Rect, Size};
pub use poptip_core::offset::{Offset, OffsetError, parse_offset};

// --- Placement re-exports --------------------------------------------------

pub use poptip_layout::{
    ARROW_EDGE_MARGIN, AUTO_PLACEMENT_ORDER, AdjustedSize, BoundedContent, Extent,
    GeometryRequest, Placement, PlacementResult, ResolvedPlacement, Side, arrow_box,
    compute_auto_geometry, compute_auto_geometry_with, compute_bottom_geometry,
    compute_bound_content_size, compute_center_geometry, compute_geometry, compute_left_geometry,
    compute_right_geometry, compute_top_geometry, make_childless_rect, translate_origin,
};

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::{
        Bounds, GeometryRequest, Insets, Placement, PlacementResult, Point, Rect,
        ResolvedPlacement, Side, Size, compute_bound_content_size, compute_geometry,
        make_childless_rect,
    };
}
