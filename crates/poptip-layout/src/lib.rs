#![forbid(unsafe_code)]

//! Placement solvers for anchored popover panels.
//!
//! Given an anchor rectangle, a measured content size, an arrow footprint,
//! and resolved [`Bounds`], this crate computes where the panel and its
//! arrow go:
//!
//! - [`direction`] - one pure solver per cardinal side
//! - [`auto`] - candidate-order side selection with a terminal fallback
//! - [`center`] - centered placement when there is no anchor element
//! - [`childless`] - synthetic anchor fabrication for anchorless tooltips
//! - [`clamp`] - content-size clamping against the bounds
//! - [`arrow`] - arrow box and translate-origin derivation for renderers
//!
//! Every solver is a pure function of its inputs: no state, no I/O, no
//! mutation of the request, safe to call from any thread. Degenerate inputs
//! (zero-size anchors, content larger than the bounds) produce geometrically
//! defined results the caller may treat as "does not fit"; nothing here
//! returns an error.

pub mod arrow;
pub mod auto;
pub mod center;
pub mod childless;
pub mod clamp;
pub mod direction;

pub use arrow::{arrow_box, translate_origin};
pub use auto::{AUTO_PLACEMENT_ORDER, compute_auto_geometry, compute_auto_geometry_with};
pub use center::compute_center_geometry;
pub use childless::make_childless_rect;
pub use clamp::{BoundedContent, compute_bound_content_size};
pub use direction::{
    ARROW_EDGE_MARGIN, compute_bottom_geometry, compute_left_geometry, compute_right_geometry,
    compute_top_geometry,
};
pub use poptip_core::bounds::{Bounds, Span};
pub use poptip_core::geometry::{Insets, Point, Rect, Size};

/// A placement requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Try sides in policy order and keep the first that fits.
    #[default]
    Auto,
    /// Panel above the anchor.
    Top,
    /// Panel below the anchor.
    Bottom,
    /// Panel to the left of the anchor.
    Left,
    /// Panel to the right of the anchor.
    Right,
    /// Panel centered in the bounds, for tooltips without an anchor element.
    Center,
}

/// One cardinal side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The side across the anchor.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the panel sits beside (rather than above or below) the anchor.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Solve this side's geometry. Expects an already-oriented request.
    pub fn compute(self, req: &GeometryRequest) -> PlacementResult {
        match self {
            Self::Top => direction::compute_top_geometry(req),
            Self::Bottom => direction::compute_bottom_geometry(req),
            Self::Left => direction::compute_left_geometry(req),
            Self::Right => direction::compute_right_geometry(req),
        }
    }
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

/// The concrete placement carried by a computed result.
///
/// `Auto` never appears here: the selector resolves it to a side before
/// returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedPlacement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl From<Side> for ResolvedPlacement {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

/// One dimension of the panel's final size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// A fixed extent the caller must apply.
    Constrained(f32),
    /// The content may size itself; its container is already capped by the
    /// bounds.
    Unconstrained,
}

impl Extent {
    /// Whether this extent carries a fixed value.
    #[inline]
    pub const fn is_constrained(self) -> bool {
        matches!(self, Self::Constrained(_))
    }

    /// The constrained value, or `auto` when unconstrained.
    #[inline]
    pub fn or(self, auto: f32) -> f32 {
        match self {
            Self::Constrained(v) => v,
            Self::Unconstrained => auto,
        }
    }
}

/// Panel size the caller must apply when the bounds forced a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedSize {
    pub width: Extent,
    pub height: Extent,
}

impl AdjustedSize {
    /// Concrete size, falling back to the measured content size per axis.
    pub fn resolve(self, content: Size) -> Size {
        Size::new(self.width.or(content.width), self.height.or(content.height))
    }
}

/// Inputs shared by every geometry computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryRequest {
    /// Screen-space box of the element the panel points at.
    pub anchor: Rect,
    /// Measured size of the panel content.
    pub content_size: Size,
    /// Arrow footprint: width runs along the panel edge, height is the
    /// protrusion toward the anchor.
    pub arrow_size: Size,
    /// Region the panel may occupy.
    pub bounds: Bounds,
}

impl GeometryRequest {
    /// The request with its arrow oriented for `side`.
    ///
    /// Left/right placements rotate the arrow a quarter turn, so they take
    /// the transposed footprint.
    #[must_use]
    pub fn oriented(self, side: Side) -> Self {
        if side.is_horizontal() {
            Self {
                arrow_size: self.arrow_size.transpose(),
                ..self
            }
        } else {
            self
        }
    }
}

/// The engine's output: where the panel and arrow go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Top-left of the panel.
    pub origin: Point,
    /// Where the arrow tip touches the anchor.
    pub anchor_point: Point,
    /// The concrete placement that was computed.
    pub placement: ResolvedPlacement,
    /// Size the bounds forced on the panel, when any axis changed.
    pub adjusted_size: Option<AdjustedSize>,
}

impl PlacementResult {
    /// Final panel size after any forced adjustment.
    pub fn panel_size(&self, content: Size) -> Size {
        self.adjusted_size.map_or(content, |a| a.resolve(content))
    }
}

/// Route a request to the solver for `placement`.
///
/// Orients the arrow per side before dispatch; `Auto` runs the candidate
/// selector and `Center` ignores the anchor entirely.
pub fn compute_geometry(req: &GeometryRequest, placement: Placement) -> PlacementResult {
    let result = match placement {
        Placement::Auto => auto::compute_auto_geometry(req),
        Placement::Center => center::compute_center_geometry(req.content_size, req.bounds),
        Placement::Top => Side::Top.compute(req),
        Placement::Bottom => Side::Bottom.compute(req),
        Placement::Left => Side::Left.compute(&req.oriented(Side::Left)),
        Placement::Right => Side::Right.compute(&req.oriented(Side::Right)),
    };
    #[cfg(feature = "tracing")]
    tracing::trace!(requested = ?placement, resolved = ?result.placement, "geometry computed");
    result
}
