#![forbid(unsafe_code)]

//! Synthetic anchors for anchorless tooltips.

use crate::Placement;
use poptip_core::geometry::{Insets, Rect, Size};

/// Fabricate a degenerate anchor for a tooltip with no wrapped child.
///
/// The 1x1 rect lands on the viewport edge opposite the requested side, so
/// the panel, which sits across the arrow from its anchor, hugs that edge:
/// requesting `Top` anchors at the bottom inset, `Left` at the right inset,
/// and so on, centered on the other axis. `Auto` and `Center` anchor at the
/// viewport center. The directional solvers then run unmodified against the
/// synthetic rect. Always returns a valid rect.
#[must_use]
pub fn make_childless_rect(viewport: Size, insets: Insets, placement: Placement) -> Rect {
    let center_x = viewport.width / 2.0;
    let center_y = viewport.height / 2.0;

    match placement {
        Placement::Top => Rect::new(center_x, viewport.height - insets.bottom, 1.0, 1.0),
        Placement::Bottom => Rect::new(center_x, insets.top, 1.0, 1.0),
        Placement::Left => Rect::new(viewport.width - insets.right, center_y, 1.0, 1.0),
        Placement::Right => Rect::new(insets.left, center_y, 1.0, 1.0),
        Placement::Auto | Placement::Center => Rect::new(center_x, center_y, 1.0, 1.0),
    }
}
