//! Overlay geometry - the veil panels and the selection outline.
//!
//! The veil is four panels that together darken everything except the
//! current selection:
//!
//! ```text
//! +------+-----------+-------+
//! |      |    top    |       |
//! |      +-----------+       |
//! | left | selection | right |
//! |      +-----------+       |
//! |      |  bottom   |       |
//! +------+-----------+-------+
//! ```
//!
//! Left and right span the full height; top and bottom span only the
//! selection's columns, so no pixel is covered twice. Frames are always
//! recomputed from the selection, never patched, so there is no drift.

use crate::constants::VEIL_Z_INDEX;
use crate::geometry::{BorderInsets, SelectionRect, Size};
use serde::Serialize;

/// An axis-aligned rectangle with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PanelRect {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Rectangle with width and height floored at zero.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Intersection with another rectangle, if they overlap with positive area.
    pub fn intersection(&self, other: &PanelRect) -> Option<PanelRect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = PanelRect::new(left, top, right - left, bottom - top);
        (!rect.is_empty()).then_some(rect)
    }
}

impl From<SelectionRect> for PanelRect {
    fn from(rect: SelectionRect) -> Self {
        PanelRect::new(rect.left, rect.top, rect.width, rect.height)
    }
}

/// The four veil panels, in the order the host stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VeilPanels {
    pub left: PanelRect,
    pub right: PanelRect,
    pub top: PanelRect,
    pub bottom: PanelRect,
}

impl VeilPanels {
    /// Stacking order the host gives every panel
    pub const Z_INDEX: i32 = VEIL_Z_INDEX;

    /// Panels covering `viewport` minus `selection`.
    ///
    /// Sizes are floored at zero so a selection reaching past the viewport
    /// still yields valid panels.
    pub fn around(selection: &SelectionRect, viewport: Size) -> Self {
        let right_edge = selection.right();
        let bottom_edge = selection.bottom();
        Self {
            left: PanelRect::new(0.0, 0.0, selection.left, viewport.height),
            right: PanelRect::new(right_edge, 0.0, viewport.width - right_edge, viewport.height),
            top: PanelRect::new(selection.left, 0.0, selection.width, selection.top),
            bottom: PanelRect::new(
                selection.left,
                bottom_edge,
                selection.width,
                viewport.height - bottom_edge,
            ),
        }
    }

    /// Hover feedback before a drag: the first panel covers the viewport,
    /// the others are collapsed.
    pub fn covering(viewport: Size) -> Self {
        Self {
            left: PanelRect::new(0.0, 0.0, viewport.width, viewport.height),
            right: PanelRect::ZERO,
            top: PanelRect::ZERO,
            bottom: PanelRect::ZERO,
        }
    }

    pub fn panels(&self) -> [PanelRect; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// The selection outline: the selection minus the outline's own border on
/// each side, so the rendered border does not grow the visual box.
pub fn outline_for(selection: &SelectionRect, box_border: &BorderInsets) -> PanelRect {
    PanelRect::new(
        selection.left,
        selection.top,
        selection.width - box_border.horizontal(),
        selection.height - box_border.vertical(),
    )
}

/// Everything the host needs to draw the overlay for one frame.
///
/// `None` means hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OverlayFrame {
    pub veil: Option<VeilPanels>,
    pub outline: Option<PanelRect>,
}

impl OverlayFrame {
    pub const HIDDEN: Self = Self {
        veil: None,
        outline: None,
    };

    /// Frame while a selection is being dragged out.
    pub fn selecting(selection: &SelectionRect, viewport: Size, box_border: &BorderInsets) -> Self {
        Self {
            veil: Some(VeilPanels::around(selection, viewport)),
            outline: Some(outline_for(selection, box_border)),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.veil.is_none() && self.outline.is_none()
    }
}
