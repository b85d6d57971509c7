//! Layout reads against the host's element tree.
//!
//! Every function here degrades to zero on missing or malformed layout
//! information: a misplaced overlay is preferable to an aborted gesture.
//!
//! ## Positions
//!
//! - `border_insets` - computed border widths of an element
//! - `cumulative_offset` - document position of an element, compensating for
//!   scrolled and transformed ancestors
//! - `ScrollTracker` - pointer position normalization with a window scroll
//!   offset that is only refreshed on scroll events

use crate::constants::{BORDER_MEDIUM, BORDER_THICK, BORDER_THIN};
use crate::geometry::{BorderInsets, ScreenPoint};
use crate::input::PointerEvent;
use serde::{Deserialize, Serialize};

/// One side of an element's border box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Read-only view of one element in the host's layout tree.
///
/// Mirrors the DOM offset model: `offset_left/top` are relative to
/// `offset_parent`, and the chain ends at the document.
pub trait LayoutNode {
    fn offset_left(&self) -> Option<f64>;

    fn offset_top(&self) -> Option<f64>;

    fn scroll_left(&self) -> f64 {
        0.0
    }

    fn scroll_top(&self) -> f64 {
        0.0
    }

    /// True for the document body or root element, whose scroll offsets
    /// are already reflected in page coordinates.
    fn is_document_root(&self) -> bool {
        false
    }

    /// Computed CSS transform, e.g. `matrix(1, 0, 0, 1, 40, 20)`.
    fn transform(&self) -> Option<String> {
        None
    }

    /// Computed border width for one side, e.g. `4px` or `thin`.
    fn border_width(&self, side: BorderSide) -> Option<String>;

    fn offset_parent(&self) -> Option<&dyn LayoutNode>;
}

/// Per-side border widths as the style system reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderWidths {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl BorderWidths {
    pub fn uniform(width: impl Into<String>) -> Self {
        let width = width.into();
        Self {
            top: Some(width.clone()),
            bottom: Some(width.clone()),
            left: Some(width.clone()),
            right: Some(width),
        }
    }
}

/// An owned layout capture of an element and its offset-parent chain.
///
/// Hosts that cannot hand out live element references capture layout into
/// this snapshot before each gesture step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementSnapshot {
    pub offset_left: Option<f64>,
    pub offset_top: Option<f64>,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub document_root: bool,
    pub transform: Option<String>,
    pub border: BorderWidths,
    pub offset_parent: Option<Box<ElementSnapshot>>,
}

impl ElementSnapshot {
    /// Element at the given offset from its offset parent.
    pub fn at(left: f64, top: f64) -> Self {
        Self {
            offset_left: Some(left),
            offset_top: Some(top),
            ..Self::default()
        }
    }

    /// The document body, terminating an offset-parent chain.
    pub fn document() -> Self {
        Self {
            offset_left: Some(0.0),
            offset_top: Some(0.0),
            document_root: true,
            ..Self::default()
        }
    }

    pub fn with_border(mut self, border: BorderWidths) -> Self {
        self.border = border;
        self
    }

    pub fn with_scroll(mut self, left: f64, top: f64) -> Self {
        self.scroll_left = left;
        self.scroll_top = top;
        self
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Attach this element to an offset parent.
    pub fn within(mut self, parent: ElementSnapshot) -> Self {
        self.offset_parent = Some(Box::new(parent));
        self
    }
}

impl LayoutNode for ElementSnapshot {
    fn offset_left(&self) -> Option<f64> {
        self.offset_left
    }

    fn offset_top(&self) -> Option<f64> {
        self.offset_top
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn is_document_root(&self) -> bool {
        self.document_root
    }

    fn transform(&self) -> Option<String> {
        self.transform.clone()
    }

    fn border_width(&self, side: BorderSide) -> Option<String> {
        match side {
            BorderSide::Top => self.border.top.clone(),
            BorderSide::Bottom => self.border.bottom.clone(),
            BorderSide::Left => self.border.left.clone(),
            BorderSide::Right => self.border.right.clone(),
        }
    }

    fn offset_parent(&self) -> Option<&dyn LayoutNode> {
        self.offset_parent.as_deref().map(|p| p as &dyn LayoutNode)
    }
}

/// Leading integer of a CSS length, like JavaScript's `parseInt`.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign_len = value.len() - unsigned.len();
    value[..sign_len + digits].parse().ok()
}

/// Resolve a border width value to pixels.
///
/// Symbolic widths resolve to 2/4/6 px; anything unparseable is `0`.
pub fn parse_border_width(value: &str) -> f64 {
    match value.trim() {
        "thin" => BORDER_THIN,
        "medium" => BORDER_MEDIUM,
        "thick" => BORDER_THICK,
        other => match parse_leading_int(other) {
            Some(px) => (px as f64).max(0.0),
            None => {
                if !other.is_empty() {
                    tracing::trace!(value = other, "unparseable border width, using 0");
                }
                0.0
            }
        },
    }
}

/// Border widths of an element, `0` for any side that cannot be read.
pub fn border_insets(element: &dyn LayoutNode) -> BorderInsets {
    let side = |side| {
        element
            .border_width(side)
            .map(|w| parse_border_width(&w))
            .unwrap_or(0.0)
    };
    BorderInsets {
        top: side(BorderSide::Top),
        bottom: side(BorderSide::Bottom),
        left: side(BorderSide::Left),
        right: side(BorderSide::Right),
    }
}

/// Translation component of a 2D `matrix(a, b, c, d, tx, ty)` transform.
///
/// Missing or malformed components are `0`.
pub fn transform_translation(matrix: &str) -> (f64, f64) {
    let parts: Vec<&str> = matrix.split(',').collect();
    let component = |index: usize| {
        parts
            .get(index)
            .and_then(|p| parse_leading_int(p))
            .map(|v| v as f64)
            .unwrap_or(0.0)
    };
    (component(4), component(5))
}

/// Document position of an element.
///
/// Walks the offset-parent chain, subtracting each non-root ancestor's
/// scroll offset. An ancestor that reports no offset but carries a transform
/// contributes the transform's translation instead.
///
/// Depends on current scroll and layout, so callers recompute it whenever a
/// gesture is armed or the window scrolls.
pub fn cumulative_offset(element: &dyn LayoutNode) -> ScreenPoint {
    let mut x = element.offset_left().unwrap_or(0.0);
    let mut y = element.offset_top().unwrap_or(0.0);

    let mut parent = element.offset_parent();
    while let Some(node) = parent {
        if !node.is_document_root() {
            x -= node.scroll_left();
            y -= node.scroll_top();
        }

        let mut dx = node.offset_left().unwrap_or(0.0);
        let mut dy = node.offset_top().unwrap_or(0.0);
        if dx == 0.0 && dy == 0.0 {
            if let Some(matrix) = node.transform() {
                let (tx, ty) = transform_translation(&matrix);
                dx += tx;
                dy += ty;
            }
        }
        x += dx;
        y += dy;

        parent = node.offset_parent();
    }

    ScreenPoint::new(x, y)
}

/// Tracks the window scroll offset for pointer events that only carry
/// client coordinates.
///
/// Updated on scroll events only, never on pointer moves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    offset: ScreenPoint,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window's current scroll offset.
    pub fn set(&mut self, x: f64, y: f64) {
        self.offset = ScreenPoint::new(x, y);
    }

    /// Document position of a pointer event.
    pub fn pointer_position(&self, event: &PointerEvent) -> ScreenPoint {
        if let Some(page) = event.page {
            page
        } else if let Some(client) = event.client {
            client.translate(self.offset.x, self.offset.y)
        } else {
            ScreenPoint::ZERO
        }
    }
}
