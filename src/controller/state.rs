//! Gesture state machine - the phase of the drag zoom plus the layout
//! snapshot it works against.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> HotKeyActive         (hot key pressed or toggle turned on)
//! HotKeyActive -> Dragging     (pointer down over the map)
//! Dragging -> HotKeyActive     (pointer up, hot key still held)
//! Dragging -> Idle             (pointer up without hot key, or cancelled drag)
//! Any -> Idle                  (hot key released or toggle turned off)
//! ```
//!
//! Dragging without an armed hot key cannot be represented. The global
//! pointer-down flag is orthogonal to the phase: the pointer can be held
//! down anywhere in the document without starting a drag.

use crate::bridge::clamp_to;
use crate::geometry::{BorderInsets, ScreenPoint, SelectionRect, Size};

/// Phase of the drag zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// Hot key not held, nothing drawn
    #[default]
    Idle,

    /// Hot key held (or toggle on), waiting for a pointer down over the map
    HotKeyActive,

    /// Selection being dragged out
    Dragging {
        /// Content-space point where the drag began
        start: ScreenPoint,
        /// Content-space point of the latest pointer move
        end: ScreenPoint,
    },
}

impl GesturePhase {
    /// Returns true if the hot key is armed, whether or not a drag is running
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if a selection is being dragged out
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Current selection, if dragging
    pub fn selection(&self) -> Option<SelectionRect> {
        match self {
            Self::Dragging { start, end } => Some(SelectionRect::from_corners(*start, *end)),
            _ => None,
        }
    }
}

/// Everything the controller tracks between input events.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    /// A pointer button is down somewhere in the document
    pub pointer_down: bool,
    /// Last known document position of the pointer; `None` until it moves
    pub pointer_page: Option<ScreenPoint>,
    /// Document position of the map container's outer edge
    pub map_origin: ScreenPoint,
    /// Container border widths, captured on activation
    pub insets: BorderInsets,
    /// Outer size of the map container
    pub map_size: Size,
}

impl GestureState {
    /// Size of the container's content box, where the overlay lives.
    pub fn content_size(&self) -> Size {
        self.map_size.inset(&self.insets)
    }

    /// Whether the last known pointer position is strictly inside the map.
    pub fn is_pointer_on_map(&self) -> bool {
        let Some(pointer) = self.pointer_page else {
            return false;
        };
        let origin = self.map_origin;
        pointer.x > origin.x
            && pointer.x < origin.x + self.map_size.width
            && pointer.y > origin.y
            && pointer.y < origin.y + self.map_size.height
    }

    /// Convert a document position to a content-space point, clamped into
    /// the content box.
    pub fn content_point(&self, page: ScreenPoint) -> ScreenPoint {
        let point = page.translate(
            -(self.map_origin.x + self.insets.left),
            -(self.map_origin.y + self.insets.top),
        );
        clamp_to(point, self.content_size())
    }
}
