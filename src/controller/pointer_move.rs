//! Pointer move handling - drag updates and the hover veil.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive at display rate. Each move while dragging rebuilds
//! the overlay frame from the two corner points (no incremental patching)
//! and emits one `drag` event; there is no debouncing.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::{DragZoom, GesturePhase};
use crate::bridge::Viewport;
use crate::constants::POINTER_MOVE_BUDGET_MS;
use crate::events::DragZoomEvent;
use crate::geometry::SelectionRect;
use crate::input::PointerEvent;
use crate::overlay::OverlayFrame;
use crate::profile_scope;

impl<V: Viewport> DragZoom<V> {
    pub(super) fn handle_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_move", POINTER_MOVE_BUDGET_MS);

        let page = self.scroll.pointer_position(event);
        self.state.pointer_page = Some(page);

        if let GesturePhase::Dragging { start, .. } = self.state.phase {
            let end = self.state.content_point(page);
            self.state.phase = GesturePhase::Dragging { start, end };

            let selection = SelectionRect::from_corners(start, end);
            self.overlay =
                OverlayFrame::selecting(&selection, self.state.content_size(), &self.box_border);
            self.events.trigger(&DragZoomEvent::Drag {
                south_west: selection.south_west(),
                north_east: selection.north_east(),
            });
        } else if !self.state.pointer_down {
            // Hover: the map may have moved under a still pointer
            self.refresh_origin();
            self.update_veil();
        }
    }
}
