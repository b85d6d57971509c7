//! Pointer up handling - zoom to the selection, or cancel.

use super::{DragZoom, GesturePhase};
use crate::bridge::Viewport;
use crate::constants::OUTLINE_HIDE_DELAY;
use crate::events::DragZoomEvent;
use crate::geometry::SelectionRect;
use crate::input::PointerEvent;
use crate::overlay::outline_for;
use std::time::Instant;
use tracing::debug;

impl<V: Viewport> DragZoom<V> {
    pub(super) fn handle_pointer_up(&mut self, event: &PointerEvent, now: Instant) {
        self.state.pointer_down = false;

        let GesturePhase::Dragging { start, .. } = self.state.phase else {
            return;
        };

        let page = self.scroll.pointer_position(event);
        let end = self.state.content_point(page);
        let selection = SelectionRect::from_corners(start, end);

        // A click without movement never zooms, whatever the configured extent
        let min_extent = self.options.min_drag_extent.max(0.0);
        if start == end || (selection.width <= min_extent && selection.height <= min_extent) {
            debug!(width = selection.width, height = selection.height, "drag cancelled");
            self.deactivate();
            return;
        }

        // Hosts center off by the container's left/top border, so the
        // selection is shifted into container pixels before projecting
        let bounds = self.bridge.bounds_for_selection(&selection, &self.state.insets);
        let zoom = self.bridge.bounds_zoom_level(&bounds);
        let center = bounds.center();
        self.bridge.recenter(center, zoom);
        debug!(lat = center.lat, lng = center.lng, zoom, "zoomed to selection");

        // Show where the selection landed after the zoom, briefly
        let (south_west, north_east) = self.bridge.selection_for_bounds(&bounds, &self.state.insets);
        let landed = SelectionRect::from_corners(south_west, north_east);
        self.overlay.outline = Some(outline_for(&landed, &self.box_border));
        self.outline_hide_at = Some(now + OUTLINE_HIDE_DELAY);

        self.state.phase = GesturePhase::HotKeyActive;
        self.state.pointer_page = Some(page);
        self.refresh_origin();
        self.update_veil();

        self.events.trigger(&DragZoomEvent::DragEnd { bounds });

        // Armed from the toggle control rather than a held key: one drag
        // and done
        if !self.options.key.is_held(event.modifiers) {
            self.deactivate();
        }
    }
}
