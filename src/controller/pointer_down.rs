//! Pointer down handling - drag start.

use super::{DragZoom, GesturePhase};
use crate::bridge::Viewport;
use crate::events::DragZoomEvent;
use crate::input::PointerEvent;
use tracing::debug;

impl<V: Viewport> DragZoom<V> {
    pub(super) fn handle_pointer_down(&mut self, event: &PointerEvent) {
        self.state.pointer_down = true;
        self.state.pointer_page = Some(self.scroll.pointer_position(event));

        // Only a press on the hover veil starts a drag, and the veil is only
        // up while armed with the pointer over the map
        if self.state.phase != GesturePhase::HotKeyActive || !self.state.is_pointer_on_map() {
            return;
        }

        self.refresh_origin();
        let Some(page) = self.state.pointer_page else {
            return;
        };
        let start = self.state.content_point(page);
        self.state.phase = GesturePhase::Dragging { start, end: start };
        self.clear_outline();

        if let Some(toggle) = self.toggle.as_mut() {
            toggle.hide();
        }

        let position = self.bridge.pixel_to_geo(start);
        debug!(x = start.x, y = start.y, lat = position.lat, lng = position.lng, "drag started");
        self.events.trigger(&DragZoomEvent::DragStart { position });
    }
}
