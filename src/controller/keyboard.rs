//! Hot key handling - activation, deactivation and the toggle control.
//!
//! The keyboard and the toggle control arm and disarm the gesture through
//! the same `activate`/`deactivate` transitions, so listeners cannot tell
//! them apart.

use super::{DragZoom, GesturePhase};
use crate::bridge::Viewport;
use crate::events::DragZoomEvent;
use crate::input::{KeyEvent, PointerEvent};
use crate::layout::border_insets;
use tracing::{debug, trace};

impl<V: Viewport> DragZoom<V> {
    pub(super) fn handle_key_down(&mut self, event: &KeyEvent) {
        if !self.options.key.is_pressed(event) {
            return;
        }

        // Key repeat keeps firing key down; only the first one arms
        if !self.state.phase.is_active() {
            self.activate();
        }

        if let Some(toggle) = self.toggle.as_mut() {
            toggle.hide();
        }
    }

    pub(super) fn handle_key_up(&mut self, event: &KeyEvent) {
        if self.options.key.is_released(event) {
            self.deactivate();
        } else {
            trace!(key_code = ?event.key_code, "key up ignored, hot key still held");
        }
    }

    pub(super) fn handle_toggle_click(&mut self, event: &PointerEvent) {
        if self.toggle.is_none() {
            trace!("toggle click ignored, visual control disabled");
            return;
        }

        if self.state.phase.is_active() {
            self.deactivate();
        } else {
            self.activate();
            if let Some(toggle) = self.toggle.as_mut() {
                toggle.set_active(true);
            }
        }

        // The click also tells us where the pointer is
        self.handle_pointer_move(event);
    }

    pub(super) fn handle_scroll(&mut self, x: f64, y: f64) {
        self.scroll.set(x, y);
        // The drag keeps the origin it started with
        if !self.state.phase.is_dragging() {
            self.refresh_origin();
        }
    }

    /// Arm the gesture: snapshot the container layout, show the hover veil
    /// and emit `activate`.
    pub(super) fn activate(&mut self) {
        self.state.insets = border_insets(self.bridge.viewport().container());
        self.refresh_origin();
        self.state.phase = GesturePhase::HotKeyActive;
        self.clear_outline();
        self.update_veil();

        debug!(
            origin_x = self.state.map_origin.x,
            origin_y = self.state.map_origin.y,
            "drag zoom activated"
        );
        self.events.trigger(&DragZoomEvent::Activate);
    }

    /// Disarm the gesture: abandon any drag without `dragend`, hide the veil,
    /// reset the toggle control and emit `deactivate`. No-op when idle.
    pub(super) fn deactivate(&mut self) {
        let was_dragging = match self.state.phase {
            GesturePhase::Idle => return,
            GesturePhase::HotKeyActive => false,
            GesturePhase::Dragging { .. } => true,
        };

        self.state.phase = GesturePhase::Idle;
        if was_dragging {
            self.clear_outline();
        }
        self.overlay.veil = None;

        if let Some(toggle) = self.toggle.as_mut() {
            toggle.set_active(false);
            toggle.show();
        }

        debug!(was_dragging, "drag zoom deactivated");
        self.events.trigger(&DragZoomEvent::Deactivate);
    }
}
