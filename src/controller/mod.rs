//! Drag zoom controller - input handling for the hot-key drag-to-zoom
//! gesture.
//!
//! ## Architecture
//!
//! `DragZoom` owns the host viewport (through a `CoordinateBridge`), the
//! gesture state machine (`GesturePhase`), the current overlay frame and
//! the listener registry. Hosts feed it raw input with `dispatch` and read
//! back `overlay()` to draw.
//!
//! ## Modules
//!
//! - `state` - Gesture phase enum and layout snapshot
//! - `keyboard` - Hot key and toggle handling (activate/deactivate)
//! - `pointer_down` - Drag start
//! - `pointer_move` - Drag update and hover veil
//! - `pointer_up` - Drag end, zoom and cancellation

mod keyboard;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::{GesturePhase, GestureState};

use crate::bridge::{CoordinateBridge, Viewport};
use crate::config::{DragZoomOptions, VeilStyle};
use crate::events::{DragZoomEvent, EventDispatcher, EventKind, ListenerId};
use crate::geometry::BorderInsets;
use crate::input::InputEvent;
use crate::layout::{ScrollTracker, border_insets, cumulative_offset};
use crate::overlay::{OverlayFrame, VeilPanels};
use crate::toggle::ToggleControl;
use std::time::Instant;
use tracing::debug;

/// Drag zoom enabled on one viewport.
pub struct DragZoom<V: Viewport> {
    options: DragZoomOptions,
    /// Border of the selection outline, parsed once from the box style
    box_border: BorderInsets,
    bridge: CoordinateBridge<V>,
    events: EventDispatcher,
    state: GestureState,
    scroll: ScrollTracker,
    overlay: OverlayFrame,
    toggle: Option<ToggleControl>,
    /// When the post-zoom outline should disappear
    outline_hide_at: Option<Instant>,
}

impl<V: Viewport> DragZoom<V> {
    /// Enable drag zoom on `viewport`.
    pub fn new(viewport: V, options: DragZoomOptions) -> Self {
        let box_border = options.box_style.border_insets();
        let toggle = options
            .visual_enabled
            .then(|| ToggleControl::new(&options));
        let mut state = GestureState {
            insets: border_insets(viewport.container()),
            ..GestureState::default()
        };
        state.map_size = viewport.size();

        debug!(key = %options.key, visual = options.visual_enabled, "drag zoom enabled");

        Self {
            options,
            box_border,
            bridge: CoordinateBridge::new(viewport),
            events: EventDispatcher::new(),
            state,
            scroll: ScrollTracker::new(),
            overlay: OverlayFrame::HIDDEN,
            toggle,
            outline_hide_at: None,
        }
    }

    /// Feed one input event, using the current time for the outline hide.
    pub fn dispatch(&mut self, event: &InputEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// Feed one input event that happened at `now`.
    pub fn dispatch_at(&mut self, event: &InputEvent, now: Instant) {
        match event {
            InputEvent::KeyDown(key) => self.handle_key_down(key),
            InputEvent::KeyUp(key) => self.handle_key_up(key),
            InputEvent::PointerDown(pointer) => self.handle_pointer_down(pointer),
            InputEvent::PointerMove(pointer) => self.handle_pointer_move(pointer),
            InputEvent::PointerUp(pointer) => self.handle_pointer_up(pointer, now),
            InputEvent::Scroll { x, y } => self.handle_scroll(*x, *y),
            InputEvent::ToggleClick(pointer) => self.handle_toggle_click(pointer),
            InputEvent::ToggleOver => {
                if let Some(toggle) = self.toggle.as_mut() {
                    toggle.pointer_over();
                }
            }
            InputEvent::ToggleOut => {
                if let Some(toggle) = self.toggle.as_mut() {
                    toggle.pointer_out();
                }
            }
        }
    }

    /// Advance the outline hide timer. Returns true if the overlay changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.outline_hide_at {
            Some(deadline) if now >= deadline => {
                self.outline_hide_at = None;
                self.overlay.outline = None;
                debug!("post-zoom outline hidden");
                true
            }
            _ => false,
        }
    }

    /// Disable drag zoom and hand the viewport back.
    ///
    /// An armed gesture is deactivated first, so listeners see `deactivate`.
    pub fn disable(mut self) -> V {
        self.deactivate();
        self.overlay = OverlayFrame::HIDDEN;
        self.toggle = None;
        debug!("drag zoom disabled");
        self.bridge.into_inner()
    }

    /// Subscribe to one kind of drag zoom event.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&DragZoomEvent) + 'static) -> ListenerId {
        self.events.on(kind, handler)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn overlay(&self) -> &OverlayFrame {
        &self.overlay
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.phase.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.phase.is_dragging()
    }

    pub fn options(&self) -> &DragZoomOptions {
        &self.options
    }

    /// Veil style as the host must apply it.
    pub fn veil_style(&self) -> VeilStyle {
        self.options.veil_style.effective()
    }

    pub fn toggle(&self) -> Option<&ToggleControl> {
        self.toggle.as_ref()
    }

    pub fn viewport(&self) -> &V {
        self.bridge.viewport()
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        self.bridge.viewport_mut()
    }

    /// Deadline of the post-zoom outline, if one is showing.
    pub fn outline_hide_at(&self) -> Option<Instant> {
        self.outline_hide_at
    }

    /// Re-read the container position and size.
    fn refresh_origin(&mut self) {
        let viewport = self.bridge.viewport();
        self.state.map_origin = cumulative_offset(viewport.container());
        self.state.map_size = viewport.size();
    }

    /// Show the hover veil while armed with the pointer over the map,
    /// otherwise hide it.
    fn update_veil(&mut self) {
        self.overlay.veil = if self.state.phase.is_active() && self.state.is_pointer_on_map() {
            Some(VeilPanels::covering(self.state.content_size()))
        } else {
            None
        };
    }

    fn clear_outline(&mut self) {
        self.overlay.outline = None;
        self.outline_hide_at = None;
    }
}

impl<V: Viewport + std::fmt::Debug> std::fmt::Debug for DragZoom<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragZoom")
            .field("viewport", self.bridge.viewport())
            .field("state", &self.state)
            .field("overlay", &self.overlay)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
