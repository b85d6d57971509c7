//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestViewportBuilder` - Builder for a Mercator viewport and its container
//! - `EventLog` - Records every event a `DragZoom` emits
//! - Input shorthands like `key_down()`, `pointer_down()`, `drag()`

use dragzoom::layout::{BorderWidths, ElementSnapshot};
use dragzoom::mercator::MercatorViewport;
use dragzoom::{
    DragZoom, DragZoomEvent, DragZoomOptions, EventKind, GeoPoint, HotKey, InputEvent, Modifiers,
    PointerEvent, Size, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// TestViewportBuilder - Builder pattern for test viewports
// ============================================================================

/// Builder for a Web Mercator viewport with a configurable container.
///
/// # Example
/// ```ignore
/// let viewport = TestViewportBuilder::new()
///     .with_size(804.0, 604.0)
///     .with_border("2px")
///     .at(50.0, 80.0)
///     .build();
/// ```
pub struct TestViewportBuilder {
    size: Size,
    center: GeoPoint,
    zoom: u32,
    container: ElementSnapshot,
    border: Option<String>,
}

impl Default for TestViewportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestViewportBuilder {
    /// 800×600 map over Munich at zoom 6, placed at the document origin.
    pub fn new() -> Self {
        Self {
            size: Size::new(800.0, 600.0),
            center: GeoPoint::new(48.14, 11.58),
            zoom: 6,
            container: ElementSnapshot::at(0.0, 0.0).within(ElementSnapshot::document()),
            border: None,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_center(mut self, lat: f64, lng: f64) -> Self {
        self.center = GeoPoint::new(lat, lng);
        self
    }

    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Place the container directly in the document at `(left, top)`.
    pub fn at(mut self, left: f64, top: f64) -> Self {
        self.container = ElementSnapshot::at(left, top).within(ElementSnapshot::document());
        self
    }

    /// Use an explicit container layout chain.
    pub fn with_container(mut self, container: ElementSnapshot) -> Self {
        self.container = container;
        self
    }

    /// Same border width on every side of the container.
    pub fn with_border(mut self, width: &str) -> Self {
        self.border = Some(width.to_string());
        self
    }

    pub fn build(self) -> MercatorViewport {
        let mut container = self.container;
        if let Some(border) = self.border {
            container = container.with_border(BorderWidths::uniform(border));
        }
        MercatorViewport::new(self.size, self.center, self.zoom).with_container(container)
    }

    /// Build the viewport and enable drag zoom on it.
    pub fn enable(self, options: DragZoomOptions) -> DragZoom<MercatorViewport> {
        DragZoom::new(self.build(), options)
    }
}

// ============================================================================
// EventLog - records emitted events
// ============================================================================

/// Shared record of every event a drag zoom emitted, in order.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<DragZoomEvent>>>,
}

impl EventLog {
    /// Subscribe a recorder to every event kind.
    pub fn attach<V: Viewport>(zoom: &mut DragZoom<V>) -> Self {
        let log = Self::default();
        for kind in EventKind::ALL {
            let events = Rc::clone(&log.events);
            zoom.on(kind, move |event| events.borrow_mut().push(*event));
        }
        log
    }

    pub fn events(&self) -> Vec<DragZoomEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(DragZoomEvent::kind).collect()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    pub fn last(&self) -> Option<DragZoomEvent> {
        self.events.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

// ============================================================================
// Input shorthands
// ============================================================================

pub fn key_down(key: HotKey) -> InputEvent {
    InputEvent::KeyDown(key.press_event())
}

pub fn key_up(key: HotKey) -> InputEvent {
    InputEvent::KeyUp(key.release_event())
}

pub fn pointer_down(x: f64, y: f64, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerDown(PointerEvent::at_page(x, y).with_modifiers(modifiers))
}

pub fn pointer_move(x: f64, y: f64, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerMove(PointerEvent::at_page(x, y).with_modifiers(modifiers))
}

pub fn pointer_up(x: f64, y: f64, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerUp(PointerEvent::at_page(x, y).with_modifiers(modifiers))
}

pub fn toggle_click(x: f64, y: f64) -> InputEvent {
    InputEvent::ToggleClick(PointerEvent::at_page(x, y))
}

/// Press, move and release the pointer between two page positions.
pub fn drag<V: Viewport>(
    zoom: &mut DragZoom<V>,
    from: (f64, f64),
    to: (f64, f64),
    modifiers: Modifiers,
) {
    zoom.dispatch(&pointer_move(from.0, from.1, modifiers));
    zoom.dispatch(&pointer_down(from.0, from.1, modifiers));
    zoom.dispatch(&pointer_move(to.0, to.1, modifiers));
    zoom.dispatch(&pointer_up(to.0, to.1, modifiers));
}

/// Full keyboard gesture: hold shift, drag, release shift.
pub fn shift_drag<V: Viewport>(zoom: &mut DragZoom<V>, from: (f64, f64), to: (f64, f64)) {
    zoom.dispatch(&key_down(HotKey::Shift));
    drag(zoom, from, to, Modifiers::SHIFT);
    zoom.dispatch(&key_up(HotKey::Shift));
}

/// Assert two floats are within `1e-6` of each other.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
