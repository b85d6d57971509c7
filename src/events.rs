//! Lifecycle events and the per-instance listener registry.
//!
//! Listeners run synchronously, in registration order, on the thread that
//! fed the input event. A panicking listener is not caught: listener bugs
//! surface at the listener.

use crate::error::DragZoomError;
use crate::geometry::{GeoBounds, GeoPoint, ScreenPoint};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An event emitted by the gesture engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum DragZoomEvent {
    /// The hot key was pressed or the toggle control turned on
    Activate,
    /// The hot key was released or the toggle control turned off
    Deactivate,
    /// A drag began at this geographic position
    DragStart { position: GeoPoint },
    /// The selection changed; corners are content pixels, inside the
    /// container's border
    Drag {
        south_west: ScreenPoint,
        north_east: ScreenPoint,
    },
    /// A drag completed over these bounds
    DragEnd { bounds: GeoBounds },
}

impl DragZoomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Activate => EventKind::Activate,
            Self::Deactivate => EventKind::Deactivate,
            Self::DragStart { .. } => EventKind::DragStart,
            Self::Drag { .. } => EventKind::Drag,
            Self::DragEnd { .. } => EventKind::DragEnd,
        }
    }
}

/// Event names listeners subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Activate,
    Deactivate,
    DragStart,
    Drag,
    DragEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Activate,
        EventKind::Deactivate,
        EventKind::DragStart,
        EventKind::Drag,
        EventKind::DragEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
            Self::DragStart => "dragstart",
            Self::Drag => "drag",
            Self::DragEnd => "dragend",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DragZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DragZoomError::UnknownEvent(s.to_string()))
    }
}

/// Handle returned by `EventDispatcher::on`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&DragZoomEvent)>;

/// Listener registry owned by one drag zoom instance.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, EventKind, Listener)>,
    next_id: u64,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to one kind of event.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&DragZoomEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, kind, Box::new(handler)));
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Call every listener subscribed to the event's kind.
    pub fn trigger(&mut self, event: &DragZoomEvent) {
        let kind = event.kind();
        tracing::trace!(event = %kind, "dispatching drag zoom event");
        for (_, listener_kind, listener) in self.listeners.iter_mut() {
            if *listener_kind == kind {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(_, k, _)| *k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
