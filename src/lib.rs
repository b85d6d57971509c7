//! Hot-key drag-to-zoom for map viewports.
//!
//! While a hot key (shift, ctrl or alt) is held, or the optional toggle
//! control is on, the pointer draws a selection box over the map. Everything
//! outside the box is veiled; on release the map recenters and zooms to the
//! box's geographic bounds.
//!
//! The host owns rendering and projection. It implements `Viewport` for its
//! map, feeds raw input to `DragZoom::dispatch`, draws `DragZoom::overlay`,
//! and calls `DragZoom::tick` from its frame loop.
//!
//! ```ignore
//! let mut zoom = DragZoom::new(viewport, DragZoomOptions::default());
//! zoom.on(EventKind::DragEnd, |event| println!("{event:?}"));
//! zoom.dispatch(&InputEvent::KeyDown(HotKey::Shift.press_event()));
//! ```

pub mod bridge;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod hotkey;
pub mod input;
pub mod layout;
pub mod mercator;
pub mod overlay;
pub mod perf;
pub mod toggle;

pub use bridge::{CoordinateBridge, Viewport};
pub use config::DragZoomOptions;
pub use controller::{DragZoom, GesturePhase};
pub use error::{DragZoomError, DragZoomResult};
pub use events::{DragZoomEvent, EventKind, ListenerId};
pub use geometry::{BorderInsets, GeoBounds, GeoPoint, ScreenPoint, SelectionRect, Size};
pub use hotkey::HotKey;
pub use input::{InputEvent, KeyEvent, Modifiers, PointerEvent};
pub use overlay::{OverlayFrame, PanelRect, VeilPanels};
