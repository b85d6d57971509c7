//! Raw input events fed to the gesture engine.
//!
//! These mirror what a browser or windowing toolkit reports: keyboard events
//! carry a legacy key code plus modifier flags, pointer events carry page
//! and/or client coordinates. Either coordinate pair may be missing.

use crate::geometry::ScreenPoint;
use serde::{Deserialize, Serialize};

/// Modifier flags reported with an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };

    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

/// A key down or key up event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyEvent {
    /// Legacy numeric key code, when the source reports one
    pub key_code: Option<u32>,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key_code: Option<u32>, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }
}

/// A pointer down, move, up or click event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerEvent {
    /// Position relative to the document
    pub page: Option<ScreenPoint>,
    /// Position relative to the window's visible area
    pub client: Option<ScreenPoint>,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event reporting document-relative coordinates.
    pub fn at_page(x: f64, y: f64) -> Self {
        Self {
            page: Some(ScreenPoint::new(x, y)),
            ..Self::default()
        }
    }

    /// Event reporting only window-relative coordinates.
    pub fn at_client(x: f64, y: f64) -> Self {
        Self {
            client: Some(ScreenPoint::new(x, y)),
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Any input the gesture engine reacts to, in host event order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    /// Window scrolled to the given document offset
    Scroll { x: f64, y: f64 },
    /// The visual toggle control was clicked
    ToggleClick(PointerEvent),
    /// The pointer entered the visual toggle control
    ToggleOver,
    /// The pointer left the visual toggle control
    ToggleOut,
}
