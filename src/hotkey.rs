//! Hot-key identity and detection.
//!
//! A keyboard event counts as the hot key when its modifier flag for the
//! configured class is set. Some input sources only report modifier flags
//! alongside non-modifier keys, so the legacy key code of the modifier itself
//! is accepted as a fallback.

use crate::constants::{KEY_CODE_ALT, KEY_CODE_CTRL, KEY_CODE_SHIFT};
use crate::error::DragZoomError;
use crate::input::{KeyEvent, Modifiers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The modifier class that arms the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HotKey {
    #[default]
    Shift,
    Ctrl,
    /// The Option key on a Macintosh
    Alt,
}

impl HotKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
        }
    }

    /// Legacy key code of the modifier key itself.
    pub fn key_code(self) -> u32 {
        match self {
            Self::Shift => KEY_CODE_SHIFT,
            Self::Ctrl => KEY_CODE_CTRL,
            Self::Alt => KEY_CODE_ALT,
        }
    }

    /// Whether the modifier flags report this key as held.
    #[inline]
    pub fn is_held(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Ctrl => modifiers.ctrl,
            Self::Alt => modifiers.alt,
        }
    }

    /// Whether a key-down event reports this hot key.
    pub fn is_pressed(self, event: &KeyEvent) -> bool {
        self.is_held(event.modifiers) || event.key_code == Some(self.key_code())
    }

    /// Whether a key-up event releases this hot key.
    ///
    /// Releasing an unrelated key while the modifier is still reported does
    /// not count.
    pub fn is_released(self, event: &KeyEvent) -> bool {
        event.key_code == Some(self.key_code()) || !self.is_held(event.modifiers)
    }

    /// Key-down event a keyboard produces for this modifier.
    pub fn press_event(self) -> KeyEvent {
        KeyEvent::new(Some(self.key_code()), self.modifiers())
    }

    /// Key-up event a keyboard produces for this modifier.
    pub fn release_event(self) -> KeyEvent {
        KeyEvent::new(Some(self.key_code()), Modifiers::NONE)
    }

    /// Modifier flags with only this key set.
    pub fn modifiers(self) -> Modifiers {
        match self {
            Self::Shift => Modifiers::SHIFT,
            Self::Ctrl => Modifiers::CTRL,
            Self::Alt => Modifiers::ALT,
        }
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotKey {
    type Err = DragZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shift" => Ok(Self::Shift),
            "ctrl" => Ok(Self::Ctrl),
            "alt" => Ok(Self::Alt),
            _ => Err(DragZoomError::UnknownHotKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for HotKey {
    type Error = DragZoomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
