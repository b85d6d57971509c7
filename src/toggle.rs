//! State of the optional on/off toggle control.
//!
//! The control is a single sprite image clipped to one frame. The host
//! renders it from `sprite_offset()` and `title()`; this module only tracks
//! which frame is showing and whether the control is visible.

use crate::config::{ControlPosition, DragZoomOptions, VisualTips};
use crate::constants::TOGGLE_Z_INDEX;
use crate::geometry::Size;
use serde::Serialize;

/// Frames of the toggle sprite, in sprite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteFrame {
    On = 0,
    Hot = 1,
    Off = 2,
}

impl SpriteFrame {
    pub fn index(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleControl {
    class: String,
    sprite: String,
    size: Size,
    position: ControlPosition,
    tips: VisualTips,
    frame: SpriteFrame,
    active: bool,
    hidden: bool,
}

impl ToggleControl {
    pub fn new(options: &DragZoomOptions) -> Self {
        Self {
            class: options.visual_class.clone(),
            sprite: options.visual_sprite.clone(),
            size: options.visual_size,
            position: options.visual_position,
            tips: options.visual_tips.clone(),
            frame: SpriteFrame::Off,
            active: false,
            hidden: false,
        }
    }

    pub fn frame(&self) -> SpriteFrame {
        self.frame
    }

    /// Horizontal offset of the sprite image so only `frame()` shows.
    pub fn sprite_offset(&self) -> f64 {
        -(self.size.width * f64::from(self.frame.index()))
    }

    /// Tooltip for the current on/off state.
    pub fn title(&self) -> &str {
        if self.active {
            self.tips.on.as_str()
        } else {
            self.tips.off.as_str()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    pub fn z_index(&self) -> i32 {
        TOGGLE_Z_INDEX
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.frame = self.resting_frame();
    }

    /// Pointer entered the control.
    pub fn pointer_over(&mut self) {
        self.frame = SpriteFrame::Hot;
    }

    /// Pointer left the control.
    pub fn pointer_out(&mut self) {
        self.frame = self.resting_frame();
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    fn resting_frame(&self) -> SpriteFrame {
        if self.active { SpriteFrame::On } else { SpriteFrame::Off }
    }
}
