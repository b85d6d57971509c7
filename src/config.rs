//! Drag zoom options.
//!
//! Options deserialize from camelCase JSON; every field has a default, so
//! `{}` is a valid configuration. Style overrides are cosmetic and never
//! change the geometry contracts, except for the outline's border width
//! which the overlay subtracts from the outline size.

use crate::constants::{
    DEFAULT_BOX_BORDER, DEFAULT_TIP_OFF, DEFAULT_TIP_ON, DEFAULT_VEIL_COLOR, DEFAULT_VEIL_CURSOR,
    DEFAULT_VEIL_OPACITY, DEFAULT_VISUAL_OFFSET, DEFAULT_VISUAL_SIZE, DEFAULT_VISUAL_SPRITE,
};
use crate::error::DragZoomResult;
use crate::geometry::{BorderInsets, Size};
use crate::hotkey::HotKey;
use crate::layout::parse_border_width;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Style of the selection outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    /// CSS border shorthand, e.g. `4px solid #736AFF`
    pub border: String,
    /// Any further style properties, passed through to the host untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            border: DEFAULT_BOX_BORDER.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl BoxStyle {
    /// Border width of the outline on every side.
    ///
    /// A `borderWidth` property wins over the shorthand, which contributes
    /// its first width-like token; `0` if neither has one.
    pub fn border_insets(&self) -> BorderInsets {
        let width = match self.extra.get("borderWidth") {
            Some(serde_json::Value::Number(width)) => width.as_f64().unwrap_or(0.0).max(0.0),
            Some(serde_json::Value::String(width)) => first_border_width(width),
            _ => first_border_width(&self.border),
        };
        BorderInsets::uniform(width)
    }
}

fn first_border_width(value: &str) -> f64 {
    value
        .split_whitespace()
        .map(parse_border_width)
        .find(|w| *w > 0.0)
        .unwrap_or(0.0)
}

/// Style of the veil panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VeilStyle {
    pub background_color: String,
    pub opacity: f32,
    pub cursor: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for VeilStyle {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_VEIL_COLOR.to_string(),
            opacity: DEFAULT_VEIL_OPACITY,
            cursor: DEFAULT_VEIL_CURSOR.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl VeilStyle {
    /// Style as it must be applied.
    ///
    /// A transparent panel cannot receive pointer-down events on some hosts,
    /// so transparency is expressed as fully transparent white instead.
    pub fn effective(&self) -> VeilStyle {
        if self.background_color.eq_ignore_ascii_case("transparent") {
            VeilStyle {
                background_color: "white".to_string(),
                opacity: 0.0,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

/// Map corner the toggle control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Placement of the toggle control relative to a map corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlPosition {
    pub anchor: Anchor,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ControlPosition {
    fn default() -> Self {
        Self {
            anchor: Anchor::TopLeft,
            offset_x: DEFAULT_VISUAL_OFFSET.0,
            offset_y: DEFAULT_VISUAL_OFFSET.1,
        }
    }
}

/// Tooltips of the toggle control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualTips {
    /// Shown while the control is off
    pub off: String,
    /// Shown while the control is on
    pub on: String,
}

impl Default for VisualTips {
    fn default() -> Self {
        Self {
            off: DEFAULT_TIP_OFF.to_string(),
            on: DEFAULT_TIP_ON.to_string(),
        }
    }
}

/// Options recognized when enabling drag zoom on a viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DragZoomOptions {
    /// Modifier that arms the gesture
    pub key: HotKey,
    pub box_style: BoxStyle,
    /// Formerly `paneStyle`, still accepted
    #[serde(alias = "paneStyle")]
    pub veil_style: VeilStyle,
    /// Whether the on/off toggle control is shown
    pub visual_enabled: bool,
    /// CSS class of the toggle control
    pub visual_class: String,
    pub visual_position: ControlPosition,
    /// Sprite with the on, hot and off images in one row
    pub visual_sprite: String,
    /// Size of one image within the sprite
    pub visual_size: Size,
    pub visual_tips: VisualTips,
    /// Drags whose width and height are both at most this many pixels are
    /// cancelled instead of zooming. Must be finite and non-negative.
    #[serde(deserialize_with = "non_negative_extent")]
    pub min_drag_extent: f64,
}

impl Default for DragZoomOptions {
    fn default() -> Self {
        Self {
            key: HotKey::default(),
            box_style: BoxStyle::default(),
            veil_style: VeilStyle::default(),
            visual_enabled: false,
            visual_class: String::new(),
            visual_position: ControlPosition::default(),
            visual_sprite: DEFAULT_VISUAL_SPRITE.to_string(),
            visual_size: Size::new(DEFAULT_VISUAL_SIZE.0, DEFAULT_VISUAL_SIZE.1),
            visual_tips: VisualTips::default(),
            min_drag_extent: 0.0,
        }
    }
}

impl DragZoomOptions {
    /// Parse options from JSON.
    pub fn from_json(json: &str) -> DragZoomResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_key(mut self, key: HotKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_visual(mut self, enabled: bool) -> Self {
        self.visual_enabled = enabled;
        self
    }
}

fn non_negative_extent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let extent = f64::deserialize(deserializer)?;
    if extent.is_finite() && extent >= 0.0 {
        Ok(extent)
    } else {
        Err(D::Error::custom(format!(
            "minDragExtent must be a non-negative pixel count, got {extent}"
        )))
    }
}
