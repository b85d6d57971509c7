//! Crate-wide constants.
//!
//! Centralizes magic numbers, key codes and option defaults so the gesture
//! code reads in terms of names instead of literals.

use std::time::Duration;

// ============================================================================
// Border Widths
// ============================================================================

/// Pixel width of the symbolic `thin` border width
pub const BORDER_THIN: f64 = 2.0;

/// Pixel width of the symbolic `medium` border width
pub const BORDER_MEDIUM: f64 = 4.0;

/// Pixel width of the symbolic `thick` border width
pub const BORDER_THICK: f64 = 6.0;

// ============================================================================
// Key Codes
// ============================================================================

/// Legacy key code reported for the Shift key
pub const KEY_CODE_SHIFT: u32 = 16;

/// Legacy key code reported for the Control key
pub const KEY_CODE_CTRL: u32 = 17;

/// Legacy key code reported for the Alt (Option) key
pub const KEY_CODE_ALT: u32 = 18;

// ============================================================================
// Timing
// ============================================================================

/// How long the post-zoom outline stays visible after a drag completes
pub const OUTLINE_HIDE_DELAY: Duration = Duration::from_secs(1);

/// Pointer-move handling budget before the profiler warns (one 60 FPS frame)
pub const POINTER_MOVE_BUDGET_MS: f64 = 16.67;

// ============================================================================
// Overlay Styling Defaults
// ============================================================================

/// Default CSS border shorthand of the selection outline
pub const DEFAULT_BOX_BORDER: &str = "4px solid #736AFF";

/// Default veil background color
pub const DEFAULT_VEIL_COLOR: &str = "gray";

/// Default veil opacity
pub const DEFAULT_VEIL_OPACITY: f32 = 0.25;

/// Default cursor shown over the veil
pub const DEFAULT_VEIL_CURSOR: &str = "crosshair";

/// Stacking order of the veil panels
pub const VEIL_Z_INDEX: i32 = 10001;

/// Stacking order of the visual toggle control (above the veil)
pub const TOGGLE_Z_INDEX: i32 = 10002;

// ============================================================================
// Visual Toggle Control Defaults
// ============================================================================

/// Default offset of the toggle control from the top-left map corner
pub const DEFAULT_VISUAL_OFFSET: (f64, f64) = (27.0, 295.0);

/// Default sprite holding the on, hot and off button images in one row
pub const DEFAULT_VISUAL_SPRITE: &str =
    "http://maps.gstatic.com/mapfiles/ftr/controls/dragzoom_btn.png";

/// Default size of a single image within the sprite
pub const DEFAULT_VISUAL_SIZE: (f64, f64) = (20.0, 20.0);

/// Default tooltip while the control is off
pub const DEFAULT_TIP_OFF: &str = "Turn on drag zoom mode";

/// Default tooltip while the control is on
pub const DEFAULT_TIP_ON: &str = "Turn off drag zoom mode";

// ============================================================================
// Reference Projection
// ============================================================================

/// Edge length of one map tile at zoom level 0
pub const TILE_SIZE: f64 = 256.0;

/// Highest zoom level the reference viewport supports
pub const MAX_ZOOM_LEVEL: u32 = 21;

/// Latitude limit of the Web Mercator projection
pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_78;
