//! Error types for the fallible surfaces around the gesture engine.
//!
//! The gesture core itself never fails: layout reads degrade to zero and
//! listener panics propagate. Only option parsing and name lookups return
//! errors.

use thiserror::Error;

/// Errors raised while configuring a drag zoom.
#[derive(Error, Debug)]
pub enum DragZoomError {
    /// Options JSON could not be parsed
    #[error("Invalid drag zoom options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Hot key name is not one of shift, ctrl or alt
    #[error("Unknown hot key {0:?} (expected shift, ctrl or alt)")]
    UnknownHotKey(String),

    /// Event name is not one the dispatcher emits
    #[error("Unknown drag zoom event {0:?}")]
    UnknownEvent(String),
}

/// Result type alias for drag zoom configuration
pub type DragZoomResult<T> = Result<T, DragZoomError>;
