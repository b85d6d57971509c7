//! Snapshot tests using the insta crate.
//!
//! Overlay frames and event payloads are nested structures where a field-by-
//! field comparison hides what changed; snapshots show the whole frame.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestViewportBuilder, key_down, pointer_down, pointer_move};
use dragzoom::overlay::OverlayFrame;
use dragzoom::{
    BorderInsets, DragZoomEvent, DragZoomOptions, GeoBounds, GeoPoint, HotKey, Modifiers,
    ScreenPoint, SelectionRect, Size,
};

// ============================================================================
// Overlay Frame Snapshots
// ============================================================================

#[test]
fn snapshot_selecting_frame() {
    let selection =
        SelectionRect::from_corners(ScreenPoint::new(300.0, 400.0), ScreenPoint::new(100.0, 100.0));
    let frame = OverlayFrame::selecting(&selection, Size::new(800.0, 600.0), &BorderInsets::uniform(4.0));
    insta::assert_debug_snapshot!(frame, @r"
    OverlayFrame {
        veil: Some(
            VeilPanels {
                left: PanelRect {
                    left: 0.0,
                    top: 0.0,
                    width: 100.0,
                    height: 600.0,
                },
                right: PanelRect {
                    left: 300.0,
                    top: 0.0,
                    width: 500.0,
                    height: 600.0,
                },
                top: PanelRect {
                    left: 100.0,
                    top: 0.0,
                    width: 200.0,
                    height: 100.0,
                },
                bottom: PanelRect {
                    left: 100.0,
                    top: 400.0,
                    width: 200.0,
                    height: 200.0,
                },
            },
        ),
        outline: Some(
            PanelRect {
                left: 100.0,
                top: 100.0,
                width: 192.0,
                height: 292.0,
            },
        ),
    }
    ");
}

#[test]
fn snapshot_hover_frame() {
    let mut zoom = TestViewportBuilder::new()
        .with_size(640.0, 480.0)
        .enable(DragZoomOptions::default());
    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(320.0, 240.0, Modifiers::SHIFT));

    insta::assert_debug_snapshot!(zoom.overlay(), @r"
    OverlayFrame {
        veil: Some(
            VeilPanels {
                left: PanelRect {
                    left: 0.0,
                    top: 0.0,
                    width: 640.0,
                    height: 480.0,
                },
                right: PanelRect {
                    left: 0.0,
                    top: 0.0,
                    width: 0.0,
                    height: 0.0,
                },
                top: PanelRect {
                    left: 0.0,
                    top: 0.0,
                    width: 0.0,
                    height: 0.0,
                },
                bottom: PanelRect {
                    left: 0.0,
                    top: 0.0,
                    width: 0.0,
                    height: 0.0,
                },
            },
        ),
        outline: None,
    }
    ");
}

#[test]
fn snapshot_drag_start_frame() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(50.0, 60.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(50.0, 60.0, Modifiers::SHIFT));

    // Pressing does not draw a selection until the pointer moves
    insta::assert_debug_snapshot!(zoom.phase(), @r"
    Dragging {
        start: ScreenPoint {
            x: 50.0,
            y: 60.0,
        },
        end: ScreenPoint {
            x: 50.0,
            y: 60.0,
        },
    }
    ");
    assert!(zoom.overlay().outline.is_none());
}

// ============================================================================
// Event Payload Snapshots
// ============================================================================

#[test]
fn snapshot_activate_event_json() {
    insta::assert_json_snapshot!(DragZoomEvent::Activate, @r#"
    {
      "event": "activate"
    }
    "#);
}

#[test]
fn test_dragend_event_json() {
    let event = DragZoomEvent::DragEnd {
        bounds: GeoBounds::new(GeoPoint::new(1.5, 2.0), GeoPoint::new(3.0, 4.25)),
    };
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"event":"dragend","bounds":{"south_west":{"lat":1.5,"lng":2.0},"north_east":{"lat":3.0,"lng":4.25}}}"#
    );
}

#[test]
fn test_drag_event_json() {
    let event = DragZoomEvent::Drag {
        south_west: ScreenPoint::new(100.0, 400.0),
        north_east: ScreenPoint::new(300.0, 100.0),
    };
    assert_eq!(
        serde_json::to_string(&event).unwrap(),
        r#"{"event":"drag","south_west":{"x":100.0,"y":400.0},"north_east":{"x":300.0,"y":100.0}}"#
    );
}
