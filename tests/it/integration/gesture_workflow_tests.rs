//! Keyboard-driven drag zoom workflows.

use crate::helpers::{
    EventLog, TestViewportBuilder, assert_close, drag, key_down, key_up, pointer_down,
    pointer_move, pointer_up, shift_drag,
};
use dragzoom::overlay::{PanelRect, VeilPanels};
use dragzoom::{
    DragZoomEvent, DragZoomOptions, EventKind, GeoBounds, GesturePhase, HotKey, KeyEvent,
    Modifiers, ScreenPoint, Size, Viewport,
};

#[test]
fn test_full_drag_zoom_800x600() {
    let reference = TestViewportBuilder::new().build();
    let expected = GeoBounds::new(
        reference.pixel_to_geo(ScreenPoint::new(100.0, 400.0)),
        reference.pixel_to_geo(ScreenPoint::new(300.0, 100.0)),
    );
    let expected_zoom = reference.bounds_zoom_level(&expected);

    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(100.0, 100.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(100.0, 100.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_move(300.0, 400.0, Modifiers::SHIFT));

    let veil = zoom.overlay().veil.expect("veil visible while dragging");
    assert_eq!(veil.left, PanelRect::new(0.0, 0.0, 100.0, 600.0));
    assert_eq!(veil.right, PanelRect::new(300.0, 0.0, 500.0, 600.0));
    assert_eq!(veil.top, PanelRect::new(100.0, 0.0, 200.0, 100.0));
    assert_eq!(veil.bottom, PanelRect::new(100.0, 400.0, 200.0, 200.0));
    // Default outline border is 4px on each side
    assert_eq!(
        zoom.overlay().outline,
        Some(PanelRect::new(100.0, 100.0, 192.0, 292.0))
    );

    zoom.dispatch(&pointer_up(300.0, 400.0, Modifiers::SHIFT));
    assert_eq!(zoom.phase(), GesturePhase::HotKeyActive);
    zoom.dispatch(&key_up(HotKey::Shift));
    assert_eq!(zoom.phase(), GesturePhase::Idle);

    assert_eq!(
        log.kinds(),
        vec![
            EventKind::Activate,
            EventKind::DragStart,
            EventKind::Drag,
            EventKind::DragEnd,
            EventKind::Deactivate,
        ]
    );
    let events = log.events();
    assert_eq!(
        events[1],
        DragZoomEvent::DragStart {
            position: reference.pixel_to_geo(ScreenPoint::new(100.0, 100.0))
        }
    );
    assert_eq!(
        events[2],
        DragZoomEvent::Drag {
            south_west: ScreenPoint::new(100.0, 400.0),
            north_east: ScreenPoint::new(300.0, 100.0),
        }
    );
    assert_eq!(events[3], DragZoomEvent::DragEnd { bounds: expected });

    let center = expected.center();
    assert_close(zoom.viewport().center().lat, center.lat);
    assert_close(zoom.viewport().center().lng, center.lng);
    assert_eq!(zoom.viewport().zoom(), expected_zoom);
}

#[test]
fn test_repeated_key_down_activates_once() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    for _ in 0..5 {
        zoom.dispatch(&key_down(HotKey::Shift));
    }
    // Another key pressed while shift is held
    zoom.dispatch(&dragzoom::InputEvent::KeyDown(KeyEvent::new(Some(65), Modifiers::SHIFT)));

    assert_eq!(log.kinds(), vec![EventKind::Activate]);
    assert!(zoom.is_active());
}

#[test]
fn test_other_key_up_keeps_gesture_armed() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&dragzoom::InputEvent::KeyUp(KeyEvent::new(Some(65), Modifiers::SHIFT)));
    assert!(zoom.is_active());

    zoom.dispatch(&key_up(HotKey::Shift));
    assert_eq!(log.kinds(), vec![EventKind::Activate, EventKind::Deactivate]);
}

#[test]
fn test_wrong_hot_key_is_ignored() {
    let mut zoom =
        TestViewportBuilder::new().enable(DragZoomOptions::default().with_key(HotKey::Alt));
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    assert!(!zoom.is_active());

    zoom.dispatch(&key_down(HotKey::Alt));
    assert!(zoom.is_active());
    assert_eq!(log.kinds(), vec![EventKind::Activate]);
}

#[test]
fn test_click_without_movement_cancels() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);
    let before = zoom.viewport().center();

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(200.0, 200.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(200.0, 200.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_up(200.0, 200.0, Modifiers::SHIFT));

    assert_eq!(
        log.kinds(),
        vec![EventKind::Activate, EventKind::DragStart, EventKind::Deactivate]
    );
    assert_eq!(log.count(EventKind::DragEnd), 0);
    assert_eq!(zoom.phase(), GesturePhase::Idle);
    assert!(zoom.overlay().is_hidden());
    assert_eq!(zoom.viewport().center(), before);
    assert_eq!(zoom.viewport().zoom(), 6);
}

#[test]
fn test_drag_back_to_start_cancels() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(200.0, 200.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(200.0, 200.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_move(260.0, 240.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_up(200.0, 200.0, Modifiers::SHIFT));

    assert_eq!(log.count(EventKind::DragEnd), 0);
    assert_eq!(log.last(), Some(DragZoomEvent::Deactivate));
}

#[test]
fn test_small_drag_under_min_extent_cancels() {
    let options = DragZoomOptions {
        min_drag_extent: 5.0,
        ..DragZoomOptions::default()
    };
    let mut zoom = TestViewportBuilder::new().enable(options);
    let log = EventLog::attach(&mut zoom);

    shift_drag(&mut zoom, (200.0, 200.0), (203.0, 204.0));
    assert_eq!(log.count(EventKind::DragEnd), 0);

    log.clear();
    shift_drag(&mut zoom, (200.0, 200.0), (203.0, 260.0));
    assert_eq!(log.count(EventKind::DragEnd), 1);
}

#[test]
fn test_click_never_zooms_whatever_min_extent() {
    for min_drag_extent in [-1.0, f64::NAN] {
        let options = DragZoomOptions {
            min_drag_extent,
            ..DragZoomOptions::default()
        };
        let mut zoom = TestViewportBuilder::new().enable(options);
        let log = EventLog::attach(&mut zoom);

        zoom.dispatch(&key_down(HotKey::Shift));
        zoom.dispatch(&pointer_move(200.0, 200.0, Modifiers::SHIFT));
        zoom.dispatch(&pointer_down(200.0, 200.0, Modifiers::SHIFT));
        zoom.dispatch(&pointer_up(200.0, 200.0, Modifiers::SHIFT));

        assert_eq!(log.count(EventKind::DragEnd), 0, "min extent {min_drag_extent}");
        assert_eq!(log.count(EventKind::Deactivate), 1);
        assert_eq!(zoom.viewport().zoom(), 6);
    }
}

#[test]
fn test_pointer_clamps_to_viewport_edge() {
    let reference = TestViewportBuilder::new().build();
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(600.0, 300.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(600.0, 300.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_move(1200.0, -50.0, Modifiers::SHIFT));

    assert_eq!(
        log.last(),
        Some(DragZoomEvent::Drag {
            south_west: ScreenPoint::new(600.0, 300.0),
            north_east: ScreenPoint::new(800.0, 0.0),
        })
    );
    let veil = zoom.overlay().veil.expect("veil visible");
    assert!(veil.right.is_empty());
    assert!(veil.top.is_empty());

    zoom.dispatch(&pointer_up(1200.0, -50.0, Modifiers::SHIFT));
    let Some(DragZoomEvent::DragEnd { bounds }) = log.last() else {
        panic!("expected dragend, got {:?}", log.last());
    };
    assert_eq!(
        bounds.north_east,
        reference.pixel_to_geo(ScreenPoint::new(800.0, 0.0))
    );
}

#[test]
fn test_hot_key_release_mid_drag_abandons_selection() {
    let before = TestViewportBuilder::new().build().center();
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(100.0, 100.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(100.0, 100.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_move(300.0, 400.0, Modifiers::SHIFT));
    zoom.dispatch(&key_up(HotKey::Shift));

    assert_eq!(zoom.phase(), GesturePhase::Idle);
    assert!(zoom.overlay().is_hidden());

    zoom.dispatch(&pointer_up(300.0, 400.0, Modifiers::NONE));
    assert_eq!(
        log.kinds(),
        vec![
            EventKind::Activate,
            EventKind::DragStart,
            EventKind::Drag,
            EventKind::Deactivate,
        ]
    );
    assert_eq!(zoom.viewport().center(), before);
}

#[test]
fn test_pointer_down_off_map_does_not_drag() {
    let mut zoom = TestViewportBuilder::new().at(100.0, 100.0).enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(50.0, 50.0, Modifiers::SHIFT));
    assert!(zoom.overlay().veil.is_none());

    zoom.dispatch(&pointer_down(50.0, 50.0, Modifiers::SHIFT));
    assert_eq!(zoom.phase(), GesturePhase::HotKeyActive);
    assert_eq!(log.kinds(), vec![EventKind::Activate]);
}

#[test]
fn test_pointer_down_without_hot_key_does_not_drag() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    drag(&mut zoom, (100.0, 100.0), (300.0, 400.0), Modifiers::NONE);
    assert!(log.events().is_empty());
    assert!(zoom.overlay().is_hidden());
}

#[test]
fn test_hover_veil_follows_pointer() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());

    zoom.dispatch(&key_down(HotKey::Shift));
    // Pointer position unknown until it moves
    assert!(zoom.overlay().veil.is_none());

    zoom.dispatch(&pointer_move(400.0, 300.0, Modifiers::SHIFT));
    assert_eq!(
        zoom.overlay().veil,
        Some(VeilPanels::covering(Size::new(800.0, 600.0)))
    );

    zoom.dispatch(&pointer_move(900.0, 300.0, Modifiers::SHIFT));
    assert!(zoom.overlay().veil.is_none());
}

#[test]
fn test_hot_key_still_held_allows_second_drag() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    drag(&mut zoom, (100.0, 100.0), (300.0, 400.0), Modifiers::SHIFT);
    drag(&mut zoom, (200.0, 200.0), (500.0, 300.0), Modifiers::SHIFT);
    zoom.dispatch(&key_up(HotKey::Shift));

    assert_eq!(log.count(EventKind::Activate), 1);
    assert_eq!(log.count(EventKind::DragEnd), 2);
    assert_eq!(log.count(EventKind::Deactivate), 1);
}

#[test]
fn test_every_move_emits_drag() {
    let mut zoom = TestViewportBuilder::new().enable(DragZoomOptions::default());
    let log = EventLog::attach(&mut zoom);

    zoom.dispatch(&key_down(HotKey::Shift));
    zoom.dispatch(&pointer_move(100.0, 100.0, Modifiers::SHIFT));
    zoom.dispatch(&pointer_down(100.0, 100.0, Modifiers::SHIFT));
    for step in 1..=10 {
        let offset = f64::from(step) * 10.0;
        zoom.dispatch(&pointer_move(100.0 + offset, 100.0 + offset, Modifiers::SHIFT));
    }
    // Same position again still counts
    zoom.dispatch(&pointer_move(200.0, 200.0, Modifiers::SHIFT));

    assert_eq!(log.count(EventKind::Drag), 11);
}
