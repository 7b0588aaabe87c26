/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn down(x: f64, y: f64) -> DrawEvent {
    DrawEvent::pointer(PointerAction::ButtonDown(Button::Left), x, y)
}

fn drag(x: f64, y: f64) -> DrawEvent {
    DrawEvent::pointer(PointerAction::Drag, x, y)
}

fn up(x: f64, y: f64) -> DrawEvent {
    DrawEvent::pointer(PointerAction::ButtonUp(Button::Left), x, y)
}

fn wheel(x: f64, y: f64, delta: f64) -> DrawEvent {
    DrawEvent::Wheel(PointerState::new(pos(x, y)), delta)
}

///
/// A session with a 1000x500 background on a 500x500 surface (base scale 0.5, pan 0,125)
///
fn session() -> DrawingSession {
    let mut session = DrawingSession::new(SessionConfig::default()).unwrap();
    session.set_surface_size(Size::new(500.0, 500.0));
    session.load_background(Size::new(1000.0, 500.0)).unwrap();

    session
}

#[test]
fn new_session() {
    let session = session();

    assert!(session.tool() == Tool::Pan);
    assert!(session.brush_size() == 10.0);
    assert!(session.mask().is_empty());
    assert!(session.mask_data() == "M0,0Z");
    assert!(session.transform().base_scale() == 0.5);
}

#[test]
fn invalid_brush_size_in_config() {
    let mut config = SessionConfig::default();
    config.erase.brush_size = 0.0;

    assert!(DrawingSession::new(config) == Err(MaskError::Stroke(StrokeError::InvalidBrushSize(0.0))));
}

#[test]
fn erase_stroke_is_added_to_mask() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(down(50.0, 175.0)).unwrap();
    assert!(session.stroke().is_active());
    assert!(session.mask().is_empty());

    session.handle_event(drag(55.0, 175.0)).unwrap();
    session.handle_event(up(60.0, 175.0)).unwrap();

    assert!(!session.stroke().is_active());
    assert!(session.mask().len() == 1);

    // Down + drag + release sample
    assert!(session.stroke().segments().len() == 3);

    // Device (50, 175) is drawing (50, 50)
    assert!(session.mask().stroke_at(&pos(50.0, 50.0)).is_some());
    assert!(session.mask().stroke_at(&pos(58.0, 50.0)).is_some());
    assert!(session.mask().stroke_at(&pos(100.0, 100.0)).is_none());
}

#[test]
fn saved_mask_contains_strokes() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(up(60.0, 175.0)).unwrap();

    let mask_data = session.mask_data();

    assert!(mask_data.starts_with("M0,0ZM"));
    assert!(mask_data.contains("M45,45 L45,55 L55,55 L55,45 Z"));
}

#[test]
fn leaving_the_surface_finishes_the_stroke() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(DrawEvent::pointer(PointerAction::Leave, 0.0, 175.0)).unwrap();

    assert!(!session.stroke().is_active());
    assert!(session.mask().len() == 1);
    assert!(session.eraser_cursor().unwrap().is_none());
}

#[test]
fn cancel_discards_the_stroke() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(drag(60.0, 175.0)).unwrap();
    session.handle_event(DrawEvent::pointer(PointerAction::Cancel, 60.0, 175.0)).unwrap();

    assert!(!session.stroke().is_active());
    assert!(session.mask().is_empty());
}

#[test]
fn moving_without_button_does_not_erase() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(DrawEvent::pointer(PointerAction::Move, 50.0, 175.0)).unwrap();
    session.handle_event(up(60.0, 175.0)).unwrap();

    assert!(session.mask().is_empty());
    assert!(session.eraser_cursor().unwrap() == Some(pos(55.0, 45.0)));
}

#[test]
fn right_button_does_not_erase() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(DrawEvent::pointer(PointerAction::ButtonDown(Button::Right), 50.0, 175.0)).unwrap();

    assert!(!session.stroke().is_active());
}

#[test]
fn eraser_cursor_follows_zoom() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(wheel(250.0, 250.0, -1.0)).unwrap();

    assert!((session.eraser_screen_size() - 11.0).abs() < 0.000001);
}

#[test]
fn no_eraser_cursor_with_pan_tool() {
    let mut session = session();

    session.handle_event(DrawEvent::pointer(PointerAction::Move, 50.0, 175.0)).unwrap();

    assert!(session.eraser_cursor().unwrap().is_none());
}

#[test]
fn pan_tool_drags_surface() {
    let mut session = session();

    session.handle_event(down(100.0, 100.0)).unwrap();
    session.handle_event(drag(110.0, 90.0)).unwrap();
    session.handle_event(drag(120.0, 95.0)).unwrap();
    session.handle_event(up(120.0, 95.0)).unwrap();

    assert!(session.transform().pan_offset() == pos(20.0, 120.0));

    // Moving after release doesn't pan
    session.handle_event(DrawEvent::pointer(PointerAction::Move, 200.0, 200.0)).unwrap();
    assert!(session.transform().pan_offset() == pos(20.0, 120.0));
}

#[test]
fn wheel_zooms_about_cursor() {
    let mut session = session();
    let before = session.transform().device_to_drawing(pos(300.0, 200.0)).unwrap();

    session.handle_event(wheel(300.0, 200.0, -3.0)).unwrap();
    let after = session.transform().device_to_drawing(pos(300.0, 200.0)).unwrap();

    assert!(session.transform().zoom() > 1.0);
    assert!((before.x - after.x).abs() < 0.000001 && (before.y - after.y).abs() < 0.000001);

    session.handle_event(wheel(300.0, 200.0, 0.0)).unwrap();
    assert!((session.transform().zoom() - 1.1).abs() < 0.000001);
}

#[test]
fn select_and_delete_stroke() {
    let mut session = session();
    session.set_tool(Tool::Erase);
    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(up(60.0, 175.0)).unwrap();

    session.set_tool(Tool::Pan);
    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(up(50.0, 175.0)).unwrap();

    let selected = session.mask().selected();
    assert!(selected.is_some());
    assert!(session.delete_selected() == selected);
    assert!(session.mask().is_empty());
    assert!(session.delete_selected().is_none());
}

#[test]
fn changing_tool_abandons_stroke() {
    let mut session = session();
    session.set_tool(Tool::Erase);
    session.handle_event(down(50.0, 175.0)).unwrap();

    session.set_tool(Tool::Pan);

    assert!(!session.stroke().is_active());
    assert!(session.mask().is_empty());
}

#[test]
fn physical_mask_uses_image_coordinates() {
    let mut session = session();
    session.set_tool(Tool::Erase);
    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(DrawEvent::pointer(PointerAction::ButtonUp(Button::Left), 50.0, 175.0)).unwrap();

    let physical = session.physical_mask_data().unwrap();

    // The first sample square is (45,45)-(55,55) in drawing coordinates
    assert!(physical.contains("M90,90 L90,110 L110,110 L110,90 Z"), "{}", physical);
}

#[test]
fn load_saved_mask() {
    let mut session = session();
    session.load_mask("M0,0ZM0,0 L10,0 L10,10 L0,10 Z").unwrap();

    assert!(session.mask().len() == 1);
    assert!(session.mask_data() == "M0,0ZM0,0 L10,0 L10,10 L0,10 Z");

    assert!(matches!(session.load_mask("M0,0ZMx"), Err(MaskError::MaskGroup(_))));
}

#[test]
fn brush_size_changes() {
    let mut session = session();

    assert!(session.set_brush_size(20.0).is_ok());
    assert!(session.brush_size() == 20.0);
    assert!(matches!(session.set_brush_size(-1.0), Err(MaskError::Stroke(_))));
}

#[test]
fn resize_event_changes_surface() {
    let mut session = session();

    session.handle_event(DrawEvent::Resize(Size::new(800.0, 600.0))).unwrap();
    assert!(session.transform().surface_size() == Size::new(800.0, 600.0));
}

#[test]
fn sessions_are_independent() {
    let mut first = session();
    let second = session();

    first.set_tool(Tool::Erase);
    first.handle_event(down(50.0, 175.0)).unwrap();
    first.handle_event(up(60.0, 175.0)).unwrap();

    assert!(first.mask().len() == 1);
    assert!(second.mask().is_empty());
}

#[test]
fn partial_session_config() {
    let config: SessionConfig = serde_json::from_str(r#"{ "erase": { "brush_size": 4 } }"#).unwrap();

    assert!(config.erase.brush_size == 4.0);
    assert!(config.transform == TransformConfig::default());
}

#[test]
fn second_press_keeps_the_unfinished_stroke() {
    let mut session = session();
    session.set_tool(Tool::Erase);

    session.handle_event(down(50.0, 175.0)).unwrap();
    session.handle_event(drag(55.0, 175.0)).unwrap();

    // No release before the next press
    session.handle_event(down(300.0, 300.0)).unwrap();

    assert!(session.stroke().is_active());
    assert!(session.mask().len() == 1);
    assert!(session.mask().stroke_at(&pos(50.0, 50.0)).is_some());
    assert!(session.mask().stroke_at(&pos(300.0, 175.0)).is_none());

    session.handle_event(up(305.0, 300.0)).unwrap();

    assert!(session.mask().len() == 2);
    assert!(session.mask().stroke_at(&pos(300.0, 175.0)).is_some());
    assert!(session.mask().stroke_at(&pos(50.0, 50.0)).is_some());
}
