/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_canvas::*;
use flo_mask_events::*;
use flo_mask_geometry::*;

fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn winding_number(path_data: &str, point: Position) -> i32 {
    decode_path_data(path_data)
        .unwrap()
        .into_iter()
        .map(|ring| ring.closed().winding_number(&point))
        .sum()
}

#[test]
fn first_sample_is_doubled_square() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(50.0, 50.0)).unwrap();

    assert!(stroke.is_active());
    assert!(
        stroke.path_data() == "M45,45 L45,55 L55,55 L55,45 Z M45,45 L45,55 L55,55 L55,45 Z",
        "{}",
        stroke.path_data()
    );
    assert!(winding_number(&stroke.path_data(), pos(50.0, 50.0)) == -2);
}

#[test]
fn segment_moving_right() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(50.0, 50.0)).unwrap();
    stroke.extend(pos(60.0, 50.0)).unwrap();

    assert!(stroke.segments().len() == 2);
    let newest = stroke.segments().next().unwrap();
    assert!(newest == "M55,45 L45,45 L55,45 L65,45 L65,55 L55,55 Z", "{}", newest);
}

#[test]
fn newest_segment_comes_first() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(50.0, 50.0)).unwrap();
    stroke.extend(pos(60.0, 50.0)).unwrap();
    stroke.extend(pos(70.0, 60.0)).unwrap();

    let segments = stroke.segments().collect::<Vec<_>>();

    assert!(segments.len() == 3);
    assert!(segments[2].starts_with("M45,45"));
    assert!(segments[1].starts_with("M55,45"));
    assert!(stroke.path_data() == segments.join(" "));
    assert!(stroke.last_point() == Some(pos(70.0, 60.0)));
}

#[test]
fn segments_wind_the_same_way_in_every_direction() {
    let directions = [
        pos(10.0, 0.0),
        pos(-10.0, 0.0),
        pos(0.0, 10.0),
        pos(0.0, -10.0),
        pos(10.0, 10.0),
        pos(-10.0, -10.0),
        pos(10.0, -10.0),
        pos(-10.0, 10.0),
    ];

    for direction in directions.iter() {
        let start = pos(100.0, 100.0);
        let end = start + *direction;

        let mut stroke = EraseStroke::new(4.0).unwrap();
        stroke.begin(start).unwrap();
        stroke.extend(end).unwrap();

        let segment = decode_path_data(stroke.segments().next().unwrap()).unwrap();
        let area = segment[0].signed_area();

        assert!(area > 0.0, "Direction {:?} has area {}", direction, area);
    }
}

#[test]
fn two_sample_stroke_covers_band() {
    // Press at (50, 50), release at (60, 50)
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(50.0, 50.0)).unwrap();
    let path_data = stroke.finish(Some(pos(60.0, 50.0))).unwrap();

    assert!(!stroke.is_active());
    assert!(stroke.segments().len() == 2);

    let mut x = 45.25;
    while x < 64.0 {
        for y in [46.0, 50.0, 54.0].iter() {
            assert!(
                winding_number(&path_data, pos(x, *y)) != 0,
                "Gap at {},{}",
                x,
                y
            );
        }

        x += 0.5;
    }

    assert!(winding_number(&path_data, pos(70.0, 50.0)) == 0);
    assert!(winding_number(&path_data, pos(50.0, 60.0)) == 0);
}

#[test]
fn diagonal_stroke_has_no_gaps() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(0.0, 0.0)).unwrap();
    stroke.extend(pos(20.0, 20.0)).unwrap();
    stroke.extend(pos(40.0, 0.0)).unwrap();
    let path_data = stroke.finish(None).unwrap();

    for sample in [pos(0.0, 0.0), pos(10.0, 10.0), pos(20.0, 20.0), pos(30.0, 10.0), pos(40.0, 0.0)].iter() {
        assert!(winding_number(&path_data, *sample) != 0, "Gap at {:?}", sample);
    }
}

#[test]
fn extend_without_begin_fails() {
    let mut stroke = EraseStroke::new(10.0).unwrap();

    assert!(stroke.extend(pos(1.0, 1.0)) == Err(StrokeError::NotActive));
    assert!(stroke.finish(None) == Err(StrokeError::NotActive));
}

#[test]
fn extend_after_finish_fails() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(1.0, 1.0)).unwrap();
    stroke.finish(None).unwrap();

    assert!(stroke.extend(pos(2.0, 2.0)) == Err(StrokeError::NotActive));
    assert!(stroke.segments().len() == 1);
}

#[test]
fn begin_discards_previous_stroke() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(1.0, 1.0)).unwrap();
    stroke.extend(pos(2.0, 2.0)).unwrap();
    stroke.finish(None).unwrap();

    stroke.begin(pos(100.0, 100.0)).unwrap();
    assert!(stroke.segments().len() == 1);
}

#[test]
fn cancel_discards_stroke() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(1.0, 1.0)).unwrap();
    stroke.extend(pos(2.0, 2.0)).unwrap();
    stroke.cancel();

    assert!(!stroke.is_active());
    assert!(stroke.path_data() == "");
    assert!(stroke.last_point().is_none());
}

#[test]
fn invalid_brush_sizes() {
    assert!(EraseStroke::new(0.0) == Err(StrokeError::InvalidBrushSize(0.0)));
    assert!(EraseStroke::new(-1.0).is_err());
    assert!(EraseStroke::new(f64::INFINITY).is_err());

    let mut stroke = EraseStroke::new(10.0).unwrap();
    assert!(stroke.set_brush_size(0.0).is_err());
    assert!(stroke.brush_size() == 10.0);
    assert!(stroke.set_brush_size(20.0).is_ok());
    assert!(stroke.brush_size() == 20.0);
}

#[test]
fn non_finite_sample_fails() {
    let mut stroke = EraseStroke::new(10.0).unwrap();

    assert!(stroke.begin(pos(f64::NAN, 0.0)).is_err());
    assert!(!stroke.is_active());
}

#[test]
fn cursor_origin_is_top_left_of_brush() {
    let mut transform = TransformState::default();
    transform.set_pan_offset(pos(10.0, 20.0));

    let stroke = EraseStroke::new(10.0).unwrap();

    assert!(stroke.cursor_origin(&transform, pos(60.0, 70.0)) == Ok(pos(45.0, 45.0)));
}

#[test]
fn default_erase_config() {
    assert!(EraseConfig::default().brush_size == 10.0);

    let config: EraseConfig = serde_json::from_str(r#"{ "brush_size": 25 }"#).unwrap();
    assert!(config.brush_size == 25.0);

    let config: EraseConfig = serde_json::from_str("{}").unwrap();
    assert!(config == EraseConfig::default());
}

#[test]
fn long_stroke_keeps_newest_segment_first() {
    let mut stroke = EraseStroke::new(10.0).unwrap();
    stroke.begin(pos(0.0, 0.0)).unwrap();

    for idx in 1..=2000 {
        stroke.extend(pos(idx as f64, 0.0)).unwrap();
    }

    let path_data = stroke.finish(None).unwrap();
    let first_square = "M-5,-5";

    assert!(stroke.segments().len() == 2001);
    assert!(path_data.starts_with(stroke.segments().next().unwrap()));
    assert!(path_data.starts_with("M2004,-5 L1994,-5"), "{}", &path_data[0..40]);
    assert!(stroke.segments().last().unwrap().starts_with(first_square));
    assert!(winding_number(&path_data, pos(1000.0, 0.0)) != 0);
}
