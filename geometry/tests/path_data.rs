/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_geometry::*;

use rand::prelude::*;

fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

#[test]
fn decode_closed_square() {
    let rings = decode_path_data("M0,0 L100,0 L100,100 L0,100 Z").unwrap();

    assert!(rings.len() == 1);
    assert!(rings[0].len() == 5);
    assert!(
        rings[0].points() == &[pos(0.0, 0.0), pos(100.0, 0.0), pos(100.0, 100.0), pos(0.0, 100.0), pos(0.0, 0.0)]
    );
    assert!(rings[0].is_closed());
}

#[test]
fn decode_two_rings() {
    let rings = decode_path_data("M0,0 L100,0 L100,100 L0,100 Z M100,50 L150,0 L150,50Z").unwrap();

    assert!(rings.len() == 2);
    assert!(rings[1].points() == &[pos(100.0, 50.0), pos(150.0, 0.0), pos(150.0, 50.0), pos(100.0, 50.0)]);
}

#[test]
fn decode_lowercase_is_same_as_uppercase() {
    let upper = decode_path_data("M0,0 L10,0 L10,10 Z").unwrap();
    let lower = decode_path_data("m0,0 l10,0 l10,10 z").unwrap();

    assert!(upper == lower);
}

#[test]
fn decode_whitespace_separators() {
    let commas = decode_path_data("M0,0 L10,0 L10,10 Z").unwrap();
    let spaces = decode_path_data("M 0 0 L 10 0\tL 10\n10 Z").unwrap();

    assert!(commas == spaces);
}

#[test]
fn decode_negative_and_fractional_coordinates() {
    let rings = decode_path_data("M-1.5,2.25 L3 -4").unwrap();

    assert!(rings[0].points() == &[pos(-1.5, 2.25), pos(3.0, -4.0)]);
}

#[test]
fn decode_exponents() {
    let rings = decode_path_data("M1e2,0 L0,1E1 Z").unwrap();

    assert!(rings[0].points() == &[pos(100.0, 0.0), pos(0.0, 10.0), pos(100.0, 0.0)]);
}

#[test]
fn decode_skips_unknown_commands() {
    let rings = decode_path_data("M0,0 L10,0 C1,2,3,4,5,6 L10,10 Z").unwrap();

    assert!(rings.len() == 1);
    assert!(rings[0].points() == &[pos(0.0, 0.0), pos(10.0, 0.0), pos(10.0, 10.0), pos(0.0, 0.0)]);
}

#[test]
fn decode_ignores_text_before_first_command() {
    let rings = decode_path_data("  12 M0,0 L10,0 Z").unwrap();

    assert!(rings.len() == 1);
    assert!(rings[0].first() == Some(&pos(0.0, 0.0)));
}

#[test]
fn decode_ignores_extra_parameters() {
    let rings = decode_path_data("M0,0,5,5 L10,0 Z").unwrap();

    assert!(rings[0].points() == &[pos(0.0, 0.0), pos(10.0, 0.0), pos(0.0, 0.0)]);
}

#[test]
fn decode_empty_path() {
    assert!(decode_path_data("").unwrap().is_empty());
    assert!(decode_path_data("   ").unwrap().is_empty());
}

#[test]
fn decode_keeps_unterminated_ring() {
    let rings = decode_path_data("M0,0 L1,0 M5,5 L6,5 Z").unwrap();

    assert!(rings.len() == 2);
    assert!(rings[0].points() == &[pos(0.0, 0.0), pos(1.0, 0.0)]);
    assert!(!rings[0].is_closed());
    assert!(rings[1].is_closed());
}

#[test]
fn decode_close_without_ring_does_nothing() {
    let rings = decode_path_data("Z M0,0 L1,0 L1,1 Z Z").unwrap();

    assert!(rings.len() == 1);
    assert!(rings[0].len() == 4);
}

#[test]
fn decode_close_always_repeats_start() {
    let rings = decode_path_data("M0,0 L1,0 L0,0 Z").unwrap();

    assert!(rings[0].points() == &[pos(0.0, 0.0), pos(1.0, 0.0), pos(0.0, 0.0), pos(0.0, 0.0)]);
}

#[test]
fn decode_non_numeric_parameter_fails() {
    let error = decode_path_data("M0,a L1,1 Z").unwrap_err();

    assert!(error.command == "M0,", "{:?}", error);
    assert!(error.failure == DecodeFailure::MissingCoordinate);
}

#[test]
fn decode_malformed_number_fails() {
    let error = decode_path_data("M0,0 L1.2.3,4 Z").unwrap_err();

    assert!(error.command.trim() == "L1.2.3,4", "{:?}", error);
    assert!(error.failure == DecodeFailure::InvalidCoordinate("1.2.3".to_string()));
    assert!(error.to_string().contains("L1.2.3,4"));
}

#[test]
fn decode_infinite_coordinate_fails() {
    let error = decode_path_data("M1e999,0 L1,1 Z").unwrap_err();

    assert!(error.failure == DecodeFailure::InvalidCoordinate("1e999".to_string()));
}

#[test]
fn decode_line_without_move_fails() {
    let error = decode_path_data("L1,1 L2,2 Z").unwrap_err();

    assert!(error.failure == DecodeFailure::LineWithoutMove);
}

#[test]
fn decode_line_after_close_fails() {
    let error = decode_path_data("M0,0 L1,0 L1,1 Z L5,5").unwrap_err();

    assert!(error.failure == DecodeFailure::LineWithoutMove);
}

#[test]
fn encode_closed_square() {
    let ring = Ring::new(vec![pos(0.0, 0.0), pos(100.0, 0.0), pos(100.0, 100.0), pos(0.0, 100.0), pos(0.0, 0.0)]);

    assert!(encode_rings(&vec![ring]).unwrap() == "M0,0 L100,0 L100,100 L0,100 Z");
}

#[test]
fn encode_open_ring() {
    let ring = Ring::new(vec![pos(0.0, 0.0), pos(100.0, 0.0), pos(100.0, 100.0)]);

    assert!(encode_rings(&vec![ring]).unwrap() == "M0,0 L100,0 L100,100 Z");
}

#[test]
fn encode_several_rings() {
    let first = Ring::new(vec![pos(0.0, 0.0), pos(1.0, 0.0), pos(1.0, 1.0), pos(0.0, 0.0)]);
    let second = Ring::new(vec![pos(2.0, 2.0), pos(3.0, 2.0), pos(3.0, 3.0)]);

    assert!(encode_rings(&vec![first, second]).unwrap() == "M0,0 L1,0 L1,1 Z M2,2 L3,2 L3,3 Z");
}

#[test]
fn encode_single_point_ring() {
    let ring = Ring::new(vec![pos(5.0, 5.0)]);

    assert!(encode_rings(&vec![ring]).unwrap() == "M5,5 Z");
}

#[test]
fn encode_fractions_and_negative_zero() {
    let ring = Ring::new(vec![pos(-0.0, 0.5), pos(-1.25, 3.0)]);

    assert!(encode_rings(&vec![ring]).unwrap() == "M0,0.5 L-1.25,3 Z");
}

#[test]
fn encode_no_rings() {
    let rings: Vec<Ring> = vec![];

    assert!(encode_rings(&rings).unwrap() == "");
}

#[test]
fn encode_empty_ring_fails() {
    let rings = vec![Ring::new(vec![pos(0.0, 0.0), pos(1.0, 1.0)]), Ring::default()];

    assert!(encode_rings(&rings) == Err(EncodeError::EmptyRing { ring_index: 1 }));
}

#[test]
fn encode_non_finite_fails() {
    let rings = vec![Ring::new(vec![pos(0.0, 0.0), pos(f64::NAN, 1.0)])];

    assert!(
        encode_rings(&rings)
            == Err(EncodeError::NonFiniteCoordinate {
                ring_index: 0,
                point_index: 1
            })
    );
}

#[test]
fn encode_multipolygon_separates_polygons_with_spaces() {
    let first = Polygon::from_path_data("M0,0 L1,0 L1,1 Z").unwrap();
    let second = Polygon::from_path_data("M5,5 L6,5 L6,6 Z").unwrap();
    let geometry = Geometry::MultiPolygon(MultiPolygon::new(vec![first, second]));

    assert!(geometry.to_path_data().unwrap() == "M0,0 L1,0 L1,1 Z M5,5 L6,5 L6,6 Z");
}

#[test]
fn square_survives_round_trip() {
    let path = "M0,0 L100,0 L100,100 L0,100 Z";
    let encoded = encode_rings(&decode_path_data(path).unwrap()).unwrap();

    assert!(encoded == path);
}

fn random_path_data(rng: &mut StdRng) -> String {
    let mut path = String::new();
    let num_rings = rng.gen_range(1..4);

    for _ in 0..num_rings {
        let num_points = rng.gen_range(1..7);

        for point_idx in 0..num_points {
            let command = if point_idx == 0 { "M" } else { "L" };
            let command = if rng.gen_bool(0.3) {
                command.to_lowercase()
            } else {
                command.to_string()
            };
            let separator = if rng.gen_bool(0.5) { "," } else { " " };
            let x = rng.gen_range(-1000.0..1000.0);
            let y = rng.gen_range(-1000.0..1000.0);

            path.push_str(&format!("{}{}{}{} ", command, x, separator, y));
        }

        if rng.gen_bool(0.8) {
            path.push_str("Z ");
        }
    }

    path
}

#[test]
fn encoding_is_idempotent_after_one_pass() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let path = random_path_data(&mut rng);

        let once = encode_rings(&decode_path_data(&path).unwrap()).unwrap();
        let twice = encode_rings(&decode_path_data(&once).unwrap()).unwrap();

        assert!(once == twice, "{} -> {} -> {}", path, once, twice);
    }
}
