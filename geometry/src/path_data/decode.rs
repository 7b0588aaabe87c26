/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use crate::geo::*;

use itertools::Itertools;

use std::iter;

///
/// True for the letters that start a path command ('e' is part of a number, eg '1e3')
///
#[inline]
fn is_command_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && c != 'e' && c != 'E'
}

///
/// Splits path data into commands: each command is a letter followed by its parameters
///
/// Anything before the first command letter is ignored.
///
fn path_commands(path_data: &str) -> impl Iterator<Item = &str> {
    path_data
        .char_indices()
        .filter(|(_, c)| is_command_letter(*c))
        .map(|(idx, _)| idx)
        .chain(iter::once(path_data.len()))
        .tuple_windows()
        .map(move |(start, end)| &path_data[start..end])
}

///
/// Reads the x, y position from a command (extra parameters are ignored)
///
fn command_position(command: &str) -> Result<Position, DecodeError> {
    let mut params = command[1..]
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|param| !param.is_empty());

    let mut next_coordinate = || -> Result<f64, DecodeError> {
        let param = params
            .next()
            .ok_or_else(|| DecodeError::new(command, DecodeFailure::MissingCoordinate))?;

        match param.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(DecodeError::new(
                command,
                DecodeFailure::InvalidCoordinate(param.to_string()),
            )),
        }
    };

    let x = next_coordinate()?;
    let y = next_coordinate()?;

    Ok(Position::new(x, y))
}

///
/// Decodes a path data string into a list of rings
///
/// `M` starts a new ring, `L` adds a point to the current ring and `Z` closes the current ring by repeating its
/// first point. A ring that is never closed with `Z` is returned as-is. `Polygon::from_rings()` can be used to
/// make sure every ring is closed.
///
/// ```
/// # use flo_mask_geometry::*;
/// let rings = decode_path_data("M0,0 L100,0 L100,100 Z M200,0 L250,50 L200,100 Z").unwrap();
///
/// assert!(rings.len() == 2);
/// assert!(rings[0].points() == &[Position::new(0.0, 0.0), Position::new(100.0, 0.0), Position::new(100.0, 100.0), Position::new(0.0, 0.0)]);
/// ```
///
pub fn decode_path_data(path_data: &str) -> Result<Vec<Ring>, DecodeError> {
    let mut rings = vec![];
    let mut current_ring: Option<Ring> = None;

    for command in path_commands(path_data) {
        match command.as_bytes()[0].to_ascii_uppercase() {
            b'M' => {
                let start = command_position(command)?;

                if let Some(open_ring) = current_ring.take() {
                    rings.push(open_ring);
                }
                current_ring = Some(Ring::new(vec![start]));
            }

            b'L' => {
                let point = command_position(command)?;

                match current_ring.as_mut() {
                    Some(ring) => ring.push(point),
                    None => return Err(DecodeError::new(command, DecodeFailure::LineWithoutMove)),
                }
            }

            b'Z' => {
                if let Some(mut ring) = current_ring.take() {
                    if let Some(start) = ring.first().copied() {
                        ring.push(start);
                    }
                    rings.push(ring);
                }
            }

            _ => {}
        }
    }

    if let Some(open_ring) = current_ring {
        rings.push(open_ring);
    }

    Ok(rings)
}
