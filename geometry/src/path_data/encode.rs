/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use crate::geo::*;

///
/// Formats a coordinate for path data (negative zero is written as '0')
///
#[inline]
fn coordinate(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

///
/// Encodes a single ring as `M x,y L x,y ...` (without the closing 'Z')
///
fn encode_ring(ring_index: usize, ring: &Ring) -> Result<String, EncodeError> {
    if ring.is_empty() {
        return Err(EncodeError::EmptyRing { ring_index });
    }

    let points = ring.open_points();
    let mut encoded = Vec::with_capacity(points.len());

    for (point_index, point) in points.iter().enumerate() {
        if !point.is_finite() {
            return Err(EncodeError::NonFiniteCoordinate {
                ring_index,
                point_index,
            });
        }

        let command = if point_index == 0 { 'M' } else { 'L' };
        encoded.push(format!("{}{},{}", command, coordinate(point.x), coordinate(point.y)));
    }

    Ok(encoded.join(" "))
}

///
/// Encodes a list of rings as path data
///
/// Each ring is written as a move followed by lines, leaving out the closing point if the ring is closed. Rings
/// are separated by `Z` and the whole path ends with a `Z`. An empty list of rings encodes as an empty string.
///
/// ```
/// # use flo_mask_geometry::*;
/// let square = Ring::new(vec![Position::new(0.0, 0.0), Position::new(10.0, 0.0), Position::new(10.0, 10.0), Position::new(0.0, 0.0)]);
///
/// assert!(encode_rings(&vec![square]).unwrap() == "M0,0 L10,0 L10,10 Z");
/// ```
///
pub fn encode_rings<'a>(rings: impl IntoIterator<Item = &'a Ring>) -> Result<String, EncodeError> {
    let encoded = rings
        .into_iter()
        .enumerate()
        .map(|(ring_index, ring)| encode_ring(ring_index, ring))
        .collect::<Result<Vec<_>, _>>()?;

    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{} Z", encoded.join(" Z ")))
    }
}
