/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::position::*;
use super::ring::*;
use crate::path_data::*;

use std::slice;

///
/// A polygon: an outer ring followed by rings describing holes (or further sub-areas) within it
///
/// Every ring in a polygon built by `from_rings()` is closed, so polygons can be handed directly to the clipper.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    ///
    /// Creates a polygon with no rings
    ///
    pub fn new() -> Polygon {
        Polygon { rings: vec![] }
    }

    ///
    /// Creates a polygon from a set of rings, closing any ring that does not already end at its start point
    ///
    pub fn from_rings(rings: impl IntoIterator<Item = Ring>) -> Polygon {
        Polygon {
            rings: rings.into_iter().map(|ring| ring.closed()).collect(),
        }
    }

    ///
    /// Decodes a polygon from a path data string such as `M0,0 L100,0 L100,100 Z`
    ///
    pub fn from_path_data(path_data: &str) -> Result<Polygon, DecodeError> {
        Ok(Polygon::from_rings(decode_path_data(path_data)?))
    }

    ///
    /// Encodes this polygon as path data
    ///
    pub fn to_path_data(&self) -> Result<String, EncodeError> {
        encode_rings(&self.rings)
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[inline]
    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }

    ///
    /// The outer boundary of this polygon (the first ring)
    ///
    #[inline]
    pub fn outer(&self) -> Option<&Ring> {
        self.rings.first()
    }

    ///
    /// The rings after the outer ring
    ///
    pub fn holes(&self) -> &[Ring] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    ///
    /// The total number of points in all of the rings of this polygon (including closing points)
    ///
    pub fn point_count(&self) -> usize {
        self.rings.iter().map(|ring| ring.len()).sum()
    }

    ///
    /// The area covered by this polygon
    ///
    /// Rings are filled even-odd, the same way the clipper reads them: a ring inside an odd number of the other
    /// rings is a hole, and any other ring (including one beside the outer ring) adds to the area.
    ///
    pub fn area(&self) -> f64 {
        ring_nesting(&self.rings)
            .into_iter()
            .zip(self.rings.iter())
            .map(|(nesting, ring)| if nesting.depth % 2 == 0 { ring.area() } else { -ring.area() })
            .sum()
    }

    ///
    /// Sum of the winding numbers of every ring in this polygon around a point
    ///
    pub fn winding_number(&self, point: &Position) -> i32 {
        self.rings.iter().map(|ring| ring.winding_number(point)).sum()
    }
}

///
/// Creates a polygon from rings exactly as supplied (unlike `from_rings()`, open rings are left open)
///
impl From<Vec<Ring>> for Polygon {
    fn from(rings: Vec<Ring>) -> Polygon {
        Polygon { rings }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Ring;
    type IntoIter = slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}
