/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::polygon::*;
use super::position::*;
use super::ring::*;
use crate::path_data::*;

use std::slice;

///
/// An ordered list of independent polygons
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon { polygons }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    ///
    /// Encodes each polygon separately, separating them with a space
    ///
    pub fn to_path_data(&self) -> Result<String, EncodeError> {
        let encoded = self
            .polygons
            .iter()
            .map(|polygon| polygon.to_path_data())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(encoded
            .into_iter()
            .filter(|path| !path.is_empty())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon { polygons }
    }
}

///
/// The kinds of geometry
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
}

///
/// Either a single polygon or a collection of polygons
///
#[derive(Clone, PartialEq, Debug)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Geometry {
    ///
    /// A geometry containing nothing
    ///
    pub fn empty() -> Geometry {
        Geometry::Polygon(Polygon::new())
    }

    ///
    /// Decodes path data into a single polygon
    ///
    pub fn from_path_data(path_data: &str) -> Result<Geometry, DecodeError> {
        Ok(Geometry::Polygon(Polygon::from_path_data(path_data)?))
    }

    ///
    /// Encodes this geometry as path data
    ///
    pub fn to_path_data(&self) -> Result<String, EncodeError> {
        match self {
            Geometry::Polygon(polygon) => polygon.to_path_data(),
            Geometry::MultiPolygon(multi) => multi.to_path_data(),
        }
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    ///
    /// The polygons making up this geometry (a single polygon is treated as a list of one)
    ///
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(polygon) => slice::from_ref(polygon),
            Geometry::MultiPolygon(multi) => multi.polygons(),
        }
    }

    ///
    /// Every ring in this geometry, in order
    ///
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flat_map(|polygon| polygon.iter())
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons().iter().filter(|polygon| !polygon.is_empty()).count()
    }

    #[inline]
    pub fn ring_count(&self) -> usize {
        self.polygons().iter().map(|polygon| polygon.ring_count()).sum()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.polygons().iter().map(|polygon| polygon.point_count()).sum()
    }

    ///
    /// True if this geometry contains no rings
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring_count() == 0
    }

    ///
    /// True if a point is inside this geometry using the non-zero winding rule
    ///
    pub fn contains(&self, point: &Position) -> bool {
        self.polygons().iter().map(|polygon| polygon.winding_number(point)).sum::<i32>() != 0
    }

    ///
    /// Total area covered by the polygons in this geometry
    ///
    pub fn area(&self) -> f64 {
        self.polygons().iter().map(|polygon| polygon.area()).sum()
    }
}

impl Default for Geometry {
    fn default() -> Geometry {
        Geometry::empty()
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Geometry {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi: MultiPolygon) -> Geometry {
        Geometry::MultiPolygon(multi)
    }
}
