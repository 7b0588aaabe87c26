/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::position::*;
use crate::consts::*;

use itertools::Itertools;

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::slice;

///
/// Where a point lies relative to a ring
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PointLocation {
    Inside,
    Outside,

    /// Within a small distance of one of the edges of the ring
    Boundary,
}

///
/// A single loop of points making up one sub-path of a polygon
///
/// A ring is closed when its last point is the same as its first. The path decoder closes rings when it sees a
/// `Z` command, and `Polygon::from_rings()` closes anything that is still open. Rings that are passed to the
/// clipper must be closed.
///
/// The direction of a ring matters when it's filled using the non-zero winding rule: `signed_area()` is
/// positive for rings that wind counter-clockwise in a y-up coordinate system.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Ring {
    points: Vec<Position>,
}

impl Ring {
    ///
    /// Creates a ring from a list of points (which are used as-is: the ring is not closed)
    ///
    pub fn new(points: Vec<Position>) -> Ring {
        Ring { points }
    }

    #[inline]
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Position> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Position> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Position> {
        self.points.last()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.points.iter()
    }

    ///
    /// Appends a point to the end of this ring
    ///
    #[inline]
    pub fn push(&mut self, point: Position) {
        self.points.push(point);
    }

    ///
    /// True if this ring has at least two points and ends where it starts
    ///
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    ///
    /// True if every point in this ring is finite
    ///
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|point| point.is_finite())
    }

    ///
    /// Closes this ring by repeating its first point at the end, if it isn't already closed
    ///
    pub fn close(&mut self) {
        if !self.is_closed() {
            if let Some(first) = self.points.first().copied() {
                self.points.push(first);
            }
        }
    }

    ///
    /// Returns a closed version of this ring
    ///
    pub fn closed(mut self) -> Ring {
        self.close();
        self
    }

    ///
    /// The points of this ring without the trailing copy of the first point (if there is one)
    ///
    pub fn open_points(&self) -> &[Position] {
        if self.is_closed() {
            &self.points[0..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    ///
    /// Returns this ring with its points in the opposite order
    ///
    pub fn reversed(mut self) -> Ring {
        self.points.reverse();
        self
    }

    ///
    /// Iterates over the edges of this ring, including the edge that joins the last point back to the first
    ///
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.points.iter().copied().circular_tuple_windows::<(_, _)>()
    }

    ///
    /// The area enclosed by this ring, positive if it winds counter-clockwise (y-up) and negative otherwise
    ///
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let twice_area = self
            .edges()
            .map(|(from, to)| from.x * to.y - to.x * from.y)
            .sum::<f64>();

        twice_area / 2.0
    }

    ///
    /// The area enclosed by this ring, ignoring its direction
    ///
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    ///
    /// The winding number of this ring around a point
    ///
    /// Counter-clockwise rings have a winding number of 1 around the points they enclose, clockwise rings have a
    /// winding number of -1. Summing this over several rings gives the value used by the non-zero fill rule.
    ///
    pub fn winding_number(&self, point: &Position) -> i32 {
        let mut winding = 0;

        for (from, to) in self.edges() {
            if from.y <= point.y {
                if to.y > point.y && side_of_line(&from, &to, point) > 0.0 {
                    winding += 1;
                }
            } else if to.y <= point.y && side_of_line(&from, &to, point) < 0.0 {
                winding -= 1;
            }
        }

        winding
    }

    ///
    /// True if the point is inside this ring using the non-zero winding rule
    ///
    #[inline]
    pub fn contains(&self, point: &Position) -> bool {
        self.winding_number(point) != 0
    }

    ///
    /// Determines whether a point is inside, outside or on the edge of this ring
    ///
    pub fn point_location(&self, point: &Position, tolerance: f64) -> PointLocation {
        if self.edges().any(|(from, to)| distance_to_segment(point, &from, &to) <= tolerance) {
            PointLocation::Boundary
        } else if self.contains(point) {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    ///
    /// True if every point of this ring is inside or on the edge of another ring
    ///
    pub fn lies_within(&self, outer: &Ring) -> bool {
        self.iter()
            .all(|point| outer.point_location(point, SMALL_DISTANCE) != PointLocation::Outside)
    }
}

///
/// Where a ring sits within a set of rings
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct RingNesting {
    /// The smallest ring that contains this one
    pub parent: Option<usize>,

    /// The number of rings that contain this one (even for filled areas, odd for holes)
    pub depth: usize,
}

///
/// Works out how a set of rings nest inside each other
///
/// A ring contains another if it's larger and every point of the other lies inside or on its edge.
///
pub(crate) fn ring_nesting(rings: &[Ring]) -> Vec<RingNesting> {
    let areas = rings.iter().map(|ring| ring.area()).collect::<Vec<_>>();

    (0..rings.len())
        .map(|ring_idx| {
            let containers = (0..rings.len())
                .filter(|container_idx| areas[*container_idx] > areas[ring_idx])
                .filter(|container_idx| rings[ring_idx].lies_within(&rings[*container_idx]))
                .collect::<Vec<_>>();

            let parent = containers
                .iter()
                .copied()
                .min_by(|a, b| areas[*a].partial_cmp(&areas[*b]).unwrap_or(Ordering::Equal));

            RingNesting {
                parent,
                depth: containers.len(),
            }
        })
        .collect()
}

///
/// Positive if `point` is to the left of the line from `from` to `to`, negative if it's to the right
///
#[inline]
fn side_of_line(from: &Position, to: &Position, point: &Position) -> f64 {
    (to.x - from.x) * (point.y - from.y) - (point.x - from.x) * (to.y - from.y)
}

///
/// Shortest distance between a point and a line segment
///
fn distance_to_segment(point: &Position, from: &Position, to: &Position) -> f64 {
    let along = *to - *from;
    let length_squared = along.dot(&along);

    if length_squared <= 0.0 {
        return point.distance_to(from);
    }

    let t = ((*point - *from).dot(&along) / length_squared).clamp(0.0, 1.0);
    point.distance_to(&(*from + along * t))
}

impl From<Vec<Position>> for Ring {
    #[inline]
    fn from(points: Vec<Position>) -> Ring {
        Ring { points }
    }
}

impl FromIterator<Position> for Ring {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Ring {
        Ring {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
