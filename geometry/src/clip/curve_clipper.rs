/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::assemble::*;
use super::clipper::*;
use super::error::*;
use super::operation::*;
use crate::consts::*;
use crate::geo::*;

use flo_curves::bezier::path::{
    path_add, path_intersect, path_remove_overlapped_points, path_sub, BezierPathBuilder, SimpleBezierPath,
};
use flo_curves::Coord2;

use std::iter;

///
/// Clips geometries using the path arithmetic operations from `flo_curves`
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveClipper {
    /// Points closer together than this distance may be merged by the path arithmetic
    pub accuracy: f64,
}

impl CurveClipper {
    pub fn with_accuracy(accuracy: f64) -> CurveClipper {
        CurveClipper { accuracy }
    }
}

impl Default for CurveClipper {
    fn default() -> CurveClipper {
        CurveClipper {
            accuracy: CLIP_ACCURACY,
        }
    }
}

///
/// Converts the rings of a geometry to bezier paths, checking that they're usable as clipper input
///
fn geometry_to_paths(geometry: &Geometry, input: ClipInput) -> Result<Vec<SimpleBezierPath>, ClipError> {
    geometry
        .rings()
        .enumerate()
        .map(|(ring_index, ring)| -> Result<SimpleBezierPath, ClipError> {
            if ring.is_empty() {
                return Err(ClipError::EmptyRing { input, ring_index });
            }
            if !ring.is_finite() {
                return Err(ClipError::NonFiniteInput { input, ring_index });
            }
            if !ring.is_closed() {
                return Err(ClipError::OpenRing { input, ring_index });
            }

            let mut points = ring.iter().map(|point| Coord2(point.x, point.y));
            let start = points.next().ok_or(ClipError::EmptyRing { input, ring_index })?;
            let path = points
                .fold(BezierPathBuilder::<SimpleBezierPath>::start(start), |path, point| {
                    path.line_to(point)
                })
                .build();

            Ok(path)
        })
        .collect()
}

///
/// Converts a perimeter generated by the path arithmetic back to a closed ring
///
/// The paths we pass in are made of straight lines, so only the end point of each curve is kept.
///
fn path_to_ring(path: &SimpleBezierPath) -> Result<Ring, ClipError> {
    let (start, curves) = path;

    let ring = iter::once(*start)
        .chain(curves.iter().map(|(_, _, end_point)| *end_point))
        .map(|Coord2(x, y)| Position::new(x, y))
        .collect::<Ring>();

    if ring.is_finite() {
        Ok(ring.closed())
    } else {
        Err(ClipError::NonFiniteResult)
    }
}

impl CurveClipper {
    ///
    /// Resolves any places where the rings of one input cross themselves or each other
    ///
    /// The path arithmetic expects perimeters that don't self-intersect, so a ring such as a bow-tie is split into
    /// its separate parts here. Overlapping areas are read even-odd.
    ///
    fn normalize(&self, paths: Vec<SimpleBezierPath>) -> Vec<SimpleBezierPath> {
        path_remove_overlapped_points::<_, SimpleBezierPath>(&paths, self.accuracy)
    }

    ///
    /// Result of an operation where at least one of the inputs covers no area
    ///
    fn clip_empty(
        subject: Vec<SimpleBezierPath>,
        clip: Vec<SimpleBezierPath>,
        operation: ClipOperation,
    ) -> Vec<SimpleBezierPath> {
        match operation {
            ClipOperation::Union | ClipOperation::Xor => subject.into_iter().chain(clip).collect(),
            ClipOperation::Intersection => vec![],
            ClipOperation::Difference => {
                if clip.is_empty() {
                    subject
                } else {
                    vec![]
                }
            }
        }
    }
}

impl BooleanClipper for CurveClipper {
    fn clip(&self, subject: &Geometry, clip: &Geometry, operation: ClipOperation) -> Result<Geometry, ClipError> {
        let subject_paths = geometry_to_paths(subject, ClipInput::Subject)?;
        let clip_paths = geometry_to_paths(clip, ClipInput::Clip)?;

        let perimeters: Vec<SimpleBezierPath> = if subject_paths.is_empty() || clip_paths.is_empty() {
            CurveClipper::clip_empty(subject_paths, clip_paths, operation)
        } else {
            let subject_paths = self.normalize(subject_paths);
            let clip_paths = self.normalize(clip_paths);

            let perimeters = match operation {
                ClipOperation::Union => path_add::<SimpleBezierPath>(&subject_paths, &clip_paths, self.accuracy),
                ClipOperation::Intersection => {
                    path_intersect::<SimpleBezierPath>(&subject_paths, &clip_paths, self.accuracy)
                }
                ClipOperation::Difference => {
                    path_sub::<SimpleBezierPath>(&subject_paths, &clip_paths, self.accuracy)
                }
                ClipOperation::Xor => {
                    let mut exclusive = path_sub::<SimpleBezierPath>(&subject_paths, &clip_paths, self.accuracy);
                    exclusive.extend(path_sub::<SimpleBezierPath>(&clip_paths, &subject_paths, self.accuracy));
                    exclusive
                }
            };

            log::trace!(
                "{:?}: {} + {} paths in, {} perimeters out",
                operation,
                subject_paths.len(),
                clip_paths.len(),
                perimeters.len()
            );

            perimeters
        };

        let rings = perimeters
            .iter()
            .map(path_to_ring)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(assemble_geometry(rings))
    }
}
