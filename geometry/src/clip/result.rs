/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::clipper::*;
use super::curve_clipper::*;
use super::error::*;
use super::operation::*;
use crate::geo::*;
use crate::path_data::*;

///
/// The result of every boolean operation between a subject and a clip geometry
///
/// The four results are computed together: a `ClipResult` either holds all of them or was never created. It is
/// a plain value owned by the caller, and goes stale when either input changes (compute a new one rather than
/// trying to update it).
///
#[derive(Clone, PartialEq, Debug)]
pub struct ClipResult {
    union: Geometry,
    intersection: Geometry,
    difference: Geometry,
    xor: Geometry,
}

impl ClipResult {
    ///
    /// Computes every boolean operation between two geometries using the default clipper
    ///
    /// The difference is `subject - clip`.
    ///
    pub fn compute(subject: &Geometry, clip: &Geometry) -> Result<ClipResult, ClipError> {
        ClipResult::compute_with(&CurveClipper::default(), subject, clip)
    }

    ///
    /// Computes every boolean operation between two geometries using a specific clipper
    ///
    /// If any of the operations fails, the error is returned and none of the other results are available.
    ///
    pub fn compute_with(
        clipper: &impl BooleanClipper,
        subject: &Geometry,
        clip: &Geometry,
    ) -> Result<ClipResult, ClipError> {
        log::debug!(
            "Clipping {} subject rings against {} clip rings",
            subject.ring_count(),
            clip.ring_count()
        );

        let union = clipper.clip(subject, clip, ClipOperation::Union)?;
        let intersection = clipper.clip(subject, clip, ClipOperation::Intersection)?;
        let difference = clipper.clip(subject, clip, ClipOperation::Difference)?;
        let xor = clipper.clip(subject, clip, ClipOperation::Xor)?;

        log::debug!(
            "Clip result rings: union {}, intersection {}, difference {}, xor {}",
            union.ring_count(),
            intersection.ring_count(),
            difference.ring_count(),
            xor.ring_count()
        );

        Ok(ClipResult {
            union,
            intersection,
            difference,
            xor,
        })
    }

    ///
    /// Decodes two path data strings and computes every boolean operation between them
    ///
    pub fn from_path_data(subject_path: &str, clip_path: &str) -> Result<ClipResult, ClipError> {
        let subject = Geometry::from_path_data(subject_path).map_err(|error| ClipError::InvalidPath {
            input: ClipInput::Subject,
            error,
        })?;
        let clip = Geometry::from_path_data(clip_path).map_err(|error| ClipError::InvalidPath {
            input: ClipInput::Clip,
            error,
        })?;

        ClipResult::compute(&subject, &clip)
    }

    ///
    /// Retrieves the result of a particular operation
    ///
    pub fn get(&self, operation: ClipOperation) -> &Geometry {
        match operation {
            ClipOperation::Union => &self.union,
            ClipOperation::Intersection => &self.intersection,
            ClipOperation::Difference => &self.difference,
            ClipOperation::Xor => &self.xor,
        }
    }

    #[inline]
    pub fn union(&self) -> &Geometry {
        &self.union
    }

    #[inline]
    pub fn intersection(&self) -> &Geometry {
        &self.intersection
    }

    ///
    /// The subject geometry with the clip geometry removed
    ///
    #[inline]
    pub fn difference(&self) -> &Geometry {
        &self.difference
    }

    #[inline]
    pub fn xor(&self) -> &Geometry {
        &self.xor
    }

    ///
    /// Encodes the result of an operation as path data
    ///
    pub fn to_path_data(&self, operation: ClipOperation) -> Result<String, EncodeError> {
        self.get(operation).to_path_data()
    }
}
