/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve_clipper::*;
use super::error::*;
use super::operation::*;
use crate::geo::*;

///
/// Trait implemented by types that can perform boolean operations between two geometries
///
pub trait BooleanClipper {
    ///
    /// Performs a single operation between two geometries. For `ClipOperation::Difference`, the result is
    /// `subject - clip`.
    ///
    fn clip(&self, subject: &Geometry, clip: &Geometry, operation: ClipOperation) -> Result<Geometry, ClipError>;
}

///
/// Performs a single boolean operation between two geometries using the default clipper
///
pub fn clip(subject: &Geometry, clip: &Geometry, operation: ClipOperation) -> Result<Geometry, ClipError> {
    CurveClipper::default().clip(subject, clip, operation)
}
