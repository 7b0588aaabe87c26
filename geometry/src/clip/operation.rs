/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The boolean operations that can be performed between two geometries
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClipOperation {
    /// Everything covered by either geometry
    Union,

    /// Only the area covered by both geometries
    Intersection,

    /// The subject geometry with the clip geometry removed (subject - clip)
    Difference,

    /// Everything covered by exactly one of the two geometries
    Xor,
}

impl ClipOperation {
    /// Every clip operation, in the order that `ClipResult` computes them
    pub const ALL: [ClipOperation; 4] = [
        ClipOperation::Union,
        ClipOperation::Intersection,
        ClipOperation::Difference,
        ClipOperation::Xor,
    ];

    ///
    /// True if swapping the subject and clip geometries does not change the result
    ///
    pub fn is_commutative(&self) -> bool {
        match self {
            ClipOperation::Union => true,
            ClipOperation::Intersection => true,
            ClipOperation::Difference => false,
            ClipOperation::Xor => true,
        }
    }
}
