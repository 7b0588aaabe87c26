/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::size::*;

use flo_mask_geometry::Position;

use std::error::Error;
use std::fmt;

///
/// A vector was divided by something with a zero component
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DivisionError {
    pub dividend: Position,
    pub divisor: Position,
}

///
/// Errors from the stateful coordinate transforms
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TransformError {
    /// A conversion needed to divide by zero (eg, because the zoom or base scale is 0)
    Division(DivisionError),

    /// A background image with no area can't be fitted to the surface
    EmptyImage(Size),

    /// The surface has no area, so there's nothing to fit a background image into
    EmptySurface(Size),
}

impl From<DivisionError> for TransformError {
    fn from(error: DivisionError) -> TransformError {
        TransformError::Division(error)
    }
}

impl fmt::Display for DivisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot divide ({}) by ({})", self.dividend, self.divisor)
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Division(error) => error.fmt(f),
            TransformError::EmptyImage(size) => {
                write!(f, "background image has no area ({}x{})", size.width, size.height)
            }
            TransformError::EmptySurface(size) => {
                write!(f, "drawing surface has no area ({}x{})", size.width, size.height)
            }
        }
    }
}

impl Error for DivisionError {}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TransformError::Division(error) => Some(error),
            _ => None,
        }
    }
}
