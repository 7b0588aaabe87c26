/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_canvas::*;
use flo_mask_geometry::*;

use std::error::Error;
use std::fmt;

///
/// Errors from building an erase stroke
///
#[derive(Clone, PartialEq, Debug)]
pub enum StrokeError {
    /// A sample arrived while no stroke was in progress
    NotActive,

    /// Brush sizes must be finite and greater than 0
    InvalidBrushSize(f64),

    /// A device position could not be converted to drawing coordinates
    Division(DivisionError),

    /// A sample could not be written as path data (eg, because it was not finite)
    Encode(EncodeError),
}

///
/// Errors from a mask group
///
#[derive(Clone, PartialEq, Debug)]
pub enum MaskGroupError {
    /// The path data for a stroke could not be read
    Decode(DecodeError),

    /// The path data for a stroke could not be written
    Encode(EncodeError),

    /// The mask could not be converted to physical coordinates
    Division(DivisionError),
}

impl From<DivisionError> for StrokeError {
    fn from(error: DivisionError) -> StrokeError {
        StrokeError::Division(error)
    }
}

impl From<EncodeError> for StrokeError {
    fn from(error: EncodeError) -> StrokeError {
        StrokeError::Encode(error)
    }
}

impl From<DecodeError> for MaskGroupError {
    fn from(error: DecodeError) -> MaskGroupError {
        MaskGroupError::Decode(error)
    }
}

impl From<EncodeError> for MaskGroupError {
    fn from(error: EncodeError) -> MaskGroupError {
        MaskGroupError::Encode(error)
    }
}

impl From<DivisionError> for MaskGroupError {
    fn from(error: DivisionError) -> MaskGroupError {
        MaskGroupError::Division(error)
    }
}

impl fmt::Display for StrokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeError::NotActive => write!(f, "no erase stroke is in progress"),
            StrokeError::InvalidBrushSize(size) => write!(f, "invalid brush size {}", size),
            StrokeError::Division(error) => error.fmt(f),
            StrokeError::Encode(error) => error.fmt(f),
        }
    }
}

impl fmt::Display for MaskGroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskGroupError::Decode(error) => error.fmt(f),
            MaskGroupError::Encode(error) => error.fmt(f),
            MaskGroupError::Division(error) => error.fmt(f),
        }
    }
}

impl Error for StrokeError {}

impl Error for MaskGroupError {}
