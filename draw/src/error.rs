/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_canvas::*;
use flo_mask_events::*;
use flo_mask_geometry::clip::*;
use flo_mask_geometry::*;

use std::error::Error;
use std::fmt;

///
/// Any error that can be produced while editing a mask
///
#[derive(Clone, PartialEq, Debug)]
pub enum MaskError {
    Decode(DecodeError),
    Encode(EncodeError),
    Clip(ClipError),
    Division(DivisionError),
    Transform(TransformError),
    Stroke(StrokeError),
    MaskGroup(MaskGroupError),
}

impl From<DecodeError> for MaskError {
    fn from(error: DecodeError) -> MaskError {
        MaskError::Decode(error)
    }
}

impl From<EncodeError> for MaskError {
    fn from(error: EncodeError) -> MaskError {
        MaskError::Encode(error)
    }
}

impl From<ClipError> for MaskError {
    fn from(error: ClipError) -> MaskError {
        MaskError::Clip(error)
    }
}

impl From<DivisionError> for MaskError {
    fn from(error: DivisionError) -> MaskError {
        MaskError::Division(error)
    }
}

impl From<TransformError> for MaskError {
    fn from(error: TransformError) -> MaskError {
        MaskError::Transform(error)
    }
}

impl From<StrokeError> for MaskError {
    fn from(error: StrokeError) -> MaskError {
        MaskError::Stroke(error)
    }
}

impl From<MaskGroupError> for MaskError {
    fn from(error: MaskGroupError) -> MaskError {
        MaskError::MaskGroup(error)
    }
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::Decode(error) => error.fmt(f),
            MaskError::Encode(error) => error.fmt(f),
            MaskError::Clip(error) => error.fmt(f),
            MaskError::Division(error) => error.fmt(f),
            MaskError::Transform(error) => error.fmt(f),
            MaskError::Stroke(error) => error.fmt(f),
            MaskError::MaskGroup(error) => error.fmt(f),
        }
    }
}

impl Error for MaskError {}
