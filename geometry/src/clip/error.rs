/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::path_data::*;

use std::error::Error;
use std::fmt;

///
/// Which of the two geometries passed to a clip operation an error refers to
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClipInput {
    Subject,
    Clip,
}

///
/// Errors that can occur while clipping two geometries
///
#[derive(Clone, PartialEq, Debug)]
pub enum ClipError {
    /// A ring did not end at its starting point
    OpenRing { input: ClipInput, ring_index: usize },

    /// A ring had no points
    EmptyRing { input: ClipInput, ring_index: usize },

    /// A ring contained a NaN or infinite coordinate
    NonFiniteInput { input: ClipInput, ring_index: usize },

    /// The clipping algorithm generated a NaN or infinite coordinate
    NonFiniteResult,

    /// The clipping algorithm rejected the input
    Primitive(String),

    /// Path data supplied for one of the geometries could not be decoded
    InvalidPath { input: ClipInput, error: DecodeError },
}

impl fmt::Display for ClipInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipInput::Subject => write!(f, "subject"),
            ClipInput::Clip => write!(f, "clip"),
        }
    }
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::OpenRing { input, ring_index } => {
                write!(f, "ring {} of the {} geometry is not closed", ring_index, input)
            }
            ClipError::EmptyRing { input, ring_index } => {
                write!(f, "ring {} of the {} geometry has no points", ring_index, input)
            }
            ClipError::NonFiniteInput { input, ring_index } => {
                write!(f, "ring {} of the {} geometry has a non-finite coordinate", ring_index, input)
            }
            ClipError::NonFiniteResult => write!(f, "clipping produced a non-finite coordinate"),
            ClipError::Primitive(reason) => write!(f, "clipping failed: {}", reason),
            ClipError::InvalidPath { input, error } => {
                write!(f, "could not read the {} path: {}", input, error)
            }
        }
    }
}

impl Error for ClipError {}
