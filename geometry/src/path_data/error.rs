/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Why a path command could not be decoded
///
#[derive(Clone, PartialEq, Debug)]
pub enum DecodeFailure {
    /// A coordinate was not a number, or was not finite
    InvalidCoordinate(String),

    /// The command did not supply both an x and a y coordinate
    MissingCoordinate,

    /// A line command appeared before any move command
    LineWithoutMove,
}

///
/// Error that occurs when a path data string cannot be decoded
///
#[derive(Clone, PartialEq, Debug)]
pub struct DecodeError {
    /// The text of the command that could not be decoded
    pub command: String,

    /// What was wrong with the command
    pub failure: DecodeFailure,
}

impl DecodeError {
    pub fn new(command: &str, failure: DecodeFailure) -> DecodeError {
        DecodeError {
            command: command.to_string(),
            failure,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            DecodeFailure::InvalidCoordinate(value) => {
                write!(f, "invalid coordinate '{}' in path command '{}'", value, self.command)
            }
            DecodeFailure::MissingCoordinate => {
                write!(f, "missing coordinate in path command '{}'", self.command)
            }
            DecodeFailure::LineWithoutMove => {
                write!(f, "path command '{}' has no starting point", self.command)
            }
        }
    }
}

impl Error for DecodeError {}

///
/// Error that occurs when rings cannot be encoded as path data
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum EncodeError {
    /// The ring at the specified index has no points
    EmptyRing { ring_index: usize },

    /// A point in a ring is not finite
    NonFiniteCoordinate { ring_index: usize, point_index: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::EmptyRing { ring_index } => write!(f, "ring {} has no points", ring_index),
            EncodeError::NonFiniteCoordinate {
                ring_index,
                point_index,
            } => write!(f, "point {} of ring {} is not finite", point_index, ring_index),
        }
    }
}

impl Error for EncodeError {}
