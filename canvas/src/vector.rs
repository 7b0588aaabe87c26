/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Element-wise arithmetic on positions
//!
//! The right-hand side of each operation can be either another position or a single number, which is applied to
//! both components:
//!
//! ```
//! # use flo_mask_canvas::*;
//! # use flo_mask_canvas::vector::*;
//! assert!(multiply(Position::new(2.0, 3.0), 2.0) == Position::new(4.0, 6.0));
//! assert!(multiply(Position::new(2.0, 3.0), Position::new(2.0, 10.0)) == Position::new(4.0, 30.0));
//! ```
//!

use super::error::*;

use flo_mask_geometry::Position;

///
/// The right-hand side of a vector operation
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Operand {
    /// The same value for both components
    Scalar(f64),

    /// Separate values for the x and y components
    Vector(Position),
}

impl Operand {
    ///
    /// The value to use for each component
    ///
    #[inline]
    pub fn as_position(&self) -> Position {
        match self {
            Operand::Scalar(value) => Position::new(*value, *value),
            Operand::Vector(position) => *position,
        }
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Operand {
        Operand::Scalar(value)
    }
}

impl From<Position> for Operand {
    #[inline]
    fn from(value: Position) -> Operand {
        Operand::Vector(value)
    }
}

impl From<(f64, f64)> for Operand {
    #[inline]
    fn from((x, y): (f64, f64)) -> Operand {
        Operand::Vector(Position::new(x, y))
    }
}

#[inline]
pub fn add(a: Position, b: impl Into<Operand>) -> Position {
    let b = b.into().as_position();
    Position::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn subtract(a: Position, b: impl Into<Operand>) -> Position {
    let b = b.into().as_position();
    Position::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn multiply(a: Position, b: impl Into<Operand>) -> Position {
    let b = b.into().as_position();
    Position::new(a.x * b.x, a.y * b.y)
}

///
/// Divides each component of `a` by the corresponding component of `b`
///
/// This fails rather than producing an infinite result if either component of the divisor is zero.
///
pub fn divide(a: Position, b: impl Into<Operand>) -> Result<Position, DivisionError> {
    let b = b.into().as_position();

    if b.x == 0.0 || b.y == 0.0 {
        Err(DivisionError {
            dividend: a,
            divisor: b,
        })
    } else {
        Ok(Position::new(a.x / b.x, a.y / b.y))
    }
}

///
/// Clamps a number to a range (the bounds can be supplied in either order)
///
#[inline]
pub fn clamp_number(value: f64, min: f64, max: f64) -> f64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    value.max(min).min(max)
}

///
/// Clamps each component of a point to the box defined by two corners
///
/// The corners don't need to be the minimum and maximum: each component is put in order before clamping.
///
pub fn clamp_point(point: Position, min: Position, max: Position) -> Position {
    Position::new(clamp_number(point.x, min.x, max.x), clamp_number(point.y, min.y, max.y))
}

///
/// Clamps both components of a point to the same range
///
pub fn clamp_point_scalar(point: Position, min: f64, max: f64) -> Position {
    Position::new(clamp_number(point.x, min, max), clamp_number(point.y, min, max))
}

#[inline]
pub fn length_squared(a: Position) -> f64 {
    a.x * a.x + a.y * a.y
}

///
/// The distance from the origin to a point
///
#[inline]
pub fn length(a: Position) -> f64 {
    length_squared(a).sqrt()
}
