/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

///
/// A point in a 2D coordinate space
///
/// Positions used by the rest of the library are expected to be finite: the path decoder rejects anything else,
/// and the clipper refuses to work with non-finite input.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The origin (0, 0)
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    ///
    /// Creates a new position
    ///
    #[inline]
    pub const fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }

    ///
    /// True if neither component is NaN or infinite
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    ///
    /// The distance between this position and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Position) -> f64 {
        let dx = self.x - target.x;
        let dy = self.y - target.y;

        (dx * dx + dy * dy).sqrt()
    }

    ///
    /// True if this position is within `tolerance` of another
    ///
    #[inline]
    pub fn is_near(&self, target: &Position, tolerance: f64) -> bool {
        self.distance_to(target) <= tolerance
    }

    ///
    /// Dot product of two positions treated as vectors
    ///
    #[inline]
    pub fn dot(&self, target: &Position) -> f64 {
        self.x * target.x + self.y * target.y
    }
}

impl From<(f64, f64)> for Position {
    #[inline]
    fn from((x, y): (f64, f64)) -> Position {
        Position { x, y }
    }
}

impl From<Position> for (f64, f64) {
    #[inline]
    fn from(pos: Position) -> (f64, f64) {
        (pos.x, pos.y)
    }
}

impl Add<Position> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    #[inline]
    fn mul(self, rhs: f64) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    #[inline]
    fn neg(self) -> Position {
        Position::new(-self.x, -self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
