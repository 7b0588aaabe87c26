/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! A `Position` is a point, a `Ring` is a closed loop of positions, a `Polygon` is an outer ring followed by
//! any number of holes and a `MultiPolygon` is a list of independent polygons. `Geometry` is the tagged choice
//! between the last two, and is what the clipping routines accept and return.
//!

mod geometry;
mod polygon;
mod position;
mod ring;

pub use self::geometry::*;
pub use self::polygon::*;
pub use self::position::*;
pub use self::ring::*;
