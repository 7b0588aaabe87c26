/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask_geometry
//!
//! The polygon side of `flo_mask`: a compact path-data codec, a small polygon model and boolean clipping
//! between polygons.
//!
//! ```
//! # use flo_mask_geometry::*;
//! # use flo_mask_geometry::clip::*;
//! #
//! let square      = Geometry::from_path_data("M0,0 L100,0 L100,100 L0,100 Z").unwrap();
//! let offset      = Geometry::from_path_data("M50,50 L150,50 L150,150 L50,150 Z").unwrap();
//!
//! let result      = ClipResult::compute(&square, &offset).unwrap();
//! let union_path  = result.to_path_data(ClipOperation::Union).unwrap();
//! ```
//!
//! Path data is the interchange format: `M x,y` starts a ring, `L x,y` extends it and `Z` closes it. Decoding
//! produces `Ring`s, which are gathered into `Polygon`s (an outer ring followed by holes) and `Geometry` values
//! (either a single polygon or several independent ones).
//!
//! The `clip` module computes union, intersection, difference and exclusive-or between two geometries. The
//! sweep itself is delegated to the path arithmetic in `flo_curves`; this crate takes care of getting rings in
//! and out of it and of rebuilding polygons from the perimeters it returns.
//!

mod consts;
mod geo;
mod path_data;

pub mod clip;

pub use self::consts::*;
pub use self::geo::*;
pub use self::path_data::*;
