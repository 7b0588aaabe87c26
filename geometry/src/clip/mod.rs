/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Boolean operations between geometries
//!
//! ```
//! # use flo_mask_geometry::*;
//! # use flo_mask_geometry::clip::*;
//! #
//! let square      = Geometry::from_path_data("M0,0 L100,0 L100,100 L0,100 Z").unwrap();
//! let offset      = Geometry::from_path_data("M50,50 L150,50 L150,150 L50,150 Z").unwrap();
//!
//! let overlap     = clip(&square, &offset, ClipOperation::Intersection).unwrap();
//! let all_results = ClipResult::compute(&square, &offset).unwrap();
//! ```
//!
//! `ClipResult::compute()` works out all four operations for a pair of geometries at once. Nothing is cached
//! here: if either input changes, compute a new result.
//!
//! `ClipOperation::Difference` always removes the second geometry (the 'clip') from the first (the 'subject').
//! Swap the arguments to get the reverse difference.
//!
//! The rings passed in must be closed. The actual set operations are performed by a `BooleanClipper`: the
//! default is `CurveClipper`, which uses the path arithmetic from `flo_curves`. Its output is a flat list of
//! perimeters, which is rebuilt into polygons with outer rings winding counter-clockwise and holes winding
//! clockwise.
//!

mod assemble;
mod clipper;
mod curve_clipper;
mod error;
mod operation;
mod result;

pub use self::clipper::*;
pub use self::curve_clipper::*;
pub use self::error::*;
pub use self::operation::*;
pub use self::result::*;
