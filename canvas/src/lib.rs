/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask_canvas
//!
//! Coordinates on a mask editing surface come in three flavours:
//!
//!  * *device* coordinates are pixels on the display surface, as reported by pointer events
//!  * *drawing* coordinates are device coordinates with the pan and zoom of the surface removed
//!  * *physical* coordinates are pixels in the background image, which is scaled to fit the surface when it's loaded
//!
//! `TransformState` tracks the pan, zoom and base scale for a single surface and converts between all three. The
//! `vector` module has the element-wise arithmetic the conversions are built from.
//!
//! ```
//! # use flo_mask_canvas::*;
//! let mut transform = TransformState::new(TransformConfig::default());
//! transform.set_surface_size(Size::new(500.0, 500.0));
//! transform.fit_background(Size::new(1000.0, 500.0)).unwrap();
//!
//! let physical = transform.device_to_physical(Position::new(250.0, 250.0)).unwrap();
//! assert!(physical == Position::new(500.0, 250.0));
//! ```
//!

#[macro_use]
extern crate serde_derive;

mod config;
mod error;
mod size;
mod transform_state;
pub mod vector;

pub use self::config::*;
pub use self::error::*;
pub use self::size::*;
pub use self::transform_state::*;

pub use flo_mask_geometry::Position;
