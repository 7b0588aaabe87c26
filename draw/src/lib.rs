/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! `flo_mask` is the geometry kernel for an editor that paints erase masks over a background image
//!
//! It's made up of a set of companion crates, which are re-exported here:
//!
//! * `flo_mask_geometry` reads and writes path data, models polygons and performs boolean operations between them
//! * `flo_mask_canvas` converts between the coordinate spaces of a zoomable surface
//! * `flo_mask_events` describes pointer input and turns it into erase strokes and mask groups
//! * `flo_mask` is this crate, and it ties the others together into a `DrawingSession`
//!
//! # Getting started
//!
//! Boolean operations between two paths are available via `clip_path_data()`:
//!
//! ```
//! # use flo_mask::*;
//! let result  = clip_path_data("M0,0 L100,0 L100,100 L0,100 Z", "M50,50 L150,50 L150,150 L50,150 Z").unwrap();
//! let overlap = result.to_path_data(ClipOperation::Intersection).unwrap();
//! ```
//!
//! For interactive editing, create a `DrawingSession` for each surface, call `load_background()` with the size of the
//! image being masked and send it `DrawEvent`s as they arrive. The session keeps the pan and zoom of the surface, the
//! erase stroke that's in progress and the strokes that have been completed. `mask_data()` returns the mask in the
//! format it is saved in.
//!
//! ```
//! # use flo_mask::*;
//! let mut session = DrawingSession::new(SessionConfig::default()).unwrap();
//! session.load_background(Size::new(1000.0, 500.0)).unwrap();
//! session.set_tool(Tool::Erase);
//!
//! session.handle_event(DrawEvent::pointer(PointerAction::ButtonDown(Button::Left), 100.0, 200.0)).unwrap();
//! session.handle_event(DrawEvent::pointer(PointerAction::ButtonUp(Button::Left), 110.0, 200.0)).unwrap();
//!
//! assert!(session.mask().len() == 1);
//! ```
//!
//! Sessions never share state, so any number can be used at once.
//!

#[macro_use]
extern crate serde_derive;

pub use flo_mask_canvas as canvas;
pub use flo_mask_events as events;
pub use flo_mask_geometry as geometry;

pub use flo_mask_canvas::*;
pub use flo_mask_events::*;
pub use flo_mask_geometry::clip::*;
pub use flo_mask_geometry::*;

pub use self::clip_paths::*;
pub use self::config::*;
pub use self::error::*;
pub use self::session::*;

mod clip_paths;
mod config;
mod error;
mod session;
