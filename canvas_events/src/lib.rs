/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask_events
//!
//! Input for a mask editing surface. `DrawEvent` describes what the pointer did, `EraseStroke` turns a series of
//! pointer samples into path data for an erased region and `MaskGroup` collects the finished strokes into the
//! mask that is eventually saved.
//!
//! Stroke path data is meant to be filled using the non-zero winding rule: the rings making up a stroke overlap,
//! and are wound so that the overlapping parts add together rather than cancelling out.
//!

#[macro_use]
extern crate serde_derive;

mod config;
mod draw_event;
mod erase_stroke;
mod error;
mod mask_group;
mod pointer_event;

pub use self::config::*;
pub use self::draw_event::*;
pub use self::erase_stroke::*;
pub use self::error::*;
pub use self::mask_group::*;
pub use self::pointer_event::*;
