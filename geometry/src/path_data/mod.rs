/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Path data
//!
//! Converts between path data strings and rings. Only straight-line path data is understood: `M x,y` starts
//! a ring, `L x,y` adds a point to it and `Z` closes it. Lower-case commands mean the same thing as their
//! upper-case versions. Other command letters are skipped so that data written by newer tools can still be read.
//!

mod decode;
mod encode;
mod error;

pub use self::decode::*;
pub use self::encode::*;
pub use self::error::*;
