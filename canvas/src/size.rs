/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_geometry::Position;

///
/// The width and height of a surface or an image
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }

    ///
    /// True if this size does not cover any area (or is not a real size at all)
    ///
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    ///
    /// This size as a vector from the origin
    ///
    #[inline]
    pub fn as_position(&self) -> Position {
        Position::new(self.width, self.height)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Size {
        Size { width, height }
    }
}
