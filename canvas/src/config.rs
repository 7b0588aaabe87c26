/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::size::*;

///
/// An inclusive range of zoom factors
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl ZoomRange {
    #[inline]
    pub fn new(min: f64, max: f64) -> ZoomRange {
        ZoomRange { min, max }
    }

    ///
    /// True if a zoom factor is within this range
    ///
    #[inline]
    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }
}

///
/// Settings for how a drawing surface can be panned and zoomed
///
/// Any field left out when deserializing takes its default value.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Zoom range relative to the base scale of the background image
    pub nominal_zoom: ZoomRange,

    /// The band that the lowest allowed zoom is forced into
    pub zoom_floor: ZoomRange,

    /// The band that the highest allowed zoom is forced into
    pub zoom_ceiling: ZoomRange,

    /// Zoom multiplier for a single step of the wheel towards the surface
    pub wheel_zoom_in: f64,

    /// Zoom multiplier for a single step of the wheel away from the surface
    pub wheel_zoom_out: f64,

    /// The size of the surface before one has been supplied
    pub surface_size: Size,
}

impl Default for TransformConfig {
    fn default() -> TransformConfig {
        TransformConfig {
            nominal_zoom: ZoomRange::new(0.4, 4.0),
            zoom_floor: ZoomRange::new(0.1, 1.0),
            zoom_ceiling: ZoomRange::new(1.0, 100.0),
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            surface_size: Size::new(500.0, 500.0),
        }
    }
}
