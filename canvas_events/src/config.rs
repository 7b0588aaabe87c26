/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Settings for erase strokes
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EraseConfig {
    /// Length of the sides of the square eraser, in drawing coordinates
    pub brush_size: f64,
}

impl Default for EraseConfig {
    fn default() -> EraseConfig {
        EraseConfig { brush_size: 10.0 }
    }
}
