/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use flo_mask_geometry::clip::*;
use flo_mask_geometry::*;

///
/// Decodes two paths and computes every boolean operation between them
///
/// The difference in the result is `subject_path - clip_path`.
///
pub fn clip_path_data(subject_path: &str, clip_path: &str) -> Result<ClipResult, MaskError> {
    Ok(ClipResult::from_path_data(subject_path, clip_path)?)
}

///
/// Performs a single boolean operation between two paths, returning the result as path data
///
pub fn clip_path_data_with(subject_path: &str, clip_path: &str, operation: ClipOperation) -> Result<String, MaskError> {
    let subject = Geometry::from_path_data(subject_path)?;
    let clip_geometry = Geometry::from_path_data(clip_path)?;
    let result = clip(&subject, &clip_geometry, operation)?;

    Ok(result.to_path_data()?)
}
