/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer than this to an edge are considered to be on it)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Accuracy passed to the path arithmetic when clipping (points closer than this may be merged)
pub const CLIP_ACCURACY: f64 = 0.01;

/// Rings returned from a clip operation with less area than this are discarded as slivers
pub const SMALL_AREA: f64 = 0.000001;
