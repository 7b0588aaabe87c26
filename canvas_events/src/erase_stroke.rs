/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use flo_mask_canvas::vector::*;
use flo_mask_canvas::*;
use flo_mask_geometry::*;

use smallvec::*;

///
/// Path data for the first sample of a stroke: a square the size of the brush centered on the sample
///
/// The square is written twice, so the stroke starts with a winding number of -2 under the square. A later
/// segment overlapping it with the opposite winding direction still leaves that area filled.
///
fn first_sample_path_data(point: Position, brush_size: f64) -> Result<String, EncodeError> {
    let half_size = brush_size / 2.0;

    let square = Ring::new(vec![
        add(point, (-half_size, -half_size)),
        add(point, (-half_size, half_size)),
        add(point, (half_size, half_size)),
        add(point, (half_size, -half_size)),
    ]);

    encode_rings(&[square.clone(), square])
}

///
/// Path data for the band swept by the brush moving from `last` to `next`
///
/// This is a six-point ring: three corners of the brush at the old position followed by three at the new one. The
/// corners are picked according to the direction of travel, then put in an order that makes the ring wind the same
/// way whichever way the brush was moving.
///
fn segment_path_data(last: Position, next: Position, brush_size: f64) -> Result<String, EncodeError> {
    let half_size = brush_size / 2.0;
    let offset_x = if next.x > last.x { half_size } else { -half_size };
    let offset_y = if next.y > last.y { half_size } else { -half_size };

    let mut points: SmallVec<[Position; 6]> = smallvec![
        add(last, (offset_x, offset_y)),
        add(last, (-offset_x, offset_y)),
        add(next, (-offset_x, offset_y)),
        add(next, (offset_x, offset_y)),
        add(next, (offset_x, -offset_y)),
        add(last, (offset_x, -offset_y)),
    ];

    // Moving with both offsets the same sign produces the opposite winding, so reverse the ring around its first point
    if offset_x * offset_y > 0.0 {
        points.swap(1, 5);
        points.swap(2, 4);
    }

    encode_rings(&[points.into_iter().collect::<Ring>()])
}

///
/// Builds the path data for a single erase stroke from a series of pointer samples
///
/// A stroke starts with `begin()`, is extended with `extend()` for every sample while the pointer is down and is frozen
/// by `finish()`. Each sample adds one piece of path data; the newest piece comes first in `path_data()`. The pieces
/// overlap and are not merged: the stroke is meant to be filled with the non-zero winding rule.
///
/// Samples are in drawing coordinates, and must be supplied in the order they arrived in.
///
#[derive(Clone, PartialEq, Debug)]
pub struct EraseStroke {
    /// Side length of the square brush
    brush_size: f64,

    /// The most recent sample, which the next segment starts from
    last_point: Option<Position>,

    /// Path data for each sample, oldest first
    segments: Vec<String>,

    /// True between begin() and finish()
    active: bool,
}

impl EraseStroke {
    ///
    /// Creates an idle stroke with a particular brush size
    ///
    pub fn new(brush_size: f64) -> Result<EraseStroke, StrokeError> {
        Ok(EraseStroke {
            brush_size: EraseStroke::check_brush_size(brush_size)?,
            last_point: None,
            segments: vec![],
            active: false,
        })
    }

    fn check_brush_size(brush_size: f64) -> Result<f64, StrokeError> {
        if brush_size.is_finite() && brush_size > 0.0 {
            Ok(brush_size)
        } else {
            Err(StrokeError::InvalidBrushSize(brush_size))
        }
    }

    #[inline]
    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    ///
    /// Changes the brush size (a stroke that's in progress uses the new size for its later samples)
    ///
    pub fn set_brush_size(&mut self, brush_size: f64) -> Result<(), StrokeError> {
        self.brush_size = EraseStroke::check_brush_size(brush_size)?;
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn last_point(&self) -> Option<Position> {
        self.last_point
    }

    ///
    /// The path data generated for each sample so far, newest first
    ///
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().rev().map(|segment| segment.as_str())
    }

    ///
    /// Starts a new stroke at a point, discarding anything left over from the previous stroke
    ///
    pub fn begin(&mut self, point: Position) -> Result<(), StrokeError> {
        let square = first_sample_path_data(point, self.brush_size)?;

        log::debug!("Begin erase stroke at {} (brush size {})", point, self.brush_size);

        self.segments = vec![square];
        self.last_point = Some(point);
        self.active = true;

        Ok(())
    }

    ///
    /// Adds a sample to the stroke that's in progress
    ///
    pub fn extend(&mut self, point: Position) -> Result<(), StrokeError> {
        let last_point = match (self.active, self.last_point) {
            (true, Some(last_point)) => last_point,
            _ => {
                log::warn!("Erase sample at {} with no stroke in progress", point);
                return Err(StrokeError::NotActive);
            }
        };

        let segment = segment_path_data(last_point, point, self.brush_size)?;
        log::trace!("Erase segment {} -> {}", last_point, point);

        self.segments.push(segment);
        self.last_point = Some(point);

        Ok(())
    }

    ///
    /// Ends the stroke that's in progress, returning its path data
    ///
    /// If the pointer position at release is known, it's added as a final sample before the stroke is frozen.
    ///
    pub fn finish(&mut self, release_point: Option<Position>) -> Result<String, StrokeError> {
        if !self.active {
            return Err(StrokeError::NotActive);
        }

        if let Some(release_point) = release_point {
            self.extend(release_point)?;
        }

        self.active = false;
        log::debug!("Finished erase stroke with {} segments", self.segments.len());

        Ok(self.path_data())
    }

    ///
    /// Abandons the stroke that's in progress
    ///
    pub fn cancel(&mut self) {
        self.active = false;
        self.last_point = None;
        self.segments.clear();
    }

    ///
    /// The path data for the whole stroke (empty if no stroke has been started)
    ///
    pub fn path_data(&self) -> String {
        self.segments().collect::<Vec<_>>().join(" ")
    }

    ///
    /// Top-left corner of the square eraser cursor for a pointer on the device surface, in drawing coordinates
    ///
    pub fn cursor_origin(&self, transform: &TransformState, device_point: Position) -> Result<Position, StrokeError> {
        let drawing_point = transform.device_to_drawing(device_point)?;

        Ok(subtract(drawing_point, self.brush_size / 2.0))
    }
}
