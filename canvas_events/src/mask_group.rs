/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use flo_mask_canvas::*;
use flo_mask_geometry::*;

use uuid::Uuid;

/// Placed at the start of saved mask data, so that a mask with no strokes is still a non-empty string
pub const MASK_DATA_PREFIX: &str = "M0,0Z";

///
/// Identifies a stroke in a mask group
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StrokeId(pub Uuid);

impl StrokeId {
    ///
    /// Creates a new unique stroke ID
    ///
    pub fn new() -> StrokeId {
        StrokeId(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> StrokeId {
        StrokeId::new()
    }
}

///
/// A completed erase stroke
///
#[derive(Clone, PartialEq, Debug)]
pub struct MaskStroke {
    id: StrokeId,
    path_data: String,

    /// The decoded path data, used for hit testing
    rings: Vec<Ring>,
}

impl MaskStroke {
    ///
    /// Creates a stroke from its path data
    ///
    pub fn new(path_data: impl Into<String>) -> Result<MaskStroke, DecodeError> {
        let path_data = path_data.into();
        let rings = decode_path_data(&path_data)?.into_iter().map(|ring| ring.closed()).collect();

        Ok(MaskStroke {
            id: StrokeId::new(),
            path_data,
            rings,
        })
    }

    #[inline]
    pub fn id(&self) -> StrokeId {
        self.id
    }

    #[inline]
    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    ///
    /// True if this stroke covers a point in drawing coordinates, using the non-zero winding rule
    ///
    pub fn contains(&self, point: &Position) -> bool {
        self.rings.iter().map(|ring| ring.winding_number(point)).sum::<i32>() != 0
    }

    ///
    /// This stroke's path data with every point converted from drawing to physical coordinates
    ///
    pub fn to_physical_path_data(&self, transform: &TransformState) -> Result<String, MaskGroupError> {
        let physical_rings = self
            .rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|point| transform.drawing_to_physical(*point))
                    .collect::<Result<Ring, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(encode_rings(&physical_rings)?)
    }
}

///
/// The strokes making up a mask, in the order they were drawn
///
/// One stroke can be selected (eg, to be deleted).
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MaskGroup {
    strokes: Vec<MaskStroke>,
    selected: Option<StrokeId>,
}

impl MaskGroup {
    pub fn new() -> MaskGroup {
        MaskGroup {
            strokes: vec![],
            selected: None,
        }
    }

    ///
    /// Loads a mask group from saved mask data
    ///
    /// Everything after the prefix becomes a single stroke. Mask data with nothing after the prefix produces an
    /// empty group.
    ///
    pub fn from_mask_data(mask_data: &str) -> Result<MaskGroup, MaskGroupError> {
        let mut group = MaskGroup::new();
        let strokes = mask_data.trim();
        let strokes = strokes.strip_prefix(MASK_DATA_PREFIX).unwrap_or(strokes).trim();

        if !strokes.is_empty() {
            group.push(MaskStroke::new(strokes)?);
        }

        Ok(group)
    }

    ///
    /// The mask data to save for this group: the prefix followed by the path data for every stroke
    ///
    pub fn to_mask_data(&self) -> String {
        let mut mask_data = String::from(MASK_DATA_PREFIX);

        for stroke in self.strokes.iter() {
            mask_data.push_str(stroke.path_data());
        }

        mask_data
    }

    ///
    /// The path data for every stroke, converted to physical coordinates and joined together
    ///
    pub fn to_physical_path_data(&self, transform: &TransformState) -> Result<String, MaskGroupError> {
        let strokes = self
            .strokes
            .iter()
            .map(|stroke| stroke.to_physical_path_data(transform))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!("Converted {} strokes to physical coordinates", strokes.len());

        Ok(strokes.join(" "))
    }

    ///
    /// Adds a stroke on top of the others, returning its ID
    ///
    pub fn push(&mut self, stroke: MaskStroke) -> StrokeId {
        let id = stroke.id();
        self.strokes.push(stroke);

        id
    }

    #[inline]
    pub fn strokes(&self) -> &[MaskStroke] {
        &self.strokes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn get(&self, id: StrokeId) -> Option<&MaskStroke> {
        self.strokes.iter().find(|stroke| stroke.id() == id)
    }

    ///
    /// The topmost stroke covering a point in drawing coordinates
    ///
    pub fn stroke_at(&self, point: &Position) -> Option<StrokeId> {
        self.strokes
            .iter()
            .rev()
            .find(|stroke| stroke.contains(point))
            .map(|stroke| stroke.id())
    }

    ///
    /// Selects the topmost stroke under a point, or clears the selection if there isn't one
    ///
    pub fn select_at(&mut self, point: &Position) -> Option<StrokeId> {
        self.selected = self.stroke_at(point);
        self.selected
    }

    #[inline]
    pub fn selected(&self) -> Option<StrokeId> {
        self.selected
    }

    ///
    /// Removes a stroke from this group
    ///
    pub fn remove(&mut self, id: StrokeId) -> Option<MaskStroke> {
        let index = self.strokes.iter().position(|stroke| stroke.id() == id)?;

        if self.selected == Some(id) {
            self.selected = None;
        }

        Some(self.strokes.remove(index))
    }

    ///
    /// Removes the selected stroke, if there is one
    ///
    pub fn remove_selected(&mut self) -> Option<MaskStroke> {
        let selected = self.selected?;
        self.remove(selected)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.selected = None;
    }
}
