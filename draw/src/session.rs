/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::config::*;
use super::error::*;

use flo_mask_canvas::vector::*;
use flo_mask_canvas::*;
use flo_mask_events::*;

///
/// What dragging the pointer over the surface does
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tool {
    /// Dragging moves the surface, and clicking selects a stroke
    Pan,

    /// Dragging erases part of the background
    Erase,
}

///
/// The state of a single mask editing surface
///
/// A session owns the pan and zoom of the surface, the erase stroke that's being drawn and the strokes that have
/// been completed. Sessions are independent of each other: create one for every surface being edited.
///
#[derive(Clone, PartialEq, Debug)]
pub struct DrawingSession {
    config: SessionConfig,
    transform: TransformState,
    stroke: EraseStroke,
    mask: MaskGroup,
    tool: Tool,

    /// Where the pointer was on the device surface when it was last seen (None if it's not over the surface)
    cursor: Option<Position>,

    /// While panning, the device position of the previous drag sample
    pan_anchor: Option<Position>,
}

impl DrawingSession {
    ///
    /// Creates a new session with no background and an empty mask
    ///
    pub fn new(config: SessionConfig) -> Result<DrawingSession, MaskError> {
        Ok(DrawingSession {
            config,
            transform: TransformState::new(config.transform),
            stroke: EraseStroke::new(config.erase.brush_size)?,
            mask: MaskGroup::new(),
            tool: Tool::Pan,
            cursor: None,
            pan_anchor: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut TransformState {
        &mut self.transform
    }

    #[inline]
    pub fn stroke(&self) -> &EraseStroke {
        &self.stroke
    }

    #[inline]
    pub fn mask(&self) -> &MaskGroup {
        &self.mask
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    ///
    /// Chooses what the pointer does (any erase stroke that's in progress is abandoned)
    ///
    pub fn set_tool(&mut self, tool: Tool) {
        if self.stroke.is_active() {
            log::debug!("Abandoning erase stroke for tool change");
            self.stroke.cancel();
        }

        self.tool = tool;
        self.pan_anchor = None;
    }

    pub fn set_surface_size(&mut self, surface_size: Size) {
        self.transform.set_surface_size(surface_size);
    }

    ///
    /// Fits a newly loaded background image to the surface
    ///
    pub fn load_background(&mut self, image_size: Size) -> Result<(), MaskError> {
        self.transform.fit_background(image_size)?;
        Ok(())
    }

    ///
    /// Replaces the mask with previously saved mask data
    ///
    pub fn load_mask(&mut self, mask_data: &str) -> Result<(), MaskError> {
        self.stroke.cancel();
        self.mask = MaskGroup::from_mask_data(mask_data)?;

        Ok(())
    }

    ///
    /// The mask in the format it is saved in
    ///
    pub fn mask_data(&self) -> String {
        self.mask.to_mask_data()
    }

    ///
    /// The mask strokes in the coordinates of the background image
    ///
    pub fn physical_mask_data(&self) -> Result<String, MaskError> {
        Ok(self.mask.to_physical_path_data(&self.transform)?)
    }

    #[inline]
    pub fn brush_size(&self) -> f64 {
        self.stroke.brush_size()
    }

    pub fn set_brush_size(&mut self, brush_size: f64) -> Result<(), MaskError> {
        self.stroke.set_brush_size(brush_size)?;
        Ok(())
    }

    ///
    /// The size of the eraser cursor on the device surface
    ///
    pub fn eraser_screen_size(&self) -> f64 {
        self.stroke.brush_size() * self.transform.zoom()
    }

    ///
    /// The top-left corner of the eraser cursor in drawing coordinates, if the erase tool is in use and the pointer is over the surface
    ///
    pub fn eraser_cursor(&self) -> Result<Option<Position>, MaskError> {
        match (self.tool, self.cursor) {
            (Tool::Erase, Some(cursor)) => Ok(Some(self.stroke.cursor_origin(&self.transform, cursor)?)),
            _ => Ok(None),
        }
    }

    ///
    /// Removes the selected stroke from the mask
    ///
    pub fn delete_selected(&mut self) -> Option<StrokeId> {
        self.mask.remove_selected().map(|stroke| stroke.id())
    }

    ///
    /// The drawing position for a pointer
    ///
    fn drawing_position(&self, state: &PointerState) -> Result<Position, MaskError> {
        match state.location_in_canvas {
            Some(location) => Ok(location),
            None => Ok(self.transform.device_to_drawing(state.location_in_window)?),
        }
    }

    ///
    /// Updates the session for an event from the surface
    ///
    pub fn handle_event(&mut self, event: DrawEvent) -> Result<(), MaskError> {
        match event {
            DrawEvent::Resize(size) => self.set_surface_size(size),

            DrawEvent::Wheel(state, delta_y) => {
                if let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) {
                    self.transform.zoom_at(state.location_in_window, direction);
                }
            }

            DrawEvent::Pointer(action, _, state) => self.handle_pointer(action, &state)?,
        }

        Ok(())
    }

    ///
    /// Finishes the active stroke and adds it to the mask
    ///
    fn commit_stroke(&mut self, release_point: Option<Position>) -> Result<StrokeId, MaskError> {
        let path_data = self.stroke.finish(release_point)?;
        let id = self.mask.push(MaskStroke::new(path_data)?);

        log::debug!("Added stroke {:?} to the mask ({} strokes)", id, self.mask.len());

        Ok(id)
    }

    fn handle_pointer(&mut self, action: PointerAction, state: &PointerState) -> Result<(), MaskError> {
        self.cursor = match action {
            PointerAction::Leave => None,
            _ => Some(state.location_in_window),
        };

        match (self.tool, action) {
            (_, PointerAction::Enter) => {}

            (Tool::Pan, PointerAction::ButtonDown(Button::Left)) => {
                let position = self.drawing_position(state)?;

                self.mask.select_at(&position);
                self.pan_anchor = Some(state.location_in_window);
            }

            (Tool::Pan, PointerAction::Drag) | (Tool::Pan, PointerAction::Move) => {
                if let Some(anchor) = self.pan_anchor {
                    self.transform.pan_by(subtract(state.location_in_window, anchor));
                    self.pan_anchor = Some(state.location_in_window);
                }
            }

            (Tool::Pan, PointerAction::ButtonUp(_)) | (Tool::Pan, PointerAction::Leave) | (Tool::Pan, PointerAction::Cancel) => {
                self.pan_anchor = None;
            }

            (Tool::Erase, PointerAction::ButtonDown(Button::Left)) => {
                let position = self.drawing_position(state)?;

                // A press with no release since the last one ends the previous stroke at its last sample
                if self.stroke.is_active() {
                    log::debug!("Press during an erase stroke: committing the previous stroke");
                    self.commit_stroke(None)?;
                }

                self.stroke.begin(position)?;
            }

            (Tool::Erase, PointerAction::Drag) | (Tool::Erase, PointerAction::Move) => {
                if self.stroke.is_active() {
                    let position = self.drawing_position(state)?;
                    self.stroke.extend(position)?;
                }
            }

            (Tool::Erase, PointerAction::ButtonUp(_)) | (Tool::Erase, PointerAction::Leave) => {
                if self.stroke.is_active() {
                    let position = self.drawing_position(state)?;
                    self.commit_stroke(Some(position))?;
                }
            }

            (Tool::Erase, PointerAction::Cancel) => {
                self.stroke.cancel();
            }

            (_, PointerAction::ButtonDown(_)) => {}
        }

        Ok(())
    }
}
