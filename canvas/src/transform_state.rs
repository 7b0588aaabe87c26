/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::config::*;
use super::error::*;
use super::size::*;
use super::vector::*;

use flo_mask_geometry::Position;

///
/// Direction of a zoom gesture
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    ///
    /// Zoom direction for a wheel event: scrolling up (a negative delta) zooms in
    ///
    pub fn from_wheel_delta(delta_y: f64) -> Option<ZoomDirection> {
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

///
/// The pan, zoom and background scale of a single drawing surface
///
/// Device coordinates become drawing coordinates by removing the pan offset and dividing by the zoom. Drawing
/// coordinates become physical (background image) coordinates by dividing by the base scale, which is set when
/// the background is fitted to the surface and doesn't change while zooming.
///
#[derive(Clone, PartialEq, Debug)]
pub struct TransformState {
    config: TransformConfig,
    surface_size: Size,
    pan_offset: Position,
    zoom: f64,
    base_scale: f64,
    zoom_limits: ZoomRange,
}

impl Default for TransformState {
    fn default() -> TransformState {
        TransformState::new(TransformConfig::default())
    }
}

impl TransformState {
    ///
    /// Creates an untransformed surface: no pan, a zoom of 1 and a base scale of 1
    ///
    pub fn new(config: TransformConfig) -> TransformState {
        TransformState {
            config,
            surface_size: config.surface_size,
            pan_offset: Position::ORIGIN,
            zoom: 1.0,
            base_scale: 1.0,
            zoom_limits: TransformState::zoom_limits_for_scale(&config, 1.0),
        }
    }

    ///
    /// The zoom range for a background shown at a particular base scale
    ///
    /// The nominal range is scaled by the base scale, then the lower end is forced into the configured floor band and
    /// the upper end into the ceiling band.
    ///
    fn zoom_limits_for_scale(config: &TransformConfig, base_scale: f64) -> ZoomRange {
        let nominal = Position::new(config.nominal_zoom.min, config.nominal_zoom.max);
        let limits = clamp_point(
            multiply(nominal, base_scale),
            Position::new(config.zoom_floor.min, config.zoom_ceiling.min),
            Position::new(config.zoom_floor.max, config.zoom_ceiling.max),
        );

        ZoomRange::new(limits.x, limits.y)
    }

    #[inline]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    #[inline]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    ///
    /// Changes the size of the surface (takes effect the next time a background is fitted)
    ///
    pub fn set_surface_size(&mut self, surface_size: Size) {
        self.surface_size = surface_size;
    }

    #[inline]
    pub fn pan_offset(&self) -> Position {
        self.pan_offset
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    ///
    /// Scale factor from physical image pixels to drawing coordinates
    ///
    #[inline]
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    #[inline]
    pub fn zoom_limits(&self) -> ZoomRange {
        self.zoom_limits
    }

    ///
    /// Fits a background image to the surface
    ///
    /// The image is scaled to fit entirely within the surface and centered. The zoom is reset to 1 and the zoom limits
    /// are recalculated for the new base scale.
    ///
    pub fn fit_background(&mut self, image_size: Size) -> Result<(), TransformError> {
        if image_size.is_empty() {
            return Err(TransformError::EmptyImage(image_size));
        }
        if self.surface_size.is_empty() {
            return Err(TransformError::EmptySurface(self.surface_size));
        }

        let surface = self.surface_size.as_position();
        let image = image_size.as_position();

        let fit = divide(surface, image)?;
        let base_scale = fit.x.min(fit.y);

        self.base_scale = base_scale;
        self.pan_offset = multiply(subtract(surface, multiply(image, base_scale)), 0.5);
        self.zoom = 1.0;
        self.zoom_limits = TransformState::zoom_limits_for_scale(&self.config, base_scale);

        log::debug!(
            "Fitted {}x{} background: base scale {}, pan {}, zoom limits {}..{}",
            image_size.width,
            image_size.height,
            self.base_scale,
            self.pan_offset,
            self.zoom_limits.min,
            self.zoom_limits.max
        );

        Ok(())
    }

    ///
    /// Converts a point on the device surface to drawing coordinates
    ///
    pub fn device_to_drawing(&self, device: Position) -> Result<Position, DivisionError> {
        divide(subtract(device, self.pan_offset), self.zoom)
    }

    ///
    /// Converts a point in drawing coordinates to where it appears on the device surface
    ///
    pub fn drawing_to_device(&self, drawing: Position) -> Position {
        add(multiply(drawing, self.zoom), self.pan_offset)
    }

    pub fn drawing_to_physical(&self, drawing: Position) -> Result<Position, DivisionError> {
        divide(drawing, self.base_scale)
    }

    pub fn physical_to_drawing(&self, physical: Position) -> Position {
        multiply(physical, self.base_scale)
    }

    ///
    /// Converts a point on the device surface to a pixel position in the background image
    ///
    pub fn device_to_physical(&self, device: Position) -> Result<Position, DivisionError> {
        self.drawing_to_physical(self.device_to_drawing(device)?)
    }

    pub fn physical_to_device(&self, physical: Position) -> Position {
        self.drawing_to_device(self.physical_to_drawing(physical))
    }

    ///
    /// Zooms in or out by one wheel step, keeping the drawing point under the cursor in the same place
    ///
    /// Returns false and leaves the surface alone if the new zoom would be outside of the zoom limits, or if the
    /// cursor position is not finite.
    ///
    pub fn zoom_at(&mut self, cursor: Position, direction: ZoomDirection) -> bool {
        if !cursor.is_finite() {
            log::warn!("Not zooming about non-finite cursor position {:?}", cursor);
            return false;
        }

        let factor = match direction {
            ZoomDirection::In => self.config.wheel_zoom_in,
            ZoomDirection::Out => self.config.wheel_zoom_out,
        };
        let new_zoom = self.zoom * factor;

        if !self.zoom_limits.contains(new_zoom) {
            log::warn!(
                "Not zooming to {} (limits are {}..{})",
                new_zoom,
                self.zoom_limits.min,
                self.zoom_limits.max
            );
            return false;
        }

        self.pan_offset = subtract(cursor, multiply(subtract(cursor, self.pan_offset), factor));
        self.zoom = new_zoom;

        true
    }

    ///
    /// Moves the surface by a distance in device coordinates
    ///
    /// A non-finite distance is ignored, and false is returned.
    ///
    pub fn pan_by(&mut self, delta: Position) -> bool {
        let pan_offset = add(self.pan_offset, delta);
        self.set_pan_offset(pan_offset)
    }

    ///
    /// Sets the pan offset directly, returning false and leaving the offset alone if it's not finite
    ///
    pub fn set_pan_offset(&mut self, pan_offset: Position) -> bool {
        if !pan_offset.is_finite() {
            log::warn!("Ignoring non-finite pan offset {:?}", pan_offset);
            return false;
        }

        self.pan_offset = pan_offset;
        true
    }

    ///
    /// Scale factor that cancels out the zoom, for overlays that should stay the same size on screen
    ///
    pub fn unaffected_scale(&self) -> f64 {
        1.0 / self.zoom
    }
}
