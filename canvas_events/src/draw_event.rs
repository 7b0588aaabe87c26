/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::pointer_event::*;

use flo_mask_canvas::Size;
use flo_mask_geometry::Position;

///
/// Events that can be sent to a mask editing surface
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DrawEvent {
    /// A pointer has changed state
    Pointer(PointerAction, PointerId, PointerState),

    /// The wheel was scrolled with the pointer at a location (negative deltas scroll up)
    Wheel(PointerState, f64),

    /// The surface has a new size
    Resize(Size),
}

impl DrawEvent {
    ///
    /// Convenience constructor for a pointer event at a point on the device surface
    ///
    pub fn pointer(action: PointerAction, x: f64, y: f64) -> DrawEvent {
        DrawEvent::Pointer(action, PointerId(0), PointerState::new(Position::new(x, y)))
    }
}
