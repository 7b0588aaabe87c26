/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask_geometry::Position;

///
/// Identifies a pointer device (a surface with touch input might be tracking several pointers at once)
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointerId(pub u64);

///
/// The button on a mouse or other device
///
/// A device with only one means of input (eg, a pen pressed against the screen) reports it as the 'Left' button.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Button {
    Left,
    Middle,
    Right,
    Other(u64),
}

///
/// The action associated with a pointer event
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PointerAction {
    /// The pointer has entered the surface
    Enter,

    /// The pointer has left the surface
    Leave,

    /// Moving a pointer with no buttons pressed
    Move,

    /// A button has been pressed
    ButtonDown(Button),

    /// Moving the pointer with a button pressed
    Drag,

    /// A button has been released
    ButtonUp(Button),

    /// The gesture was cancelled (eg, due to palm rejection), invalidating any drag that was in progress
    Cancel,
}

///
/// Where a pointer is
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointerState {
    /// The location of the pointer on the device surface
    pub location_in_window: Position,

    /// The location in drawing coordinates, if whatever generated the event has already worked it out
    pub location_in_canvas: Option<Position>,
}

impl PointerState {
    ///
    /// Creates a pointer state for a point on the device surface
    ///
    pub fn new(location_in_window: Position) -> PointerState {
        PointerState {
            location_in_window,
            location_in_canvas: None,
        }
    }
}
