/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

///
/// Draws an erase stroke in a circle around the middle of the surface and prints the resulting mask
///
pub fn main() -> Result<(), MaskError> {
    let mut session = DrawingSession::new(SessionConfig::default())?;

    session.handle_event(DrawEvent::Resize(Size::new(800.0, 600.0)))?;
    session.load_background(Size::new(1920.0, 1080.0))?;
    session.set_tool(Tool::Erase);

    let center = Position::new(400.0, 300.0);
    let radius = 100.0;
    let point_on_circle = |step: usize| {
        let angle = (step as f64) / 32.0 * std::f64::consts::PI * 2.0;
        center + Position::new(angle.cos(), angle.sin()) * radius
    };

    let start = point_on_circle(0);
    session.handle_event(DrawEvent::pointer(PointerAction::ButtonDown(Button::Left), start.x, start.y))?;

    for step in 1..32 {
        let point = point_on_circle(step);
        session.handle_event(DrawEvent::pointer(PointerAction::Drag, point.x, point.y))?;
    }

    let end = point_on_circle(32);
    session.handle_event(DrawEvent::pointer(PointerAction::ButtonUp(Button::Left), end.x, end.y))?;

    println!("Saved mask:\n{}\n", session.mask_data());
    println!("In image coordinates:\n{}", session.physical_mask_data()?);

    Ok(())
}
