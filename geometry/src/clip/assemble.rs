/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

use std::cmp::Ordering;

///
/// Orients a ring so that the sign of its area matches `counter_clockwise`
///
fn orient(ring: Ring, counter_clockwise: bool) -> Ring {
    if (ring.signed_area() > 0.0) == counter_clockwise {
        ring
    } else {
        ring.reversed()
    }
}

///
/// Rebuilds polygons from a flat list of perimeters
///
/// A ring that lies within an even number of other rings is the outer boundary of a polygon; a ring that lies
/// within an odd number is a hole in the smallest ring that contains it. Outer rings are made to wind
/// counter-clockwise and holes clockwise. A single polygon is returned as `Geometry::Polygon`, anything else
/// as `Geometry::MultiPolygon`.
///
pub(crate) fn assemble_geometry(rings: Vec<Ring>) -> Geometry {
    // Discard anything too small to cover an area
    let mut rings = rings
        .into_iter()
        .map(|ring| ring.closed())
        .filter(|ring| ring.area() > SMALL_AREA)
        .collect::<Vec<_>>();

    // Largest rings first, so outer rings come before anything they contain
    rings.sort_by(|a, b| b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal));

    let nesting = ring_nesting(&rings);

    // Gather holes into the polygon for their parent
    let mut outer_indexes = vec![];
    let mut holes: Vec<Vec<usize>> = vec![vec![]; rings.len()];

    for ring_idx in 0..rings.len() {
        if nesting[ring_idx].depth % 2 == 0 {
            outer_indexes.push(ring_idx);
        } else if let Some(parent_idx) = nesting[ring_idx].parent {
            holes[parent_idx].push(ring_idx);
        }
    }

    let mut polygons = outer_indexes
        .into_iter()
        .map(|outer_idx| {
            let outer = orient(rings[outer_idx].clone(), true);
            let hole_rings = holes[outer_idx]
                .iter()
                .map(|hole_idx| orient(rings[*hole_idx].clone(), false));

            let polygon = Polygon::from_rings(Some(outer).into_iter().chain(hole_rings));
            debug_assert!(polygon.rings().iter().all(|ring| ring.is_closed()));

            polygon
        })
        .collect::<Vec<_>>();

    match polygons.len() {
        0 => Geometry::empty(),
        1 => Geometry::Polygon(polygons.remove(0)),
        _ => Geometry::MultiPolygon(MultiPolygon::new(polygons)),
    }
}
