/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

///
/// Demonstrates the boolean operations between two paths
///
pub fn main() {
    let square = "M0,0 L100,0 L100,100 L0,100 Z";
    let diamond = "M100,20 L180,100 L100,180 L20,100 Z";

    let result = match clip_path_data(square, diamond) {
        Ok(result) => result,
        Err(err) => {
            println!("Could not clip paths: {}", err);
            return;
        }
    };

    for operation in ClipOperation::ALL.iter() {
        let geometry = result.get(*operation);

        match geometry.to_path_data() {
            Ok(path) => println!(
                "{:?}: {} polygons, area {:.1}\n    {}",
                operation,
                geometry.polygon_count(),
                geometry.area(),
                path
            ),
            Err(err) => println!("{:?}: {}", operation, err),
        }
    }
}
