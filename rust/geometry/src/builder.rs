// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid builder adapter
//!
//! Turns computed lace quads into extruded solids through the kernel. Quads
//! are independent of one another, so construction fans out across a rayon
//! pool; output order matches input order.

use crate::error::Result;
use crate::kernel::SolidKernel;
use crate::layout::LaceQuad;
use crate::mesh::Mesh;
use nalgebra::Vector3;
use rayon::prelude::*;

/// Extrude every quad by `thickness` along +Z.
///
/// Degenerate quads (collapsed or self-intersecting outlines) surface the
/// kernel's error unchanged; nothing is retried or skipped.
pub fn extrude_quads<K: SolidKernel + Sync>(
    kernel: &K,
    quads: &[LaceQuad],
    thickness: f64,
) -> Result<Vec<Mesh>> {
    let vector = Vector3::new(0.0, 0.0, thickness);
    quads
        .par_iter()
        .map(|quad| {
            let face = kernel.make_polygon_face(&quad.corners)?;
            kernel.extrude(&face, vector)
        })
        .collect()
}
