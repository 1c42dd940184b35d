// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly composer
//!
//! Places the two chords, four end plates and the lacing solids in final
//! assembly coordinates. The frame is the chord frame: X along the height,
//! Y across the chord pair, Z through the section depth; the first chord's
//! bottom flange corner is the origin.

use crate::builder::extrude_quads;
use crate::error::Result;
use crate::factory::{make_i_section, make_plate};
use crate::kernel::SolidKernel;
use crate::layout::{generate_lace_quads, LaceKind, LaceRun};
use crate::mesh::Mesh;
use lattice_mast_core::ColumnDimensions;

/// Role of a placed shape within the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Chord,
    EndPlate,
    Lace,
    Brace,
}

/// A solid in its final position, ready for display.
#[derive(Debug, Clone)]
pub struct PlacedShape {
    pub label: String,
    pub kind: PartKind,
    pub mesh: Mesh,
}

/// Build and place every solid of the panel.
///
/// Validates the dimensions up front, so a bad parameter set aborts before
/// any kernel call. Output order is deterministic: chords, end plates, then
/// lacing in layout order.
pub fn compose<K: SolidKernel + Sync>(
    kernel: &K,
    dims: &ColumnDimensions,
) -> Result<Vec<PlacedShape>> {
    dims.validate()?;

    let mut shapes = Vec::new();

    // Chords: the far chord is the near chord shifted across the panel.
    let chord = make_i_section(
        kernel,
        dims.column_length(),
        dims.section_width,
        dims.section_depth,
        dims.flange_thickness,
        dims.web_thickness,
    )?;
    let chord_far = kernel.translate(&chord, 0.0, dims.chord_gap(), 0.0);
    shapes.push(PlacedShape {
        label: "chord-near".to_string(),
        kind: PartKind::Chord,
        mesh: chord,
    });
    shapes.push(PlacedShape {
        label: "chord-far".to_string(),
        kind: PartKind::Chord,
        mesh: chord_far,
    });

    // End plates: front/back pairs at both column ends, centered in Y.
    let plate = make_plate(
        kernel,
        dims.plate_length,
        dims.plate_width,
        dims.plate_thickness,
    )?;
    let plate_y = dims.plate_y_offset();
    let top_x = dims.total_height - 3.0 * dims.plate_length;
    let placements = [
        ("plate-bottom-front", 0.0, -dims.plate_thickness),
        ("plate-bottom-back", 0.0, dims.section_depth),
        ("plate-top-front", top_x, -dims.plate_thickness),
        ("plate-top-back", top_x, dims.section_depth),
    ];
    for (label, x, z) in placements {
        shapes.push(PlacedShape {
            label: label.to_string(),
            kind: PartKind::EndPlate,
            mesh: kernel.translate(&plate, x, plate_y, z),
        });
    }

    // Lacing: quad coordinates are already absolute, extrusion is the only
    // kernel work left.
    let (span_start, span_end) = dims.lace_span();
    let run = LaceRun {
        start_height: span_start,
        end_height: span_end,
        vertical_gap: dims.vertical_gap,
        lace_projected_height: dims.lace_projected_height(),
        horizontal_width: dims.horizontal_width,
        start_offset: dims.lace_start_offset(),
        end_offset: dims.lace_end_offset(),
        z_bottom: -dims.lace_thickness,
        z_top: dims.section_depth,
    };
    let quads = generate_lace_quads(&run);
    let solids = extrude_quads(kernel, &quads, dims.lace_thickness)?;
    for (index, (quad, mesh)) in quads.iter().zip(solids).enumerate() {
        let (kind, label) = match quad.kind {
            LaceKind::Diagonal => (PartKind::Lace, format!("lace-{index}")),
            LaceKind::Horizontal => (PartKind::Brace, format!("brace-{index}")),
        };
        shapes.push(PlacedShape { label, kind, mesh });
    }

    // Plates clear the chord depth band by construction; asserted, not
    // computed. The slack covers f32 rounding of non-integral thicknesses.
    #[cfg(debug_assertions)]
    {
        let slack = 1e-3;
        let (chord_min, chord_max) = shapes[0].mesh.bounds();
        for shape in shapes.iter().filter(|s| s.kind == PartKind::EndPlate) {
            let (plate_min, plate_max) = shape.mesh.bounds();
            debug_assert!(
                plate_max.z <= chord_min.z + slack || plate_min.z >= chord_max.z - slack,
                "end plate `{}` intrudes into the chord depth band",
                shape.label
            );
        }
    }

    Ok(shapes)
}
