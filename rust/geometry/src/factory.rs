// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Primitive component factory
//!
//! Builds the two simple solids of the assembly — the I-section chord and
//! the rectangular end plate — through the kernel capability trait.

use crate::error::Result;
use crate::kernel::SolidKernel;
use crate::mesh::Mesh;

/// Build an I-section solid lying along the X axis.
///
/// Three boxes: bottom flange on `z = 0`, top flange raised to
/// `depth − flange_thickness`, web centered in Y between them, fused into
/// one solid. The resulting bounding box is `length × width × depth`.
pub fn make_i_section<K: SolidKernel>(
    kernel: &K,
    length: f64,
    width: f64,
    depth: f64,
    flange_thickness: f64,
    web_thickness: f64,
) -> Result<Mesh> {
    let web_height = depth - 2.0 * flange_thickness;

    let bottom_flange = kernel.make_box(length, width, flange_thickness)?;
    let top_flange = kernel.translate(
        &kernel.make_box(length, width, flange_thickness)?,
        0.0,
        0.0,
        depth - flange_thickness,
    );
    let web = kernel.translate(
        &kernel.make_box(length, web_thickness, web_height)?,
        0.0,
        (width - web_thickness) / 2.0,
        flange_thickness,
    );

    let flanges = kernel.fuse(&bottom_flange, &top_flange, "i-section flanges")?;
    kernel.fuse(&flanges, &web, "i-section web")
}

/// Build an end plate solid: a single box.
pub fn make_plate<K: SolidKernel>(
    kernel: &K,
    length: f64,
    width: f64,
    thickness: f64,
) -> Result<Mesh> {
    kernel.make_box(length, width, thickness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MeshKernel;
    use nalgebra::Point3;

    #[test]
    fn i_section_bounding_box() {
        let kernel = MeshKernel::new();
        let mesh = make_i_section(&kernel, 5500.0, 100.0, 200.0, 10.0, 6.0).unwrap();

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(5500.0, 100.0, 200.0));
    }

    #[test]
    fn i_section_is_one_nonempty_solid() {
        let kernel = MeshKernel::new();
        let mesh = make_i_section(&kernel, 100.0, 100.0, 200.0, 10.0, 6.0).unwrap();
        assert!(!mesh.is_empty());
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn i_section_rejects_degenerate_web() {
        // Flanges thicker than half the depth leave no web height
        let kernel = MeshKernel::new();
        assert!(make_i_section(&kernel, 100.0, 100.0, 200.0, 100.0, 6.0).is_err());
    }

    #[test]
    fn plate_bounding_box() {
        let kernel = MeshKernel::new();
        let mesh = make_plate(&kernel, 300.0, 430.0, 10.0).unwrap();

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(300.0, 430.0, 10.0));
        assert!((mesh.volume() - 300.0 * 430.0 * 10.0).abs() < 1e-3);
    }
}
