// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solid-modelling capability boundary
//!
//! [`SolidKernel`] is the seam between pure geometry computation and solid
//! construction: layout code never touches it, the factory and builder only
//! talk through it. [`MeshKernel`] is the triangle-mesh implementation used
//! by the shipped pipeline.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::triangulation::{polygon_normal, project_to_plane, triangulate_polygon};
use nalgebra::{Point2, Point3, Vector3};

/// A validated planar polygon, ready for extrusion.
///
/// Can only be minted through [`SolidKernel::make_polygon_face`], so holding
/// one is proof the outline is planar, non-collinear and simple.
#[derive(Debug, Clone)]
pub struct PlanarFace {
    points: Vec<Point3<f64>>,
    normal: Vector3<f64>,
}

impl PlanarFace {
    /// Outline vertices in input order.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Unit normal of the outline's plane.
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }
}

/// Solid-construction capabilities consumed by the factory and the builder.
pub trait SolidKernel {
    /// Axis-aligned box with one corner at the origin and extents
    /// `(length, width, height)` along X, Y, Z.
    fn make_box(&self, length: f64, width: f64, height: f64) -> Result<Mesh>;

    /// Return a translated copy; the input is not mutated.
    fn translate(&self, mesh: &Mesh, dx: f64, dy: f64, dz: f64) -> Mesh;

    /// Boolean union of two solids. `label` identifies the shape under
    /// construction and is carried into any failure.
    fn fuse(&self, a: &Mesh, b: &Mesh, label: &str) -> Result<Mesh>;

    /// Validate an outline of at least 3 coplanar points into a face.
    fn make_polygon_face(&self, points: &[Point3<f64>]) -> Result<PlanarFace>;

    /// Linear prism: sweep the face along `vector`.
    fn extrude(&self, face: &PlanarFace, vector: Vector3<f64>) -> Result<Mesh>;
}

/// Triangle-mesh kernel.
#[derive(Debug, Clone, Copy)]
pub struct MeshKernel {
    /// Coplanarity tolerance in model units.
    pub tolerance: f64,
}

impl Default for MeshKernel {
    fn default() -> Self {
        Self { tolerance: 1e-6 }
    }
}

impl MeshKernel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolidKernel for MeshKernel {
    fn make_box(&self, length: f64, width: f64, height: f64) -> Result<Mesh> {
        for (name, value) in [("length", length), ("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Degenerate(format!(
                    "box {} must be positive, got {}",
                    name, value
                )));
            }
        }

        let p = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let mut mesh = Mesh::with_capacity(24, 36);

        // Six faces, outward normals, counter-clockwise from outside.
        add_quad(
            &mut mesh,
            [p(0.0, 0.0, 0.0), p(0.0, width, 0.0), p(length, width, 0.0), p(length, 0.0, 0.0)],
            -Vector3::z(),
        );
        add_quad(
            &mut mesh,
            [p(0.0, 0.0, height), p(length, 0.0, height), p(length, width, height), p(0.0, width, height)],
            Vector3::z(),
        );
        add_quad(
            &mut mesh,
            [p(0.0, 0.0, 0.0), p(length, 0.0, 0.0), p(length, 0.0, height), p(0.0, 0.0, height)],
            -Vector3::y(),
        );
        add_quad(
            &mut mesh,
            [p(0.0, width, 0.0), p(0.0, width, height), p(length, width, height), p(length, width, 0.0)],
            Vector3::y(),
        );
        add_quad(
            &mut mesh,
            [p(0.0, 0.0, 0.0), p(0.0, 0.0, height), p(0.0, width, height), p(0.0, width, 0.0)],
            -Vector3::x(),
        );
        add_quad(
            &mut mesh,
            [p(length, 0.0, 0.0), p(length, width, 0.0), p(length, width, height), p(length, 0.0, height)],
            Vector3::x(),
        );

        Ok(mesh)
    }

    fn translate(&self, mesh: &Mesh, dx: f64, dy: f64, dz: f64) -> Mesh {
        let mut out = mesh.clone();
        // Offset in f64 before converting back to f32
        out.positions.chunks_exact_mut(3).for_each(|chunk| {
            chunk[0] = (chunk[0] as f64 + dx) as f32;
            chunk[1] = (chunk[1] as f64 + dy) as f32;
            chunk[2] = (chunk[2] as f64 + dz) as f32;
        });
        out
    }

    fn fuse(&self, a: &Mesh, b: &Mesh, label: &str) -> Result<Mesh> {
        use csgrs::traits::CSG;

        if a.is_empty() || b.is_empty() {
            return Err(Error::kernel("fuse", label, "empty operand"));
        }

        let a_csg = mesh_to_csg(a);
        let b_csg = mesh_to_csg(b);
        let fused = a_csg.union(&b_csg);
        let result = csg_to_mesh(&fused);

        if result.is_empty() {
            return Err(Error::kernel("fuse", label, "union produced an empty solid"));
        }
        Ok(result)
    }

    fn make_polygon_face(&self, points: &[Point3<f64>]) -> Result<PlanarFace> {
        if points.len() < 3 {
            return Err(Error::Degenerate(format!(
                "polygon face needs at least 3 points, got {}",
                points.len()
            )));
        }

        let normal = polygon_normal(points)
            .ok_or_else(|| Error::Degenerate("polygon points are collinear".to_string()))?;

        // All points must lie on the plane through the first point
        let origin = points[0];
        for point in points {
            let distance = (point - origin).dot(&normal).abs();
            if distance > self.tolerance {
                return Err(Error::Degenerate(format!(
                    "polygon points are not coplanar (offset {distance})"
                )));
            }
        }

        let (points_2d, _, _, _) = project_to_plane(points, &normal);
        if outline_self_intersects(&points_2d) {
            return Err(Error::Degenerate(
                "polygon outline is self-intersecting".to_string(),
            ));
        }

        Ok(PlanarFace {
            points: points.to_vec(),
            normal,
        })
    }

    fn extrude(&self, face: &PlanarFace, vector: Vector3<f64>) -> Result<Mesh> {
        if vector.norm() <= self.tolerance {
            return Err(Error::Degenerate(format!(
                "extrusion vector too short: {}",
                vector.norm()
            )));
        }

        // Orient the outline counter-clockwise about the extrusion direction
        // so caps and walls wind outward.
        let mut points = face.points().to_vec();
        let mut normal = face.normal();
        if normal.dot(&vector) < 0.0 {
            points.reverse();
            normal = -normal;
        }

        let (points_2d, _, _, _) = project_to_plane(&points, &normal);
        let tri = triangulate_polygon(&points_2d)?;

        let n = points.len();
        let mut mesh = Mesh::with_capacity(n * 6, tri.len() * 2 + n * 6);

        // Bottom cap, facing away from the extrusion direction
        let base = mesh.vertex_count() as u32;
        for point in &points {
            mesh.add_vertex(*point, -normal);
        }
        for t in tri.chunks_exact(3) {
            mesh.add_triangle(base + t[0] as u32, base + t[2] as u32, base + t[1] as u32);
        }

        // Top cap
        let base = mesh.vertex_count() as u32;
        for point in &points {
            mesh.add_vertex(point + vector, normal);
        }
        for t in tri.chunks_exact(3) {
            mesh.add_triangle(base + t[0] as u32, base + t[1] as u32, base + t[2] as u32);
        }

        // Side walls
        for i in 0..n {
            let j = (i + 1) % n;
            let p0 = points[i];
            let p1 = points[j];

            let edge = p1 - p0;
            let wall_normal = match edge.cross(&normal).try_normalize(1e-10) {
                Some(nrm) => nrm,
                None => continue, // Skip degenerate edge (duplicate points)
            };

            let base = mesh.vertex_count() as u32;
            mesh.add_vertex(p0, wall_normal);
            mesh.add_vertex(p1, wall_normal);
            mesh.add_vertex(p1 + vector, wall_normal);
            mesh.add_vertex(p0 + vector, wall_normal);
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }

        Ok(mesh)
    }
}

/// Append one rectangular face as two triangles with a shared normal.
fn add_quad(mesh: &mut Mesh, corners: [Point3<f64>; 4], normal: Vector3<f64>) {
    let base = mesh.vertex_count() as u32;
    for corner in corners {
        mesh.add_vertex(corner, normal);
    }
    mesh.add_triangle(base, base + 1, base + 2);
    mesh.add_triangle(base, base + 2, base + 3);
}

/// Proper-crossing test between non-adjacent outline edges.
fn outline_self_intersects(points: &[Point2<f64>]) -> bool {
    let n = points.len();
    for i in 0..n {
        for j in i + 1..n {
            // Adjacent edges share an endpoint and cannot properly cross
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            if segments_cross(
                &points[i],
                &points[(i + 1) % n],
                &points[j],
                &points[(j + 1) % n],
            ) {
                return true;
            }
        }
    }
    false
}

fn segments_cross(p0: &Point2<f64>, p1: &Point2<f64>, q0: &Point2<f64>, q1: &Point2<f64>) -> bool {
    let orient = |a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>| {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    };
    let d1 = orient(q0, q1, p0);
    let d2 = orient(q0, q1, p1);
    let d3 = orient(p0, p1, q0);
    let d4 = orient(p0, p1, q1);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Convert a triangle mesh into csgrs polygons.
fn mesh_to_csg(mesh: &Mesh) -> csgrs::mesh::Mesh<()> {
    use csgrs::mesh::{polygon::Polygon, vertex::Vertex, Mesh as CsgMesh};

    let mut polygons = Vec::with_capacity(mesh.triangle_count());

    for tri in mesh.indices.chunks_exact(3) {
        let v0 = mesh.position(tri[0] as usize);
        let v1 = mesh.position(tri[1] as usize);
        let v2 = mesh.position(tri[2] as usize);

        // Skip degenerate (zero-area) triangles to avoid NaN propagation
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let face_normal = match edge1.cross(&edge2).try_normalize(1e-10) {
            Some(n) => n,
            None => continue,
        };

        let vertices = vec![
            Vertex::new(v0, face_normal),
            Vertex::new(v1, face_normal),
            Vertex::new(v2, face_normal),
        ];
        polygons.push(Polygon::new(vertices, None));
    }

    CsgMesh::from_polygons(&polygons, None)
}

/// Convert csgrs polygons back into a triangle mesh.
fn csg_to_mesh(csg_mesh: &csgrs::mesh::Mesh<()>) -> Mesh {
    let mut mesh = Mesh::new();

    for polygon in &csg_mesh.polygons {
        let vertices = &polygon.vertices;
        if vertices.len() < 3 {
            continue;
        }

        let points_3d: Vec<Point3<f64>> = vertices
            .iter()
            .map(|v| Point3::new(v.pos[0], v.pos[1], v.pos[2]))
            .collect();

        // FAST PATH: Triangle - no re-triangulation needed
        if points_3d.len() == 3 {
            let base = mesh.vertex_count() as u32;
            for v in vertices {
                mesh.add_vertex(v.pos, v.normal);
            }
            mesh.add_triangle(base, base + 1, base + 2);
            continue;
        }

        // BSP output polygons can be n-gons; project along their normal and
        // triangulate. Fall back to a computed normal when the stored one is
        // unusable.
        let raw_normal = Vector3::new(vertices[0].normal[0], vertices[0].normal[1], vertices[0].normal[2]);
        let normal = match raw_normal.try_normalize(1e-10) {
            Some(n) if n.x.is_finite() && n.y.is_finite() && n.z.is_finite() => n,
            _ => match polygon_normal(&points_3d) {
                Some(n) => n,
                None => continue, // Skip degenerate polygon
            },
        };

        let (points_2d, _, _, _) = project_to_plane(&points_3d, &normal);
        let indices = match triangulate_polygon(&points_2d) {
            Ok(idx) => idx,
            Err(_) => continue,
        };

        let base = mesh.vertex_count();
        for v in vertices {
            mesh.add_vertex(v.pos, v.normal);
        }
        for t in indices.chunks_exact(3) {
            mesh.add_triangle(
                (base + t[0]) as u32,
                (base + t[1]) as u32,
                (base + t[2]) as u32,
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel() -> MeshKernel {
        MeshKernel::new()
    }

    #[test]
    fn box_bounds_and_volume() {
        let mesh = kernel().make_box(10.0, 5.0, 2.0).unwrap();
        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(10.0, 5.0, 2.0));
        assert!((mesh.volume() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn box_rejects_nonpositive_extent() {
        assert!(kernel().make_box(10.0, 0.0, 2.0).is_err());
        assert!(kernel().make_box(-1.0, 5.0, 2.0).is_err());
    }

    #[test]
    fn translate_round_trip_preserves_geometry() {
        let k = kernel();
        let mesh = k.make_box(10.0, 5.0, 2.0).unwrap();
        let moved = k.translate(&mesh, 100.0, -50.0, 25.0);
        let back = k.translate(&moved, -100.0, 50.0, -25.0);

        assert_eq!(back.bounds(), mesh.bounds());
        assert!((back.volume() - mesh.volume()).abs() < 1e-6);
    }

    #[test]
    fn translate_does_not_mutate_input() {
        let k = kernel();
        let mesh = k.make_box(1.0, 1.0, 1.0).unwrap();
        let before = mesh.clone();
        let _ = k.translate(&mesh, 5.0, 5.0, 5.0);
        assert_eq!(mesh, before);
    }

    #[test]
    fn face_rejects_too_few_points() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        assert!(matches!(
            kernel().make_polygon_face(&points),
            Err(Error::Degenerate(_))
        ));
    }

    #[test]
    fn face_rejects_collinear_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(matches!(
            kernel().make_polygon_face(&points),
            Err(Error::Degenerate(_))
        ));
    }

    #[test]
    fn face_rejects_non_coplanar_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ];
        assert!(matches!(
            kernel().make_polygon_face(&points),
            Err(Error::Degenerate(_))
        ));
    }

    #[test]
    fn face_rejects_bowtie_outline() {
        // Crossing diagonals, the shape a too-large lace projection produces
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        assert!(matches!(
            kernel().make_polygon_face(&points),
            Err(Error::Degenerate(_))
        ));
    }

    #[test]
    fn extrude_square_prism() {
        let k = kernel();
        let face = k
            .make_polygon_face(&[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 3.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ])
            .unwrap();
        let mesh = k.extrude(&face, Vector3::new(0.0, 0.0, 4.0)).unwrap();

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(2.0, 3.0, 4.0));
        assert!((mesh.volume() - 24.0).abs() < 1e-6);
    }

    #[test]
    fn extrude_clockwise_outline() {
        // Clockwise about +Z: the kernel must reorient, not emit an inside-out prism
        let k = kernel();
        let face = k
            .make_polygon_face(&[
                Point3::new(0.0, 3.0, 1.0),
                Point3::new(2.0, 3.0, 1.0),
                Point3::new(2.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 1.0),
            ])
            .unwrap();
        let mesh = k.extrude(&face, Vector3::new(0.0, 0.0, 2.0)).unwrap();

        let (min, max) = mesh.bounds();
        assert_eq!((min.z, max.z), (1.0, 3.0));
        assert!((mesh.volume() - 12.0).abs() < 1e-6);
    }

    #[test]
    fn extrude_rejects_zero_vector() {
        let k = kernel();
        let face = k
            .make_polygon_face(&[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ])
            .unwrap();
        assert!(k.extrude(&face, Vector3::zeros()).is_err());
    }

    #[test]
    fn fuse_overlapping_boxes() {
        let k = kernel();
        let a = k.make_box(2.0, 2.0, 2.0).unwrap();
        let b = k.translate(&k.make_box(2.0, 2.0, 2.0).unwrap(), 1.0, 0.0, 0.0);
        let fused = k.fuse(&a, &b, "test boxes").unwrap();

        let (min, max) = fused.bounds();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(3.0, 2.0, 2.0));
    }

    #[test]
    fn fuse_rejects_empty_operand() {
        let k = kernel();
        let a = k.make_box(1.0, 1.0, 1.0).unwrap();
        let err = k.fuse(&a, &Mesh::new(), "plate stack").unwrap_err();
        match err {
            Error::Kernel { operation, shape, .. } => {
                assert_eq!(operation, "fuse");
                assert_eq!(shape, "plate stack");
            }
            other => panic!("expected Kernel error, got {:?}", other),
        }
    }
}
