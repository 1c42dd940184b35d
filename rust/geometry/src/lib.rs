// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lattice-Mast Geometry
//!
//! Lace layout and solid construction for braced lattice-column panels:
//! a pure layout engine, a solid-kernel capability boundary with a
//! triangle-mesh implementation, and the composer that places chords, end
//! plates and lacing bars into a finished assembly.

pub mod assembly;
pub mod builder;
pub mod error;
pub mod factory;
pub mod kernel;
pub mod layout;
pub mod mesh;
pub mod triangulation;
pub mod viewer;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use assembly::{compose, PartKind, PlacedShape};
pub use builder::extrude_quads;
pub use error::{Error, Result};
pub use factory::{make_i_section, make_plate};
pub use kernel::{MeshKernel, PlanarFace, SolidKernel};
pub use layout::{bay_count, brace_count, generate_lace_quads, LaceFace, LaceKind, LaceQuad, LaceRun};
pub use mesh::Mesh;
pub use viewer::{display_assembly, Color, RecordingViewer, Viewer};
