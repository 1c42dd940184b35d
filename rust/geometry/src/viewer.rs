// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer capability boundary
//!
//! The assembly hands finished solids to a [`Viewer`]; rendering itself is
//! outside this crate. Shipped implementations record or log shapes.

use crate::assembly::PlacedShape;
use crate::mesh::Mesh;

/// RGB display color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Structural-steel brown used for every panel part.
    pub const BROWN: Self = Self::new(0.59, 0.29, 0.0);
}

/// Display capabilities the pipeline is exposed to.
///
/// `start_display` is where a real implementation would enter its blocking
/// event loop; the shipped implementations return immediately.
pub trait Viewer {
    fn set_background_color(&mut self, color: Color);
    fn display_shape(&mut self, shape: &Mesh, color: Color);
    fn fit_all(&mut self);
    fn start_display(&mut self);
}

/// Present a composed panel: white background, every part brown, then fit
/// and start the display.
pub fn display_assembly<V: Viewer>(viewer: &mut V, shapes: &[PlacedShape]) {
    viewer.set_background_color(Color::WHITE);
    for shape in shapes {
        viewer.display_shape(&shape.mesh, Color::BROWN);
    }
    viewer.fit_all();
    viewer.start_display();
}

/// Viewer double that records every call, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    pub background: Option<Color>,
    pub displayed: Vec<(Mesh, Color)>,
    pub fitted: bool,
    pub started: bool,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Viewer for RecordingViewer {
    fn set_background_color(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn display_shape(&mut self, shape: &Mesh, color: Color) {
        self.displayed.push((shape.clone(), color));
    }

    fn fit_all(&mut self) {
        self.fitted = true;
    }

    fn start_display(&mut self) {
        self.started = true;
    }
}
