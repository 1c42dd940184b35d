// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lattice-Mast CLI
//!
//! Generates the full geometry of a braced lattice-column panel and
//! presents it through a logging viewer:
//! load/validate dimensions → compose solids → display summary.

use anyhow::Context;
use clap::Parser;
use lattice_mast_core::{default_dimensions_toml, load_dimensions, ColumnDimensions};
use lattice_mast_geometry::{compose, display_assembly, Color, Mesh, MeshKernel, Point3, Viewer};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lattice-mast", version, about = "Generate a braced lattice-column panel")]
struct Cli {
    /// TOML dimension file; the built-in standard table is used when omitted
    #[arg(long, value_name = "FILE")]
    dimensions: Option<PathBuf>,

    /// Print the standard dimension table as TOML and exit
    #[arg(long)]
    emit_default_dimensions: bool,
}

/// Viewer that reports shapes through the log instead of a window.
#[derive(Debug, Default)]
struct SummaryViewer {
    shapes: usize,
    triangles: usize,
    bounds: Option<(Point3<f64>, Point3<f64>)>,
}

impl Viewer for SummaryViewer {
    fn set_background_color(&mut self, color: Color) {
        tracing::debug!(r = color.r, g = color.g, b = color.b, "background color");
    }

    fn display_shape(&mut self, shape: &Mesh, _color: Color) {
        self.shapes += 1;
        self.triangles += shape.triangle_count();

        let (min, max) = shape.bounds();
        self.bounds = Some(match self.bounds {
            None => (min, max),
            Some((bmin, bmax)) => (
                Point3::new(bmin.x.min(min.x), bmin.y.min(min.y), bmin.z.min(min.z)),
                Point3::new(bmax.x.max(max.x), bmax.y.max(max.y), bmax.z.max(max.z)),
            ),
        });
        tracing::debug!(
            vertices = shape.vertex_count(),
            triangles = shape.triangle_count(),
            "shape displayed"
        );
    }

    fn fit_all(&mut self) {
        if let Some((min, max)) = self.bounds {
            tracing::info!(
                extent_x = max.x - min.x,
                extent_y = max.y - min.y,
                extent_z = max.z - min.z,
                "fitted view to assembly"
            );
        }
    }

    fn start_display(&mut self) {
        // A windowed viewer would block in its event loop here.
        tracing::info!(
            shapes = self.shapes,
            triangles = self.triangles,
            "panel ready for display"
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    if cli.emit_default_dimensions {
        print!("{}", default_dimensions_toml());
        return Ok(());
    }

    let dims = match &cli.dimensions {
        Some(path) => load_dimensions(path)
            .with_context(|| format!("loading dimensions from {}", path.display()))?,
        None => ColumnDimensions::standard(),
    };

    tracing::info!(
        total_height = dims.total_height,
        column_length = dims.column_length(),
        vertical_gap = dims.vertical_gap,
        section_outer_width = dims.section_outer_width,
        "composing panel"
    );

    let kernel = MeshKernel::new();
    let shapes = compose(&kernel, &dims).context("composing panel geometry")?;

    let mut viewer = SummaryViewer::default();
    display_assembly(&mut viewer, &shapes);

    Ok(())
}
