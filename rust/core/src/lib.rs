// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lattice-Mast Core
//!
//! Parameter model for braced lattice-column assemblies: the validated
//! dimension record every downstream component consumes, plus loading of
//! dimension sets from TOML parameter files.

pub mod config;
pub mod error;
pub mod params;

pub use config::{default_dimensions_toml, load_dimensions};
pub use error::{Error, Result};
pub use params::ColumnDimensions;
