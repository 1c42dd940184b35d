// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loading dimension sets from TOML parameter files.
//!
//! The parameter file carries exactly the fields of
//! [`ColumnDimensions`](crate::ColumnDimensions); unknown keys are rejected
//! so a typo cannot silently fall back to a default.

use crate::error::{Error, Result};
use crate::params::ColumnDimensions;
use std::fs;
use std::path::Path;

/// Load and validate a dimension set from a TOML file.
pub fn load_dimensions(path: &Path) -> Result<ColumnDimensions> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dims: ColumnDimensions = toml::from_str(&content)?;
    dims.validate()?;
    Ok(dims)
}

/// Serialize the standard dimension table as TOML.
///
/// Intended as a template: write it to a file, edit, and pass the file back
/// via `load_dimensions`.
pub fn default_dimensions_toml() -> String {
    toml::to_string_pretty(&ColumnDimensions::standard())
        .expect("standard dimension table serializes")
}
