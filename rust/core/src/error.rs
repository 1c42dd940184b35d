// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for parameter-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a dimension set
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid dimension `{name}`: {value} (must be positive)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("failed to read parameter file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}
