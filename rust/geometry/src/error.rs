// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during geometry construction
#[derive(Error, Debug)]
pub enum Error {
    #[error("triangulation failed: {0}")]
    Triangulation(String),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("kernel {operation} failed for `{shape}`: {detail}")]
    Kernel {
        operation: &'static str,
        shape: String,
        detail: String,
    },

    #[error("dimension error: {0}")]
    Core(#[from] lattice_mast_core::Error),
}

impl Error {
    /// Shorthand for a kernel failure attributed to a named shape.
    pub fn kernel(operation: &'static str, shape: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Kernel {
            operation,
            shape: shape.into(),
            detail: detail.into(),
        }
    }
}
