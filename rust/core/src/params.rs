// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The dimension record for one braced column panel.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Complete dimension set for a braced lattice-column assembly.
///
/// All values are lengths in millimetres. The record is plain data: it is
/// validated once via [`ColumnDimensions::validate`] and passed by reference
/// into every downstream component, never mutated.
///
/// The assembly frame is: X along the column height, Y across the two chords,
/// Z through the section depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDimensions {
    /// Overall panel height, end plate to end plate.
    pub total_height: f64,
    /// Length of one end plate along the height axis.
    pub plate_length: f64,
    /// I-section flange width.
    pub section_width: f64,
    /// I-section depth (flange outer face to flange outer face).
    pub section_depth: f64,
    /// I-section flange thickness.
    pub flange_thickness: f64,
    /// I-section web thickness.
    pub web_thickness: f64,
    /// End plate width across the chord pair.
    pub plate_width: f64,
    /// End plate thickness.
    pub plate_thickness: f64,
    /// Clear repeat spacing of one lacing bay along the height axis.
    pub vertical_gap: f64,
    /// Length of a horizontal brace bar along the height axis.
    pub horizontal_width: f64,
    /// Extrusion thickness of lace and brace bars.
    pub lace_thickness: f64,
    /// Width of the lacing field across the chord pair.
    pub lace_width: f64,
    /// Outer-to-outer width of the chord pair.
    pub section_outer_width: f64,
}

impl ColumnDimensions {
    /// The built-in standard parameter table.
    ///
    /// These are the dimensions of the reference tower panel; a TOML
    /// parameter file with the same fields overrides them.
    pub fn standard() -> Self {
        Self {
            total_height: 12200.0,
            plate_length: 300.0,
            section_width: 100.0,
            section_depth: 200.0,
            flange_thickness: 10.0,
            web_thickness: 6.0,
            plate_width: 430.0,
            plate_thickness: 10.0,
            vertical_gap: 450.0,
            horizontal_width: 100.0,
            lace_thickness: 8.0,
            lace_width: 430.0,
            section_outer_width: 450.0,
        }
    }

    /// Chord length: overall height minus both end plates.
    #[inline]
    pub fn column_length(&self) -> f64 {
        self.total_height - 2.0 * self.plate_length
    }

    /// Height-axis projection of one diagonal lace (45° diagonal convention).
    #[inline]
    pub fn lace_projected_height(&self) -> f64 {
        self.horizontal_width / (PI / 4.0).sin()
    }

    /// Y offset of the second chord relative to the first.
    #[inline]
    pub fn chord_gap(&self) -> f64 {
        self.section_outer_width - self.section_width
    }

    /// Clear web height between the flanges.
    #[inline]
    pub fn web_height(&self) -> f64 {
        self.section_depth - 2.0 * self.flange_thickness
    }

    /// Y offset centering the end plates on the chord pair.
    #[inline]
    pub fn plate_y_offset(&self) -> f64 {
        (self.section_outer_width - self.plate_width) / 2.0
    }

    /// Y coordinate of the near edge of the lacing field (centered on the
    /// chord pair).
    #[inline]
    pub fn lace_start_offset(&self) -> f64 {
        (self.section_outer_width - self.lace_width) / 2.0
    }

    /// Y coordinate of the far edge of the lacing field.
    #[inline]
    pub fn lace_end_offset(&self) -> f64 {
        self.lace_start_offset() + self.lace_width
    }

    /// Height interval `[start, end)` covered by the lacing run.
    #[inline]
    pub fn lace_span(&self) -> (f64, f64) {
        (
            self.plate_length,
            self.total_height - 3.0 * self.plate_length,
        )
    }

    /// Check that every stored field and every derived quantity is positive.
    ///
    /// Fails with [`Error::InvalidDimension`] naming the first offending
    /// value. Derived quantities are reported under their own names
    /// (`column_length`, `chord_gap`, `web_height`).
    pub fn validate(&self) -> Result<()> {
        let stored = [
            ("total_height", self.total_height),
            ("plate_length", self.plate_length),
            ("section_width", self.section_width),
            ("section_depth", self.section_depth),
            ("flange_thickness", self.flange_thickness),
            ("web_thickness", self.web_thickness),
            ("plate_width", self.plate_width),
            ("plate_thickness", self.plate_thickness),
            ("vertical_gap", self.vertical_gap),
            ("horizontal_width", self.horizontal_width),
            ("lace_thickness", self.lace_thickness),
            ("lace_width", self.lace_width),
            ("section_outer_width", self.section_outer_width),
        ];
        for (name, value) in stored {
            check_positive(name, value)?;
        }

        check_positive("column_length", self.column_length())?;
        check_positive("chord_gap", self.chord_gap())?;
        check_positive("web_height", self.web_height())?;

        Ok(())
    }
}

#[inline]
fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}
