// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lace layout engine
//!
//! Pure computation of the lacing pattern: which diagonal and horizontal
//! bars cover a height span, and the exact corner coordinates of each. No
//! kernel calls happen here; the output is plain geometry consumed by the
//! solid builder.

use nalgebra::Point3;

/// Role of a lacing quad within the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaceKind {
    /// Diagonal lace spanning one bay.
    Diagonal,
    /// Horizontal brace between two bays.
    Horizontal,
}

/// Which face of the panel a quad lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaceFace {
    /// `z = z_bottom` plane.
    Bottom,
    /// `z = z_top` plane.
    Top,
}

/// One planar lacing quadrilateral, in final assembly coordinates.
///
/// The corners are ordered around the outline; the solid builder extrudes
/// each quad by the lace thickness along +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaceQuad {
    pub corners: [Point3<f64>; 4],
    pub kind: LaceKind,
    pub face: LaceFace,
}

/// Parameters of one lacing run along the height (X) axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaceRun {
    /// First covered height coordinate.
    pub start_height: f64,
    /// Exclusive end of the covered span.
    pub end_height: f64,
    /// Height extent of one bay.
    pub vertical_gap: f64,
    /// Height-axis projection of a diagonal bar.
    pub lace_projected_height: f64,
    /// Height extent of a horizontal brace.
    pub horizontal_width: f64,
    /// Near Y edge of the lacing field.
    pub start_offset: f64,
    /// Far Y edge of the lacing field.
    pub end_offset: f64,
    /// Z plane of the bottom-face quads.
    pub z_bottom: f64,
    /// Z plane of the top-face quads.
    pub z_top: f64,
}

/// Generate the ordered lace/brace quad sequence for a run.
///
/// Per bay `[current_start, current_end)`: a bottom diagonal, its top mirror
/// with the Y offsets swapped (so consecutive faces zig-zag instead of
/// repeating one slant), and — when a full brace still fits before
/// `end_height` — a horizontal brace pair connecting this bay to the next.
///
/// The advance to the next bay always includes the brace slot, even when no
/// brace was emitted, and any remaining span shorter than `vertical_gap` is
/// left without geometry. Both are deliberate boundary policies of the
/// pattern, not errors: a run that cannot fit a single bay yields an empty
/// sequence.
pub fn generate_lace_quads(run: &LaceRun) -> Vec<LaceQuad> {
    let LaceRun {
        start_height,
        end_height,
        vertical_gap,
        lace_projected_height,
        horizontal_width,
        start_offset,
        end_offset,
        z_bottom,
        z_top,
    } = *run;

    let mut quads = Vec::new();
    let mut current_start = start_height;
    let mut current_end = start_height + vertical_gap;

    while current_end < end_height {
        // Bottom diagonal: parallelogram leaning across the bay
        quads.push(LaceQuad {
            corners: [
                Point3::new(current_start, start_offset, z_bottom),
                Point3::new(current_start + lace_projected_height, start_offset, z_bottom),
                Point3::new(current_end, end_offset, z_bottom),
                Point3::new(current_end - lace_projected_height, end_offset, z_bottom),
            ],
            kind: LaceKind::Diagonal,
            face: LaceFace::Bottom,
        });

        // Top diagonal, offsets swapped
        quads.push(LaceQuad {
            corners: [
                Point3::new(current_start, end_offset, z_top),
                Point3::new(current_start + lace_projected_height, end_offset, z_top),
                Point3::new(current_end, start_offset, z_top),
                Point3::new(current_end - lace_projected_height, start_offset, z_top),
            ],
            kind: LaceKind::Diagonal,
            face: LaceFace::Top,
        });

        if current_end + horizontal_width < end_height {
            for (face, z) in [(LaceFace::Bottom, z_bottom), (LaceFace::Top, z_top)] {
                quads.push(LaceQuad {
                    corners: [
                        Point3::new(current_end, start_offset, z),
                        Point3::new(current_end + horizontal_width, start_offset, z),
                        Point3::new(current_end + horizontal_width, end_offset, z),
                        Point3::new(current_end, end_offset, z),
                    ],
                    kind: LaceKind::Horizontal,
                    face,
                });
            }
        }

        current_start = current_end + horizontal_width;
        current_end = current_start + vertical_gap;
    }

    quads
}

/// Closed-form bay count: the number of loop iterations
/// [`generate_lace_quads`] performs for the same span.
pub fn bay_count(
    start_height: f64,
    end_height: f64,
    vertical_gap: f64,
    horizontal_width: f64,
) -> usize {
    let first_end = start_height + vertical_gap;
    if first_end >= end_height {
        return 0;
    }
    ((end_height - first_end) / (vertical_gap + horizontal_width)).ceil() as usize
}

/// Closed-form brace count: bays followed by a full-width horizontal brace.
pub fn brace_count(
    start_height: f64,
    end_height: f64,
    vertical_gap: f64,
    horizontal_width: f64,
) -> usize {
    let first_end = start_height + vertical_gap;
    let cutoff = end_height - first_end - horizontal_width;
    if first_end >= end_height || cutoff <= 0.0 {
        return 0;
    }
    (cutoff / (vertical_gap + horizontal_width)).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_run() -> LaceRun {
        // Scenario from the 6100-high panel variant
        LaceRun {
            start_height: 300.0,
            end_height: 5200.0,
            vertical_gap: 450.0,
            lace_projected_height: 70.71,
            horizontal_width: 100.0,
            start_offset: 10.0,
            end_offset: 440.0,
            z_bottom: -8.0,
            z_top: 200.0,
        }
    }

    fn bays(quads: &[LaceQuad]) -> Vec<&LaceQuad> {
        quads
            .iter()
            .filter(|q| q.kind == LaceKind::Diagonal && q.face == LaceFace::Bottom)
            .collect()
    }

    #[test]
    fn reference_run_counts() {
        let run = reference_run();
        let quads = generate_lace_quads(&run);

        // 9 bays, braces after all but the last
        assert_eq!(bay_count(300.0, 5200.0, 450.0, 100.0), 9);
        assert_eq!(brace_count(300.0, 5200.0, 450.0, 100.0), 8);
        assert_eq!(bays(&quads).len(), 9);
        assert_eq!(
            quads.iter().filter(|q| q.kind == LaceKind::Horizontal).count(),
            16
        );
        assert_eq!(quads.len(), 34);
    }

    #[test]
    fn reference_run_first_bay_corners() {
        let quads = generate_lace_quads(&reference_run());

        let bottom = &quads[0];
        assert_eq!(bottom.kind, LaceKind::Diagonal);
        assert_eq!(bottom.face, LaceFace::Bottom);
        assert_eq!(bottom.corners[0], Point3::new(300.0, 10.0, -8.0));
        assert_eq!(bottom.corners[1], Point3::new(370.71, 10.0, -8.0));
        assert_eq!(bottom.corners[2], Point3::new(750.0, 440.0, -8.0));
        assert_eq!(bottom.corners[3], Point3::new(679.29, 440.0, -8.0));

        // Top mirror starts on the far offset
        let top = &quads[1];
        assert_eq!(top.face, LaceFace::Top);
        assert_eq!(top.corners[0], Point3::new(300.0, 440.0, 200.0));
        assert_eq!(top.corners[2], Point3::new(750.0, 10.0, 200.0));

        // First brace sits on the bay boundary
        let brace = &quads[2];
        assert_eq!(brace.kind, LaceKind::Horizontal);
        assert_eq!(brace.corners[0], Point3::new(750.0, 10.0, -8.0));
        assert_eq!(brace.corners[1], Point3::new(850.0, 10.0, -8.0));
        assert_eq!(brace.corners[2], Point3::new(850.0, 440.0, -8.0));
    }

    #[test]
    fn reference_run_bay_starts_step_by_gap_plus_brace() {
        let quads = generate_lace_quads(&reference_run());
        let starts: Vec<f64> = bays(&quads).iter().map(|q| q.corners[0].x).collect();
        assert_eq!(starts[0], 300.0);
        assert_eq!(starts[1], 850.0);
        assert_eq!(starts[2], 1400.0);
        assert!(starts.windows(2).all(|w| w[1] - w[0] == 550.0));
    }

    #[test]
    fn quad_z_is_exactly_bottom_or_top() {
        let run = reference_run();
        for quad in generate_lace_quads(&run) {
            let z = quad.corners[0].z;
            assert!(z == run.z_bottom || z == run.z_top);
            assert!(quad.corners.iter().all(|c| c.z == z));
        }
    }

    #[test]
    fn bay_starts_strictly_increase() {
        let quads = generate_lace_quads(&reference_run());
        let starts: Vec<f64> = bays(&quads).iter().map(|q| q.corners[0].x).collect();
        assert!(starts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn identical_runs_yield_identical_sequences() {
        let run = reference_run();
        assert_eq!(generate_lace_quads(&run), generate_lace_quads(&run));
    }

    #[test]
    fn short_span_yields_empty_sequence() {
        let mut run = reference_run();
        run.end_height = run.start_height + run.vertical_gap;
        assert!(generate_lace_quads(&run).is_empty());

        run.end_height = run.start_height + run.vertical_gap - 1.0;
        assert!(generate_lace_quads(&run).is_empty());

        assert_eq!(bay_count(300.0, 750.0, 450.0, 100.0), 0);
        assert_eq!(brace_count(300.0, 750.0, 450.0, 100.0), 0);
    }

    #[test]
    fn last_bay_drops_brace_that_would_overrun() {
        // One bay fits, the brace after it would end exactly at end_height
        let run = LaceRun {
            start_height: 0.0,
            end_height: 550.0,
            vertical_gap: 450.0,
            lace_projected_height: 70.71,
            horizontal_width: 100.0,
            start_offset: 0.0,
            end_offset: 430.0,
            z_bottom: -8.0,
            z_top: 200.0,
        };
        let quads = generate_lace_quads(&run);
        assert_eq!(quads.len(), 2);
        assert!(quads.iter().all(|q| q.kind == LaceKind::Diagonal));
    }

    #[test]
    fn closed_form_counts_match_generated_sequence() {
        let cases = [
            (300.0, 5200.0, 450.0, 100.0),
            (300.0, 11300.0, 450.0, 100.0),
            (0.0, 1000.0, 120.0, 30.0),
            (50.0, 5000.0, 433.0, 97.0),
            (0.0, 550.0, 450.0, 100.0),
            (0.0, 100.0, 450.0, 100.0),
        ];
        for (start, end, gap, width) in cases {
            let run = LaceRun {
                start_height: start,
                end_height: end,
                vertical_gap: gap,
                lace_projected_height: gap / 4.0,
                horizontal_width: width,
                start_offset: 0.0,
                end_offset: 430.0,
                z_bottom: -8.0,
                z_top: 200.0,
            };
            let quads = generate_lace_quads(&run);
            let diagonals = quads.iter().filter(|q| q.kind == LaceKind::Diagonal).count();
            let braces = quads.iter().filter(|q| q.kind == LaceKind::Horizontal).count();
            assert_eq!(diagonals, 2 * bay_count(start, end, gap, width), "bays for {:?}", (start, end));
            assert_eq!(braces, 2 * brace_count(start, end, gap, width), "braces for {:?}", (start, end));
        }
    }
}
