//! Fixed inputs, outputs and plot parameters.
//!
//! None of these are exposed as flags; the binaries pass them straight to the
//! job functions in [`crate::jobs`].

use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Correlation comparison
// ---------------------------------------------------------------------------

/// Directory holding the correlation comparison tables and their plots.
pub const CORRELATION_DIR: &str = "Correlation";

/// Stem of the comparison table rendered by both correlation plotters.
pub const CORRELATION_FILE_STEM: &str = "Comparison_4_1.03_1.04";

/// Leading data rows dropped from a comparison table (bin 0 is infinite).
pub const CORRELATION_SKIP_ROWS: usize = 1;

/// Prefix of every series label in the correlation plots.
pub const EXPANSION_LABEL_PREFIX: &str = "Expansion Factor: ";

pub const CORRELATION_TITLE: &str = "Correlation/Correlation Plots for Different Expansion Factors";

pub const RADIAL_CORRELATION_TITLE: &str =
    "Radial Correlation Function for Different Expansion Factors";
pub const RADIAL_X_LABEL: &str = "Radial Bin";
pub const RADIAL_Y_LABEL: &str = "Radial Correlation Function";

/// Upper (exclusive) bound of the radial axis, in box widths.
pub const RADIAL_MAX: f64 = 0.5;

/// Default figure size in pixels (6.4 x 4.8 in at 100 dpi).
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (640, 480);

// ---------------------------------------------------------------------------
// Potential comparison
// ---------------------------------------------------------------------------

pub const POTENTIAL_INPUT: &str = "test.txt";
pub const POTENTIAL_OUTPUT: &str = "test_potential/plot.png";

pub const POTENTIAL_TITLE: &str = "Comparison of analytic potential vs particle mesh potential";
pub const POTENTIAL_X_LABEL: &str = "X index";
pub const POTENTIAL_Y_LABEL: &str = "Potential Value";
pub const MEASURED_LABEL: &str = "potential function";
pub const EXPECTED_LABEL: &str = "expected potential function";

pub const POTENTIAL_FIGURE_SIZE: (u32, u32) = (800, 600);

// ---------------------------------------------------------------------------
// Sample generation
// ---------------------------------------------------------------------------

/// At most this many particles take part in the pair count.
pub const CORRELATION_SAMPLE_CAP: usize = 1000;

/// Histogram resolution used when writing comparison tables.
pub const CORRELATION_BINS: usize = 101;

/// Seed of the first sample particle group; later groups count up from it.
pub const SAMPLE_SEED: u64 = 42;

/// Expansion factors swept by the sample comparison table.
pub const SAMPLE_EXPANSION_RANGE: (f64, f64) = (1.03, 1.04);
pub const SAMPLE_EXPANSION_COUNT: usize = 4;

pub const SAMPLE_PARTICLES: usize = 2000;

/// Total mass shared out over the sample particles.
pub const SAMPLE_TOTAL_MASS: f64 = 1.0e5;

/// Grid resolution of the sample density projection.
pub const SAMPLE_DENSITY_CELLS: usize = 64;
pub const SAMPLE_DENSITY_OUTPUT: &str = "density/projection.png";

/// Point mass, box width and grid of the sample potential profile.
pub const SAMPLE_POINT_MASS: f64 = 0.01;
pub const SAMPLE_BOX_WIDTH: f64 = 100.0;
pub const SAMPLE_POTENTIAL_CELLS: usize = 101;
/// Periodic images per side for the measured and expected profiles.
pub const SAMPLE_MEASURED_IMAGES: usize = 4;
pub const SAMPLE_EXPECTED_IMAGES: usize = 1;

/// Path of the correlation comparison table.
pub fn correlation_input() -> PathBuf {
    Path::new(CORRELATION_DIR).join(format!("{CORRELATION_FILE_STEM}.csv"))
}

/// Plot against radial bins, kept apart from the row-position plot.
pub fn radial_correlation_output() -> PathBuf {
    Path::new(CORRELATION_DIR).join(format!("{CORRELATION_FILE_STEM}_radial.png"))
}
