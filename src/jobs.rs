//! The three plotting procedures: load a file, describe the figure, write it.
//!
//! Each `*_chart` function is the pure part and each `plot_*` function adds
//! the file I/O around it.

use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::config::{
    CORRELATION_SKIP_ROWS, CORRELATION_TITLE, DEFAULT_FIGURE_SIZE, EXPANSION_LABEL_PREFIX,
    EXPECTED_LABEL, MEASURED_LABEL, POTENTIAL_FIGURE_SIZE, POTENTIAL_TITLE, POTENTIAL_X_LABEL,
    POTENTIAL_Y_LABEL, RADIAL_CORRELATION_TITLE, RADIAL_MAX, RADIAL_X_LABEL, RADIAL_Y_LABEL,
};
use crate::data::loader::{load_correlation_csv, load_sample_pair};
use crate::data::model::{CorrelationTable, SamplePair};
use crate::plot::axis::bin_centres;
use crate::plot::chart::{ChartError, LineChart, Series};
use crate::plot::render::render_png;

fn expansion_label(column: &str) -> String {
    format!("{EXPANSION_LABEL_PREFIX}{column}")
}

// ---------------------------------------------------------------------------
// Correlation comparison, plotted against row position
// ---------------------------------------------------------------------------

/// One series per column against its row position in the file.
pub fn correlation_chart(table: &CorrelationTable) -> LineChart {
    let mut chart = LineChart::new(CORRELATION_TITLE, DEFAULT_FIGURE_SIZE)
        .with_legend()
        .with_grid();
    for (name, values) in table.iter_columns() {
        chart.push(Series::indexed(expansion_label(name), table.first_row, values));
    }
    chart
}

pub fn plot_correlation_comparison(input: &Path, output: &Path) -> Result<LineChart> {
    info!("plotting correlation comparison {}", input.display());
    let table = load_correlation_csv(input, CORRELATION_SKIP_ROWS)?;
    if table.is_empty() {
        warn!("{} has no rows after skipping the first", input.display());
    }
    let chart = correlation_chart(&table);
    render_png(&chart, output)?;
    Ok(chart)
}

// ---------------------------------------------------------------------------
// Correlation comparison, plotted against radial bin centres
// ---------------------------------------------------------------------------

/// One series per column against the bin centres of `[0, 0.5)`.
///
/// Fails if a column's length differs from the table's row count.
pub fn radial_correlation_chart(table: &CorrelationTable) -> Result<LineChart, ChartError> {
    let radii = bin_centres(table.row_count(), RADIAL_MAX);
    let mut chart = LineChart::new(RADIAL_CORRELATION_TITLE, DEFAULT_FIGURE_SIZE)
        .axis_labels(RADIAL_X_LABEL, RADIAL_Y_LABEL)
        .with_legend()
        .with_grid();
    for (name, values) in table.iter_columns() {
        chart.push(Series::paired(expansion_label(name), &radii, values)?);
    }
    Ok(chart)
}

pub fn plot_radial_correlation(input: &Path, output: &Path) -> Result<LineChart> {
    info!("plotting radial correlation {}", input.display());
    let table = load_correlation_csv(input, CORRELATION_SKIP_ROWS)?;
    let chart = radial_correlation_chart(&table)?;
    render_png(&chart, output)?;
    Ok(chart)
}

// ---------------------------------------------------------------------------
// Potential comparison
// ---------------------------------------------------------------------------

/// Measured and expected potential against their shared index.
pub fn potential_chart(pair: &SamplePair) -> Result<LineChart, ChartError> {
    if pair.measured.len() != pair.expected.len() {
        return Err(ChartError::LengthMismatch {
            label: EXPECTED_LABEL.to_string(),
            x_len: pair.measured.len(),
            y_len: pair.expected.len(),
        });
    }
    let mut chart = LineChart::new(POTENTIAL_TITLE, POTENTIAL_FIGURE_SIZE)
        .axis_labels(POTENTIAL_X_LABEL, POTENTIAL_Y_LABEL)
        .with_legend()
        .with_grid();
    chart.push(Series::indexed(MEASURED_LABEL, 0, &pair.measured));
    chart.push(Series::indexed(EXPECTED_LABEL, 0, &pair.expected));
    Ok(chart)
}

pub fn plot_potential_comparison(input: &Path, output: &Path) -> Result<LineChart> {
    info!("plotting potential comparison {}", input.display());
    let pair = load_sample_pair(input)?;
    let chart = potential_chart(&pair)?;
    render_png(&chart, output)?;
    Ok(chart)
}
