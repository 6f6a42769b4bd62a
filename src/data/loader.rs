use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use super::model::{CorrelationTable, SamplePair};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a correlation comparison table.
///
/// CSV layout: header row of column labels, then one row per radial bin.
/// Every cell must be a float (`inf`, `-inf` and `NaN` included); an empty
/// cell reads as `NaN`. The first `skip_rows` data rows are dropped.
/// Header labels are kept verbatim, surrounding whitespace included.
pub fn load_correlation_csv(path: &Path, skip_rows: usize) -> Result<CorrelationTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() {
        bail!("{}: CSV has no columns", path.display());
    }

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if row_no < skip_rows {
            continue;
        }
        for (col_idx, cell) in record.iter().enumerate() {
            values[col_idx].push(parse_cell(cell, row_no, &columns[col_idx])?);
        }
    }

    debug!(
        "loaded {} columns x {} rows from {}",
        columns.len(),
        values[0].len(),
        path.display()
    );

    Ok(CorrelationTable {
        columns,
        values,
        first_row: skip_rows,
    })
}

fn parse_cell(cell: &str, row: usize, col: &str) -> Result<f64> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .with_context(|| format!("Row {row}, column '{col}': '{cell}' is not a number"))
}

// ---------------------------------------------------------------------------
// Whitespace text loader
// ---------------------------------------------------------------------------

/// Load a measured/expected pair from a whitespace-delimited text file.
///
/// Two layouts are understood:
/// * one line per index with two values (`measured expected`), as written by
///   [`super::writer::save_potential_txt`];
/// * exactly two lines of equal length, one sequence per line.
///
/// Blank lines and `#` comments are ignored.
pub fn load_sample_pair(path: &Path) -> Result<SamplePair> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_sample_pair(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the text body of a sample pair file. See [`load_sample_pair`].
pub fn parse_sample_pair(text: &str) -> Result<SamplePair> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .enumerate()
            .map(|(j, tok)| {
                tok.parse::<f64>().with_context(|| {
                    format!("line {}, value {j}: '{tok}' is not a number", line_no + 1)
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("no numeric data");
    }

    let width = rows[0].len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        bail!(
            "ragged data: row 0 has {width} values but row {i} has {}",
            row.len()
        );
    }

    if width == 2 {
        let measured = rows.iter().map(|r| r[0]).collect();
        let expected = rows.iter().map(|r| r[1]).collect();
        return Ok(SamplePair { measured, expected });
    }

    if rows.len() == 2 {
        let expected = rows.pop().unwrap_or_default();
        let measured = rows.pop().unwrap_or_default();
        return Ok(SamplePair { measured, expected });
    }

    bail!(
        "expected two sequences, got {} rows of {width} values",
        rows.len()
    )
}
