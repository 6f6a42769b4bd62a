use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

// ---------------------------------------------------------------------------
// Output helpers
// ---------------------------------------------------------------------------

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Correlation comparison CSV
// ---------------------------------------------------------------------------

/// Write one correlation function per column under the given labels.
///
/// The row count follows the first column; a shorter column leaves its
/// remaining cells empty.
pub fn save_correlations_csv(columns: &[Vec<f64>], labels: &[String], path: &Path) -> Result<()> {
    let Some(first) = columns.first() else {
        bail!("no correlation columns to write");
    };
    if columns.len() != labels.len() {
        bail!(
            "{} columns but {} labels",
            columns.len(),
            labels.len()
        );
    }

    ensure_parent_dir(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;

    writer.write_record(labels).context("writing CSV header")?;
    for row in 0..first.len() {
        let record: Vec<String> = columns
            .iter()
            .map(|col| col.get(row).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing CSV")?;

    info!(
        "wrote {} correlation columns x {} rows to {}",
        columns.len(),
        first.len(),
        path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Potential comparison text file
// ---------------------------------------------------------------------------

/// Write `measured expected` pairs, one index per line.
pub fn save_potential_txt(measured: &[f64], expected: &[f64], path: &Path) -> Result<()> {
    if measured.len() != expected.len() {
        bail!(
            "measured has {} values but expected has {}",
            measured.len(),
            expected.len()
        );
    }

    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for (m, e) in measured.iter().zip(expected) {
        writeln!(out, "{m} {e}")?;
    }
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    info!("wrote {} potential samples to {}", measured.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_correlation_csv, load_sample_pair};

    #[test]
    fn correlations_round_trip_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("Comparison.csv");
        let columns = vec![
            vec![f64::INFINITY, 1.5, -0.25],
            vec![f64::INFINITY, 2.5, f64::NEG_INFINITY],
        ];
        let labels = vec!["1.03".to_string(), "1.04".to_string()];
        save_correlations_csv(&columns, &labels, &path).unwrap();

        let table = load_correlation_csv(&path, 1).unwrap();
        assert_eq!(table.columns, labels);
        assert_eq!(table.values[0], vec![1.5, -0.25]);
        assert_eq!(table.values[1], vec![2.5, f64::NEG_INFINITY]);
    }

    #[test]
    fn short_column_leaves_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        let columns = vec![vec![1.0, 2.0], vec![3.0]];
        let labels = vec!["a".to_string(), "b".to_string()];
        save_correlations_csv(&columns, &labels, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "a,b\n1,3\n2,\n");
    }

    #[test]
    fn empty_or_mislabelled_columns_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.csv");
        assert!(save_correlations_csv(&[], &[], &path).is_err());
        assert!(save_correlations_csv(&[vec![1.0]], &[], &path).is_err());
    }

    #[test]
    fn potential_round_trip_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        save_potential_txt(&[1.0, 2.0, 3.0], &[1.1, 2.1, 3.1], &path).unwrap();

        let pair = load_sample_pair(&path).unwrap();
        assert_eq!(pair.measured, vec![1.0, 2.0, 3.0]);
        assert_eq!(pair.expected, vec![1.1, 2.1, 3.1]);
    }

    #[test]
    fn potential_rejects_unequal_lengths() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_potential_txt(&[1.0], &[], &dir.path().join("p.txt")).is_err());
    }
}
