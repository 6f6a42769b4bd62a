//! Number formatting for expansion-factor labels and comparison file names.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("an expansion factor sweep needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("minimum expansion factor {min} must be less than maximum {max}")]
    EmptyRange { min: f64, max: f64 },
}

/// Format with six decimals, then cut trailing zeros while keeping the
/// decimal point: `1.03 → "1.03"`, `2.0 → "2."`.
pub fn find_sig_fig(number: f64) -> String {
    let text = format!("{number:.6}");
    let keep = text
        .char_indices()
        .skip(1)
        .filter(|&(_, c)| c != '0')
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(1);
    text[..keep].to_string()
}

/// Fixed-point formatting with `dp` decimals.
pub fn format_to_decimal_places(value: f64, dp: usize) -> String {
    format!("{value:.dp$}")
}

/// Round to the fewest decimals (below `max_dp`) at which one more decimal
/// would not change the value: `2.50003 → "2.5"`, `2.05 → "2"`.
pub fn remove_trailing_decimal_places(value: f64, max_dp: usize) -> String {
    let fallback = max_dp.saturating_sub(1);
    let dp = (0..fallback)
        .find(|&i| {
            let coarse: f64 = format_to_decimal_places(value, i).parse().unwrap_or(f64::NAN);
            let fine: f64 = format_to_decimal_places(value, i + 1).parse().unwrap_or(f64::NAN);
            coarse == fine
        })
        .unwrap_or(fallback);
    format_to_decimal_places(value, dp)
}

/// `n` evenly spaced expansion factors from `min` to `max` inclusive.
pub fn expansion_factor_sweep(min: f64, max: f64, n: usize) -> Result<Vec<f64>, SweepError> {
    if n < 2 {
        return Err(SweepError::TooFewPoints(n));
    }
    if min.is_nan() || max.is_nan() || min >= max {
        return Err(SweepError::EmptyRange { min, max });
    }
    let step = (max - min) / (n - 1) as f64;
    Ok((0..n).map(|i| min + i as f64 * step).collect())
}

/// File name of a comparison table covering `n` expansion factors.
pub fn comparison_file_name(n: usize, min: f64, max: f64) -> String {
    format!("Comparison_{n}_{}_{}.csv", find_sig_fig(min), find_sig_fig(max))
}

/// The plot image written next to an input table.
pub fn png_path_for(input: &Path) -> PathBuf {
    input.with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sig_fig_drops_trailing_zeros_only() {
        assert_eq!(find_sig_fig(1.03), "1.03");
        assert_eq!(find_sig_fig(1.04), "1.04");
        assert_eq!(find_sig_fig(2.0), "2.");
        assert_eq!(find_sig_fig(10.5), "10.5");
        assert_eq!(find_sig_fig(0.000001), "0.000001");
        assert_eq!(find_sig_fig(0.0), "0.");
    }

    #[test]
    fn trailing_decimal_places_are_removed() {
        assert_eq!(remove_trailing_decimal_places(2.50003, 3), "2.5");
        assert_eq!(remove_trailing_decimal_places(2.05, 3), "2");
        assert_eq!(remove_trailing_decimal_places(2.3434, 3), "2.34");
        assert_eq!(remove_trailing_decimal_places(42.0, 3), "42");
        assert_eq!(remove_trailing_decimal_places(0.01, 3), "0");
    }

    #[test]
    fn sweep_is_inclusive_and_validated() {
        let sweep = expansion_factor_sweep(1.0, 1.3, 4).unwrap();
        assert_eq!(sweep.len(), 4);
        assert_eq!(sweep[0], 1.0);
        assert!((sweep[3] - 1.3).abs() < 1e-12);

        assert_eq!(expansion_factor_sweep(1.0, 2.0, 1), Err(SweepError::TooFewPoints(1)));
        assert!(matches!(
            expansion_factor_sweep(2.0, 1.0, 3),
            Err(SweepError::EmptyRange { .. })
        ));
    }

    #[test]
    fn comparison_names_follow_convention() {
        assert_eq!(comparison_file_name(4, 1.03, 1.04), "Comparison_4_1.03_1.04.csv");
        assert_eq!(
            png_path_for(Path::new("Correlation/Comparison_4_1.03_1.04.csv")),
            PathBuf::from("Correlation/Comparison_4_1.03_1.04.png")
        );
    }
}
