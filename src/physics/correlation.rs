use std::f64::consts::PI;

use thiserror::Error;

use super::particles::ParticleGroup;
use crate::config::{CORRELATION_SAMPLE_CAP, RADIAL_MAX};

#[derive(Debug, Error, PartialEq)]
pub enum CorrelationError {
    #[error("correlation function requires a positive number of bins")]
    NoBins,
}

/// Shortest separation of two coordinates on the periodic unit interval.
fn minimum_image(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    if d < 0.5 {
        d
    } else {
        1.0 - d
    }
}

/// Log radial correlation function over `0 <= r < 0.5`, `n_bins` bins wide.
///
/// Pairs are drawn from the first [`CORRELATION_SAMPLE_CAP`] particles and
/// include each particle paired with itself, so bin 0 is always `+inf`.
/// Bins that receive no pairs are `-inf`.
pub fn correlation_function(
    group: &ParticleGroup,
    n_bins: usize,
) -> Result<Vec<f64>, CorrelationError> {
    if n_bins == 0 {
        return Err(CorrelationError::NoBins);
    }

    let mut bins = vec![0.0f64; n_bins];
    let sample = &group.particles[..group.len().min(CORRELATION_SAMPLE_CAP)];
    let n = sample.len() as f64;
    let scale = n_bins as f64 / RADIAL_MAX;

    for (i, a) in sample.iter().enumerate() {
        for b in &sample[i..] {
            let dx = minimum_image(a.position[0], b.position[0]);
            let dy = minimum_image(a.position[1], b.position[1]);
            let dz = minimum_image(a.position[2], b.position[2]);
            let r = (dx * dx + dy * dy + dz * dz).sqrt();
            if r < RADIAL_MAX {
                let idx = ((r * scale) as usize).min(n_bins - 1);
                bins[idx] += 1.0 / (n * 4.0 * PI * r * r);
            }
        }
    }

    Ok(bins.into_iter().map(f64::ln).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bins_is_an_error() {
        let group = ParticleGroup::random(1.0, 4, 1);
        assert_eq!(correlation_function(&group, 0), Err(CorrelationError::NoBins));
    }

    #[test]
    fn self_pairs_make_first_bin_infinite() {
        let group = ParticleGroup::random(1.0, 200, 42);
        let cr = correlation_function(&group, 101).unwrap();
        assert_eq!(cr.len(), 101);
        assert_eq!(cr[0], f64::INFINITY);
        assert!(cr[1..].iter().all(|v| !v.is_nan()));
        assert!(cr[50].is_finite());
    }

    #[test]
    fn separation_uses_minimum_image() {
        assert!((minimum_image(0.05, 0.95) - 0.1).abs() < 1e-12);
        assert!((minimum_image(0.2, 0.4) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn single_pair_lands_in_expected_bin() {
        // r = 0.25 → bin floor(0.25 * 10 * 2) = 5
        let group =
            ParticleGroup::from_positions(1.0, &[[0.0, 0.0, 0.0], [0.25, 0.0, 0.0]]).unwrap();
        let cr = correlation_function(&group, 10).unwrap();
        let expected = (1.0 / (2.0 * 4.0 * PI * 0.25 * 0.25)).ln();
        assert!((cr[5] - expected).abs() < 1e-9);
        for (i, v) in cr.iter().enumerate() {
            if i != 0 && i != 5 {
                assert_eq!(*v, f64::NEG_INFINITY);
            }
        }
    }
}
