/// `n` bin centres evenly covering `[0, max)`: `x_i = i*step + step/2`
/// with `step = max / n`.
pub fn bin_centres(n: usize, max: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = max / n as f64;
    (0..n).map(|i| i as f64 * step + step / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_are_half_step_shifted() {
        let xs = bin_centres(5, 0.5);
        assert_eq!(xs.len(), 5);
        let step = 0.1;
        for (i, x) in xs.iter().enumerate() {
            assert!((x - (i as f64 * step + step / 2.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn centres_stay_inside_range() {
        let xs = bin_centres(100, 0.5);
        assert!(xs[0] > 0.0);
        assert!(*xs.last().unwrap() < 0.5);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_rows_no_centres() {
        assert!(bin_centres(0, 0.5).is_empty());
    }
}
