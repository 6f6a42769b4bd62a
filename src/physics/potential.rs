/// Potential of a point mass at the box centre, sampled along the x axis
/// through the centre, counting `images` periodic copies on each side.
///
/// With `images == 1` this is the three-source approximation
/// `-m (1/dx1 + 1/dx2 + 1/dx3)`. The centre cell is singular and is left out,
/// so the result has `n_cells - 1` values.
pub fn point_mass_potential(mass: f64, width: f64, n_cells: usize, images: usize) -> Vec<f64> {
    if n_cells == 0 {
        return Vec::new();
    }
    let cell_width = width / n_cells as f64;
    let centre = (n_cells / 2) as i64;
    let n = n_cells as i64;
    let images = images as i64;

    (0..n)
        .filter(|&i| i != centre)
        .map(|i| {
            let sum: f64 = (-images..=images)
                .map(|k| {
                    let dx = (i - (centre + k * n)).abs() as f64 * cell_width;
                    1.0 / dx
                })
                .sum();
            -mass * sum
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_source_approximation() {
        let pot = point_mass_potential(0.01, 100.0, 101, 1);
        assert_eq!(pot.len(), 100);
        // index 0: dx = 50, 151, 51 cells
        let w = 100.0 / 101.0;
        let expected = -0.01 * (1.0 / (50.0 * w) + 1.0 / (151.0 * w) + 1.0 / (51.0 * w));
        assert!((pot[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn potential_is_symmetric_and_deepest_near_centre() {
        let pot = point_mass_potential(1.0, 1.0, 11, 3);
        assert_eq!(pot.len(), 10);
        for i in 0..5 {
            assert!((pot[i] - pot[9 - i]).abs() < 1e-9);
        }
        assert!(pot[4] < pot[0]);
        assert!(pot.iter().all(|v| *v < 0.0));
    }

    #[test]
    fn more_images_deepen_the_well() {
        let near = point_mass_potential(1.0, 1.0, 21, 1);
        let far = point_mass_potential(1.0, 1.0, 21, 4);
        assert!(near.iter().zip(&far).all(|(a, b)| b < a));
    }
}
