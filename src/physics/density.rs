use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use log::info;

use super::particles::ParticleGroup;
use crate::data::writer::ensure_parent_dir;

/// Particle counts on an `n_cells`³ grid, summed along z.
///
/// Returns a row-major `n_cells × n_cells` map indexed `[x * n_cells + y]`.
pub fn projected_density(group: &ParticleGroup, n_cells: usize) -> Vec<f64> {
    if n_cells == 0 {
        return Vec::new();
    }
    let mut map = vec![0.0; n_cells * n_cells];
    let cell = |coord: f64| ((coord * n_cells as f64) as usize).min(n_cells - 1);
    for p in &group.particles {
        let (i, j) = (cell(p.position[0]), cell(p.position[1]));
        map[i * n_cells + j] += 1.0;
    }
    map
}

/// Map a mean-normalised density (mean = 255) onto a black → red → yellow → white ramp.
fn density_colour(v: f64) -> Rgb<u8> {
    let channel = |offset: f64| (v - offset).clamp(0.0, 255.0) as u8;
    Rgb([channel(0.0), channel(255.0), channel(550.0)])
}

/// Render the z-projected density of `group` to an image file.
pub fn save_density_projection(group: &ParticleGroup, n_cells: usize, path: &Path) -> Result<()> {
    if n_cells == 0 {
        bail!("density projection needs at least one cell");
    }
    if group.is_empty() {
        bail!("density projection of an empty particle group");
    }

    let map = projected_density(group, n_cells);
    let mean = map.iter().sum::<f64>() / map.len() as f64;
    let norm = 255.0 / mean;

    let side = u32::try_from(n_cells).context("grid too large for an image")?;
    let img = RgbImage::from_fn(side, side, |x, y| {
        // rows of the image walk the first grid axis
        density_colour(map[y as usize * n_cells + x as usize] * norm)
    });

    ensure_parent_dir(path)?;
    img.save(path)
        .with_context(|| format!("writing density image {}", path.display()))?;
    info!("wrote {n_cells}x{n_cells} density projection to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_sums_over_z() {
        let group = ParticleGroup::from_positions(
            1.0,
            &[[0.1, 0.1, 0.1], [0.1, 0.1, 0.9], [0.9, 0.1, 0.5]],
        )
        .unwrap();
        let map = projected_density(&group, 2);
        assert_eq!(map, vec![2.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn colour_ramp_saturates_in_order() {
        assert_eq!(density_colour(0.0), Rgb([0, 0, 0]));
        assert_eq!(density_colour(255.0), Rgb([255, 0, 0]));
        assert_eq!(density_colour(400.0), Rgb([255, 145, 0]));
        assert_eq!(density_colour(1000.0), Rgb([255, 255, 255]));
    }

    #[test]
    fn writes_png_of_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("density").join("frame.png");
        let group = ParticleGroup::random(1.0, 500, 7);
        save_density_projection(&group, 16, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (16, 16));
    }

    #[test]
    fn rejects_degenerate_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("d.png");
        let empty = ParticleGroup::from_positions(1.0, &[]).unwrap();
        assert!(save_density_projection(&empty, 8, &path).is_err());
        let group = ParticleGroup::random(1.0, 10, 1);
        assert!(save_density_projection(&group, 0, &path).is_err());
    }
}
