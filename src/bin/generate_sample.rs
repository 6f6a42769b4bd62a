use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use nbody_plots::config::{
    CORRELATION_BINS, CORRELATION_DIR, POTENTIAL_INPUT, SAMPLE_BOX_WIDTH, SAMPLE_DENSITY_CELLS,
    SAMPLE_DENSITY_OUTPUT, SAMPLE_EXPANSION_COUNT, SAMPLE_EXPANSION_RANGE, SAMPLE_EXPECTED_IMAGES,
    SAMPLE_MEASURED_IMAGES, SAMPLE_PARTICLES, SAMPLE_POINT_MASS, SAMPLE_POTENTIAL_CELLS,
    SAMPLE_SEED, SAMPLE_TOTAL_MASS,
};
use nbody_plots::data::writer::{save_correlations_csv, save_potential_txt};
use nbody_plots::labels::{comparison_file_name, expansion_factor_sweep, find_sig_fig};
use nbody_plots::physics::correlation::correlation_function;
use nbody_plots::physics::density::save_density_projection;
use nbody_plots::physics::particles::ParticleGroup;
use nbody_plots::physics::potential::point_mass_potential;

fn write_correlation_table() -> Result<PathBuf> {
    let (min, max) = SAMPLE_EXPANSION_RANGE;
    let factors = expansion_factor_sweep(min, max, SAMPLE_EXPANSION_COUNT)?;
    let mass = SAMPLE_TOTAL_MASS / SAMPLE_PARTICLES as f64;

    let mut columns = Vec::with_capacity(factors.len());
    let mut labels = Vec::with_capacity(factors.len());
    for (seed, factor) in (SAMPLE_SEED..).zip(&factors) {
        let group = ParticleGroup::random(mass, SAMPLE_PARTICLES, seed);
        columns.push(correlation_function(&group, CORRELATION_BINS)?);
        labels.push(find_sig_fig(*factor));
    }

    let path = Path::new(CORRELATION_DIR).join(comparison_file_name(factors.len(), min, max));
    save_correlations_csv(&columns, &labels, &path)?;
    Ok(path)
}

fn write_potential_profile() -> Result<()> {
    let measured = point_mass_potential(
        SAMPLE_POINT_MASS,
        SAMPLE_BOX_WIDTH,
        SAMPLE_POTENTIAL_CELLS,
        SAMPLE_MEASURED_IMAGES,
    );
    let expected = point_mass_potential(
        SAMPLE_POINT_MASS,
        SAMPLE_BOX_WIDTH,
        SAMPLE_POTENTIAL_CELLS,
        SAMPLE_EXPECTED_IMAGES,
    );
    save_potential_txt(&measured, &expected, Path::new(POTENTIAL_INPUT))
}

fn main() -> Result<()> {
    env_logger::init();

    let table = write_correlation_table()?;
    write_potential_profile()?;

    let mass = SAMPLE_TOTAL_MASS / SAMPLE_PARTICLES as f64;
    let group = ParticleGroup::random(mass, SAMPLE_PARTICLES, SAMPLE_SEED);
    save_density_projection(&group, SAMPLE_DENSITY_CELLS, Path::new(SAMPLE_DENSITY_OUTPUT))?;

    info!(
        "sample inputs ready: {} and {POTENTIAL_INPUT}",
        table.display()
    );
    Ok(())
}
