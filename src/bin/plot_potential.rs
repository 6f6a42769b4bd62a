use std::path::Path;

use nbody_plots::config::{POTENTIAL_INPUT, POTENTIAL_OUTPUT};
use nbody_plots::jobs::plot_potential_comparison;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    plot_potential_comparison(Path::new(POTENTIAL_INPUT), Path::new(POTENTIAL_OUTPUT))?;
    Ok(())
}
