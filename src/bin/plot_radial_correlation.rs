use nbody_plots::config::{correlation_input, radial_correlation_output};
use nbody_plots::jobs::plot_radial_correlation;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    plot_radial_correlation(&correlation_input(), &radial_correlation_output())?;
    Ok(())
}
