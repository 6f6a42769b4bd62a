use nbody_plots::config::correlation_input;
use nbody_plots::jobs::plot_correlation_comparison;
use nbody_plots::labels::png_path_for;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = correlation_input();
    plot_correlation_comparison(&input, &png_path_for(&input))?;
    Ok(())
}
