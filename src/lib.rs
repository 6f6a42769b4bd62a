//! Static plots of correlation and potential comparisons from particle mesh
//! N-body runs, plus the utilities that produce their input files.
//!
//! Binaries under `src/bin/`:
//! * `plot_correlation`: comparison table against row position
//! * `plot_radial_correlation`: comparison table against radial bin centres
//! * `plot_potential`: measured vs expected potential
//! * `generate_sample`: writes demo inputs for the three plotters

pub mod color;
pub mod config;
pub mod data;
pub mod jobs;
pub mod labels;
pub mod physics;
pub mod plot;
