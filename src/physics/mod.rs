//! Particle data and the measurements taken from it before plotting.

pub mod correlation;
pub mod density;
pub mod particles;
pub mod potential;
