use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParticleError {
    #[error("coordinate {0} is outside the unit box")]
    OutOfBounds(f64),
}

// ---------------------------------------------------------------------------
// Particle
// ---------------------------------------------------------------------------

/// Position and velocity of a single particle in the periodic unit box.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl Particle {
    /// Place a particle at rest. Each coordinate must lie in `[0, 1]`; a
    /// coordinate of exactly `1.0` is the same point as `0.0` and is stored as such.
    pub fn new(position: [f64; 3]) -> Result<Self, ParticleError> {
        let mut wrapped = position;
        for coord in &mut wrapped {
            if !(0.0..=1.0).contains(coord) {
                return Err(ParticleError::OutOfBounds(*coord));
            }
            if *coord == 1.0 {
                *coord = 0.0;
            }
        }
        Ok(Particle {
            position: wrapped,
            velocity: [0.0; 3],
        })
    }
}

// ---------------------------------------------------------------------------
// ParticleGroup
// ---------------------------------------------------------------------------

/// Equal-mass particles sharing one box.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleGroup {
    pub mass: f64,
    pub particles: Vec<Particle>,
}

impl ParticleGroup {
    /// Build a group from explicit positions, validating each one.
    pub fn from_positions(mass: f64, positions: &[[f64; 3]]) -> Result<Self, ParticleError> {
        let particles = positions
            .iter()
            .map(|&p| Particle::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParticleGroup { mass, particles })
    }

    /// `count` particles uniformly distributed over `[0, 1)^3`.
    pub fn random(mass: f64, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                position: [rng.gen(), rng.gen(), rng.gen()],
                velocity: [0.0; 3],
            })
            .collect();
        ParticleGroup { mass, particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_edge_wraps_to_zero() {
        let p = Particle::new([1.0, 0.5, 0.0]).unwrap();
        assert_eq!(p.position, [0.0, 0.5, 0.0]);
        assert_eq!(p.velocity, [0.0; 3]);
    }

    #[test]
    fn out_of_box_coordinates_are_rejected() {
        assert_eq!(
            Particle::new([0.5, 1.5, 0.5]),
            Err(ParticleError::OutOfBounds(1.5))
        );
        assert!(Particle::new([-0.1, 0.5, 0.5]).is_err());
        assert!(Particle::new([f64::NAN, 0.5, 0.5]).is_err());
    }

    #[test]
    fn explicit_positions_are_validated() {
        let ok = ParticleGroup::from_positions(1.0, &[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(ParticleGroup::from_positions(1.0, &[[0.1, 0.2, 2.0]]).is_err());
    }

    #[test]
    fn random_groups_are_reproducible() {
        let a = ParticleGroup::random(1.0, 50, 42);
        let b = ParticleGroup::random(1.0, 50, 42);
        let c = ParticleGroup::random(1.0, 50, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a
            .particles
            .iter()
            .flat_map(|p| p.position)
            .all(|x| (0.0..1.0).contains(&x)));
    }
}
