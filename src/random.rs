//! Random sampling for particle spawning.
//!
//! Spawning draws every per-particle attribute from a normal distribution.
//! The [`GaussianSource`] trait is the seam: generators own a boxed source,
//! so tests and replays can substitute a deterministic one.
//!
//! # Example
//!
//! ```ignore
//! use rtp_particles::random::{GaussianRng, GaussianSource};
//!
//! let mut rng = GaussianRng::seed_from_u64(7);
//! let lifespan = rng.next_gaussian(1000.0, 150.0);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// A source of normally distributed samples.
pub trait GaussianSource: Send {
    /// Draw one sample from `N(mean, std_dev²)`.
    fn next_gaussian(&mut self, mean: f32, std_dev: f32) -> f32;
}

/// Default Gaussian sampler: Box–Muller transform over a [`SmallRng`].
///
/// Box–Muller yields samples in pairs; the second one is cached and returned
/// by the next call.
#[derive(Debug, Clone)]
pub struct GaussianRng {
    rng: SmallRng,
    spare: Option<f32>,
}

impl GaussianRng {
    /// Create a sampler seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            spare: None,
        }
    }

    /// Create a reproducible sampler.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            spare: None,
        }
    }

    /// Draw one standard normal sample (mean 0, deviation 1).
    pub fn standard_normal(&mut self) -> f32 {
        if let Some(z) = self.spare.take() {
            return z;
        }

        // u1 in (0, 1] so ln(u1) stays finite
        let u1 = 1.0 - self.rng.gen::<f32>();
        let u2 = self.rng.gen::<f32>();

        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = TAU * u2;

        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }
}

impl Default for GaussianRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl GaussianSource for GaussianRng {
    fn next_gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        if std_dev == 0.0 {
            return mean;
        }
        mean + std_dev * self.standard_normal()
    }
}
