//! Statistical ranges for per-particle attributes.

use serde::{Deserialize, Serialize};

use crate::random::GaussianSource;

/// A normal distribution described by its mean and standard deviation.
///
/// Every spawned particle draws its size, lifespan, speed and direction from
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RandomRange {
    /// Center of the distribution.
    pub mean: f32,
    /// Standard deviation. Zero makes every sample equal to `mean`.
    #[serde(default)]
    pub std_dev: f32,
}

impl RandomRange {
    pub const fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }

    /// A range that always yields `value`.
    pub const fn fixed(value: f32) -> Self {
        Self::new(value, 0.0)
    }

    /// Draw one value from this range.
    #[inline]
    pub fn sample(&self, source: &mut dyn GaussianSource) -> f32 {
        source.next_gaussian(self.mean, self.std_dev)
    }
}

impl From<f32> for RandomRange {
    fn from(value: f32) -> Self {
        Self::fixed(value)
    }
}

impl From<(f32, f32)> for RandomRange {
    fn from((mean, std_dev): (f32, f32)) -> Self {
        Self::new(mean, std_dev)
    }
}
