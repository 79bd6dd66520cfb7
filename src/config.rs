//! Particle type templates.
//!
//! A [`ParticleTypeConfig`] describes one class of particle: the shape every
//! spawned particle starts from, and the distributions its size, lifespan,
//! speed and heading are drawn from.
//!
//! # Example
//!
//! ```ignore
//! let ember = ParticleTypeConfig::new("ember", DrawableSpec::circle(Vec2::ZERO, 2.0))
//!     .with_life(900.0, 200.0)
//!     .with_speed(0.08, 0.02)
//!     .with_direction(0.0, 0.3)
//!     .with_emission_frequency(25.0);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::range::RandomRange;
use crate::shape::DrawableSpec;

/// Emission interval used when a template does not set one.
pub const DEFAULT_EMISSION_FREQUENCY_MS: f32 = 100.0;

/// Callback run when a particle of this type dies.
#[derive(Clone)]
pub struct DeathHook(Arc<dyn Fn() + Send + Sync>);

impl DeathHook {
    pub fn new(hook: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[inline]
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for DeathHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeathHook(..)")
    }
}

/// Immutable template for one particle type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleTypeConfig {
    /// Registry key.
    pub particle_type: String,
    /// Prototype shape. Each particle gets its own copy.
    pub drawable_spec: DrawableSpec,
    #[serde(default)]
    pub size_range: RandomRange,
    /// Lifespan in milliseconds.
    #[serde(default)]
    pub life_range: RandomRange,
    /// Speed in distance per millisecond.
    #[serde(default)]
    pub speed_range: RandomRange,
    /// Heading in radians (0 = up, clockwise).
    #[serde(default)]
    pub direction_range: RandomRange,
    /// Initial emission interval of generators built from this template.
    #[serde(default = "default_emission_frequency")]
    pub emission_frequency_ms: f32,
    #[serde(skip)]
    pub on_death: Option<DeathHook>,
}

fn default_emission_frequency() -> f32 {
    DEFAULT_EMISSION_FREQUENCY_MS
}

impl ParticleTypeConfig {
    /// A template with zeroed ranges and the default emission frequency.
    pub fn new(particle_type: impl Into<String>, drawable_spec: DrawableSpec) -> Self {
        Self {
            particle_type: particle_type.into(),
            drawable_spec,
            size_range: RandomRange::default(),
            life_range: RandomRange::default(),
            speed_range: RandomRange::default(),
            direction_range: RandomRange::default(),
            emission_frequency_ms: DEFAULT_EMISSION_FREQUENCY_MS,
            on_death: None,
        }
    }

    pub fn with_size(mut self, mean: f32, std_dev: f32) -> Self {
        self.size_range = RandomRange::new(mean, std_dev);
        self
    }

    /// Lifespan distribution in milliseconds.
    pub fn with_life(mut self, mean: f32, std_dev: f32) -> Self {
        self.life_range = RandomRange::new(mean, std_dev);
        self
    }

    /// Speed distribution in distance per millisecond.
    pub fn with_speed(mut self, mean: f32, std_dev: f32) -> Self {
        self.speed_range = RandomRange::new(mean, std_dev);
        self
    }

    /// Heading distribution in radians.
    pub fn with_direction(mut self, mean: f32, std_dev: f32) -> Self {
        self.direction_range = RandomRange::new(mean, std_dev);
        self
    }

    pub fn with_emission_frequency(mut self, frequency_ms: f32) -> Self {
        self.emission_frequency_ms = frequency_ms;
        self
    }

    /// Run `hook` every time a particle of this type dies.
    pub fn on_death(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_death = Some(DeathHook::new(hook));
        self
    }
}
