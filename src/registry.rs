//! Particle type registry and generator factory.
//!
//! The [`ParticleFactory`] maps particle type names to templates and builds
//! generators bound to them. There is no global registry; each factory value
//! is its own scope.
//!
//! # Example
//!
//! ```ignore
//! let mut factory = ParticleFactory::new().with_seed(42);
//! factory.register_particle_type(presets::embers(Vec2::ZERO));
//! factory.load_json_file("assets/particles.json")?;
//!
//! if let Some(mut generator) = factory.create_particle_generator("ember", torch_shape) {
//!     generator.set_emitting(true);
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::config::ParticleTypeConfig;
use crate::error::Result;
use crate::generator::ParticleGenerator;
use crate::random::{GaussianRng, GaussianSource};
use crate::shape::DrawableSpec;

/// Registry of particle type templates.
#[derive(Debug, Default)]
pub struct ParticleFactory {
    configs: HashMap<String, Arc<ParticleTypeConfig>>,
    /// Base seed for reproducible generators. `None` seeds from entropy.
    seed: Option<u64>,
    /// Generators created so far; mixed into the seed so each differs.
    created: u64,
}

impl ParticleFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every generator from this factory reproducible.
    ///
    /// The n-th generator created is seeded from `seed` and `n`, so the same
    /// creation order replays the same particles.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Insert or replace the template for `config.particle_type`.
    pub fn register_particle_type(&mut self, config: ParticleTypeConfig) {
        let key = config.particle_type.clone();
        if self.configs.insert(key.clone(), Arc::new(config)).is_some() {
            debug!("Replaced particle type `{}`", key);
        } else {
            debug!("Registered particle type `{}`", key);
        }
    }

    /// Build a dormant generator for `particle_type`, drawn as `draw_spec`.
    ///
    /// Returns `None` if the type is not registered.
    pub fn create_particle_generator(
        &mut self,
        particle_type: &str,
        draw_spec: DrawableSpec,
    ) -> Option<ParticleGenerator> {
        let rng = self.next_rng();
        self.create_particle_generator_with_source(particle_type, draw_spec, Box::new(rng))
    }

    /// Like [`create_particle_generator`](Self::create_particle_generator),
    /// sampling from `source` instead of the factory's generator.
    pub fn create_particle_generator_with_source(
        &self,
        particle_type: &str,
        draw_spec: DrawableSpec,
        source: Box<dyn GaussianSource>,
    ) -> Option<ParticleGenerator> {
        let Some(config) = self.configs.get(particle_type) else {
            debug!("No particle type `{}` registered", particle_type);
            return None;
        };
        Some(ParticleGenerator::new(config.clone(), draw_spec, source))
    }

    pub fn get(&self, particle_type: &str) -> Option<&ParticleTypeConfig> {
        self.configs.get(particle_type).map(Arc::as_ref)
    }

    pub fn contains(&self, particle_type: &str) -> bool {
        self.configs.contains_key(particle_type)
    }

    /// Registered type names, sorted.
    pub fn particle_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Register every template in a JSON array.
    ///
    /// Later entries replace earlier ones with the same name. Returns the
    /// number of entries read. Nothing is registered if parsing fails.
    pub fn load_json_str(&mut self, json: &str) -> Result<usize> {
        let configs: Vec<ParticleTypeConfig> = serde_json::from_str(json)?;
        let count = configs.len();
        for config in configs {
            self.register_particle_type(config);
        }
        Ok(count)
    }

    /// Register every template in a JSON file. See
    /// [`load_json_str`](Self::load_json_str).
    pub fn load_json_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let count = self.load_json_str(&json)?;
        debug!("Loaded {} particle types from {}", count, path.display());
        Ok(count)
    }

    fn next_rng(&mut self) -> GaussianRng {
        let index = self.created;
        self.created += 1;
        match self.seed {
            Some(seed) => {
                GaussianRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => GaussianRng::from_entropy(),
        }
    }
}
