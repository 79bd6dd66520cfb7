//! Particle generators.
//!
//! A [`ParticleGenerator`] is bound to one [`ParticleTypeConfig`] and owns
//! the particles it spawns. It is itself a moving, drawable body, so it can
//! stand in for the emitter's origin (a torch, a rocket).
//!
//! # Per-tick order
//!
//! 1. Emission pass: spawn `floor(accumulated / frequency)` particles and
//!    keep the remainder, so the long-run rate is exact under any frame
//!    timing.
//! 2. The generator's own body advances.
//! 3. Every live particle advances.
//! 4. Finished particles are removed, firing the template's death hook.
//!
//! # Example
//!
//! ```ignore
//! let mut generator = factory
//!     .create_particle_generator("ember", DrawableSpec::circle(torch, 3.0))
//!     .expect("ember is registered");
//! generator.set_emitting(true);
//!
//! generator.update(16.0);
//! generator.render(&mut renderer);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::config::ParticleTypeConfig;
use crate::driver::LoopItem;
use crate::kinematics::Body;
use crate::particle::Particle;
use crate::random::GaussianSource;
use crate::render::Renderer;
use crate::shape::DrawableSpec;

/// Process-unique generator identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratorId(u64);

impl GeneratorId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{:08x}", self.0)
    }
}

/// Lifetime counters for a generator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorStats {
    /// Particles spawned.
    pub emitted: u64,
    /// Particles removed after finishing.
    pub retired: u64,
    /// Spawns skipped because the particle cap was reached.
    pub dropped: u64,
}

/// An emitter bound to one particle type.
pub struct ParticleGenerator {
    id: GeneratorId,
    config: Arc<ParticleTypeConfig>,
    particle_type: Arc<str>,
    emission_frequency_ms: f32,
    emitting: bool,
    time_since_emission: f32,
    max_particles: Option<usize>,
    body: Body,
    particles: Vec<Particle>,
    rng: Box<dyn GaussianSource>,
    stats: GeneratorStats,
}

impl ParticleGenerator {
    /// Create a dormant generator drawn as `drawable`.
    ///
    /// The emission interval starts at the template's
    /// `emission_frequency_ms`.
    pub fn new(
        config: Arc<ParticleTypeConfig>,
        drawable: DrawableSpec,
        rng: Box<dyn GaussianSource>,
    ) -> Self {
        let generator = Self {
            id: GeneratorId::next(),
            particle_type: Arc::from(config.particle_type.as_str()),
            emission_frequency_ms: config.emission_frequency_ms,
            config,
            emitting: false,
            time_since_emission: 0.0,
            max_particles: None,
            body: Body::new(drawable),
            particles: Vec::new(),
            rng,
            stats: GeneratorStats::default(),
        };
        debug!(
            "Created generator {} for particle type `{}`",
            generator.id, generator.particle_type
        );
        generator
    }

    pub fn id(&self) -> GeneratorId {
        self.id
    }

    pub fn particle_type(&self) -> &str {
        &self.particle_type
    }

    pub fn config(&self) -> &ParticleTypeConfig {
        &self.config
    }

    /// Live particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// The generator's own kinematic state.
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn drawable(&self) -> &DrawableSpec {
        &self.body.drawable
    }

    pub fn stats(&self) -> GeneratorStats {
        self.stats
    }

    /// `true` when the gate is open and the frequency is positive, that is,
    /// when the emission pass will spawn particles.
    pub fn is_emitting(&self) -> bool {
        self.emitting && self.emission_frequency_ms > 0.0
    }

    /// Open or close the emission gate. Live particles are unaffected.
    ///
    /// [`is_emitting`](Self::is_emitting) still reports `false` while the
    /// emission frequency is zero or less.
    pub fn set_emitting(&mut self, emitting: bool) {
        self.emitting = emitting;
    }

    pub fn emission_frequency_ms(&self) -> f32 {
        self.emission_frequency_ms
    }

    /// Milliseconds between spawns. Zero or less disables emission.
    pub fn set_emission_frequency_ms(&mut self, frequency_ms: f32) {
        self.emission_frequency_ms = frequency_ms;
    }

    /// Elapsed time carried over towards the next spawn.
    pub fn time_since_emission(&self) -> f32 {
        self.time_since_emission
    }

    pub fn set_lifespan(&mut self, lifespan_ms: f32) {
        self.body.lifespan = lifespan_ms;
    }

    /// Move the generator itself at `speed` along `direction`.
    pub fn set_motion(&mut self, speed: f32, direction: f32) {
        self.body.speed = speed;
        self.body.direction = direction;
    }

    /// Cap the live set. Spawns beyond the cap are dropped.
    pub fn set_max_particles(&mut self, max: Option<usize>) {
        self.max_particles = max;
    }

    /// Drop every live particle without running death hooks.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.time_since_emission = 0.0;
    }

    /// Input is not consumed by generators.
    pub fn handle_input(&mut self) {}

    /// Advance the generator and its particles by one frame.
    pub fn update(&mut self, elapsed_ms: f32) {
        if !elapsed_ms.is_finite() {
            warn!(
                "Generator {} ticked with non-finite elapsed time {}ms; ignoring tick",
                self.id, elapsed_ms
            );
            return;
        }

        if elapsed_ms < 0.0 {
            warn!(
                "Generator {} ticked with negative elapsed time {}ms; skipping emission",
                self.id, elapsed_ms
            );
        } else {
            self.emit_particles(elapsed_ms);
        }

        self.body.advance(elapsed_ms);
        for particle in &mut self.particles {
            particle.advance(elapsed_ms);
        }

        self.retire_finished();
    }

    /// Paint the generator, then every live particle in spawn order.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.body.drawable);
        for particle in &self.particles {
            renderer.draw(particle.drawable());
        }
    }

    /// `true` once the generator's own age has passed its lifespan.
    pub fn is_finished(&self) -> bool {
        self.body.is_finished()
    }

    /// Spawn one particle from the template, regardless of the emission gate.
    ///
    /// Returns `false` if the particle cap dropped it.
    pub fn create_particle(&mut self) -> bool {
        if self
            .max_particles
            .is_some_and(|max| self.particles.len() >= max)
        {
            self.stats.dropped += 1;
            trace!("Generator {} at particle cap, spawn dropped", self.id);
            return false;
        }

        let config = &self.config;
        let rng = self.rng.as_mut();

        let direction = config.direction_range.sample(rng);
        let lifespan = config.life_range.sample(rng);
        let speed = config.speed_range.sample(rng);
        let size = config.size_range.sample(rng);

        let body = Body {
            age: 0.0,
            lifespan,
            speed,
            direction,
            drawable: config.drawable_spec.clone(),
        };
        self.particles
            .push(Particle::new(self.particle_type.clone(), size, body));
        self.stats.emitted += 1;
        true
    }

    fn emit_particles(&mut self, elapsed_ms: f32) {
        if !self.is_emitting() {
            return;
        }

        let frequency = self.emission_frequency_ms;
        self.time_since_emission += elapsed_ms;

        let needed = (self.time_since_emission / frequency).floor() as usize;
        let remainder = self.time_since_emission % frequency;
        self.time_since_emission = remainder;
        if needed == 0 {
            return;
        }

        let room = self
            .max_particles
            .map_or(needed, |max| max.saturating_sub(self.particles.len()));
        let spawned = needed.min(room);
        for _ in 0..spawned {
            self.create_particle();
        }

        let dropped = needed - spawned;
        if dropped > 0 {
            self.stats.dropped += dropped as u64;
            trace!(
                "Generator {} at particle cap, {} spawns dropped",
                self.id,
                dropped
            );
        }

        trace!(
            "Generator {} emitted {} particles, {}ms carried",
            self.id,
            spawned,
            remainder
        );
    }

    fn retire_finished(&mut self) {
        let before = self.particles.len();
        let hook = self.config.on_death.as_ref();

        self.particles.retain(|particle| {
            if particle.is_finished() {
                if let Some(hook) = hook {
                    hook.call();
                }
                false
            } else {
                true
            }
        });

        let retired = before - self.particles.len();
        if retired > 0 {
            self.stats.retired += retired as u64;
            trace!("Generator {} retired {} particles", self.id, retired);
        }
    }
}

impl fmt::Debug for ParticleGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleGenerator")
            .field("id", &self.id)
            .field("particle_type", &self.particle_type)
            .field("emission_frequency_ms", &self.emission_frequency_ms)
            .field("emitting", &self.emitting)
            .field("time_since_emission", &self.time_since_emission)
            .field("body", &self.body)
            .field("particles", &self.particles.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl LoopItem for ParticleGenerator {
    fn handle_input(&mut self) {
        ParticleGenerator::handle_input(self);
    }

    fn update(&mut self, elapsed_ms: f32) {
        ParticleGenerator::update(self, elapsed_ms);
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        ParticleGenerator::render(self, renderer);
    }

    fn is_finished(&self) -> bool {
        ParticleGenerator::is_finished(self)
    }
}
