//! # rtp-particles
//!
//! Frame-driven particle generators for 2D renderers.
//!
//! Register particle types (statistical templates), ask the factory for a
//! generator bound to one of them, then call `update` and `render` once per
//! frame. Painting is left to your [`Renderer`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use rtp_particles::prelude::*;
//!
//! let mut factory = ParticleFactory::new();
//! factory.register_particle_type(
//!     ParticleTypeConfig::new("ember", DrawableSpec::circle(Vec2::new(320.0, 400.0), 2.0))
//!         .with_life(900.0, 200.0)
//!         .with_speed(0.08, 0.02)
//!         .with_direction(0.0, 0.25),
//! );
//!
//! let mut torch = factory
//!     .create_particle_generator("ember", DrawableSpec::image(Vec2::new(320.0, 410.0), "torch", Vec2::splat(24.0)))
//!     .unwrap();
//! torch.set_emitting(true);
//!
//! // each frame
//! torch.update(elapsed_ms);
//! torch.render(&mut renderer);
//! ```
//!
//! ## Core Concepts
//!
//! ### Particle types
//!
//! A [`ParticleTypeConfig`] holds a prototype [`DrawableSpec`] and four
//! [`RandomRange`]s (size, lifespan, speed, heading). Every spawned particle
//! samples each range once and starts from its own copy of the prototype.
//!
//! ### Generators
//!
//! A [`ParticleGenerator`] spawns one particle every
//! `emission_frequency_ms` while emitting, carrying fractional time between
//! frames so the spawn count does not depend on frame rate. It advances
//! every particle each tick and removes finished ones.
//!
//! ### Motion
//!
//! Generators and particles move at constant speed along a constant heading:
//! `0` is up the screen and angles grow clockwise. Time is in milliseconds.

pub mod config;
pub mod driver;
mod error;
pub mod generator;
pub mod kinematics;
pub mod particle;
pub mod presets;
pub mod random;
pub mod range;
pub mod registry;
pub mod render;
pub mod shape;
pub mod time;

pub use config::{DeathHook, ParticleTypeConfig};
pub use driver::{FrameLoop, LoopItem};
pub use error::{Error, Result};
pub use generator::{GeneratorId, GeneratorStats, ParticleGenerator};
pub use glam::{Vec2, Vec4};
pub use kinematics::Body;
pub use particle::Particle;
pub use random::{GaussianRng, GaussianSource};
pub use range::RandomRange;
pub use registry::ParticleFactory;
pub use render::{DrawList, Renderer};
pub use shape::{DrawableSpec, ShapeKind};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use rtp_particles::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParticleTypeConfig;
    pub use crate::driver::{FrameLoop, LoopItem};
    pub use crate::generator::ParticleGenerator;
    pub use crate::presets;
    pub use crate::range::RandomRange;
    pub use crate::registry::ParticleFactory;
    pub use crate::render::{DrawList, Renderer};
    pub use crate::shape::DrawableSpec;
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec4};
}
