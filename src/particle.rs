//! Individual particles.

use std::sync::Arc;

use crate::kinematics::Body;
use crate::shape::DrawableSpec;

/// A single live particle.
///
/// Particles are created by a [`ParticleGenerator`](crate::ParticleGenerator)
/// during its emission pass and owned by it until they finish.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    particle_type: Arc<str>,
    size: f32,
    body: Body,
}

impl Particle {
    pub(crate) fn new(particle_type: Arc<str>, size: f32, body: Body) -> Self {
        Self {
            particle_type,
            size,
            body,
        }
    }

    pub fn particle_type(&self) -> &str {
        &self.particle_type
    }

    /// Milliseconds since spawn.
    pub fn age(&self) -> f32 {
        self.body.age
    }

    /// Milliseconds this particle lives, sampled at spawn.
    pub fn lifespan(&self) -> f32 {
        self.body.lifespan
    }

    pub fn speed(&self) -> f32 {
        self.body.speed
    }

    /// Heading in radians (0 = up, clockwise).
    pub fn direction(&self) -> f32 {
        self.body.direction
    }

    /// Size sampled at spawn from the template's size range.
    ///
    /// The shape itself is not rescaled; renderers may use this as a scale.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn drawable(&self) -> &DrawableSpec {
        &self.body.drawable
    }

    pub fn drawable_mut(&mut self) -> &mut DrawableSpec {
        &mut self.body.drawable
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Age as a fraction of lifespan, clamped to `0.0..=1.0`.
    pub fn normalized_age(&self) -> f32 {
        if self.body.lifespan <= 0.0 {
            return 1.0;
        }
        (self.body.age / self.body.lifespan).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.body.advance(elapsed_ms);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.body.is_finished()
    }
}
