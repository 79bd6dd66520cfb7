//! Kinematic state shared by generators and particles.
//!
//! Both move the same way: a constant speed along a constant heading, with
//! heading `0` pointing up the screen and angles growing clockwise.
//!
//! ```text
//!          0
//!          ^
//!  -PI/2 <-+-> PI/2
//!          v
//!          PI
//! ```

use glam::Vec2;

use crate::shape::DrawableSpec;

/// Age, motion and shape of anything that moves through the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Time alive, in milliseconds.
    pub age: f32,
    /// Age beyond which the body is finished, in milliseconds.
    pub lifespan: f32,
    /// Distance per millisecond.
    pub speed: f32,
    /// Heading in radians (0 = up, clockwise).
    pub direction: f32,
    pub drawable: DrawableSpec,
}

impl Body {
    /// A stationary body that never expires.
    pub fn new(drawable: DrawableSpec) -> Self {
        Self {
            age: 0.0,
            lifespan: f32::INFINITY,
            speed: 0.0,
            direction: 0.0,
            drawable,
        }
    }

    /// Advance age and position by `elapsed_ms`.
    #[inline]
    pub fn advance(&mut self, elapsed_ms: f32) {
        advance(self, elapsed_ms);
    }

    /// `true` once age has strictly passed lifespan.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.age > self.lifespan
    }
}

/// Offset covered in `elapsed_ms` at `speed` along `direction`.
#[inline]
pub fn displacement(speed: f32, direction: f32, elapsed_ms: f32) -> Vec2 {
    Vec2::new(
        direction.sin() * speed * elapsed_ms,
        -(direction.cos() * speed * elapsed_ms),
    )
}

/// The per-tick update applied to every body.
///
/// Negative `elapsed_ms` runs the motion backwards.
pub fn advance(body: &mut Body, elapsed_ms: f32) {
    body.age += elapsed_ms;
    let delta = displacement(body.speed, body.direction, elapsed_ms);
    body.drawable.translate(delta);
}
