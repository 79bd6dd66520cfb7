//! Ready-made particle type templates.
//!
//! Common effects as one-liners:
//!
//! ```ignore
//! factory.register_particle_type(presets::embers(Vec2::new(320.0, 400.0)));
//! factory.register_particle_type(presets::smoke(Vec2::new(320.0, 380.0)));
//! factory.register_particle_type(presets::sparks(Vec2::new(100.0, 100.0)));
//! ```
//!
//! Units are milliseconds and pixels per millisecond in a y-down screen
//! space. Headings use 0 = up, clockwise.

use std::f32::consts::PI;

use glam::{Vec2, Vec4};

use crate::config::ParticleTypeConfig;
use crate::shape::DrawableSpec;

/// Rising embers: small, warm, short-lived, drifting upward.
///
/// Registered as `"ember"`.
pub fn embers(origin: Vec2) -> ParticleTypeConfig {
    ParticleTypeConfig::new(
        "ember",
        DrawableSpec::circle(origin, 2.0).with_color(Vec4::new(1.0, 0.6, 0.1, 1.0)),
    )
    .with_size(2.0, 0.5)
    .with_life(900.0, 200.0)
    .with_speed(0.08, 0.02)
    .with_direction(0.0, 0.25)
    .with_emission_frequency(30.0)
}

/// Slow grey smoke with a wide spread.
///
/// Registered as `"smoke"`.
pub fn smoke(origin: Vec2) -> ParticleTypeConfig {
    ParticleTypeConfig::new(
        "smoke",
        DrawableSpec::circle(origin, 6.0).with_color(Vec4::new(0.4, 0.4, 0.4, 0.6)),
    )
    .with_size(6.0, 2.0)
    .with_life(2500.0, 400.0)
    .with_speed(0.02, 0.005)
    .with_direction(0.0, 0.5)
    .with_emission_frequency(120.0)
}

/// Fast sparks thrown in every direction.
///
/// Registered as `"spark"`.
pub fn sparks(origin: Vec2) -> ParticleTypeConfig {
    ParticleTypeConfig::new(
        "spark",
        DrawableSpec::rect(origin, Vec2::new(2.0, 2.0)).with_color(Vec4::new(1.0, 1.0, 0.8, 1.0)),
    )
    .with_size(1.0, 0.3)
    .with_life(350.0, 80.0)
    .with_speed(0.4, 0.1)
    .with_direction(0.0, PI)
    .with_emission_frequency(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ParticleFactory;

    #[test]
    fn test_presets_register_under_their_names() {
        let mut factory = ParticleFactory::new();
        factory.register_particle_type(embers(Vec2::ZERO));
        factory.register_particle_type(smoke(Vec2::ZERO));
        factory.register_particle_type(sparks(Vec2::ZERO));

        assert_eq!(factory.particle_types(), vec!["ember", "smoke", "spark"]);
    }

    #[test]
    fn test_presets_emit() {
        for preset in [embers(Vec2::ZERO), smoke(Vec2::ZERO), sparks(Vec2::ZERO)] {
            assert!(preset.emission_frequency_ms > 0.0);
            assert!(preset.life_range.mean > 0.0);
            assert_eq!(preset.drawable_spec.position(), Vec2::ZERO);
        }
    }
}
