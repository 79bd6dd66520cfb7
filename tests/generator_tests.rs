//! Integration tests for generator emission, lifecycle and rendering.
//!
//! These drive generators through the public API the way a frame loop
//! would, then check spawn counts, particle state and draw order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rtp_particles::prelude::*;
use rtp_particles::{GaussianSource, Particle};

// ============================================================================
// Helpers
// ============================================================================

const ORIGIN: Vec2 = Vec2::new(200.0, 300.0);

fn straight_up() -> ParticleTypeConfig {
    ParticleTypeConfig::new("dot", DrawableSpec::circle(ORIGIN, 1.0))
        .with_life(1000.0, 0.0)
        .with_speed(1.0, 0.0)
        .with_direction(0.0, 0.0)
}

fn factory_with(config: ParticleTypeConfig) -> ParticleFactory {
    let mut factory = ParticleFactory::new().with_seed(2024);
    factory.register_particle_type(config);
    factory
}

fn emitting_generator(config: ParticleTypeConfig, frequency_ms: f32) -> ParticleGenerator {
    let name = config.particle_type.clone();
    let mut factory = factory_with(config);
    let mut generator = factory
        .create_particle_generator(&name, DrawableSpec::circle(Vec2::ZERO, 3.0))
        .unwrap();
    generator.set_emission_frequency_ms(frequency_ms);
    generator.set_emitting(true);
    generator
}

/// Deterministic integer frame times in `1..=max`.
fn frame_times(seed: u64, max: u64, total: u64) -> Vec<f32> {
    let mut state = seed;
    let mut remaining = total;
    let mut out = Vec::new();
    while remaining > 0 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let dt = ((state >> 33) % max + 1).min(remaining);
        out.push(dt as f32);
        remaining -= dt;
    }
    out
}

/// Always returns the mean, counting calls.
struct MeanSource {
    calls: Arc<AtomicUsize>,
}

impl GaussianSource for MeanSource {
    fn next_gaussian(&mut self, mean: f32, _std_dev: f32) -> f32 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        mean
    }
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_spawn_count_independent_of_frame_partition() {
    let total_ms = 10_000u64;

    for frequency in [100.0_f32, 33.0, 7.0, 250.0] {
        let expected = (total_ms as f32 / frequency).floor() as u64;

        let mut single = emitting_generator(straight_up().with_life(1.0e9, 0.0), frequency);
        single.update(total_ms as f32);
        assert_eq!(
            single.stats().emitted,
            expected,
            "single frame, F={}",
            frequency
        );

        for (seed, max_dt) in [(1, 16), (2, 50), (3, 400), (4, 1)] {
            let mut generator = emitting_generator(straight_up().with_life(1.0e9, 0.0), frequency);
            for dt in frame_times(seed, max_dt, total_ms) {
                generator.update(dt);
            }
            assert_eq!(
                generator.stats().emitted,
                expected,
                "F={} seed={} max_dt={}",
                frequency,
                seed,
                max_dt
            );
        }
    }
}

#[test]
fn test_spawn_count_with_fractional_frames() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    for _ in 0..2000 {
        generator.update(0.25);
    }
    assert_eq!(generator.stats().emitted, 5);
    assert_eq!(generator.time_since_emission(), 0.0);
}

#[test]
fn test_two_particles_after_250ms() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.update(250.0);

    assert_eq!(generator.particle_count(), 2);
    assert_eq!(generator.time_since_emission(), 50.0);

    for particle in generator.particles() {
        assert_eq!(particle.particle_type(), "dot");
        assert_eq!(particle.direction(), 0.0);
        assert_eq!(particle.lifespan(), 1000.0);
        // spawned at age 0, then advanced by the same tick
        assert_eq!(particle.age(), 250.0);
        let position = particle.drawable().position();
        assert_eq!(position.x, ORIGIN.x);
        assert_eq!(position.y, ORIGIN.y - 250.0);
    }
}

#[test]
fn test_999_then_1() {
    let mut generator = emitting_generator(straight_up(), 100.0);

    generator.update(999.0);
    assert_eq!(generator.particle_count(), 9);
    assert_eq!(generator.time_since_emission(), 99.0);

    generator.update(1.0);
    assert_eq!(generator.particle_count(), 10);
}

#[test]
fn test_not_emitting_spawns_nothing() {
    let mut factory = factory_with(straight_up());
    let mut generator = factory
        .create_particle_generator("dot", DrawableSpec::circle(Vec2::ZERO, 3.0))
        .unwrap();

    for dt in [0.0, 16.0, 100.0, 5000.0] {
        generator.update(dt);
        assert_eq!(generator.particle_count(), 0);
    }
}

#[test]
fn test_stop_emitting_keeps_live_particles() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.update(300.0);
    assert_eq!(generator.particle_count(), 3);

    generator.set_emitting(false);
    generator.update(300.0);
    assert_eq!(generator.particle_count(), 3);
    assert_eq!(generator.particles()[0].age(), 600.0);
}

#[test]
fn test_zero_tick_is_a_noop() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.update(150.0);
    let before: Vec<Particle> = generator.particles().to_vec();

    generator.update(0.0);
    assert_eq!(generator.particles(), &before[..]);
    assert_eq!(generator.time_since_emission(), 50.0);
}

#[test]
fn test_sampling_order_per_spawn() {
    let calls = Arc::new(AtomicUsize::new(0));
    let factory = factory_with(straight_up().with_size(4.0, 1.0));
    let mut generator = factory
        .create_particle_generator_with_source(
            "dot",
            DrawableSpec::circle(Vec2::ZERO, 3.0),
            Box::new(MeanSource {
                calls: calls.clone(),
            }),
        )
        .unwrap();

    generator.create_particle();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(generator.particles()[0].size(), 4.0);
}

// ============================================================================
// Copy semantics
// ============================================================================

#[test]
fn test_spawned_shapes_are_independent_copies() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.update(200.0);
    assert_eq!(generator.particle_count(), 2);

    let untouched = generator.particles()[1].drawable().position();
    generator.particles_mut()[0]
        .drawable_mut()
        .set_position(Vec2::new(-1.0, -1.0));

    assert_eq!(
        generator.particles()[0].drawable().position(),
        Vec2::new(-1.0, -1.0)
    );
    assert_eq!(generator.particles()[1].drawable().position(), untouched);
    assert_eq!(generator.config().drawable_spec.position(), ORIGIN);
}

#[test]
fn test_generators_do_not_mutate_the_template() {
    let mut factory = factory_with(straight_up());
    let mut a = factory
        .create_particle_generator("dot", DrawableSpec::circle(Vec2::ZERO, 3.0))
        .unwrap();
    let b = factory
        .create_particle_generator("dot", DrawableSpec::circle(Vec2::ZERO, 3.0))
        .unwrap();

    a.set_emitting(true);
    a.update(500.0);
    a.update(500.0);

    assert_eq!(factory.get("dot").unwrap().drawable_spec.position(), ORIGIN);
    assert_eq!(b.config().drawable_spec.position(), ORIGIN);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_particles_are_pruned_when_finished() {
    let deaths = Arc::new(AtomicUsize::new(0));
    let counter = deaths.clone();
    let config = straight_up().with_life(250.0, 0.0).on_death(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let mut generator = emitting_generator(config, 100.0);
    let mut peak = 0;
    for _ in 0..200 {
        generator.update(10.0);
        peak = peak.max(generator.particle_count());
        assert!(generator.particles().iter().all(|p| !p.is_finished()));
    }

    // 250ms lifespans at one spawn per 100ms never hold more than 3 alive
    assert!(peak <= 3, "peak live set was {}", peak);

    let stats = generator.stats();
    assert_eq!(stats.emitted, 20);
    assert_eq!(
        stats.retired + generator.particle_count() as u64,
        stats.emitted
    );
    assert_eq!(deaths.load(Ordering::SeqCst) as u64, stats.retired);
}

#[test]
fn test_expired_generator_reports_finished() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.set_lifespan(500.0);

    generator.update(500.0);
    assert!(!LoopItem::is_finished(&generator));
    generator.update(0.5);
    assert!(LoopItem::is_finished(&generator));
}

// ============================================================================
// Rendering and driving
// ============================================================================

#[test]
fn test_render_draws_generator_then_particles() {
    let mut generator = emitting_generator(straight_up(), 100.0);
    generator.update(300.0);

    let mut list = DrawList::new();
    generator.render(&mut list);

    assert_eq!(list.len(), 4);
    assert_eq!(list.shapes()[0], DrawableSpec::circle(Vec2::ZERO, 3.0));
    for (shape, particle) in list.shapes()[1..].iter().zip(generator.particles()) {
        assert_eq!(shape, particle.drawable());
    }
}

#[test]
fn test_frame_loop_retires_expired_generators() {
    let mut short = emitting_generator(straight_up(), 50.0);
    short.set_lifespan(100.0);
    let long = emitting_generator(straight_up(), 50.0);

    let mut frame_loop = FrameLoop::new();
    frame_loop.add(short);
    frame_loop.add(long);

    let mut list = DrawList::new();
    let mut retired = 0;
    for _ in 0..10 {
        list.clear();
        retired += frame_loop.step(20.0, &mut list);
    }

    assert_eq!(retired, 1);
    assert_eq!(frame_loop.len(), 1);
    // survivor: itself plus four spawns in 200ms
    assert_eq!(list.len(), 5);
}

#[test]
fn test_presets_run() {
    let mut factory = ParticleFactory::new().with_seed(9);
    factory.register_particle_type(presets::embers(ORIGIN));
    factory.register_particle_type(presets::smoke(ORIGIN));
    factory.register_particle_type(presets::sparks(ORIGIN));

    for name in ["ember", "smoke", "spark"] {
        let mut generator = factory
            .create_particle_generator(name, DrawableSpec::circle(ORIGIN, 4.0))
            .unwrap();
        generator.set_emitting(true);
        for _ in 0..300 {
            generator.update(16.0);
        }
        assert!(generator.stats().emitted > 0, "{} emitted nothing", name);
        assert!(generator.particles().iter().all(|p| !p.is_finished()));
    }
}
