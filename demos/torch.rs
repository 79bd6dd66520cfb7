//! Headless torch: a flame generator with embers and smoke, run for a few
//! seconds of simulated frames.
//!
//! Run with: `RUST_LOG=debug cargo run --example torch`

use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};
use rtp_particles::prelude::*;
use rtp_particles::ShapeKind;

const FRAMES: usize = 300;
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Counts draw calls per shape kind instead of painting.
#[derive(Default)]
struct TallyRenderer {
    calls: HashMap<ShapeKind, usize>,
}

impl Renderer for TallyRenderer {
    fn draw(&mut self, shape: &DrawableSpec) {
        *self.calls.entry(shape.kind()).or_default() += 1;
    }
}

fn main() {
    env_logger::init();

    let torch_at = Vec2::new(320.0, 400.0);

    let mut factory = ParticleFactory::new().with_seed(0x7041);
    factory.register_particle_type(presets::embers(torch_at));
    factory.register_particle_type(presets::smoke(torch_at - Vec2::new(0.0, 20.0)));

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/particles.json");
    match factory.load_json_file(&path) {
        Ok(count) => info!("Loaded {} particle types from {}", count, path.display()),
        Err(e) => warn!("{}", e),
    }

    let torch = DrawableSpec::image(torch_at, "torch", Vec2::new(16.0, 48.0));
    let mut frame_loop = FrameLoop::new();
    for name in ["flame", "ember", "smoke"] {
        let Some(mut generator) = factory.create_particle_generator(name, torch.clone()) else {
            warn!("Particle type `{}` is not registered", name);
            continue;
        };
        generator.set_emitting(true);
        generator.set_max_particles(Some(2_000));
        frame_loop.add(generator);
    }

    // a score popup that leaves after one second
    let hit = DrawableSpec::text(Vec2::new(300.0, 380.0), "HIT", 18.0);
    if let Some(mut popup) = factory.create_particle_generator("score", hit) {
        popup.set_emitting(true);
        popup.set_lifespan(1000.0);
        popup.set_motion(0.03, 0.0);
        frame_loop.add(popup);
    }

    let mut renderer = TallyRenderer::default();
    for frame in 0..FRAMES {
        let retired = frame_loop.step(FRAME_MS, &mut renderer);
        if retired > 0 {
            info!("Frame {}: retired {} generators", frame, retired);
        }
    }

    info!(
        "Ran {} frames with {} generators left",
        FRAMES,
        frame_loop.len()
    );
    let mut kinds: Vec<_> = renderer.calls.into_iter().collect();
    kinds.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    for (kind, count) in kinds {
        info!("{:?}: {} draw calls", kind, count);
    }
}
