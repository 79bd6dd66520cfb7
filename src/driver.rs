//! The frame-loop boundary.
//!
//! Anything the frame loop schedules implements [`LoopItem`]. Each tick the
//! driver hands input to every item, updates it with the frame's elapsed
//! time, renders it, and retires it once it reports finished.
//!
//! [`FrameLoop`] is a minimal driver for headless runs and tests; real
//! applications usually call these methods from their own event loop.

use log::debug;

use crate::render::Renderer;
use crate::time::FrameClock;

/// An object driven once per frame.
pub trait LoopItem: Send {
    fn handle_input(&mut self) {}

    fn update(&mut self, elapsed_ms: f32);

    fn render(&self, renderer: &mut dyn Renderer);

    /// `true` when the driver should stop scheduling this item.
    fn is_finished(&self) -> bool;
}

/// Owns a set of loop items and ticks them in insertion order.
#[derive(Default)]
pub struct FrameLoop {
    items: Vec<Box<dyn LoopItem>>,
    clock: FrameClock,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `clock` for [`run_frame`](Self::run_frame).
    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn add(&mut self, item: impl LoopItem + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    /// Run one frame with an explicit elapsed time.
    ///
    /// Returns the number of items retired this frame.
    pub fn step(&mut self, elapsed_ms: f32, renderer: &mut dyn Renderer) -> usize {
        for item in &mut self.items {
            item.handle_input();
            item.update(elapsed_ms);
            item.render(renderer);
        }

        let before = self.items.len();
        self.items.retain(|item| !item.is_finished());
        let retired = before - self.items.len();
        if retired > 0 {
            debug!(
                "Retired {} finished loop items, {} remain",
                retired,
                self.items.len()
            );
        }
        retired
    }

    /// Run one frame using the clock's delta.
    pub fn run_frame(&mut self, renderer: &mut dyn Renderer) -> usize {
        let elapsed_ms = self.clock.tick();
        self.step(elapsed_ms, renderer)
    }
}
