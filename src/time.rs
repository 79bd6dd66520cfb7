//! Frame timing in milliseconds.
//!
//! Generators expect one elapsed-time value per frame. [`FrameClock`] turns
//! wall-clock time into that value, with pause, time scaling, a fixed step
//! for deterministic runs, and a ceiling on single-frame deltas so a stall
//! (debugger, window drag) does not release a flood of particles at once.
//!
//! # Example
//!
//! ```ignore
//! use rtp_particles::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In your frame loop:
//! let dt = clock.tick();
//! generator.update(dt);
//! ```

use std::time::{Duration, Instant};

/// Default ceiling for a single frame's delta.
pub const DEFAULT_MAX_DELTA_MS: f32 = 250.0;

/// Frame timer producing per-tick elapsed milliseconds.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created or last reset.
    start: Instant,
    /// When the last tick occurred.
    last_frame: Instant,
    /// Scaled milliseconds accumulated across ticks.
    elapsed_ms: f64,
    /// Delta returned by the last tick.
    delta_ms: f32,
    /// Ticks since start.
    frame_count: u64,
    paused: bool,
    /// Fixed delta for deterministic updates.
    fixed_delta_ms: Option<f32>,
    /// Multiplier applied to every delta.
    time_scale: f32,
    /// Ceiling applied to raw deltas before scaling.
    max_delta_ms: f32,
}

impl FrameClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta_ms: None,
            time_scale: 1.0,
            max_delta_ms: DEFAULT_MAX_DELTA_MS,
        }
    }

    /// Advance to the current instant. Call once per frame.
    ///
    /// Returns the frame's elapsed milliseconds, `0.0` while paused.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_ms = now.duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        if self.paused {
            self.delta_ms = 0.0;
            return 0.0;
        }

        let raw_ms = self.fixed_delta_ms.unwrap_or(raw_ms.min(self.max_delta_ms));
        self.delta_ms = raw_ms * self.time_scale;
        self.elapsed_ms += f64::from(self.delta_ms);
        self.frame_count += 1;

        self.delta_ms
    }

    /// Scaled milliseconds accumulated by all ticks.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Delta returned by the most recent tick.
    #[inline]
    pub fn delta_ms(&self) -> f32 {
        self.delta_ms
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Stop time. Ticks return `0.0` until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after pausing. Time spent paused is not counted.
    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Use a fixed delta instead of wall-clock time. `None` restores real
    /// timing.
    pub fn set_fixed_delta_ms(&mut self, delta_ms: Option<f32>) {
        self.fixed_delta_ms = delta_ms;
    }

    /// Set the time scale multiplier. Negative values clamp to zero.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = slow motion
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Ceiling for a single wall-clock delta, before scaling.
    pub fn set_max_delta_ms(&mut self, max_ms: f32) {
        self.max_delta_ms = max_ms.max(0.0);
    }

    /// Reset counters and restart from now. Settings are kept.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_frame = now;
        self.elapsed_ms = 0.0;
        self.delta_ms = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }

    /// Wall-clock time since creation or the last reset.
    pub fn wall_time(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
