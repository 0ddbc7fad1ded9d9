//! Frame clock for the render loop.
//!
//! One logical tick per frame. By default the clock follows wall time;
//! with a fixed delta it becomes fully deterministic (elapsed accumulates
//! the fixed step instead of reading the wall clock), which the session
//! tests use to simulate exact timelines.

use std::time::Instant;

/// Monotonic per-frame clock.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    fixed_delta: Option<f32>,
}

impl Clock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            fixed_delta: None,
        }
    }

    /// Advance one frame. Returns `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        match self.fixed_delta {
            Some(step) => {
                self.delta_secs = step;
                self.elapsed_secs += step;
            }
            None => {
                let now = Instant::now();
                self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
                self.last_frame = now;
            }
        }
        (self.elapsed_secs, self.delta_secs)
    }

    /// Elapsed seconds as of the last update.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two updates.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Use a fixed timestep instead of wall time. `None` restores real
    /// frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
