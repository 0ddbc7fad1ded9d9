//! Formation animation: eased interpolation from scatter to galaxy.
//!
//! The animator is a pure function of elapsed time and the per-particle
//! endpoints stored in the field; there is no inter-particle interaction.
//! Progress is monotonically non-decreasing and clamps to 1, after which
//! every tick is a no-op and the buffer holds the exact target positions.

use crate::field::GalaxyField;

/// Symmetric cubic ease: starts and ends with zero velocity.
///
/// `ease_in_out_cubic(0) == 0`, `ease_in_out_cubic(0.5) == 0.5`,
/// `ease_in_out_cubic(1) == 1`, monotonic on `[0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Drives particles from their scatter positions to their galaxy targets.
pub struct FormationAnimator {
    /// Animation length in seconds. Non-positive means instant completion.
    duration: f32,
    /// Clock value recorded by [`FormationAnimator::start`].
    started_at: Option<f32>,
    complete: bool,
}

impl FormationAnimator {
    /// Create an animator with the given duration in seconds.
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration: duration_secs,
            started_at: None,
            complete: false,
        }
    }

    /// Record the formation start time.
    pub fn start(&mut self, now: f32) {
        self.started_at = Some(now);
    }

    /// Whether formation has reached its targets.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Raw (un-eased) progress at clock value `now`, clamped to `[0, 1]`.
    pub fn raw_progress(&self, now: f32) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration <= 0.0 {
            // A degenerate duration completes instantly instead of
            // dividing by zero.
            return 1.0;
        }
        ((now - started_at) / self.duration).clamp(0.0, 1.0)
    }

    /// Advance every particle toward its target. Returns true once complete.
    ///
    /// On the completing tick the targets are written out exactly, so the
    /// buffer carries no interpolation residue; every tick after that
    /// leaves the buffer untouched.
    pub fn tick(&mut self, now: f32, field: &mut GalaxyField) -> bool {
        if self.complete {
            return true;
        }

        let raw = self.raw_progress(now);
        if raw >= 1.0 {
            for i in 0..field.len() as usize {
                let target = field.target(i);
                field.set_position(i, target);
            }
            self.complete = true;
            return true;
        }

        let progress = ease_in_out_cubic(raw);
        for i in 0..field.len() as usize {
            let start = field.start(i);
            let target = field.target(i);
            field.set_position(i, start + (target - start) * progress);
        }
        false
    }
}
