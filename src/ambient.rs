//! Ambient motion: the continuous per-particle oscillation layered on top
//! of the settled galaxy.
//!
//! The driver only accumulates the shader time value; the displacement
//! itself runs per vertex in `galaxy.wgsl`. [`displacement`] is the
//! host-side twin of that shader code and doubles as the parity oracle for
//! tests (and as a fallback for render stages without a vertex program).
//! The offset is display-only and is never written back into the position
//! buffer.

use glam::{Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Rate at which wall-clock seconds convert into shader time.
///
/// The reference galaxy runs its clock at half speed and scales by pi
/// before handing it to the vertex stage.
const TIME_RATE: f32 = 0.5 * PI;

/// Accumulates the time uniform consumed by the oscillation shader.
#[derive(Debug, Default)]
pub struct AmbientMotionDriver {
    time: f32,
}

impl AmbientMotionDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame delta (seconds) and return the new time value.
    ///
    /// Monotonically increasing; the consuming displacement is periodic so
    /// eventual float wrap-around is harmless.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.time += delta * TIME_RATE;
        self.time
    }

    /// Current shader time value.
    pub fn value(&self) -> f32 {
        self.time
    }
}

/// Per-particle oscillation offset at shader time `time`.
///
/// `shift` packs (phase-a, phase-b, frequency, amplitude). The offset
/// traces a small periodic orbit:
/// `(cos(s)·sin(t), cos(t), sin(s)·sin(t)) · amplitude` with
/// `t = (a + f·time) mod 2π` and `s = (b + f·time) mod 2π`.
///
/// Must match the vertex stage in `galaxy.wgsl` exactly.
pub fn displacement(shift: Vec4, time: f32) -> Vec3 {
    let move_t = (shift.x + shift.z * time) % TAU;
    let move_s = (shift.y + shift.z * time) % TAU;
    Vec3::new(
        move_s.cos() * move_t.sin(),
        move_t.cos(),
        move_s.sin() * move_t.sin(),
    ) * shift.w
}
