//! Galaxy session: the per-frame controller.
//!
//! [`GalaxySession`] owns everything the loop touches (config, clock,
//! field, animators, phase) as one explicit context object; there is no
//! module-level state. UI code never mutates particle buffers - it drives
//! the session through [`GalaxySession::on_enter_requested`] and
//! [`GalaxySession::on_central_object_activated`], and the session calls
//! back out through the [`GalaxyUi`] trait.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ambient::AmbientMotionDriver;
use crate::config::GalaxyConfig;
use crate::error::GalaxyError;
use crate::field::GalaxyField;
use crate::formation::FormationAnimator;
use crate::sampler::ColorScheme;
use crate::time::Clock;

/// Galaxy Y-spin in radians per wall second (the reference galaxy rotates
/// at 0.05 rad per half-rate clock second).
const SPIN_RATE: f32 = 0.5 * 0.05;

/// Delay between revealing the photo orbit and showing the completion
/// message + confetti.
const REVEAL_MESSAGE_DELAY_SECS: f32 = 2.0;

/// Downstream UI collaborator.
///
/// Everything outside the particle core - photo orbit markup, celebratory
/// message, confetti, HUD counters - lives behind this trait. The shipped
/// binary implements it with console output.
pub trait GalaxyUi {
    /// Begin the orbiting photo reveal with the configured photo list.
    fn reveal_photo_orbit(&mut self, photos: &[String]);
    /// Show the celebratory completion message.
    fn show_completion_message(&mut self);
    /// Start the confetti effect.
    fn spawn_confetti_effect(&mut self);
    /// Update the particle-count readout.
    fn update_particle_count_display(&mut self, count: u32);
}

/// Lifecycle of a session. Transitions are one-directional:
/// `AwaitingEntry -> Forming -> Steady`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the user enters the galaxy; no field exists yet.
    AwaitingEntry,
    /// Particles are interpolating from scatter to their targets.
    Forming,
    /// Formation finished; only ambient motion remains.
    Steady,
}

/// What the renderer needs from one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    /// Session phase after this frame's transitions.
    pub phase: Phase,
    /// Shader time value for the ambient oscillation.
    pub time_value: f32,
    /// Current galaxy Y-rotation in radians.
    pub spin_angle: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Whether the position buffer changed and must be re-uploaded.
    pub positions_dirty: bool,
}

/// Owns the galaxy state and drives it one frame at a time.
pub struct GalaxySession {
    config: GalaxyConfig,
    clock: Clock,
    field: Option<GalaxyField>,
    animator: FormationAnimator,
    ambient: AmbientMotionDriver,
    phase: Phase,
    /// One-shot latch for the central-object reveal sequence.
    reveal_triggered: bool,
    /// Clock value at which the delayed reveal step fires.
    /// Fire-and-forget: once scheduled it cannot be cancelled.
    message_due_at: Option<f32>,
}

impl GalaxySession {
    /// Create a session from a validated configuration.
    pub fn new(config: GalaxyConfig) -> Result<Self, GalaxyError> {
        config.validate()?;
        let duration_secs = config.formation_duration_ms as f32 / 1000.0;
        Ok(Self {
            config,
            clock: Clock::new(),
            field: None,
            animator: FormationAnimator::new(duration_secs),
            ambient: AmbientMotionDriver::new(),
            phase: Phase::AwaitingEntry,
            reveal_triggered: false,
            message_due_at: None,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The session configuration.
    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// The particle field, once built.
    pub fn field(&self) -> Option<&GalaxyField> {
        self.field.as_ref()
    }

    /// Seconds between the last two frames.
    pub fn delta(&self) -> f32 {
        self.clock.delta()
    }

    /// Drive the clock with a fixed timestep (deterministic; used by tests
    /// and headless runs). `None` restores wall-clock timing.
    pub fn set_fixed_timestep(&mut self, delta: Option<f32>) {
        self.clock.set_fixed_delta(delta);
    }

    /// "Enter galaxy" event: build the particle field and start forming.
    ///
    /// The field is built exactly once per session; a second request is
    /// rejected with [`GalaxyError::DuplicateInitialization`] so the
    /// attribute buffers are never double-allocated.
    pub fn on_enter_requested(&mut self, ui: &mut dyn GalaxyUi) -> Result<(), GalaxyError> {
        if self.field.is_some() {
            return Err(GalaxyError::DuplicateInitialization);
        }

        let colors = ColorScheme {
            core: self.config.core_color,
            disk: self.config.disk_color,
        };
        let mut rng = SmallRng::from_entropy();
        let field = GalaxyField::build(
            self.config.core_particle_count,
            self.config.disk_particle_count,
            colors,
            &mut rng,
        );
        ui.update_particle_count_display(field.len());
        self.field = Some(field);

        self.animator.start(self.clock.elapsed());
        self.phase = Phase::Forming;
        Ok(())
    }

    /// "Central object activated" event: run the one-shot reveal sequence.
    ///
    /// Reveals the photo orbit immediately and schedules the completion
    /// message and confetti for two seconds later (fired from a subsequent
    /// [`GalaxySession::frame`]). Repeat activations are ignored.
    pub fn on_central_object_activated(&mut self, ui: &mut dyn GalaxyUi) {
        if self.reveal_triggered {
            return;
        }
        self.reveal_triggered = true;

        ui.reveal_photo_orbit(&self.config.photos);
        self.message_due_at = Some(self.clock.elapsed() + REVEAL_MESSAGE_DELAY_SECS);
    }

    /// Advance one frame: clock, formation, ambient motion, due reveal
    /// steps - strictly in that order. The caller updates camera controls
    /// before this and issues the draw after it.
    pub fn frame(&mut self, ui: &mut dyn GalaxyUi) -> FrameSnapshot {
        let (elapsed, delta) = self.clock.update();

        let mut positions_dirty = false;
        if self.phase == Phase::Forming {
            if let Some(field) = self.field.as_mut() {
                // The completing tick still writes (exact targets), so it
                // must be flushed like any other.
                positions_dirty = true;
                if self.animator.tick(elapsed, field) {
                    self.phase = Phase::Steady;
                }
            }
        }

        let time_value = self.ambient.advance(delta);

        if let Some(due) = self.message_due_at {
            if elapsed >= due {
                ui.show_completion_message();
                ui.spawn_confetti_effect();
                self.message_due_at = None;
            }
        }

        FrameSnapshot {
            phase: self.phase,
            time_value,
            spin_angle: elapsed * SPIN_RATE,
            delta,
            positions_dirty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::ease_in_out_cubic;

    #[derive(Default)]
    struct RecordingUi {
        photo_reveals: u32,
        messages: u32,
        confetti: u32,
        count_updates: Vec<u32>,
    }

    impl GalaxyUi for RecordingUi {
        fn reveal_photo_orbit(&mut self, photos: &[String]) {
            let _ = photos;
            self.photo_reveals += 1;
        }
        fn show_completion_message(&mut self) {
            self.messages += 1;
        }
        fn spawn_confetti_effect(&mut self) {
            self.confetti += 1;
        }
        fn update_particle_count_display(&mut self, count: u32) {
            self.count_updates.push(count);
        }
    }

    fn test_session(core: u32, disk: u32, duration_ms: u64) -> GalaxySession {
        let config = GalaxyConfig::default()
            .with_core_particles(core)
            .with_disk_particles(disk)
            .with_formation_duration_ms(duration_ms);
        let mut session = GalaxySession::new(config).unwrap();
        session.set_fixed_timestep(Some(0.1));
        session
    }

    #[test]
    fn test_phase_transitions_one_way() {
        let mut session = test_session(10, 10, 300);
        let mut ui = RecordingUi::default();
        assert_eq!(session.phase(), Phase::AwaitingEntry);

        session.on_enter_requested(&mut ui).unwrap();
        assert_eq!(session.phase(), Phase::Forming);

        // 0.3s of formation at 0.1s per frame.
        session.frame(&mut ui);
        session.frame(&mut ui);
        assert_eq!(session.phase(), Phase::Forming);
        session.frame(&mut ui);
        assert_eq!(session.phase(), Phase::Steady);

        // Never leaves Steady.
        for _ in 0..10 {
            session.frame(&mut ui);
        }
        assert_eq!(session.phase(), Phase::Steady);
    }

    #[test]
    fn test_duplicate_initialization_rejected() {
        let mut session = test_session(5, 5, 100);
        let mut ui = RecordingUi::default();
        session.on_enter_requested(&mut ui).unwrap();
        assert!(matches!(
            session.on_enter_requested(&mut ui),
            Err(GalaxyError::DuplicateInitialization)
        ));
        // The field survives the rejected call intact.
        assert_eq!(session.field().unwrap().len(), 10);
        assert_eq!(ui.count_updates, vec![10]);
    }

    #[test]
    fn test_reveal_sequence_fires_exactly_once() {
        let mut session = test_session(2, 0, 100);
        let mut ui = RecordingUi::default();
        session.on_enter_requested(&mut ui).unwrap();

        session.on_central_object_activated(&mut ui);
        session.on_central_object_activated(&mut ui);
        assert_eq!(ui.photo_reveals, 1);

        // Message and confetti arrive only after the 2s delay.
        for _ in 0..19 {
            session.frame(&mut ui);
        }
        assert_eq!(ui.messages, 0);
        session.frame(&mut ui);
        assert_eq!(ui.messages, 1);
        assert_eq!(ui.confetti, 1);

        // Re-triggering after the fact stays latched.
        session.on_central_object_activated(&mut ui);
        for _ in 0..30 {
            session.frame(&mut ui);
        }
        assert_eq!(ui.photo_reveals, 1);
        assert_eq!(ui.messages, 1);
        assert_eq!(ui.confetti, 1);
    }

    #[test]
    fn test_formation_midpoint_and_completion() {
        let mut session = test_session(2, 0, 1000);
        let mut ui = RecordingUi::default();
        session.on_enter_requested(&mut ui).unwrap();

        // Five 0.1s frames = 500ms.
        for _ in 0..5 {
            session.frame(&mut ui);
        }
        let progress = ease_in_out_cubic(0.5);
        {
            // The fixed-step clock accumulates in f32, so the simulated
            // 500ms carries a few ulps of error; compare with tolerance.
            let field = session.field().unwrap();
            for i in 0..field.len() as usize {
                let expected =
                    field.start(i) + (field.target(i) - field.start(i)) * progress;
                assert!((field.position(i) - expected).length() < 1e-3);
            }
        }

        // Past 1000ms every particle sits exactly on its target.
        for _ in 0..10 {
            session.frame(&mut ui);
        }
        let field = session.field().unwrap();
        for i in 0..field.len() as usize {
            assert_eq!(field.position(i), field.target(i));
        }
    }

    #[test]
    fn test_positions_dirty_only_while_forming() {
        let mut session = test_session(4, 0, 200);
        let mut ui = RecordingUi::default();

        // Nothing to upload before entry.
        let snap = session.frame(&mut ui);
        assert!(!snap.positions_dirty);

        session.on_enter_requested(&mut ui).unwrap();
        let snap = session.frame(&mut ui);
        assert!(snap.positions_dirty);
        let snap = session.frame(&mut ui); // completing tick, still flushes
        assert!(snap.positions_dirty);
        assert_eq!(snap.phase, Phase::Steady);
        let snap = session.frame(&mut ui);
        assert!(!snap.positions_dirty);
    }

    #[test]
    fn test_time_value_monotonic_across_phases() {
        let mut session = test_session(1, 1, 100);
        let mut ui = RecordingUi::default();
        session.on_enter_requested(&mut ui).unwrap();
        let mut prev = 0.0;
        for _ in 0..20 {
            let snap = session.frame(&mut ui);
            assert!(snap.time_value > prev);
            prev = snap.time_value;
        }
    }

    #[test]
    fn test_zero_particles_is_a_valid_session() {
        let mut session = test_session(0, 0, 100);
        let mut ui = RecordingUi::default();
        session.on_enter_requested(&mut ui).unwrap();
        assert_eq!(ui.count_updates, vec![0]);
        session.frame(&mut ui);
        session.frame(&mut ui);
        assert_eq!(session.phase(), Phase::Steady);
    }
}
