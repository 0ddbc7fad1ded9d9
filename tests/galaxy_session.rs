//! End-to-end tests for the galaxy session.
//!
//! Drives a full session headlessly with a fixed timestep and a recording
//! UI collaborator, checking the formation timeline and the one-shot
//! reveal sequence against exact expectations.

use stardrift::formation::ease_in_out_cubic;
use stardrift::prelude::*;

#[derive(Default)]
struct RecordingUi {
    photo_reveals: Vec<Vec<String>>,
    messages: u32,
    confetti: u32,
    count_updates: Vec<u32>,
}

impl GalaxyUi for RecordingUi {
    fn reveal_photo_orbit(&mut self, photos: &[String]) {
        self.photo_reveals.push(photos.to_vec());
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

fn session_with(core: u32, disk: u32, duration_ms: u64, step: f32) -> GalaxySession {
    let config = GalaxyConfig::default()
        .with_core_particles(core)
        .with_disk_particles(disk)
        .with_formation_duration_ms(duration_ms);
    let mut session = GalaxySession::new(config).expect("valid config");
    session.set_fixed_timestep(Some(step));
    session
}

#[test]
fn formation_timeline_matches_easing() {
    // Two core particles, one second of formation, 100ms frames.
    let mut session = session_with(2, 0, 1000, 0.1);
    let mut ui = RecordingUi::default();

    session.on_enter_requested(&mut ui).unwrap();
    assert_eq!(session.phase(), Phase::Forming);
    assert_eq!(ui.count_updates, vec![2]);

    // Simulated 500ms: halfway through the ease.
    for _ in 0..5 {
        session.frame(&mut ui);
    }
    let halfway = ease_in_out_cubic(0.5);
    {
        let field = session.field().unwrap();
        for i in 0..field.len() as usize {
            let expected = field.start(i) + (field.target(i) - field.start(i)) * halfway;
            assert!(
                (field.position(i) - expected).length() < 1e-3,
                "particle {} off the eased path",
                i
            );
        }
    }

    // Simulated 1000ms and beyond: targets, exactly, and stable.
    for _ in 0..10 {
        session.frame(&mut ui);
    }
    assert_eq!(session.phase(), Phase::Steady);
    let after: Vec<f32> = session.field().unwrap().positions().to_vec();
    {
        let field = session.field().unwrap();
        for i in 0..field.len() as usize {
            assert_eq!(field.position(i), field.target(i));
        }
    }

    for _ in 0..25 {
        session.frame(&mut ui);
    }
    assert_eq!(session.field().unwrap().positions(), &after[..]);
}

#[test]
fn reveal_sequence_runs_once_with_configured_photos() {
    let config = GalaxyConfig::default()
        .with_core_particles(1)
        .with_disk_particles(0)
        .with_formation_duration_ms(100)
        .with_photos(["a.jpg", "b.jpg"]);
    let mut session = GalaxySession::new(config).unwrap();
    session.set_fixed_timestep(Some(0.5));
    let mut ui = RecordingUi::default();

    session.on_enter_requested(&mut ui).unwrap();
    session.on_central_object_activated(&mut ui);
    session.on_central_object_activated(&mut ui);

    assert_eq!(ui.photo_reveals.len(), 1);
    assert_eq!(ui.photo_reveals[0], vec!["a.jpg", "b.jpg"]);

    // 2s delay = four 0.5s frames.
    for _ in 0..4 {
        session.frame(&mut ui);
    }
    assert_eq!(ui.messages, 1);
    assert_eq!(ui.confetti, 1);

    // Stays latched forever after.
    session.on_central_object_activated(&mut ui);
    for _ in 0..10 {
        session.frame(&mut ui);
    }
    assert_eq!(ui.photo_reveals.len(), 1);
    assert_eq!(ui.messages, 1);
    assert_eq!(ui.confetti, 1);
}

#[test]
fn duplicate_entry_is_rejected_not_corrupting() {
    let mut session = session_with(3, 3, 100, 0.1);
    let mut ui = RecordingUi::default();
    session.on_enter_requested(&mut ui).unwrap();
    let before: Vec<f32> = session.field().unwrap().positions().to_vec();

    assert!(matches!(
        session.on_enter_requested(&mut ui),
        Err(GalaxyError::DuplicateInitialization)
    ));
    assert_eq!(session.field().unwrap().positions(), &before[..]);
    assert_eq!(ui.count_updates.len(), 1);
}

#[test]
fn instant_formation_with_zero_duration() {
    let mut session = session_with(10, 10, 0, 0.016);
    let mut ui = RecordingUi::default();
    session.on_enter_requested(&mut ui).unwrap();

    session.frame(&mut ui);
    assert_eq!(session.phase(), Phase::Steady);
    let field = session.field().unwrap();
    for i in 0..field.len() as usize {
        assert_eq!(field.position(i), field.target(i));
    }
}

#[test]
fn core_and_disk_geometry_hold_over_a_full_run() {
    let mut session = session_with(200, 400, 200, 0.05);
    let mut ui = RecordingUi::default();
    session.on_enter_requested(&mut ui).unwrap();
    for _ in 0..10 {
        session.frame(&mut ui);
    }

    let field = session.field().unwrap();
    for i in 0..200 {
        let dist = field.position(i).length();
        assert!((9.5..=10.0).contains(&dist), "core particle at {}", dist);
    }
    for i in 200..600 {
        let pos = field.position(i);
        let planar = (pos.x * pos.x + pos.z * pos.z).sqrt();
        assert!(planar >= 10.0 - 1e-3 && planar <= 40.0 + 1e-3);
        assert!(pos.y.abs() <= 1.0);
    }
}
