//! Window shell and frame loop.
//!
//! Hosts the [`GalaxySession`] inside a winit `ApplicationHandler`: mouse
//! drag orbits, scroll zooms, and each `RedrawRequested` runs one frame in
//! the fixed order controls -> session frame -> buffer flush -> draw, then
//! re-arms itself. The [`GalaxyUi`] collaborator here is a console
//! implementation; a richer shell can provide its own.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use crate::config::GalaxyConfig;
use crate::error::GalaxyError;
use crate::gpu::GpuState;
use crate::session::{GalaxySession, GalaxyUi};

/// Console implementation of the UI collaborator.
///
/// Stands in for the DOM layer of the reference implementation: photo
/// orbits, the completion message and confetti are narrated on stdout.
#[derive(Default)]
pub struct ConsoleUi;

impl GalaxyUi for ConsoleUi {
    fn reveal_photo_orbit(&mut self, photos: &[String]) {
        if photos.is_empty() {
            println!("* The central star bursts open - nothing in orbit yet.");
            return;
        }
        println!("* Photos swing into orbit:");
        for photo in photos {
            println!("    {}", photo);
        }
    }

    fn show_completion_message(&mut self) {
        println!("* Happy Birthday! The whole galaxy formed just for you.");
    }

    fn spawn_confetti_effect(&mut self) {
        println!("* Confetti rains across the sky!");
    }

    fn update_particle_count_display(&mut self, count: u32) {
        println!("* Galaxy built: {} particles", count);
    }
}

struct App {
    session: GalaxySession,
    ui: ConsoleUi,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    /// Fatal startup error, reported after the event loop exits.
    startup_error: Option<GalaxyError>,
}

impl App {
    fn new(session: GalaxySession) -> Self {
        Self {
            session,
            ui: ConsoleUi,
            window: None,
            gpu_state: None,
            mouse_pressed: false,
            last_mouse_pos: None,
            startup_error: None,
        }
    }

    fn enter_galaxy(&mut self) {
        match self.session.on_enter_requested(&mut self.ui) {
            Ok(()) => {
                if let (Some(gpu_state), Some(field)) =
                    (self.gpu_state.as_mut(), self.session.field())
                {
                    gpu_state.upload_field(field);
                }
            }
            // Entering twice is harmless; the field stays as built.
            Err(GalaxyError::DuplicateInitialization) => {}
            Err(e) => eprintln!("Enter failed: {}", e),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Space | KeyCode::Enter => self.enter_galaxy(),
            KeyCode::KeyC => self.session.on_central_object_activated(&mut self.ui),
            KeyCode::KeyR => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.auto_rotate = !gpu_state.camera.auto_rotate;
                }
            }
            KeyCode::KeyF => {
                if let Some(window) = &self.window {
                    let next = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    window.set_fullscreen(next);
                }
            }
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("stardrift - particle galaxy")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.startup_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window)) {
            Ok(gpu_state) => {
                self.gpu_state = Some(gpu_state);
                println!("Space/Enter: enter the galaxy  C: touch the central star");
                println!("R: toggle auto-rotate  F: fullscreen  Esc: quit");
            }
            Err(e) => {
                self.startup_error = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.distance -= scroll * 1.5;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(5.0, 100.0);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    // Controls first, then the session frame, then draw.
                    gpu_state.camera.update(self.session.delta());
                    let snapshot = self.session.frame(&mut self.ui);
                    if snapshot.positions_dirty {
                        if let Some(field) = self.session.field() {
                            gpu_state.write_positions(field.positions());
                        }
                    }

                    match gpu_state.render(snapshot.time_value, snapshot.spin_angle) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Open a window and run the galaxy until it is closed.
pub fn run(config: GalaxyConfig) -> Result<(), GalaxyError> {
    let session = GalaxySession::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(session);
    event_loop.run_app(&mut app)?;

    match app.startup_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
