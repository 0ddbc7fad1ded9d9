//! # stardrift - interactive 3D particle galaxy
//!
//! Two particle populations - a dense spherical core and a flattened outer
//! disk - animate from random scatter into a spinning galaxy, then keep a
//! gentle per-particle oscillation for ambient life. A one-shot reveal
//! sequence (photo orbit, completion message, confetti) triggers when the
//! central object is activated and is delegated to a UI collaborator.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stardrift::GalaxyConfig;
//!
//! fn main() {
//!     let config = GalaxyConfig::default()
//!         .with_photos(["images/photo1.jpg", "images/photo2.jpg"])
//!         .with_formation_duration_ms(5_000);
//!
//!     if let Err(e) = stardrift::run(config) {
//!         eprintln!("{}", e);
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - [`GalaxyField`] holds the flat per-particle attribute buffers
//!   (position, color, size, oscillation shift), built once per session.
//! - [`FormationAnimator`](formation::FormationAnimator) interpolates every
//!   particle from its scatter position to its galaxy target along a
//!   symmetric cubic ease; once progress hits 1 the targets are exact and
//!   further ticks are no-ops.
//! - [`AmbientMotionDriver`](ambient::AmbientMotionDriver) feeds the shader
//!   time uniform; the per-vertex oscillation in `galaxy.wgsl` is
//!   display-only and never touches the stored positions.
//! - [`GalaxySession`] owns all of the above and advances them one frame at
//!   a time; [`run`] opens a winit window that drives it and renders with
//!   wgpu.
//!
//! Particle motion is a pure function of elapsed time and per-particle
//! random parameters sampled at build time - this is not an N-body
//! simulation.

pub mod ambient;
pub mod config;
pub mod error;
pub mod field;
pub mod formation;
mod gpu;
pub mod sampler;
pub mod session;
pub mod time;
mod window;

pub use config::GalaxyConfig;
pub use error::{ConfigError, GalaxyError, GpuError};
pub use field::GalaxyField;
pub use glam::{Vec3, Vec4};
pub use sampler::ColorScheme;
pub use session::{FrameSnapshot, GalaxySession, GalaxyUi, Phase};
pub use window::{run, ConsoleUi};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::ambient::AmbientMotionDriver;
    pub use crate::config::GalaxyConfig;
    pub use crate::error::GalaxyError;
    pub use crate::field::GalaxyField;
    pub use crate::formation::{ease_in_out_cubic, FormationAnimator};
    pub use crate::sampler::ColorScheme;
    pub use crate::session::{FrameSnapshot, GalaxySession, GalaxyUi, Phase};
    pub use crate::time::Clock;
    pub use crate::window::{run, ConsoleUi};
    pub use crate::{Vec3, Vec4};
}
