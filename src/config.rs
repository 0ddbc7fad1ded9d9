//! Galaxy configuration.
//!
//! All tunable parameters live in [`GalaxyConfig`]. Defaults reproduce the
//! reference galaxy: a dense amber core of 50k particles inside a violet
//! 100k-particle disk, forming over five seconds.

use glam::Vec3;

use crate::error::ConfigError;

/// Upper bound on the total particle population.
///
/// Guards the GPU buffer allocation; well above anything the renderer can
/// move at interactive rates anyway.
pub const MAX_PARTICLES: u64 = 10_000_000;

/// Configuration for a galaxy session.
///
/// Use struct update syntax or the `with_*` builders:
///
/// ```
/// use stardrift::GalaxyConfig;
///
/// let config = GalaxyConfig::default()
///     .with_core_particles(10_000)
///     .with_disk_particles(20_000)
///     .with_formation_duration_ms(3_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct GalaxyConfig {
    /// Image references revealed in orbit around the central object.
    /// Opaque to the core; handed verbatim to the UI collaborator.
    pub photos: Vec<String>,
    /// Number of particles in the spherical core halo.
    pub core_particle_count: u32,
    /// Number of particles in the flattened disk band.
    pub disk_particle_count: u32,
    /// Length of the scatter-to-galaxy formation animation.
    /// Zero means the galaxy assembles instantly.
    pub formation_duration_ms: u64,
    /// Color of core particles and the inner end of the disk gradient.
    pub core_color: Vec3,
    /// Color at the outer edge of the disk gradient.
    pub disk_color: Vec3,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            core_particle_count: 50_000,
            disk_particle_count: 100_000,
            formation_duration_ms: 5_000,
            core_color: Vec3::new(227.0 / 255.0, 155.0 / 255.0, 0.0),
            disk_color: Vec3::new(100.0 / 255.0, 50.0 / 255.0, 1.0),
        }
    }
}

impl GalaxyConfig {
    /// Set the core particle count.
    pub fn with_core_particles(mut self, count: u32) -> Self {
        self.core_particle_count = count;
        self
    }

    /// Set the disk particle count.
    pub fn with_disk_particles(mut self, count: u32) -> Self {
        self.disk_particle_count = count;
        self
    }

    /// Set the formation animation duration in milliseconds.
    pub fn with_formation_duration_ms(mut self, ms: u64) -> Self {
        self.formation_duration_ms = ms;
        self
    }

    /// Set the photo list revealed by the central object.
    pub fn with_photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = photos.into_iter().map(Into::into).collect();
        self
    }

    /// Set the core and disk gradient colors.
    pub fn with_colors(mut self, core: Vec3, disk: Vec3) -> Self {
        self.core_color = core;
        self.disk_color = disk;
        self
    }

    /// Total particle population across both kinds.
    pub fn total_particles(&self) -> u64 {
        self.core_particle_count as u64 + self.disk_particle_count as u64
    }

    /// Check the configuration for values the renderer cannot honor.
    ///
    /// Zero particle counts and a zero duration are valid; they degrade to
    /// an empty field and instantaneous formation respectively.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let total = self.total_particles();
        if total > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                requested: total,
                max: MAX_PARTICLES,
            });
        }
        Ok(())
    }
}
