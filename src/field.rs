//! The galaxy particle field and its builder.
//!
//! [`GalaxyField`] owns the flat attribute buffers the renderer consumes
//! (position, color, size, oscillation shift) plus the per-particle start
//! and target endpoints the formation animator interpolates between.
//! Buffers are allocated exactly once, in population order: all core
//! particles first, then all disk particles.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::PI;

use crate::sampler::{
    self, ColorScheme, DISK_INNER_RADIUS, DISK_OUTER_RADIUS,
};

/// Particle attribute buffers backing the galaxy.
///
/// `positions` holds the *current* position of every particle and is the
/// only buffer mutated after construction (by the formation animator).
/// Ambient oscillation is applied at render time on top of these values and
/// is never written back.
pub struct GalaxyField {
    /// Current positions, 3 floats per particle. GPU-uploaded while forming.
    positions: Vec<f32>,
    /// RGB colors, 3 floats per particle.
    colors: Vec<f32>,
    /// Point sizes, 1 float per particle, in `[0.5, 2.0)`.
    sizes: Vec<f32>,
    /// Oscillation parameters, 4 floats per particle:
    /// phase-a, phase-b, frequency, amplitude.
    shifts: Vec<f32>,
    /// Scatter positions particles animate away from.
    starts: Vec<Vec3>,
    /// Formation positions particles animate toward.
    targets: Vec<Vec3>,
    core_count: u32,
    disk_count: u32,
}

impl GalaxyField {
    /// Build the full particle field.
    ///
    /// Samples `core_count` core particles followed by `disk_count` disk
    /// particles and fills every attribute buffer. Deterministic for a
    /// seeded `rng`. Zero counts yield a valid empty field.
    ///
    /// A field is built once per session; the session layer rejects repeat
    /// builds rather than double-allocating these buffers.
    pub fn build(
        core_count: u32,
        disk_count: u32,
        colors: ColorScheme,
        rng: &mut SmallRng,
    ) -> Self {
        let total = core_count as usize + disk_count as usize;
        let mut field = Self {
            positions: Vec::with_capacity(total * 3),
            colors: Vec::with_capacity(total * 3),
            sizes: Vec::with_capacity(total),
            shifts: Vec::with_capacity(total * 4),
            starts: Vec::with_capacity(total),
            targets: Vec::with_capacity(total),
            core_count,
            disk_count,
        };

        for _ in 0..core_count {
            let sample = sampler::sample_core(rng, &colors);
            field.push_particle(sample.start, sample.target, sample.color, rng);
        }

        for _ in 0..disk_count {
            let sample =
                sampler::sample_disk(rng, DISK_INNER_RADIUS, DISK_OUTER_RADIUS, &colors);
            field.push_particle(sample.start, sample.target, sample.color, rng);
        }

        field
    }

    fn push_particle(&mut self, start: Vec3, target: Vec3, color: Vec3, rng: &mut SmallRng) {
        self.positions.extend_from_slice(&[start.x, start.y, start.z]);
        self.colors.extend_from_slice(&[color.x, color.y, color.z]);
        self.sizes.push(rng.gen_range(0.5..2.0));
        self.shifts.extend_from_slice(&[
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..(2.0 * PI)),
            (rng.gen::<f32>() * 0.9 + 0.1) * PI * 0.1,
            rng.gen::<f32>() * 0.9 + 0.1,
        ]);
        self.starts.push(start);
        self.targets.push(target);
    }

    /// Total number of particles, core plus disk.
    pub fn len(&self) -> u32 {
        self.core_count + self.disk_count
    }

    /// Whether the field holds no particles at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of particles in the core population.
    pub fn core_count(&self) -> u32 {
        self.core_count
    }

    /// Number of particles in the disk population.
    pub fn disk_count(&self) -> u32 {
        self.disk_count
    }

    /// Current positions, 3 floats per particle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Colors, 3 floats per particle.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Point sizes, 1 float per particle.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Oscillation parameters, 4 floats per particle.
    pub fn shifts(&self) -> &[f32] {
        &self.shifts
    }

    /// Scatter start position of particle `i`.
    pub fn start(&self, i: usize) -> Vec3 {
        self.starts[i]
    }

    /// Formation target position of particle `i`.
    pub fn target(&self, i: usize) -> Vec3 {
        self.targets[i]
    }

    /// Current position of particle `i`, read back from the flat buffer.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Write the current position of particle `i`.
    pub(crate) fn set_position(&mut self, i: usize, pos: Vec3) {
        self.positions[i * 3] = pos.x;
        self.positions[i * 3 + 1] = pos.y;
        self.positions[i * 3 + 2] = pos.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_colors() -> ColorScheme {
        ColorScheme {
            core: Vec3::new(0.89, 0.61, 0.0),
            disk: Vec3::new(0.39, 0.2, 1.0),
        }
    }

    #[test]
    fn test_buffer_lengths() {
        let mut rng = SmallRng::seed_from_u64(1);
        let field = GalaxyField::build(100, 200, test_colors(), &mut rng);
        assert_eq!(field.len(), 300);
        assert_eq!(field.positions().len(), 900);
        assert_eq!(field.colors().len(), 900);
        assert_eq!(field.sizes().len(), 300);
        assert_eq!(field.shifts().len(), 1200);
    }

    #[test]
    fn test_population_order_core_first() {
        let mut rng = SmallRng::seed_from_u64(2);
        let field = GalaxyField::build(50, 50, test_colors(), &mut rng);
        // Core targets sit on the r ~ 10 shell; disk targets reach out to 40.
        for i in 0..50 {
            let dist = field.target(i).length();
            assert!((9.5..=10.0).contains(&dist), "core target at {}", dist);
        }
        for i in 50..100 {
            let planar_sq = field.target(i).x.powi(2) + field.target(i).z.powi(2);
            assert!(planar_sq.sqrt() >= 10.0 - 1e-3, "disk target inside cutoff");
        }
    }

    #[test]
    fn test_initial_positions_equal_starts() {
        let mut rng = SmallRng::seed_from_u64(3);
        let field = GalaxyField::build(20, 20, test_colors(), &mut rng);
        for i in 0..40 {
            assert_eq!(field.position(i), field.start(i));
        }
    }

    #[test]
    fn test_size_and_shift_ranges() {
        let mut rng = SmallRng::seed_from_u64(4);
        let field = GalaxyField::build(500, 500, test_colors(), &mut rng);
        for &size in field.sizes() {
            assert!((0.5..2.0).contains(&size));
        }
        for chunk in field.shifts().chunks_exact(4) {
            assert!((0.0..PI).contains(&chunk[0]));
            assert!((0.0..2.0 * PI).contains(&chunk[1]));
            assert!(chunk[2] >= 0.1 * PI * 0.1 && chunk[2] <= PI * 0.1);
            assert!((0.1..1.0).contains(&chunk[3]));
        }
    }

    #[test]
    fn test_empty_field_is_valid() {
        let mut rng = SmallRng::seed_from_u64(5);
        let field = GalaxyField::build(0, 0, test_colors(), &mut rng);
        assert!(field.is_empty());
        assert!(field.positions().is_empty());
    }

    #[test]
    fn test_seeded_build_is_deterministic() {
        let mut a = SmallRng::seed_from_u64(6);
        let mut b = SmallRng::seed_from_u64(6);
        let fa = GalaxyField::build(100, 100, test_colors(), &mut a);
        let fb = GalaxyField::build(100, 100, test_colors(), &mut b);
        assert_eq!(fa.positions(), fb.positions());
        assert_eq!(fa.colors(), fb.colors());
        assert_eq!(fa.shifts(), fb.shifts());
    }
}
