//! Random distribution sampling for the two particle populations.
//!
//! Pure functions over a caller-supplied RNG: given the same seed they
//! produce the same galaxy, which the tests rely on. Core particles target a
//! thin spherical shell around the origin; disk particles target a flattened
//! band that spreads mass out to the outer radius with a soft inner cutoff.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::Rng;
use std::f32::consts::TAU;

/// Inner and outer colors of the galaxy gradient.
#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    /// Color of the core halo and the inner end of the disk gradient.
    pub core: Vec3,
    /// Color at the outer edge of the disk.
    pub disk: Vec3,
}

/// Inner cutoff radius of the disk band.
pub const DISK_INNER_RADIUS: f32 = 10.0;
/// Outer radius of the disk band; also the normalizer for the color blend.
pub const DISK_OUTER_RADIUS: f32 = 40.0;

/// Half-extent of the scatter cube core particles start in (side 100).
const CORE_SCATTER_HALF: f32 = 50.0;
/// Half-extent of the scatter cube disk particles start in (side 200).
const DISK_SCATTER_HALF: f32 = 100.0;

/// Start point, destination and color for one core particle.
#[derive(Clone, Copy, Debug)]
pub struct CoreSample {
    pub start: Vec3,
    pub target: Vec3,
    pub color: Vec3,
}

/// Start point, destination, color and sampled radius for one disk particle.
#[derive(Clone, Copy, Debug)]
pub struct DiskSample {
    pub start: Vec3,
    pub target: Vec3,
    pub color: Vec3,
    /// Radial distance of the target from the disk axis, in `[inner, outer]`.
    pub radius: f32,
}

/// Sample one particle of the spherical core population.
///
/// The target sits on a shell of radius 9.5..10.0 around the origin; the
/// start is scattered uniformly in a cube of side 100.
pub fn sample_core(rng: &mut SmallRng, colors: &ColorScheme) -> CoreSample {
    let radius = rng.gen_range(9.5..10.0);
    CoreSample {
        start: random_in_cube(rng, CORE_SCATTER_HALF),
        target: random_direction(rng) * radius,
        color: colors.core,
    }
}

/// Sample one particle of the flattened disk population.
///
/// The radial distance is drawn from `sqrt(R²·u^1.5 + (1 - u^1.5)·r²)`,
/// which spreads particles across the full band out to the outer radius
/// with a soft cutoff at the inner one (mean squared radius
/// `r² + 0.4·(R² - r²)`). The vertical offset is uniform in `[-1, 1)`,
/// giving the disk its thin band profile. The color blends linearly from
/// the core color to the disk color with the normalized radius.
pub fn sample_disk(
    rng: &mut SmallRng,
    inner_radius: f32,
    outer_radius: f32,
    colors: &ColorScheme,
) -> DiskSample {
    let bias = rng.gen::<f32>().powf(1.5);
    let radius =
        (outer_radius * outer_radius * bias + (1.0 - bias) * inner_radius * inner_radius).sqrt();

    let theta = rng.gen_range(0.0..TAU);
    let target = Vec3::new(
        radius * theta.sin(),
        rng.gen_range(-1.0..1.0),
        radius * theta.cos(),
    );

    // Radius is mathematically bounded by outer_radius, so the blend factor
    // never exceeds 1 even though it is not clamped.
    let blend = radius / DISK_OUTER_RADIUS;

    DiskSample {
        start: random_in_cube(rng, DISK_SCATTER_HALF),
        target,
        color: colors.core.lerp(colors.disk, blend),
        radius,
    }
}

/// Random unit vector, uniformly distributed on the unit sphere.
pub fn random_direction(rng: &mut SmallRng) -> Vec3 {
    // Uniform z plus uniform azimuth avoids pole clustering.
    let z = rng.gen_range(-1.0..1.0f32);
    let theta = rng.gen_range(0.0..TAU);
    let planar = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(planar * theta.cos(), planar * theta.sin(), z)
}

/// Random point inside a cube of given half-size, centered at origin.
pub fn random_in_cube(rng: &mut SmallRng, half_size: f32) -> Vec3 {
    Vec3::new(
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
    )
}
