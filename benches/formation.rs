//! Benchmarks for the CPU side of the galaxy: field construction and one
//! full formation tick at the default population.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use stardrift::field::GalaxyField;
use stardrift::formation::FormationAnimator;
use stardrift::ColorScheme;

fn default_colors() -> ColorScheme {
    ColorScheme {
        core: Vec3::new(227.0 / 255.0, 155.0 / 255.0, 0.0),
        disk: Vec3::new(100.0 / 255.0, 50.0 / 255.0, 1.0),
    }
}

fn bench_field_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_build");

    group.bench_function("default_population", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(1);
            black_box(GalaxyField::build(50_000, 100_000, default_colors(), &mut rng))
        })
    });

    group.bench_function("small_population", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(1);
            black_box(GalaxyField::build(5_000, 10_000, default_colors(), &mut rng))
        })
    });

    group.finish();
}

fn bench_formation_tick(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut field = GalaxyField::build(50_000, 100_000, default_colors(), &mut rng);
    let mut animator = FormationAnimator::new(5.0);
    animator.start(0.0);

    c.bench_function("formation_tick_150k", |b| {
        let mut now = 0.0f32;
        b.iter(|| {
            // Keep progress strictly inside (0, 1) so every iteration does
            // the full interpolation pass.
            now = (now + 1e-6) % 4.9;
            black_box(animator.tick(now, &mut field))
        })
    });
}

criterion_group!(benches, bench_field_build, bench_formation_tick);
criterion_main!(benches);
