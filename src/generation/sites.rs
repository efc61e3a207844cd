//! Seeded uniform random site placement on a sphere

use parry3d::math::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Generate uniformly distributed random points on a sphere
///
/// Samples the z-coordinate and azimuth independently, which is uniform over
/// the sphere surface. The distribution is intentionally rough; Lloyd
/// relaxation evens it out afterwards.
///
/// # Example
///
/// ```rust
/// use voronoi_atlas::generation::generate_random_sphere_points;
///
/// let points = generate_random_sphere_points(100, 1.0, 42);
/// assert_eq!(points.len(), 100);
/// ```
pub fn generate_random_sphere_points(count: usize, radius: f32, seed: u32) -> Vec<Point<f32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);

    (0..count)
        .map(|_| {
            let z: f32 = rng.gen_range(-1.0..=1.0);
            let azimuth: f32 = rng.gen_range(0.0..TAU);
            let ring = (1.0 - z * z).sqrt();
            Point::new(
                ring * azimuth.cos() * radius,
                ring * azimuth.sin() * radius,
                z * radius,
            )
        })
        .collect()
}
