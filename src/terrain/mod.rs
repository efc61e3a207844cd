//! Elevation sampling for region centers
//!
//! The world builder evaluates a height sampler once per region center; the
//! default implementation reads seeded 3D Perlin noise over a scaled copy of
//! the unit sphere and quantizes it to a byte.

mod perlin;

pub use perlin::{sample_perlin_3d, PerlinConfig};

use glam::Vec3;

/// Trait for sampling an elevation byte at positions on the sphere
///
/// Implementations must be deterministic: the same position always yields the
/// same height.
pub trait HeightSampler {
    /// Sample the elevation at a region center on a sphere of `radius`
    fn sample(&self, position: Vec3, radius: f32) -> u8;
}

/// Default sampler: seeded Perlin noise over the scaled unit sphere
///
/// The center is normalized to the unit sphere and multiplied by
/// `noise_scale`, so the elevation field depends on the seed and scale but not
/// on the sphere radius. The noise value in [0, 1] is mapped to [0, 255] by
/// truncation toward zero.
pub struct PerlinHeightSampler {
    /// Seed fed into the noise lattice
    pub seed: u32,
    /// Scale applied to the normalized center before sampling
    pub noise_scale: f32,
    /// Octave layering parameters
    pub config: PerlinConfig,
}

impl PerlinHeightSampler {
    /// Create a sampler with the default octave configuration
    pub fn new(seed: u32, noise_scale: f32) -> Self {
        Self {
            seed,
            noise_scale,
            config: PerlinConfig::default(),
        }
    }

    /// Create a sampler with a custom octave configuration
    pub fn with_config(seed: u32, noise_scale: f32, config: PerlinConfig) -> Self {
        Self {
            seed,
            noise_scale,
            config,
        }
    }
}

impl HeightSampler for PerlinHeightSampler {
    fn sample(&self, position: Vec3, radius: f32) -> u8 {
        let sample_pos = position / radius * self.noise_scale;
        let elevation = sample_perlin_3d(sample_pos, self.seed, &self.config);
        (elevation * f32::from(u8::MAX)) as u8
    }
}
