//! World configuration and builder
//!
//! A [`WorldConfig`] fully determines a world: the same configuration always
//! produces a byte-identical tessellation, heights included.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorldError};

/// Strategy for placing the initial Voronoi sites on the sphere
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteDistribution {
    /// Uniform random points, smoothed by Lloyd relaxation (default)
    #[default]
    Random,
    /// Fibonacci lattice with jitter; near-uniform before any relaxation
    Fibonacci,
}

/// Configuration for deterministic world generation
///
/// Build one with [`WorldConfigBuilder`]; only the resulting values matter,
/// not how they were assembled.
///
/// # Example
///
/// ```rust
/// use voronoi_atlas::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(42)
///     .region_count(512)
///     .build()
///     .unwrap();
/// assert_eq!(config.seed, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Number of Voronoi regions to tessellate the sphere into
    ///
    /// Must be at least [`crate::world::MIN_REGIONS`]; enforced during
    /// generation, not here.
    pub region_count: usize,

    /// Seed for site placement and elevation noise
    pub seed: u32,

    /// Scale applied to the unit-sphere center before sampling the noise
    /// domain; larger values pack more elevation variation onto the sphere
    pub noise_scale: f32,

    /// Sphere radius; all centers and boundary vertices lie on this sphere
    pub radius: f32,

    /// Number of Lloyd relaxation iterations applied to the sites
    pub relax_iterations: usize,

    /// Convergence threshold for relaxation, as a fraction of the radius
    ///
    /// 0.0 (the default) disables early termination so exactly
    /// `relax_iterations` iterations run.
    pub relax_convergence: f32,

    /// How the initial sites are distributed on the sphere
    pub site_distribution: SiteDistribution,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfigBuilder::new().build().unwrap()
    }
}

/// Builder for [`WorldConfig`] with validation
///
/// Defaults: 5 000 regions, seed 0, noise scale 2.0, unit radius, 3 relaxation
/// iterations without early termination, random site distribution.
///
/// # Example
///
/// ```rust
/// use voronoi_atlas::*;
///
/// let config = WorldConfigBuilder::new()
///     .seed(7)
///     .region_count(1024)
///     .relax_iterations(5)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.relax_iterations, 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorldConfigBuilder {
    region_count: usize,
    seed: u32,
    noise_scale: f32,
    radius: f32,
    relax_iterations: usize,
    relax_convergence: f32,
    site_distribution: SiteDistribution,
}

impl WorldConfigBuilder {
    /// Create a builder holding the default configuration
    pub fn new() -> Self {
        Self {
            region_count: 5_000,
            seed: 0,
            noise_scale: 2.0,
            radius: 1.0,
            relax_iterations: 3,
            relax_convergence: 0.0,
            site_distribution: SiteDistribution::Random,
        }
    }

    /// Set the number of regions
    pub fn region_count(mut self, count: usize) -> Self {
        self.region_count = count;
        self
    }

    /// Set the seed for site placement and elevation noise
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the noise domain scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the scale is not a positive finite number.
    pub fn noise_scale(mut self, scale: f32) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "noise scale must be positive and finite (got {})",
                scale
            )));
        }
        self.noise_scale = scale;
        Ok(self)
    }

    /// Set the sphere radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is not positive.
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        if radius <= 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "radius must be positive (got {})",
                radius
            )));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Set the number of Lloyd relaxation iterations
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if iterations > 20.
    pub fn relax_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations > 20 {
            return Err(WorldError::InvalidConfig(format!(
                "relaxation iterations must be <= 20 (got {})",
                iterations
            )));
        }
        self.relax_iterations = iterations;
        Ok(self)
    }

    /// Set the relaxation convergence threshold (fraction of the radius)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the threshold is negative.
    pub fn relax_convergence(mut self, threshold: f32) -> Result<Self> {
        if threshold < 0.0 {
            return Err(WorldError::InvalidConfig(format!(
                "relaxation convergence threshold must be >= 0 (got {})",
                threshold
            )));
        }
        self.relax_convergence = threshold;
        Ok(self)
    }

    /// Set the site distribution strategy
    pub fn site_distribution(mut self, distribution: SiteDistribution) -> Self {
        self.site_distribution = distribution;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<WorldConfig> {
        Ok(WorldConfig {
            region_count: self.region_count,
            seed: self.seed,
            noise_scale: self.noise_scale,
            radius: self.radius,
            relax_iterations: self.relax_iterations,
            relax_convergence: self.relax_convergence,
            site_distribution: self.site_distribution,
        })
    }
}

impl Default for WorldConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = WorldConfigBuilder::new().build().unwrap();
        assert_eq!(config.region_count, 5_000);
        assert_eq!(config.seed, 0);
        assert_eq!(config.noise_scale, 2.0);
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.relax_iterations, 3);
        assert_eq!(config.relax_convergence, 0.0);
        assert_eq!(config.site_distribution, SiteDistribution::Random);
    }

    #[test]
    fn test_builder_custom() {
        let config = WorldConfigBuilder::new()
            .seed(42)
            .region_count(1_000)
            .noise_scale(3.5)
            .unwrap()
            .relax_iterations(5)
            .unwrap()
            .site_distribution(SiteDistribution::Fibonacci)
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.region_count, 1_000);
        assert_eq!(config.noise_scale, 3.5);
        assert_eq!(config.relax_iterations, 5);
        assert_eq!(config.site_distribution, SiteDistribution::Fibonacci);
    }

    #[test]
    fn test_builder_too_many_iterations() {
        assert!(WorldConfigBuilder::new().relax_iterations(21).is_err());
        assert!(WorldConfigBuilder::new().relax_iterations(20).is_ok());
    }

    #[test]
    fn test_builder_invalid_radius() {
        assert!(WorldConfigBuilder::new().radius(0.0).is_err());
        assert!(WorldConfigBuilder::new().radius(-5.0).is_err());
    }

    #[test]
    fn test_builder_invalid_noise_scale() {
        assert!(WorldConfigBuilder::new().noise_scale(0.0).is_err());
        assert!(WorldConfigBuilder::new().noise_scale(f32::NAN).is_err());
        assert!(WorldConfigBuilder::new().noise_scale(f32::INFINITY).is_err());
    }

    #[test]
    fn test_builder_invalid_convergence() {
        assert!(WorldConfigBuilder::new().relax_convergence(-0.1).is_err());
        assert!(WorldConfigBuilder::new().relax_convergence(0.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = WorldConfigBuilder::new()
            .seed(12345)
            .region_count(2_000)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: WorldConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
