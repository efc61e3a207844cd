//! World construction and top-level queries
//!
//! A [`World`] is built once from a [`WorldConfig`] (seeded sites, Lloyd
//! relaxation, the Voronoi dual, then one elevation sample per region) and
//! never mutated afterwards. Construction either returns a complete world or
//! an error; there is no partial result.

use crate::config::WorldConfig;
use crate::error::{Result, WorldError};
use crate::generation;
use crate::regions::{Region, Regions};
use crate::terrain::{HeightSampler, PerlinHeightSampler};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec3;

/// Fewest regions a sphere tessellation can have: a tetrahedron's worth
pub const MIN_REGIONS: usize = 4;

/// An immutable tessellated world
///
/// Owns all region geometry and elevation through its [`Regions`] aggregate.
/// Safe to share across threads once built.
#[derive(Clone)]
pub struct World {
    config: WorldConfig,
    regions: Regions,

    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl World {
    /// Generate a world with the default Perlin elevation sampler
    ///
    /// The same configuration always produces a byte-identical world:
    /// identical centers, heights, and adjacency arrays.
    ///
    /// # Errors
    ///
    /// [`WorldError::InsufficientRegions`] if `region_count` is below
    /// [`MIN_REGIONS`]; [`WorldError::DiagramConstructionFailed`] if the
    /// diagram or its relaxation degenerates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voronoi_atlas::*;
    ///
    /// let config = WorldConfigBuilder::new()
    ///     .seed(42)
    ///     .region_count(256)
    ///     .build()
    ///     .unwrap();
    /// let world = World::generate(config).unwrap();
    /// assert_eq!(world.num_regions(), 256);
    /// ```
    pub fn generate(config: WorldConfig) -> Result<Self> {
        let sampler = PerlinHeightSampler::new(config.seed, config.noise_scale);
        Self::generate_with_sampler(config, &sampler)
    }

    /// Generate a world with a custom elevation sampler
    ///
    /// The sampler is evaluated once per region center after the tessellation
    /// is built.
    pub fn generate_with_sampler<S>(config: WorldConfig, sampler: &S) -> Result<Self>
    where
        S: HeightSampler,
    {
        if config.region_count < MIN_REGIONS {
            return Err(WorldError::InsufficientRegions(config.region_count));
        }

        let diagram = generation::build_world_diagram(&config)?;

        let heights: Vec<u8> = diagram
            .sites
            .iter()
            .map(|&center| sampler.sample(center, config.radius))
            .collect();

        let regions = Regions::new(
            diagram.sites,
            heights,
            diagram.vertices,
            diagram.cell_vertices,
            diagram.cell_neighbors,
            diagram.cell_offsets,
        );

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(regions.centers());

        Ok(Self {
            config,
            regions,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// The configuration this world was generated from
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of regions
    #[inline]
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// View of the region at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; see [`World::get_region`] for the
    /// fallible form.
    #[inline]
    pub fn region(&self, index: usize) -> Region<'_> {
        self.regions.at(index)
    }

    /// View of the region at `index`, or `None` if out of range
    #[inline]
    pub fn get_region(&self, index: usize) -> Option<Region<'_>> {
        self.regions.get(index)
    }

    /// The underlying region aggregate
    #[inline]
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// The region whose center is nearest to a position
    ///
    /// KD-tree lookup in O(log n); useful for picking and raycast hits.
    #[cfg(feature = "spatial-index")]
    pub fn region_at(&self, position: Vec3) -> Region<'_> {
        self.regions.at(self.spatial_index.find_nearest(position))
    }
}
