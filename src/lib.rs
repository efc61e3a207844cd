//! Voronoi world tessellation with seam-free flat map output
//!
//! Builds an immutable, seeded Voronoi tessellation of a sphere (regions
//! with per-region elevation, stored in flat offset-indexed arrays) and
//! flattens region boundaries into polygons for a Mercator-style canvas,
//! splitting cleanly at the ±180° longitude seam.
//!
//! # Quick Start
//!
//! ```rust
//! use voronoi_atlas::*;
//!
//! // Generate a world; the same configuration is always byte-identical.
//! let config = WorldConfigBuilder::new()
//!     .seed(42)
//!     .region_count(512)
//!     .build()
//!     .unwrap();
//! let world = World::generate(config).unwrap();
//!
//! // Flatten a region for 2D rendering.
//! let projection = MapProjection::new(1500.0);
//! let [east, west] = split_region(world.region(0), &projection);
//! assert!(east.len() >= 3 || west.len() >= 3);
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) position-to-region lookups via a KD-tree
//! - `serde`: serialization support for [`WorldConfig`]

pub mod config;
pub mod error;
pub mod generation;
pub mod projection;
pub mod regions;
pub mod split;
pub mod terrain;
pub mod world;

#[cfg(feature = "spatial-index")]
pub mod spatial;

pub use config::{SiteDistribution, WorldConfig, WorldConfigBuilder};
pub use error::{Result, WorldError};
pub use generation::{LloydOptions, VoronoiDiagram};
pub use projection::MapProjection;
pub use regions::{Region, Regions};
pub use split::{split_region, split_world, RegionFragments};
pub use terrain::{HeightSampler, PerlinConfig, PerlinHeightSampler};
pub use world::{World, MIN_REGIONS};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export the vector types used across the public surface.
pub use glam::{DVec2, Vec3};
