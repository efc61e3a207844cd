//! Diagram construction: site placement, relaxation, and the Voronoi dual
//!
//! This is the geometry pipeline the world builder consumes: seeded sites on
//! the sphere, optional Lloyd relaxation, then the flat offset-indexed Voronoi
//! diagram dual to the spherical Delaunay triangulation.

mod fibonacci;
mod hull;
mod lloyd;
mod sites;
mod voronoi;

pub use fibonacci::generate_fibonacci_sphere_points;
pub use lloyd::{lloyd_relaxation, LloydOptions};
pub use sites::generate_random_sphere_points;
pub use voronoi::{build_diagram, VoronoiDiagram};

use crate::config::{SiteDistribution, WorldConfig};
use crate::error::Result;

/// Build the relaxed Voronoi diagram a configuration describes
pub(crate) fn build_world_diagram(config: &WorldConfig) -> Result<VoronoiDiagram> {
    let points = match config.site_distribution {
        SiteDistribution::Random => {
            generate_random_sphere_points(config.region_count, config.radius, config.seed)
        }
        SiteDistribution::Fibonacci => {
            generate_fibonacci_sphere_points(config.region_count, config.radius, config.seed)
        }
    };

    let points = if config.relax_iterations > 0 {
        let options = LloydOptions {
            max_iterations: config.relax_iterations,
            convergence_threshold: config.relax_convergence,
        };
        lloyd_relaxation(points, config.radius, options)?
    } else {
        points
    };

    build_diagram(&points, config.radius)
}
