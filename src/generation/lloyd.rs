//! Lloyd relaxation for uniform site distribution
//!
//! Each iteration recomputes the spherical Delaunay triangulation and moves
//! every site to the centroid of its Voronoi cell (the mean of the adjacent
//! triangle circumcenters, renormalized onto the sphere). A few iterations
//! turn a random distribution into a near-hexagonal one.

use glam::Vec3;
use parry3d::math::Point;
use parry3d::transformation;

use super::hull::{build_vertex_triangle_map, circumcenter};
use crate::error::{Result, WorldError};

/// Options for Lloyd relaxation
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Maximum number of iterations to run
    pub max_iterations: usize,
    /// Stop early once the maximum site displacement falls below this
    /// fraction of the radius; 0.0 disables early termination
    pub convergence_threshold: f32,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: 3,
            convergence_threshold: 0.0,
        }
    }
}

/// Relax sites toward their Voronoi cell centroids
///
/// Deterministic for a given input. Fails if the point set degenerates
/// underneath the hull: a site swallowed by the hull or a site with no
/// incident triangles leaves no cell to take the centroid of.
pub fn lloyd_relaxation(
    mut points: Vec<Point<f32>>,
    radius: f32,
    options: LloydOptions,
) -> Result<Vec<Point<f32>>> {
    let convergence_threshold = options.convergence_threshold * radius;

    eprintln!(
        "[lloyd] {} sites, up to {} iterations",
        points.len(),
        options.max_iterations
    );

    for iteration in 0..options.max_iterations {
        let (vertices, triangles) = transformation::convex_hull(&points);
        if vertices.len() != points.len() {
            return Err(WorldError::DiagramConstructionFailed(format!(
                "relaxation iteration {}: convex hull kept {} of {} sites",
                iteration + 1,
                vertices.len(),
                points.len()
            )));
        }

        let vertex_triangles = build_vertex_triangle_map(vertices.len(), &triangles);
        let (new_points, max_displacement) =
            relax_step(&vertices, &vertex_triangles, &triangles, radius)?;
        points = new_points;

        eprintln!(
            "[lloyd] iteration {}: max displacement {:.6}",
            iteration + 1,
            max_displacement
        );

        if convergence_threshold > 0.0 && max_displacement < convergence_threshold {
            eprintln!("[lloyd] converged after {} iterations", iteration + 1);
            break;
        }
    }

    Ok(points)
}

/// One relaxation step: move every site to its cell centroid
fn relax_step(
    vertices: &[Point<f32>],
    vertex_triangles: &[Vec<usize>],
    triangles: &[[u32; 3]],
    radius: f32,
) -> Result<(Vec<Point<f32>>, f32)> {
    let mut max_displacement: f32 = 0.0;
    let mut new_points = Vec::with_capacity(vertices.len());

    for (vertex_idx, old_pos) in vertices.iter().enumerate() {
        let adjacent = &vertex_triangles[vertex_idx];
        if adjacent.is_empty() {
            return Err(WorldError::DiagramConstructionFailed(format!(
                "site {} has no incident triangles",
                vertex_idx
            )));
        }

        let sum: Vec3 = adjacent
            .iter()
            .map(|&tri_idx| circumcenter(tri_idx, vertices, triangles, radius))
            .sum();
        let centroid = sum / adjacent.len() as f32;
        let moved = centroid.normalize() * radius;
        if !moved.is_finite() {
            return Err(WorldError::DiagramConstructionFailed(format!(
                "site {} has a degenerate cell centroid",
                vertex_idx
            )));
        }

        let displacement = (moved - Vec3::new(old_pos.x, old_pos.y, old_pos.z)).length();
        max_displacement = max_displacement.max(displacement);

        new_points.push(Point::new(moved.x, moved.y, moved.z));
    }

    Ok((new_points, max_displacement))
}
