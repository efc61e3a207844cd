//! Voronoi diagram construction in flat, offset-indexed form
//!
//! The spherical Voronoi diagram is the dual of the Delaunay triangulation
//! (the 3D convex hull for points on a sphere): every hull triangle's
//! circumcenter is one Voronoi vertex, and the circumcenters of the triangles
//! around a site, walked in fan order, form that site's cell boundary.
//! Consecutive fan triangles share exactly one Delaunay edge with the site,
//! whose far end is the neighbor across the corresponding cell edge; that is
//! how every cell ends up with exactly one neighbor per boundary edge.

use glam::Vec3;
use parry3d::math::Point;
use parry3d::transformation;

use super::hull::{build_vertex_triangle_map, circumcenter, to_vec3};
use crate::error::{Result, WorldError};

/// Spherical Voronoi diagram as flat arrays
///
/// `cell_vertices` and `cell_neighbors` are flattened per-cell lists sliced by
/// `cell_offsets`; entries of `cell_vertices` index into `vertices`, entries
/// of `cell_neighbors` are cell indices. Per-cell order is counter-clockwise
/// viewed from outside the sphere.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    /// Cell sites, one per cell
    pub sites: Vec<Vec3>,
    /// Voronoi vertices: the circumcenter of hull triangle `t` at index `t`
    pub vertices: Vec<Vec3>,
    /// Flattened per-cell boundary vertex indices
    pub cell_vertices: Vec<usize>,
    /// Flattened per-cell neighbor cell indices, one per boundary edge
    pub cell_neighbors: Vec<usize>,
    /// Row pointers: cell `i` owns entries `cell_offsets[i]..cell_offsets[i+1]`
    pub cell_offsets: Vec<usize>,
}

impl VoronoiDiagram {
    /// Number of cells
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cell_offsets.len() - 1
    }
}

/// Build the Voronoi diagram of sites on a sphere
///
/// Every input point must end up a hull vertex; a site swallowed by the hull
/// (duplicate or interior point) makes the diagram unrepresentable and fails
/// construction.
pub fn build_diagram(points: &[Point<f32>], radius: f32) -> Result<VoronoiDiagram> {
    let (hull_vertices, triangles) = transformation::convex_hull(points);
    if hull_vertices.len() != points.len() {
        return Err(WorldError::DiagramConstructionFailed(format!(
            "convex hull kept {} of {} sites",
            hull_vertices.len(),
            points.len()
        )));
    }

    let vertices: Vec<Vec3> = (0..triangles.len())
        .map(|tri_idx| circumcenter(tri_idx, &hull_vertices, &triangles, radius))
        .collect();
    let vertex_triangles = build_vertex_triangle_map(hull_vertices.len(), &triangles);

    let num_cells = hull_vertices.len();
    let mut sites = Vec::with_capacity(num_cells);
    let mut cell_vertices = Vec::new();
    let mut cell_neighbors = Vec::new();
    let mut cell_offsets = Vec::with_capacity(num_cells + 1);
    cell_offsets.push(0);

    for cell in 0..num_cells {
        let site = to_vec3(&hull_vertices[cell]);
        let adjacent = &vertex_triangles[cell];
        if adjacent.len() < 3 {
            return Err(WorldError::DiagramConstructionFailed(format!(
                "site {} touches only {} triangles",
                cell,
                adjacent.len()
            )));
        }

        let fan = order_triangle_fan(adjacent, &vertices, site);
        for k in 0..fan.len() {
            let next = fan[(k + 1) % fan.len()];
            let neighbor = shared_site(fan[k], next, cell, &triangles).ok_or_else(|| {
                WorldError::DiagramConstructionFailed(format!(
                    "fan around site {} is not edge-connected",
                    cell
                ))
            })?;
            cell_vertices.push(fan[k]);
            cell_neighbors.push(neighbor);
        }

        cell_offsets.push(cell_vertices.len());
        sites.push(site);
    }

    Ok(VoronoiDiagram {
        sites,
        vertices,
        cell_vertices,
        cell_neighbors,
        cell_offsets,
    })
}

/// Sort a site's incident triangles counter-clockwise around the site
///
/// Projects the circumcenters onto the tangent plane at the site and sorts by
/// angle. With the outward site normal completing a right-handed basis,
/// ascending angle is counter-clockwise seen from outside the sphere.
fn order_triangle_fan(adjacent: &[usize], vertices: &[Vec3], site: Vec3) -> Vec<usize> {
    let normal = site.normalize();
    let reference = if normal.x.abs() > 0.5 { Vec3::Y } else { Vec3::X };
    let tangent_u = reference.cross(normal).normalize();
    let tangent_v = normal.cross(tangent_u);

    let mut fan: Vec<(usize, f32)> = adjacent
        .iter()
        .map(|&tri_idx| {
            let offset = vertices[tri_idx] - site;
            let angle = offset.dot(tangent_v).atan2(offset.dot(tangent_u));
            (tri_idx, angle)
        })
        .collect();
    fan.sort_by(|a, b| a.1.total_cmp(&b.1));

    fan.into_iter().map(|(tri_idx, _)| tri_idx).collect()
}

/// The vertex two fan-adjacent triangles share besides the site itself
///
/// For triangles `(site, a, b)` and `(site, b, c)` this is `b`: the far end of
/// the Delaunay edge dual to the Voronoi edge between their circumcenters.
fn shared_site(tri_a: usize, tri_b: usize, site: usize, triangles: &[[u32; 3]]) -> Option<usize> {
    let b = &triangles[tri_b];
    triangles[tri_a]
        .iter()
        .map(|&v| v as usize)
        .find(|&v| v != site && b.iter().any(|&w| w as usize == v))
}
