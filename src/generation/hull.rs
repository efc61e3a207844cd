//! Shared helpers over the spherical Delaunay triangulation
//!
//! For points on a sphere the Delaunay triangulation is the 3D convex hull of
//! the point set; both relaxation and diagram construction walk the hull's
//! triangle fans, so the common pieces live here.

use glam::Vec3;
use parry3d::math::Point;

#[inline]
pub(super) fn to_vec3(p: &Point<f32>) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}

/// Map from hull vertex index to the indices of all triangles touching it
pub(super) fn build_vertex_triangle_map(
    num_vertices: usize,
    triangles: &[[u32; 3]],
) -> Vec<Vec<usize>> {
    let mut map = vec![Vec::new(); num_vertices];
    for (tri_idx, triangle) in triangles.iter().enumerate() {
        for &vertex_idx in triangle.iter() {
            map[vertex_idx as usize].push(tri_idx);
        }
    }
    map
}

/// Circumcenter of a hull triangle, projected onto the sphere surface
///
/// The triangle's plane normal, pushed out to the sphere radius, is
/// equidistant from all three triangle vertices; these points are the Voronoi
/// vertices of the dual diagram.
pub(super) fn circumcenter(
    tri_idx: usize,
    vertices: &[Point<f32>],
    triangles: &[[u32; 3]],
    radius: f32,
) -> Vec3 {
    let tri = triangles[tri_idx];
    let v0 = to_vec3(&vertices[tri[0] as usize]);
    let v1 = to_vec3(&vertices[tri[1] as usize]);
    let v2 = to_vec3(&vertices[tri[2] as usize]);

    let normal = (v1 - v0).cross(v2 - v0);
    normal.normalize() * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_triangle_map_covers_all_corners() {
        // Tetrahedron connectivity: every vertex sits in three faces.
        let triangles = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];
        let map = build_vertex_triangle_map(4, &triangles);

        assert_eq!(map.len(), 4);
        for fan in &map {
            assert_eq!(fan.len(), 3);
        }
    }

    #[test]
    fn test_circumcenter_on_sphere() {
        let radius = 10.0;
        let vertices = vec![
            Point::new(radius, 0.0, 0.0),
            Point::new(0.0, radius, 0.0),
            Point::new(0.0, 0.0, radius),
        ];
        let triangles = [[0, 1, 2]];

        let cc = circumcenter(0, &vertices, &triangles, radius);
        assert!((cc.length() - radius).abs() < 1e-3);

        // Equidistant from all three triangle vertices.
        let d0 = (cc - to_vec3(&vertices[0])).length();
        let d1 = (cc - to_vec3(&vertices[1])).length();
        let d2 = (cc - to_vec3(&vertices[2])).length();
        assert!((d0 - d1).abs() < 1e-3);
        assert!((d1 - d2).abs() < 1e-3);
    }
}
