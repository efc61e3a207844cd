//! Antimeridian-aware flattening of region boundaries
//!
//! A region's boundary is a closed loop on the sphere; projected naively, a
//! loop that straddles the ±180° longitude seam smears across the whole
//! canvas. [`split_region`] walks the boundary edges, detects seam crossings,
//! and emits up to two flat polygon fragments, one east of the seam and one
//! west, each closed against the matching canvas edge so neither shows a
//! wraparound artifact.

use glam::DVec2;
use rayon::prelude::*;
use std::f64::consts::PI;

use crate::projection::{lat_lng_of, MapProjection};
use crate::regions::Region;
use crate::world::World;

/// Flat polygon fragments for one region: `[east of the seam, west of the seam]`
///
/// Either slot may be empty; fragments with fewer than 3 points are degenerate
/// and should be discarded before rendering.
pub type RegionFragments = [Vec<DVec2>; 2];

struct ProjectedVertex {
    lat: f64,
    lng: f64,
    screen: DVec2,
}

/// Split a region's boundary into seam-free polygon fragments
///
/// A boundary that never crosses the seam comes back whole in the east slot
/// with the west slot empty. When an edge crosses, the boundary walk buckets
/// each vertex by the sign of its longitude and closes both buckets with a
/// synthetic seam point: at x = width for the east fragment, x = 0 for the
/// west fragment, both at the interpolated crossing latitude's y.
///
/// Crossing detection compares raw longitudes: an edge crosses when they
/// differ by more than π. That misreads any cell wider than half the sphere's
/// longitude span; cells produced by the tessellation stay far below that.
///
/// Every finite input is handled; an empty boundary yields two empty
/// fragments.
pub fn split_region(region: Region<'_>, projection: &MapProjection) -> RegionFragments {
    let n = region.num_vertices();
    let mut fragments: RegionFragments = [Vec::new(), Vec::new()];
    if n == 0 {
        return fragments;
    }

    let vertices: Vec<ProjectedVertex> = (0..n)
        .map(|i| {
            let point = region.vertex(i);
            let (lat, lng) = lat_lng_of(point);
            ProjectedVertex {
                lat,
                lng,
                screen: projection.project(point),
            }
        })
        .collect();

    let has_crossing =
        (0..n).any(|i| crosses_antimeridian(vertices[i].lng, vertices[(i + 1) % n].lng));
    if !has_crossing {
        fragments[0] = vertices.iter().map(|v| v.screen).collect();
        return fragments;
    }

    let [east, west] = &mut fragments;
    for i in 0..n {
        let v1 = &vertices[i];
        let v2 = &vertices[(i + 1) % n];

        if crosses_antimeridian(v1.lng, v2.lng) {
            let cross_lat = interpolate_lat_at_antimeridian(v1.lat, v1.lng, v2.lat, v2.lng);
            let cross_y = projection.project_lat_lng(cross_lat, PI).y;

            if v1.lng > 0.0 {
                east.push(v1.screen);
                east.push(DVec2::new(projection.width(), cross_y));
                west.push(DVec2::new(0.0, cross_y));
            } else {
                west.push(v1.screen);
                west.push(DVec2::new(0.0, cross_y));
                east.push(DVec2::new(projection.width(), cross_y));
            }
        } else if v1.lng > 0.0 {
            east.push(v1.screen);
        } else {
            west.push(v1.screen);
        }
    }

    fragments
}

/// Split every region of a world, preserving region-index order
///
/// Regions are independent, so the work fans out across the rayon thread
/// pool; the result vector is indexed by region, keeping draw order
/// deterministic.
pub fn split_world(world: &World, projection: &MapProjection) -> Vec<RegionFragments> {
    (0..world.num_regions())
        .into_par_iter()
        .map(|i| split_region(world.region(i), projection))
        .collect()
}

/// Whether the edge between two longitudes (radians) crosses the antimeridian
///
/// Heuristic: a raw longitude difference beyond π can only happen by wrapping
/// through ±π, as long as the edge spans less than half the sphere.
pub fn crosses_antimeridian(lng1: f64, lng2: f64) -> bool {
    (lng2 - lng1).abs() > PI
}

/// Latitude where the edge (lat1, lng1) → (lat2, lng2) meets the seam
///
/// The longitude distance is unwrapped through the seam (+π and −π are the
/// same meridian), so both partial distances are positive and their sum stays
/// below 2π; latitude is interpolated linearly by the fractional distance to
/// the seam.
pub fn interpolate_lat_at_antimeridian(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let (to_seam, from_seam) = if lng1 > 0.0 {
        (PI - lng1, PI + lng2)
    } else {
        (PI + lng1, PI - lng2)
    };

    let t = to_seam / (to_seam + from_seam);
    lat1 + t * (lat2 - lat1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::point_from_lat_lng;
    use crate::regions::Regions;
    use crate::{World, WorldConfigBuilder};
    use glam::Vec3;

    /// Single-region fixture with the given boundary, in (lat°, lng°) pairs.
    fn fixture(boundary_deg: &[(f64, f64)]) -> Regions {
        let vertices: Vec<Vec3> = boundary_deg
            .iter()
            .map(|&(lat, lng)| point_from_lat_lng(lat.to_radians(), lng.to_radians()))
            .collect();
        let n = vertices.len();
        Regions::new(
            vec![Vec3::X],
            vec![0],
            vertices,
            (0..n).collect(),
            vec![0; n],
            vec![0, n],
        )
    }

    #[test]
    fn test_no_crossing_single_fragment() {
        let regions = fixture(&[(10.0, 10.0), (15.0, 20.0), (20.0, 15.0)]);
        let projection = MapProjection::new(1500.0);

        let [east, west] = split_region(regions.at(0), &projection);

        assert_eq!(east.len(), 3);
        assert!(west.is_empty());

        // The single fragment is the direct per-vertex projection.
        let region = regions.at(0);
        for (i, point) in east.iter().enumerate() {
            assert_eq!(*point, projection.project(region.vertex(i)));
        }
    }

    #[test]
    fn test_crossing_emits_two_fragments() {
        let regions = fixture(&[(10.0, 179.0), (0.0, -179.0), (-10.0, 0.0)]);
        let projection = MapProjection::new(1500.0);

        let [east, west] = split_region(regions.at(0), &projection);

        assert!(!east.is_empty());
        assert!(!west.is_empty());

        // Both fragments close against their canvas edge exactly.
        assert!(east.iter().any(|p| p.x == projection.width()));
        assert!(west.iter().any(|p| p.x == 0.0));
    }

    #[test]
    fn test_crossing_seam_points_share_latitude() {
        let regions = fixture(&[(10.0, 170.0), (10.0, -170.0), (-10.0, 180.0)]);
        let projection = MapProjection::new(1500.0);

        let [east, west] = split_region(regions.at(0), &projection);

        let east_seam: Vec<f64> = east
            .iter()
            .filter(|p| p.x == projection.width())
            .map(|p| p.y)
            .collect();
        let west_seam: Vec<f64> = west.iter().filter(|p| p.x == 0.0).map(|p| p.y).collect();

        assert_eq!(east_seam.len(), west_seam.len());
        assert!(!east_seam.is_empty());
        for (ey, wy) in east_seam.iter().zip(west_seam.iter()) {
            assert_eq!(ey, wy);
        }
    }

    #[test]
    fn test_westward_start_buckets_mirror() {
        // First vertex west of the seam; crossing edge goes west -> east.
        let regions = fixture(&[(0.0, -179.0), (-10.0, 0.0), (10.0, 179.0)]);
        let projection = MapProjection::new(1500.0);

        let [east, west] = split_region(regions.at(0), &projection);

        assert!(!east.is_empty());
        assert!(!west.is_empty());
        assert!(east.iter().any(|p| p.x == projection.width()));
        assert!(west.iter().any(|p| p.x == 0.0));
    }

    #[test]
    fn test_empty_boundary() {
        let regions = Regions::new(vec![Vec3::X], vec![0], vec![], vec![], vec![], vec![0, 0]);
        let projection = MapProjection::new(1500.0);

        let [east, west] = split_region(regions.at(0), &projection);
        assert!(east.is_empty());
        assert!(west.is_empty());
    }

    #[test]
    fn test_crosses_antimeridian() {
        assert!(crosses_antimeridian(
            170.0_f64.to_radians(),
            (-170.0_f64).to_radians()
        ));
        assert!(!crosses_antimeridian(
            10.0_f64.to_radians(),
            20.0_f64.to_radians()
        ));
    }

    #[test]
    fn test_interpolation_pure_longitude_motion() {
        // Constant latitude across the seam introduces no drift.
        let lat = interpolate_lat_at_antimeridian(
            0.0,
            170.0_f64.to_radians(),
            0.0,
            (-170.0_f64).to_radians(),
        );
        assert_eq!(lat, 0.0);
    }

    #[test]
    fn test_interpolation_midpoint() {
        // Equal longitude distances on both sides: latitude lands halfway.
        let lat = interpolate_lat_at_antimeridian(
            0.2,
            170.0_f64.to_radians(),
            0.4,
            (-170.0_f64).to_radians(),
        );
        assert!((lat - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_split_world_preserves_region_order() {
        let config = WorldConfigBuilder::new()
            .seed(42)
            .region_count(128)
            .build()
            .unwrap();
        let world = World::generate(config).unwrap();
        let projection = MapProjection::new(1500.0);

        let parallel = split_world(&world, &projection);
        assert_eq!(parallel.len(), world.num_regions());

        for (i, fragments) in parallel.iter().enumerate() {
            let serial = split_region(world.region(i), &projection);
            assert_eq!(fragments, &serial);
        }
    }
}
