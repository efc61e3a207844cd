//! Spatial indexing for position-to-region lookups
//!
//! Only available with the `spatial-index` feature.

use glam::Vec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

/// KD-tree over region centers
///
/// Answers "which region is this position in" in O(log n): for a Voronoi
/// tessellation the containing region is exactly the one with the nearest
/// center. Built once during world generation.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 3, 32>,
}

impl SpatialIndex {
    /// Build an index from region centers
    pub fn new(centers: &[Vec3]) -> Self {
        let points: Vec<[f32; 3]> = centers.iter().map(|c| [c.x, c.y, c.z]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the region whose center is nearest to `position`
    pub fn find_nearest(&self, position: Vec3) -> usize {
        let query = [position.x, position.y, position.z];
        self.tree.nearest_one::<SquaredEuclidean>(&query).item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_center() {
        let centers = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ];
        let index = SpatialIndex::new(&centers);

        assert_eq!(index.find_nearest(Vec3::new(0.9, 0.1, 0.0)), 0);
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.95, 0.0)), 1);
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.1, 0.9)), 2);
        assert_eq!(index.find_nearest(Vec3::new(-0.8, 0.0, 0.0)), 3);
    }

    #[test]
    fn test_exact_match() {
        let centers = vec![Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0)];
        let index = SpatialIndex::new(&centers);

        assert_eq!(index.find_nearest(centers[0]), 0);
        assert_eq!(index.find_nearest(centers[1]), 1);
    }
}
