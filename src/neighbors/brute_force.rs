use glam::Vec3A;

use super::{NeighborSearch, Neighbors};
use crate::parameters::SearchParameters;

/// A [`NeighborSearch`] that scans every point for every query.
///
/// Queries are `O(n log n)`, so this is only practical for small clouds.
#[derive(Clone, Copy, Debug)]
pub struct BruteForceSearch<'a> {
    points: &'a [Vec3A],
}

impl<'a> BruteForceSearch<'a> {
    /// Creates a brute force search over the given points.
    #[inline]
    pub fn new(points: &'a [Vec3A]) -> Self {
        Self { points }
    }
}

impl NeighborSearch for BruteForceSearch<'_> {
    fn search(&self, query: Vec3A, parameters: &SearchParameters) -> Neighbors {
        let max_distance_squared = parameters
            .search_radius()
            .map_or(f32::INFINITY, |radius| radius * radius);

        let mut candidates = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| (index, point.distance_squared(query)))
            .filter(|&(_, distance_squared)| distance_squared <= max_distance_squared)
            .collect::<Vec<_>>();

        candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        if let Some(max_neighbors) = parameters.max_neighbors() {
            candidates.truncate(max_neighbors.get());
        }

        candidates.into_iter().collect()
    }
}
