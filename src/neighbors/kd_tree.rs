use glam::Vec3A;
use kiddo::{ImmutableKdTree, SquaredEuclidean};

use super::{NeighborSearch, Neighbors};
use crate::parameters::SearchParameters;

/// A [`NeighborSearch`] backed by an immutable [k-d tree].
///
/// The tree is built once from the point positions and can then be queried
/// concurrently from multiple threads.
///
/// [k-d tree]: https://en.wikipedia.org/wiki/K-d_tree
pub struct KdTreeSearch {
    tree: ImmutableKdTree<f32, 3>,
    len: usize,
}

impl KdTreeSearch {
    /// Builds a k-d tree over the given points.
    pub fn new(points: &[Vec3A]) -> Self {
        let entries = points.iter().map(|p| p.to_array()).collect::<Vec<_>>();
        Self {
            tree: ImmutableKdTree::new_from_slice(&entries),
            len: points.len(),
        }
    }

    /// Returns the number of points in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl NeighborSearch for KdTreeSearch {
    fn search(&self, query: Vec3A, parameters: &SearchParameters) -> Neighbors {
        let query = query.to_array();

        // `SquaredEuclidean` compares squared distances, so the radius is squared too.
        let results = match *parameters {
            SearchParameters::Knn { k } => self.tree.nearest_n::<SquaredEuclidean>(&query, k),
            SearchParameters::Radius { radius } => {
                self.tree.within::<SquaredEuclidean>(&query, radius * radius)
            }
            SearchParameters::Hybrid {
                radius,
                max_neighbors,
            } => self.tree.nearest_n_within::<SquaredEuclidean>(
                &query,
                radius * radius,
                max_neighbors,
                true,
            ),
        };

        results
            .into_iter()
            .map(|neighbor| (neighbor.item as usize, neighbor.distance))
            .collect()
    }
}
