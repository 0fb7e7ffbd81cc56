//! Neighbor search over the points of a point cloud.
//!
//! Normal estimation only needs a single query: "find the neighbors of this point".
//! Any spatial index can provide it by implementing [`NeighborSearch`].
//! Two implementations are included:
//!
//! - [`KdTreeSearch`]: a k-d tree built once over the points. This is the default.
//! - [`BruteForceSearch`]: an exhaustive scan, mostly useful for small clouds and testing.

mod brute_force;
mod kd_tree;

pub use brute_force::BruteForceSearch;
pub use kd_tree::KdTreeSearch;

use glam::Vec3A;

use crate::parameters::SearchParameters;

/// A spatial index that can find the neighbors of a query point.
///
/// Implementations must only return indices within `0..num_points`
/// of the points the index was built from. Returning an empty set is allowed.
pub trait NeighborSearch: Sync {
    /// Finds the neighbors of `query` according to the given search parameters.
    ///
    /// The neighbors are ordered from nearest to farthest.
    fn search(&self, query: Vec3A, parameters: &SearchParameters) -> Neighbors;
}

/// The result of a neighbor query.
///
/// `indices[i]` is at a squared distance of `squared_distances[i]` from the query point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Neighbors {
    /// The indices of the neighbors.
    pub indices: Vec<usize>,
    /// The squared distances from the query point to each neighbor.
    pub squared_distances: Vec<f32>,
}

impl Neighbors {
    /// Creates an empty neighbor set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            squared_distances: Vec::new(),
        }
    }

    /// Creates an empty neighbor set with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            squared_distances: Vec::with_capacity(capacity),
        }
    }

    /// Appends a neighbor.
    #[inline]
    pub fn push(&mut self, index: usize, squared_distance: f32) {
        self.indices.push(index);
        self.squared_distances.push(squared_distance);
    }

    /// Returns the number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no neighbors were found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the first neighbor index that is not within `0..len`, if any.
    #[inline]
    pub fn find_out_of_range(&self, len: usize) -> Option<usize> {
        self.indices.iter().copied().find(|&index| index >= len)
    }
}

impl FromIterator<(usize, f32)> for Neighbors {
    #[inline]
    fn from_iter<T: IntoIterator<Item = (usize, f32)>>(iter: T) -> Self {
        let (indices, squared_distances) = iter.into_iter().unzip();
        Self {
            indices,
            squared_distances,
        }
    }
}
