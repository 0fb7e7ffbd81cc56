//! Parameters for normal estimation.

use std::num::NonZero;

use glam::Vec3A;

/// The number of neighbors used by the default search parameters.
const DEFAULT_NUM_NEIGHBORS: NonZero<usize> = NonZero::new(30).unwrap();

/// Describes how the neighborhood of a query point is selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchParameters {
    /// The `k` nearest points.
    Knn {
        /// The maximum number of neighbors.
        k: NonZero<usize>,
    },
    /// Every point within `radius` of the query point.
    Radius {
        /// The search radius.
        radius: f32,
    },
    /// At most `max_neighbors` nearest points within `radius` of the query point.
    Hybrid {
        /// The search radius.
        radius: f32,
        /// The maximum number of neighbors.
        max_neighbors: NonZero<usize>,
    },
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self::knn(DEFAULT_NUM_NEIGHBORS)
    }
}

impl SearchParameters {
    /// Selects the `k` nearest points.
    #[inline]
    pub const fn knn(k: NonZero<usize>) -> Self {
        Self::Knn { k }
    }

    /// Selects every point within `radius`.
    #[inline]
    pub const fn radius(radius: f32) -> Self {
        Self::Radius { radius }
    }

    /// Selects at most `max_neighbors` points within `radius`.
    #[inline]
    pub const fn hybrid(radius: f32, max_neighbors: NonZero<usize>) -> Self {
        Self::Hybrid {
            radius,
            max_neighbors,
        }
    }

    /// Returns the search radius, if the parameters have one.
    #[inline]
    pub fn search_radius(&self) -> Option<f32> {
        match *self {
            Self::Knn { .. } => None,
            Self::Radius { radius } | Self::Hybrid { radius, .. } => Some(radius),
        }
    }

    /// Returns the maximum number of neighbors, if the parameters have one.
    #[inline]
    pub fn max_neighbors(&self) -> Option<NonZero<usize>> {
        match *self {
            Self::Knn { k } => Some(k),
            Self::Radius { .. } => None,
            Self::Hybrid { max_neighbors, .. } => Some(max_neighbors),
        }
    }
}

/// The formulation used to compute the covariance matrix of a neighborhood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CovarianceMethod {
    /// Accumulates first and second moments in a single pass,
    /// and forms the covariance as `E[ab] - E[a]E[b]`.
    ///
    /// Loses precision for points far from the origin.
    RawMoments,
    /// Computes the mean first, then averages the outer products of the centered points.
    #[default]
    MeanSubtracted,
}

/// Parameters for normal estimation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalEstimationParameters {
    /// How the neighborhood of each point is selected.
    pub search: SearchParameters,
    pub covariance: CovarianceMethod,
    /// The normal used for degenerate neighborhoods when no prior normal or reference is available.
    pub default_normal: Vec3A,
}

impl Default for NormalEstimationParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalEstimationParameters {
    /// Creates a new set of parameters with default values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            search: SearchParameters::Knn {
                k: DEFAULT_NUM_NEIGHBORS,
            },
            covariance: CovarianceMethod::MeanSubtracted,
            default_normal: Vec3A::Z,
        }
    }

    /// Returns the parameters with the given neighbor search parameters.
    #[inline]
    pub const fn with_search(mut self, search: SearchParameters) -> Self {
        self.search = search;
        self
    }

    /// Returns the parameters with the given covariance formulation.
    #[inline]
    pub const fn with_covariance(mut self, covariance: CovarianceMethod) -> Self {
        self.covariance = covariance;
        self
    }

    /// Returns the parameters with the given default normal.
    #[inline]
    pub const fn with_default_normal(mut self, default_normal: Vec3A) -> Self {
        self.default_normal = default_normal;
        self
    }
}
