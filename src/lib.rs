//! Surface [normal estimation] for unorganized 3D point clouds.
//!
//! The normal of each point is estimated from its local neighborhood alone:
//!
//! 1. Find the neighbors of the point with a [`NeighborSearch`].
//! 2. Compute the [covariance matrix] of the neighbor positions.
//! 3. Take the eigenvector of the smallest eigenvalue, the direction of least variance,
//!    as the normal. This is [Principal Component Analysis (PCA)] on the neighborhood.
//! 4. Choose the sign of the normal with an [`Orientation`], replacing degenerate normals
//!    of empty or single-point neighborhoods with a fallback.
//!
//! Points are processed independently and in parallel.
//!
//! The orientation is only locally consistent: each normal agrees with the point's
//! previous normal, or with a single reference direction, but neighboring normals are
//! not propagated across the surface.
//!
//! [normal estimation]: https://en.wikipedia.org/wiki/Normal_(geometry)
//! [covariance matrix]: https://en.wikipedia.org/wiki/Covariance_matrix
//! [Principal Component Analysis (PCA)]: https://en.wikipedia.org/wiki/Principal_component_analysis

#![warn(missing_docs)]

pub mod covariance;
pub mod eigen;
pub mod neighbors;
pub mod normal;
pub mod parameters;
pub mod point_cloud;

pub use eigen::{EigenDecomposition, RobustEigenSolver, SymmetricEigenSolver};
pub use neighbors::{BruteForceSearch, KdTreeSearch, NeighborSearch, Neighbors};
pub use normal::Orientation;
pub use parameters::{CovarianceMethod, NormalEstimationParameters, SearchParameters};
pub use point_cloud::PointCloud;

use glam::Vec3A;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use thiserror::Error;

/// Errors that can occur during normal estimation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalEstimationError {
    /// The point cloud has no points.
    #[error("The point cloud has no points.")]
    EmptyPointCloud,
    /// The number of normals does not match the number of points.
    #[error("The point cloud has {normals} normals for {points} points.")]
    NormalCountMismatch {
        /// The number of points.
        points: usize,
        /// The number of normals.
        normals: usize,
    },
    /// The neighbor search parameters are invalid.
    #[error("Invalid search parameters: {reason}")]
    InvalidSearchParameters {
        /// Why the parameters were rejected.
        reason: &'static str,
    },
    /// An orientation direction is zero or not finite.
    #[error("Invalid orientation direction {direction}.")]
    InvalidDirection {
        /// The rejected direction.
        direction: Vec3A,
    },
    /// The neighbor search returned an index that does not refer to a point of the cloud.
    #[error("The neighbor search returned index {neighbor} for point {query}, but the cloud only has {len} points.")]
    NeighborOutOfRange {
        /// The index of the query point.
        query: usize,
        /// The invalid neighbor index.
        neighbor: usize,
        /// The number of points in the cloud.
        len: usize,
    },
    /// The operation requires normals, but the point cloud has none.
    #[error("The point cloud has no normals.")]
    MissingNormals,
}

/// Statistics of a completed normal estimation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EstimationSummary {
    /// The number of points that received a normal.
    pub points: usize,
    /// The number of points whose neighborhood was degenerate,
    /// and whose normal was taken from the fallback instead.
    pub degenerate: usize,
}

/// Estimates point cloud normals with local PCA.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use glam::Vec3A;
/// use point_normals::{NormalEstimator, NormalEstimationParameters, PointCloud};
///
/// // A grid of points on the XY plane.
/// let points = (0..10)
///     .flat_map(|i| (0..10).map(move |j| Vec3A::new(i as f32 * 0.1, j as f32 * 0.1, 0.0)))
///     .collect::<Vec<_>>();
/// let mut cloud = PointCloud::new(points);
///
/// let estimator = NormalEstimator::new(NormalEstimationParameters::default());
/// estimator.estimate_normals_towards(&mut cloud, Vec3A::Z).unwrap();
///
/// for normal in cloud.normals.unwrap() {
///     assert_relative_eq!(normal, Vec3A::Z, epsilon = 1e-5);
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct NormalEstimator<S = RobustEigenSolver> {
    /// The parameters used for every pass.
    pub parameters: NormalEstimationParameters,
    solver: S,
}

impl NormalEstimator {
    /// Creates an estimator that uses the [`RobustEigenSolver`].
    #[inline]
    pub fn new(parameters: NormalEstimationParameters) -> Self {
        Self::with_solver(parameters, RobustEigenSolver)
    }
}

impl<S: SymmetricEigenSolver> NormalEstimator<S> {
    /// Creates an estimator that uses the given eigensolver.
    #[inline]
    pub fn with_solver(parameters: NormalEstimationParameters, solver: S) -> Self {
        Self { parameters, solver }
    }

    /// Estimates normals, keeping each one consistent with the normal the point already had.
    ///
    /// A [`KdTreeSearch`] is built over the points for the neighbor queries.
    ///
    /// If the cloud has no normals, they are allocated. Degenerate neighborhoods keep their
    /// previous normal, or get [`NormalEstimationParameters::default_normal`] if there was none.
    /// Other normals are flipped if they point away from the previous normal.
    ///
    /// # Errors
    ///
    /// Returns an error before any normal is written if the cloud is empty, has a different
    /// number of normals and points, or if the parameters are invalid.
    pub fn estimate_normals(
        &self,
        cloud: &mut PointCloud,
    ) -> Result<EstimationSummary, NormalEstimationError> {
        self.check_preconditions(cloud)?;
        let search = KdTreeSearch::new(&cloud.points);
        self.estimate_normals_with_search(cloud, &search)
    }

    /// Like [`NormalEstimator::estimate_normals`], but with a custom neighbor search.
    ///
    /// The search must have been built over `cloud.points`.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`NormalEstimator::estimate_normals`], returns
    /// [`NormalEstimationError::NeighborOutOfRange`] if the search returns an invalid index.
    /// The cloud is left unchanged on error.
    pub fn estimate_normals_with_search(
        &self,
        cloud: &mut PointCloud,
        search: &(impl NeighborSearch + ?Sized),
    ) -> Result<EstimationSummary, NormalEstimationError> {
        self.check_preconditions(cloud)?;
        check_direction(self.parameters.default_normal)?;

        log::debug!(
            "Estimating normals for {} points with {:?}, propagating {} prior normals",
            cloud.len(),
            self.parameters.search,
            if cloud.has_normals() { "existing" } else { "no" },
        );

        // The prior normals are only read during the pass. The new normals are written
        // to a separate buffer, so every point sees the normals from before the pass.
        let fallback = self.parameters.default_normal;
        let prior = cloud.normals.as_deref();
        let (normals, summary) = self.run_pass(&cloud.points, search, |i| {
            Orientation::Propagate {
                prior: prior.map(|normals| normals[i]),
                fallback,
            }
        })?;

        cloud.normals = Some(normals);
        Ok(summary)
    }

    /// Estimates normals, orienting every normal into the half-space of `reference`.
    ///
    /// A [`KdTreeSearch`] is built over the points for the neighbor queries.
    ///
    /// Existing normals are overwritten without being read. Degenerate neighborhoods get
    /// `reference` as their normal.
    ///
    /// # Errors
    ///
    /// Returns an error before any normal is written if the cloud is empty, has a different
    /// number of normals and points, if the parameters are invalid, or if `reference`
    /// is zero or not finite.
    pub fn estimate_normals_towards(
        &self,
        cloud: &mut PointCloud,
        reference: Vec3A,
    ) -> Result<EstimationSummary, NormalEstimationError> {
        self.check_preconditions(cloud)?;
        let search = KdTreeSearch::new(&cloud.points);
        self.estimate_normals_towards_with_search(cloud, reference, &search)
    }

    /// Like [`NormalEstimator::estimate_normals_towards`], but with a custom neighbor search.
    ///
    /// The search must have been built over `cloud.points`.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`NormalEstimator::estimate_normals_towards`], returns
    /// [`NormalEstimationError::NeighborOutOfRange`] if the search returns an invalid index.
    /// The cloud is left unchanged on error.
    pub fn estimate_normals_towards_with_search(
        &self,
        cloud: &mut PointCloud,
        reference: Vec3A,
        search: &(impl NeighborSearch + ?Sized),
    ) -> Result<EstimationSummary, NormalEstimationError> {
        self.check_preconditions(cloud)?;
        check_direction(reference)?;

        log::debug!(
            "Estimating normals for {} points with {:?}, oriented towards {}",
            cloud.len(),
            self.parameters.search,
            reference,
        );

        let (normals, summary) = self.run_pass(&cloud.points, search, |_| {
            Orientation::Reference(reference)
        })?;

        cloud.normals = Some(normals);
        Ok(summary)
    }

    /// Computes the normal of every point in parallel.
    ///
    /// Nothing is written to the cloud here, so a failure leaves it untouched.
    fn run_pass(
        &self,
        points: &[Vec3A],
        search: &(impl NeighborSearch + ?Sized),
        orientation: impl Fn(usize) -> Orientation + Sync,
    ) -> Result<(Vec<Vec3A>, EstimationSummary), NormalEstimationError> {
        let len = points.len();

        let results = (0..len)
            .into_par_iter()
            .map(|i| {
                let neighbors = search.search(points[i], &self.parameters.search);

                if let Some(neighbor) = neighbors.find_out_of_range(len) {
                    log::warn!(
                        "Neighbor search returned index {neighbor} for point {i} in a cloud of {len} points"
                    );
                    return Err(NormalEstimationError::NeighborOutOfRange {
                        query: i,
                        neighbor,
                        len,
                    });
                }

                let covariance = covariance::compute_covariance(
                    points,
                    &neighbors.indices,
                    self.parameters.covariance,
                );
                let candidate = normal::least_variance_direction(covariance, &self.solver);

                let degenerate = normal::is_degenerate(candidate);
                if degenerate {
                    log::trace!(
                        "Point {i} has a degenerate neighborhood of {} points, using the fallback normal",
                        neighbors.len()
                    );
                }

                Ok((orientation(i).resolve(candidate), degenerate))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut summary = EstimationSummary {
            points: len,
            degenerate: 0,
        };
        let normals = results
            .into_iter()
            .map(|(normal, degenerate)| {
                summary.degenerate += degenerate as usize;
                normal
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Estimated {} normals, {} from degenerate neighborhoods",
            summary.points,
            summary.degenerate
        );

        Ok((normals, summary))
    }

    fn check_preconditions(&self, cloud: &PointCloud) -> Result<(), NormalEstimationError> {
        cloud.validate()?;

        if let Some(radius) = self.parameters.search.search_radius()
            && !(radius.is_finite() && radius > 0.0)
        {
            return Err(NormalEstimationError::InvalidSearchParameters {
                reason: "the search radius must be positive and finite",
            });
        }

        Ok(())
    }
}

/// Checks that a direction is finite and non-zero.
#[inline]
pub(crate) fn check_direction(direction: Vec3A) -> Result<(), NormalEstimationError> {
    if direction.is_finite() && direction != Vec3A::ZERO {
        Ok(())
    } else {
        Err(NormalEstimationError::InvalidDirection { direction })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    /// A grid of `size * size` points on the plane `z = 0`.
    fn planar_grid(size: usize, spacing: f32) -> Vec<Vec3A> {
        (0..size)
            .flat_map(|i| {
                (0..size).map(move |j| Vec3A::new(i as f32 * spacing, j as f32 * spacing, 0.0))
            })
            .collect()
    }

    /// Points sampled on the unit sphere.
    fn sphere(count: usize, seed: u64) -> Vec<Vec3A> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let z: f32 = rng.random_range(-1.0..1.0);
                let theta: f32 = rng.random_range(0.0..core::f32::consts::TAU);
                let r = (1.0 - z * z).sqrt();
                Vec3A::new(r * theta.cos(), r * theta.sin(), z)
            })
            .collect()
    }

    fn all_points(len: usize) -> NormalEstimationParameters {
        NormalEstimationParameters::new()
            .with_search(SearchParameters::knn(NonZero::new(len).unwrap()))
    }

    /// A neighbor search that never finds anything.
    struct EmptySearch;

    impl NeighborSearch for EmptySearch {
        fn search(&self, _query: Vec3A, _parameters: &SearchParameters) -> Neighbors {
            Neighbors::new()
        }
    }

    /// A neighbor search that returns an index past the end of the cloud.
    struct OutOfRangeSearch(usize);

    impl NeighborSearch for OutOfRangeSearch {
        fn search(&self, _query: Vec3A, _parameters: &SearchParameters) -> Neighbors {
            [(0, 0.0), (self.0, 1.0)].into_iter().collect()
        }
    }

    #[test]
    fn test_planar_patch() {
        let points = planar_grid(5, 0.5);
        let estimator = NormalEstimator::new(all_points(points.len()));

        // With every point as a neighbor, the normal is the plane normal up to sign.
        let mut cloud = PointCloud::new(points.clone());
        let summary = estimator.estimate_normals(&mut cloud).unwrap();
        assert_eq!(summary.points, 25);
        assert_eq!(summary.degenerate, 0);
        for normal in cloud.normals.as_ref().unwrap() {
            assert_relative_eq!(normal.abs(), Vec3A::Z, epsilon = 1e-6);
        }

        // With a reference, every normal points up.
        let mut cloud = PointCloud::new(points.clone());
        estimator
            .estimate_normals_towards(&mut cloud, Vec3A::Z)
            .unwrap();
        for normal in cloud.normals.as_ref().unwrap() {
            assert_relative_eq!(*normal, Vec3A::Z, epsilon = 1e-6);
        }

        // The brute force search gives the same result.
        let mut brute_force_cloud = PointCloud::new(points.clone());
        estimator
            .estimate_normals_towards_with_search(
                &mut brute_force_cloud,
                Vec3A::Z,
                &BruteForceSearch::new(&points),
            )
            .unwrap();
        assert_eq!(brute_force_cloud.normals, cloud.normals);
    }

    #[test]
    fn test_isolated_point_radius_search() {
        let mut points = planar_grid(4, 0.1);
        points.push(Vec3A::splat(100.0));
        let isolated = points.len() - 1;

        let parameters =
            NormalEstimationParameters::new().with_search(SearchParameters::radius(0.5));
        let estimator = NormalEstimator::new(parameters);

        let mut cloud = PointCloud::new(points);
        let summary = estimator
            .estimate_normals_towards(&mut cloud, Vec3A::X)
            .unwrap();

        // The isolated point only finds itself, so it takes the reference exactly.
        assert_eq!(summary.degenerate, 1);
        assert_eq!(cloud.normals.unwrap()[isolated], Vec3A::X);
    }

    #[test]
    fn test_empty_neighborhoods_use_fallbacks() {
        let points = vec![Vec3A::ZERO, Vec3A::X, Vec3A::Y];
        let estimator = NormalEstimator::new(NormalEstimationParameters::new());

        // Reference mode takes the reference.
        let reference = Vec3A::new(1.0, 0.0, 0.0);
        let mut cloud = PointCloud::new(points.clone());
        let summary = estimator
            .estimate_normals_towards_with_search(&mut cloud, reference, &EmptySearch)
            .unwrap();
        assert_eq!(summary.degenerate, 3);
        assert_eq!(cloud.normals.unwrap(), vec![reference; 3]);

        // Propagation without prior normals takes the default normal.
        let mut cloud = PointCloud::new(points.clone());
        estimator
            .estimate_normals_with_search(&mut cloud, &EmptySearch)
            .unwrap();
        assert_eq!(cloud.normals.unwrap(), vec![Vec3A::Z; 3]);

        // Propagation with prior normals keeps them unchanged.
        let prior = vec![
            Vec3A::new(0.0, 0.6, 0.8),
            Vec3A::NEG_Y,
            Vec3A::new(-0.8, 0.0, 0.6),
        ];
        let mut cloud = PointCloud::with_normals(points.clone(), prior.clone());
        estimator
            .estimate_normals_with_search(&mut cloud, &EmptySearch)
            .unwrap();
        assert_eq!(cloud.normals.unwrap(), prior);
    }

    #[test]
    fn test_custom_default_normal() {
        let parameters = NormalEstimationParameters::new().with_default_normal(Vec3A::NEG_Y);
        let estimator = NormalEstimator::new(parameters);

        let points = vec![Vec3A::new(1.0, 2.0, 3.0)];
        let mut cloud = PointCloud::new(points.clone());
        estimator
            .estimate_normals_with_search(&mut cloud, &BruteForceSearch::new(&points))
            .unwrap();

        assert_eq!(cloud.normals.unwrap(), vec![Vec3A::NEG_Y]);
    }

    #[test]
    fn test_single_point_neighborhood() {
        // Every point is its own single neighbor.
        let points = vec![
            Vec3A::ZERO,
            Vec3A::new(5.0, 0.0, 0.0),
            Vec3A::new(0.0, 5.0, 0.0),
        ];
        let parameters = NormalEstimationParameters::new()
            .with_search(SearchParameters::knn(NonZero::new(1).unwrap()));
        let estimator = NormalEstimator::new(parameters);

        let mut cloud = PointCloud::new(points.clone());
        let summary = estimator
            .estimate_normals_towards_with_search(
                &mut cloud,
                Vec3A::Y,
                &BruteForceSearch::new(&points),
            )
            .unwrap();

        assert_eq!(summary.degenerate, 3);
        assert_eq!(cloud.normals.unwrap(), vec![Vec3A::Y; 3]);
    }

    #[test]
    fn test_collinear_points() {
        let points = vec![
            Vec3A::new(0.0, 0.0, 0.0),
            Vec3A::new(1.0, 2.0, 3.0),
            Vec3A::new(2.0, 4.0, 6.0),
        ];
        let direction = Vec3A::new(1.0, 2.0, 3.0).normalize();
        let estimator = NormalEstimator::new(all_points(3));

        let mut cloud = PointCloud::new(points.clone());
        let summary = estimator
            .estimate_normals_with_search(&mut cloud, &BruteForceSearch::new(&points))
            .unwrap();

        // The collinear neighborhood is ill-conditioned, but not degenerate.
        assert_eq!(summary.degenerate, 0);
        for normal in cloud.normals.unwrap() {
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(normal.dot(direction), 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_sphere_normals() {
        let points = sphere(1000, 1);
        let parameters = NormalEstimationParameters::new()
            .with_search(SearchParameters::knn(NonZero::new(15).unwrap()));
        let estimator = NormalEstimator::new(parameters);

        let mut cloud = PointCloud::new(points.clone());
        estimator
            .estimate_normals_towards(&mut cloud, Vec3A::Z)
            .unwrap();

        for (point, normal) in points.iter().zip(cloud.normals.as_ref().unwrap()) {
            // Well-conditioned neighborhoods give unit normals close to the radial direction.
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-4);
            assert!(normal.dot(*point).abs() > 0.9);
            assert!(normal.dot(Vec3A::Z) >= 0.0);
        }

        // Orienting towards the center makes every normal point inwards.
        cloud.orient_normals_towards_location(Vec3A::ZERO).unwrap();
        for (point, normal) in points.iter().zip(cloud.normals.as_ref().unwrap()) {
            assert!(normal.dot(*point) < 0.0);
        }
    }

    #[test]
    fn test_propagation_preserves_prior_orientation() {
        let points = sphere(500, 2);

        // Outward and inward prior normals with some noise.
        let mut rng = StdRng::seed_from_u64(3);
        let prior = points
            .iter()
            .map(|p| {
                let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                let noise = Vec3A::new(
                    rng.random_range(-0.2..0.2),
                    rng.random_range(-0.2..0.2),
                    rng.random_range(-0.2..0.2),
                );
                (*p + noise).normalize() * sign
            })
            .collect::<Vec<_>>();

        let parameters = NormalEstimationParameters::new()
            .with_search(SearchParameters::hybrid(0.3, NonZero::new(20).unwrap()));
        let estimator = NormalEstimator::new(parameters);

        let mut cloud = PointCloud::with_normals(points.clone(), prior.clone());
        estimator.estimate_normals(&mut cloud).unwrap();

        for (new, old) in cloud.normals.unwrap().iter().zip(&prior) {
            assert!(new.dot(*old) >= 0.0);
        }
    }

    #[test]
    fn test_reference_mode_is_idempotent() {
        let points = sphere(300, 4);
        let estimator = NormalEstimator::new(NormalEstimationParameters::new());
        let reference = Vec3A::new(0.0, 0.6, 0.8);

        let mut cloud = PointCloud::new(points);
        estimator
            .estimate_normals_towards(&mut cloud, reference)
            .unwrap();
        let first = cloud.normals.clone().unwrap();

        estimator
            .estimate_normals_towards(&mut cloud, reference)
            .unwrap();
        let second = cloud.normals.unwrap();

        assert_eq!(first, second);
        for normal in &second {
            assert!(normal.dot(reference) >= 0.0);
        }
    }

    #[test]
    fn test_raw_moments() {
        let points = planar_grid(6, 0.2);
        let parameters = NormalEstimationParameters::new()
            .with_search(SearchParameters::knn(NonZero::new(9).unwrap()))
            .with_covariance(CovarianceMethod::RawMoments);
        let estimator = NormalEstimator::new(parameters);

        let mut cloud = PointCloud::new(points);
        estimator
            .estimate_normals_towards(&mut cloud, Vec3A::NEG_Z)
            .unwrap();

        for normal in cloud.normals.unwrap() {
            assert_relative_eq!(normal, Vec3A::NEG_Z, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_empty_cloud() {
        let estimator = NormalEstimator::new(NormalEstimationParameters::new());
        let mut cloud = PointCloud::default();

        assert_eq!(
            estimator.estimate_normals(&mut cloud),
            Err(NormalEstimationError::EmptyPointCloud)
        );
        assert_eq!(
            estimator.estimate_normals_towards(&mut cloud, Vec3A::Z),
            Err(NormalEstimationError::EmptyPointCloud)
        );
        assert!(!cloud.has_normals());
    }

    #[test]
    fn test_normal_count_mismatch() {
        let estimator = NormalEstimator::new(NormalEstimationParameters::new());
        let mut cloud = PointCloud::with_normals(vec![Vec3A::ZERO, Vec3A::X], vec![Vec3A::Z]);

        assert_eq!(
            estimator.estimate_normals(&mut cloud),
            Err(NormalEstimationError::NormalCountMismatch {
                points: 2,
                normals: 1
            })
        );
        assert_eq!(cloud.normals, Some(vec![Vec3A::Z]));
    }

    #[test]
    fn test_invalid_parameters() {
        let points = planar_grid(3, 1.0);

        let estimator = NormalEstimator::new(
            NormalEstimationParameters::new().with_search(SearchParameters::radius(-1.0)),
        );
        let mut cloud = PointCloud::new(points.clone());
        assert!(matches!(
            estimator.estimate_normals(&mut cloud),
            Err(NormalEstimationError::InvalidSearchParameters { .. })
        ));

        let estimator = NormalEstimator::new(NormalEstimationParameters::new());
        assert!(matches!(
            estimator.estimate_normals_towards(&mut cloud, Vec3A::ZERO),
            Err(NormalEstimationError::InvalidDirection { .. })
        ));

        let estimator =
            NormalEstimator::new(NormalEstimationParameters::new().with_default_normal(Vec3A::NAN));
        assert!(matches!(
            estimator.estimate_normals(&mut cloud),
            Err(NormalEstimationError::InvalidDirection { .. })
        ));

        assert!(!cloud.has_normals());
    }

    #[test]
    fn test_neighbor_out_of_range() {
        let points = planar_grid(3, 1.0);
        let estimator = NormalEstimator::new(NormalEstimationParameters::new());
        let mut cloud = PointCloud::new(points);

        let result = estimator.estimate_normals_with_search(&mut cloud, &OutOfRangeSearch(9));

        assert!(matches!(
            result,
            Err(NormalEstimationError::NeighborOutOfRange {
                neighbor: 9,
                len: 9,
                ..
            })
        ));
        // No partial output.
        assert!(!cloud.has_normals());
    }
}
