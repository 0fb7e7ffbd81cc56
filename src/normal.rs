//! Normal extraction and orientation.
//!
//! The normal of a locally planar neighborhood is the direction of least variance,
//! which is the eigenvector of the smallest eigenvalue of its covariance matrix.
//! PCA only yields a direction, so the sign is chosen separately by an [`Orientation`].

use glam::Vec3A;
use glam_matrix_extras::SymmetricMat3;

use crate::{covariance, eigen::SymmetricEigenSolver};

/// Extracts the direction of least variance from a covariance matrix.
///
/// Returns [`Vec3A::ZERO`] if the matrix is exactly zero (for example for an empty or
/// single-point neighborhood) or if the solver does not produce a finite, non-zero vector.
/// Ill-conditioned but non-zero matrices, such as those of collinear points,
/// still produce a unit vector.
#[inline]
pub fn least_variance_direction(
    covariance: SymmetricMat3,
    solver: &impl SymmetricEigenSolver,
) -> Vec3A {
    if covariance::is_zero(&covariance) {
        return Vec3A::ZERO;
    }

    let candidate = solver.decompose(covariance).least_eigenvector();

    if candidate.is_finite() {
        candidate
    } else {
        Vec3A::ZERO
    }
}

/// Returns `true` if the candidate normal carries no direction.
#[inline]
pub fn is_degenerate(candidate: Vec3A) -> bool {
    candidate.length_squared() == 0.0
}

/// The policy used to resolve the sign of a candidate normal, and to replace degenerate ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    /// Stay consistent with the normal the point already had.
    Propagate {
        /// The normal the point had before estimation, if any.
        prior: Option<Vec3A>,
        /// The normal used when the candidate is degenerate and there is no prior.
        fallback: Vec3A,
    },
    /// Point every normal into the half-space of a fixed direction.
    /// The direction also replaces degenerate candidates.
    Reference(Vec3A),
}

impl Orientation {
    /// Resolves the final normal for a candidate.
    ///
    /// - Degenerate candidates are replaced by the prior normal, the fallback, or the reference.
    /// - Other candidates are flipped if they point away from the prior normal or the reference.
    #[inline]
    pub fn resolve(self, candidate: Vec3A) -> Vec3A {
        let degenerate = is_degenerate(candidate);

        match self {
            Orientation::Propagate {
                prior: Some(prior), ..
            } => {
                if degenerate {
                    prior
                } else {
                    flip_towards(candidate, prior)
                }
            }
            Orientation::Propagate {
                prior: None,
                fallback,
            } => {
                if degenerate {
                    fallback
                } else {
                    candidate
                }
            }
            Orientation::Reference(reference) => {
                if degenerate {
                    reference
                } else {
                    flip_towards(candidate, reference)
                }
            }
        }
    }
}

/// Flips `normal` if it points away from `direction`.
#[inline]
pub(crate) fn flip_towards(normal: Vec3A, direction: Vec3A) -> Vec3A {
    if normal.dot(direction) < 0.0 {
        -normal
    } else {
        normal
    }
}
