//! [Covariance matrices] of local neighborhoods.
//!
//! [Covariance matrices]: https://en.wikipedia.org/wiki/Covariance_matrix

use glam::{Vec3, Vec3A};
use glam_matrix_extras::SymmetricMat3;

use crate::parameters::CovarianceMethod;

/// Computes the covariance matrix of the points referenced by `indices`.
///
/// Returns the zero matrix if `indices` is empty.
///
/// # Panics
///
/// Panics if any index is out of bounds for `points`.
#[inline]
pub fn compute_covariance(
    points: &[Vec3A],
    indices: &[usize],
    method: CovarianceMethod,
) -> SymmetricMat3 {
    if indices.is_empty() {
        return SymmetricMat3::ZERO;
    }

    match method {
        CovarianceMethod::RawMoments => covariance_from_raw_moments(points, indices),
        CovarianceMethod::MeanSubtracted => covariance_from_centered_points(points, indices),
    }
}

/// Single pass: accumulate first and second moments, then use `E[ab] - E[a]E[b]`.
fn covariance_from_raw_moments(points: &[Vec3A], indices: &[usize]) -> SymmetricMat3 {
    let mut first = Vec3A::ZERO;
    let mut second = SymmetricMat3::ZERO;

    for &i in indices {
        let point = points[i];
        first += point;
        second += SymmetricMat3::from_outer_product(Vec3::from(point));
    }

    let count = indices.len() as f32;
    let mean = first / count;
    second /= count;

    SymmetricMat3 {
        m00: second.m00 - mean.x * mean.x,
        m01: second.m01 - mean.x * mean.y,
        m02: second.m02 - mean.x * mean.z,
        m11: second.m11 - mean.y * mean.y,
        m12: second.m12 - mean.y * mean.z,
        m22: second.m22 - mean.z * mean.z,
    }
}

/// Two passes: compute the mean, then average the outer products of the centered points.
fn covariance_from_centered_points(points: &[Vec3A], indices: &[usize]) -> SymmetricMat3 {
    let count = indices.len() as f32;
    let mean = indices.iter().map(|&i| points[i]).sum::<Vec3A>() / count;

    let mut cov = SymmetricMat3::ZERO;
    for &i in indices {
        cov += SymmetricMat3::from_outer_product(Vec3::from(points[i] - mean));
    }
    cov /= count;

    cov
}

/// Returns `true` if every entry of the matrix is exactly zero.
#[inline]
pub(crate) fn is_zero(mat: &SymmetricMat3) -> bool {
    mat.m00 == 0.0
        && mat.m01 == 0.0
        && mat.m02 == 0.0
        && mat.m11 == 0.0
        && mat.m12 == 0.0
        && mat.m22 == 0.0
}
