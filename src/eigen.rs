//! [Eigendecomposition] of symmetric 3x3 matrices.
//!
//! [Eigendecomposition]: https://en.wikipedia.org/wiki/Eigendecomposition_of_a_matrix

use glam::{Mat3A, Vec3A};
use glam_matrix_extras::{SymmetricEigen3, SymmetricMat3};

/// The eigenvalues and eigenvectors of a symmetric 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EigenDecomposition {
    /// The eigenvalues in ascending order.
    pub eigenvalues: Vec3A,
    /// The orthonormal eigenvectors, stored as columns in the same order as the eigenvalues.
    pub eigenvectors: Mat3A,
}

impl EigenDecomposition {
    /// Reorders the eigenvalues and their eigenvectors so that the eigenvalues are ascending.
    ///
    /// The order of equal eigenvalues is preserved.
    #[inline]
    pub fn sorted(self) -> Self {
        let mut pairs = [0, 1, 2].map(|i| (self.eigenvalues[i], self.eigenvectors.col(i)));
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        Self {
            eigenvalues: Vec3A::new(pairs[0].0, pairs[1].0, pairs[2].0),
            eigenvectors: Mat3A::from_cols(pairs[0].1, pairs[1].1, pairs[2].1),
        }
    }

    /// Returns the eigenvector of the smallest eigenvalue.
    #[inline]
    pub fn least_eigenvector(&self) -> Vec3A {
        self.eigenvectors.x_axis
    }
}

/// A solver for the eigenvalues and eigenvectors of symmetric 3x3 matrices.
pub trait SymmetricEigenSolver: Sync {
    /// Decomposes the matrix into ascending eigenvalues and their orthonormal eigenvectors.
    fn decompose(&self, matrix: SymmetricMat3) -> EigenDecomposition;
}

/// The non-iterative eigensolver from `glam_matrix_extras`.
///
/// Uses the algorithm described in "A Robust Eigensolver for 3 x 3 Symmetric Matrices"
/// by David Eberly, which handles repeated eigenvalues without iterating.
/// <https://www.geometrictools.com/Documentation/RobustEigenSymmetric3x3.pdf>
#[derive(Clone, Copy, Debug, Default)]
pub struct RobustEigenSolver;

impl SymmetricEigenSolver for RobustEigenSolver {
    #[inline]
    fn decompose(&self, matrix: SymmetricMat3) -> EigenDecomposition {
        let eigen = SymmetricEigen3::new(matrix);

        EigenDecomposition {
            eigenvalues: Vec3A::from(eigen.eigenvalues),
            eigenvectors: Mat3A::from(eigen.eigenvectors),
        }
        .sorted()
    }
}
