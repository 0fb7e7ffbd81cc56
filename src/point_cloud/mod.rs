//! A point cloud with optional per-point normals.

mod orient;

use glam::Vec3A;

use crate::NormalEstimationError;

/// A 3D point cloud represented by point positions and optional normals.
///
/// If present, `normals[i]` is the normal of `points[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    /// The positions of the points.
    pub points: Vec<Vec3A>,
    /// The normals of the points, if any.
    pub normals: Option<Vec<Vec3A>>,
}

impl PointCloud {
    /// Creates a point cloud without normals.
    #[inline]
    pub fn new(points: Vec<Vec3A>) -> Self {
        Self {
            points,
            normals: None,
        }
    }

    /// Creates a point cloud with the given normals.
    #[inline]
    pub fn with_normals(points: Vec<Vec3A>, normals: Vec<Vec3A>) -> Self {
        Self {
            points,
            normals: Some(normals),
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the cloud has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the cloud has normals.
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Checks that the cloud is non-empty and has exactly one normal per point, if any.
    pub fn validate(&self) -> Result<(), NormalEstimationError> {
        if self.points.is_empty() {
            return Err(NormalEstimationError::EmptyPointCloud);
        }

        if let Some(normals) = &self.normals
            && normals.len() != self.points.len()
        {
            return Err(NormalEstimationError::NormalCountMismatch {
                points: self.points.len(),
                normals: normals.len(),
            });
        }

        Ok(())
    }
}
