use glam::Vec3A;
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator,
};

use super::PointCloud;
use crate::{NormalEstimationError, check_direction, normal::flip_towards};

impl PointCloud {
    /// Scales every non-zero normal to unit length. Zero normals are left as is.
    ///
    /// # Errors
    ///
    /// Returns [`NormalEstimationError::MissingNormals`] if the cloud has no normals.
    pub fn normalize_normals(&mut self) -> Result<(), NormalEstimationError> {
        let normals = self
            .normals
            .as_mut()
            .ok_or(NormalEstimationError::MissingNormals)?;

        normals
            .par_iter_mut()
            .for_each(|normal| *normal = normal.normalize_or_zero());

        Ok(())
    }

    /// Flips every normal that points away from `direction`.
    ///
    /// Zero normals are replaced by `direction`.
    ///
    /// # Errors
    ///
    /// - [`NormalEstimationError::MissingNormals`]: The cloud has no normals.
    /// - [`NormalEstimationError::InvalidDirection`]: `direction` is zero or not finite.
    pub fn orient_normals_to_align_with_direction(
        &mut self,
        direction: Vec3A,
    ) -> Result<(), NormalEstimationError> {
        check_direction(direction)?;
        let normals = self
            .normals
            .as_mut()
            .ok_or(NormalEstimationError::MissingNormals)?;

        normals.par_iter_mut().for_each(|normal| {
            *normal = if *normal == Vec3A::ZERO {
                direction
            } else {
                flip_towards(*normal, direction)
            };
        });

        Ok(())
    }

    /// Flips every normal that points away from `location`,
    /// for example the position of the sensor that captured the points.
    ///
    /// Zero normals are replaced by the unit direction towards `location`,
    /// or by [`Vec3A::Z`] for points that coincide with `location`.
    ///
    /// # Errors
    ///
    /// - [`NormalEstimationError::MissingNormals`]: The cloud has no normals.
    /// - [`NormalEstimationError::InvalidDirection`]: `location` is not finite.
    pub fn orient_normals_towards_location(
        &mut self,
        location: Vec3A,
    ) -> Result<(), NormalEstimationError> {
        if !location.is_finite() {
            return Err(NormalEstimationError::InvalidDirection {
                direction: location,
            });
        }
        let normals = self
            .normals
            .as_mut()
            .ok_or(NormalEstimationError::MissingNormals)?;

        normals
            .par_iter_mut()
            .zip(self.points.par_iter())
            .for_each(|(normal, &point)| {
                let towards = location - point;
                *normal = if *normal == Vec3A::ZERO {
                    towards.try_normalize().unwrap_or(Vec3A::Z)
                } else {
                    flip_towards(*normal, towards)
                };
            });

        Ok(())
    }
}
