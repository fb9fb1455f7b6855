use std::fmt;

use crate::{error::ensure_vec3, pointcloud::PointCloud, TransformError};

use super::{apply_matrix, Transform};

/// Translate a point cloud through the matrix
///
/// ```text
/// | 1  0  0  |
/// | 0  1  0  |
/// | tx ty tz |
/// ```
///
/// The points are not in homogeneous coordinates, so the offset is weighted by the
/// `z` coordinate of each point: `(x, y, z) -> (x + z*tx, y + z*ty, z*tz)`. A point
/// with `z = 0` is left unchanged.
///
/// Example:
///
/// ```
/// use kornia_3d_augment::pointcloud::PointCloud;
/// use kornia_3d_augment::transforms::{Transform, Translate};
///
/// let cloud = PointCloud::new(vec![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
/// let mut translate = Translate::new(&[1.0, 2.0, 3.0]).unwrap();
/// let out = translate.apply(&cloud).unwrap();
/// assert_eq!(out.points(), &[[1.0, 0.0, 0.0], [1.0, 2.0, 3.0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Translate {
    trans: [f64; 3],
}

impl Translate {
    /// Create a translation from the vector `(tx, ty, tz)`.
    ///
    /// # Errors
    ///
    /// Fails if `trans` does not have exactly 3 finite components.
    pub fn new(trans: &[f64]) -> Result<Self, TransformError> {
        let trans = ensure_vec3("trans", trans)?;
        Ok(Self { trans })
    }

    /// The translation vector.
    pub fn trans(&self) -> [f64; 3] {
        self.trans
    }

    /// The matrix right-multiplied with the points.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], self.trans]
    }
}

impl Transform for Translate {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        Ok(apply_matrix(src, &self.matrix()))
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [tx, ty, tz] = self.trans;
        write!(f, "Translate(trans=({tx}, {ty}, {tz}))")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_matrix_form() -> Result<(), TransformError> {
        let mut translate = Translate::new(&[1.0, 2.0, 3.0])?;

        let out = translate.apply(&PointCloud::new(vec![[1.0, 0.0, 0.0]]))?;
        assert_eq!(out.points(), &[[1.0, 0.0, 0.0]]);

        let out = translate.apply(&PointCloud::new(vec![[0.0, 0.0, 1.0]]))?;
        assert_eq!(out.points(), &[[1.0, 2.0, 3.0]]);

        Ok(())
    }

    #[test]
    fn test_translate_general_point() -> Result<(), TransformError> {
        let mut translate = Translate::new(&[0.5, -1.0, 2.0])?;
        let out = translate.apply(&PointCloud::new(vec![[1.0, 2.0, 4.0], [-3.0, 1.0, 0.0]]))?;

        let expected = [[3.0, -2.0, 8.0], [-3.0, 1.0, 0.0]];
        for (p, e) in out.points().iter().zip(expected.iter()) {
            for k in 0..3 {
                assert_relative_eq!(p[k], e[k]);
            }
        }
        Ok(())
    }

    #[test]
    fn test_translate_arity() {
        for trans in [&[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0][..], &[][..]] {
            assert!(matches!(
                Translate::new(trans),
                Err(TransformError::InvalidArity { name: "trans", .. })
            ));
        }
    }
}
