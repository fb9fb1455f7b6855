use std::fmt;

use crate::{error::ensure_vec3, pointcloud::PointCloud, TransformError};

use super::{apply_matrix, Transform};

/// Scale each axis of a point cloud by its own factor, `diag(sx, sy, sz)`.
///
/// Example:
///
/// ```
/// use kornia_3d_augment::pointcloud::PointCloud;
/// use kornia_3d_augment::transforms::{Rescale, Transform};
///
/// let mut rescale = Rescale::new(&[2.0, 1.0, 0.5]).unwrap();
/// let out = rescale.apply(&PointCloud::new(vec![[1.0, 1.0, 1.0]])).unwrap();
/// assert_eq!(out.points(), &[[2.0, 1.0, 0.5]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rescale {
    rescale: [f64; 3],
}

impl Rescale {
    /// Create a rescale from the factors `(sx, sy, sz)`.
    ///
    /// # Errors
    ///
    /// Fails if `rescale` does not have exactly 3 finite components.
    pub fn new(rescale: &[f64]) -> Result<Self, TransformError> {
        let rescale = ensure_vec3("rescale", rescale)?;
        Ok(Self { rescale })
    }

    /// The scale factors.
    pub fn factors(&self) -> [f64; 3] {
        self.rescale
    }

    /// The matrix right-multiplied with the points.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let [sx, sy, sz] = self.rescale;
        [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, sz]]
    }
}

impl Transform for Rescale {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        Ok(apply_matrix(src, &self.matrix()))
    }
}

impl fmt::Display for Rescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [sx, sy, sz] = self.rescale;
        write!(f, "Rescale(rescale=({sx}, {sy}, {sz}))")
    }
}
