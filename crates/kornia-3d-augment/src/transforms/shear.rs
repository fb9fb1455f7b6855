use std::fmt;

use crate::{error::ensure_finite, pointcloud::PointCloud, TransformError};

use super::{apply_matrix, Transform};

/// Shear a point cloud by `s = sinh(radians(shear_deg))` along every axis pair.
///
/// ```text
/// | 1 s s |
/// | s 1 s |
/// | s s 1 |
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shear {
    shear_deg: f64,
}

impl Shear {
    /// Create a shear from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Fails if `shear_deg` is not finite.
    pub fn new(shear_deg: f64) -> Result<Self, TransformError> {
        let shear_deg = ensure_finite("shear_deg", shear_deg)?;
        Ok(Self { shear_deg })
    }

    /// The shear angle in degrees.
    pub fn shear_deg(&self) -> f64 {
        self.shear_deg
    }

    /// The off-diagonal shear coefficient.
    pub fn coefficient(&self) -> f64 {
        self.shear_deg.to_radians().sinh()
    }

    /// The matrix right-multiplied with the points.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let s = self.coefficient();
        [[1.0, s, s], [s, 1.0, s], [s, s, 1.0]]
    }
}

impl Transform for Shear {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        Ok(apply_matrix(src, &self.matrix()))
    }
}

impl fmt::Display for Shear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shear(shear_deg={})", self.shear_deg)
    }
}
