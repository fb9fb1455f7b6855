use std::fmt;

use crate::{error::ensure_finite, linalg, pointcloud::PointCloud, TransformError};

use super::{apply_matrix, Transform};

/// Rotate a point cloud around the x, y and z axes by the same angle.
///
/// The points are multiplied in sequence by the elementary rotations,
/// `((P @ Rx) @ Ry) @ Rz`, where
///
/// ```text
///      | 1  0  0 |       |  c  0  s |       | c -s  0 |
/// Rx = | 0  c -s |  Ry = |  0  1  0 |  Rz = | s  c  0 |
///      | 0  s  c |       | -s  0  c |       | 0  0  1 |
/// ```
///
/// NOTE: a single angle drives all three rotations, so this is not a general
/// Euler-angle rotation. Rotating by `a` about one axis only is not expressible.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotate {
    rot_deg: f64,
}

impl Rotate {
    /// Create a rotation from an angle in degrees.
    ///
    /// # Errors
    ///
    /// Fails if `rot_deg` is not finite.
    pub fn new(rot_deg: f64) -> Result<Self, TransformError> {
        let rot_deg = ensure_finite("rot_deg", rot_deg)?;
        Ok(Self { rot_deg })
    }

    /// The rotation angle in degrees.
    pub fn rot_deg(&self) -> f64 {
        self.rot_deg
    }

    /// The elementary rotations `[Rx, Ry, Rz]`, in the order they are applied.
    pub fn elementary_matrices(&self) -> [[[f64; 3]; 3]; 3] {
        let alpha = self.rot_deg.to_radians();
        let (sin, cos) = alpha.sin_cos();

        let rx = [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]];
        let ry = [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]];
        let rz = [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]];

        [rx, ry, rz]
    }

    /// The composed matrix `Rx @ Ry @ Rz`.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let [rx, ry, rz] = self.elementary_matrices();
        linalg::matmul33(&linalg::matmul33(&rx, &ry), &rz)
    }
}

impl Transform for Rotate {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        let [rx, ry, rz] = self.elementary_matrices();
        let pc1 = apply_matrix(src, &rx);
        let pc2 = apply_matrix(&pc1, &ry);
        Ok(apply_matrix(&pc2, &rz))
    }
}

impl fmt::Display for Rotate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotate(rot_deg={})", self.rot_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_points_eq(a: &PointCloud, b: &PointCloud) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.points().iter().zip(b.points().iter()) {
            for k in 0..3 {
                assert_relative_eq!(p[k], q[k], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rotate_zero_is_identity() -> Result<(), TransformError> {
        let src = PointCloud::new(vec![[1.0, 2.0, 3.0], [-4.0, 0.5, 2.0], [0.0, 0.0, 0.0]]);
        let out = Rotate::new(0.0)?.apply(&src)?;
        assert_points_eq(&out, &src);
        Ok(())
    }

    #[test]
    fn test_rotate_90_deg() -> Result<(), TransformError> {
        let mut rotate = Rotate::new(90.0)?;

        // Rx @ Ry @ Rz at 90 degrees
        let expected = [[0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0, 0.0]];
        let m = rotate.matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(m[i][j], expected[i][j], epsilon = 1e-12);
            }
        }

        let out = rotate.apply(&PointCloud::new(vec![[1.0, 2.0, 3.0]]))?;
        assert_points_eq(&out, &PointCloud::new(vec![[3.0, -2.0, 1.0]]));
        Ok(())
    }

    #[test]
    fn test_rotate_matches_composed_matrix() -> Result<(), TransformError> {
        let mut rotate = Rotate::new(33.0)?;
        let src = PointCloud::new(vec![[1.0, -2.0, 0.5], [3.0, 4.0, -5.0]]);

        let sequential = rotate.apply(&src)?;
        let composed = apply_matrix(&src, &rotate.matrix());
        assert_points_eq(&sequential, &composed);
        Ok(())
    }

    #[test]
    fn test_rotate_preserves_norm() -> Result<(), TransformError> {
        let src = PointCloud::new(vec![[1.0, 2.0, 3.0], [-0.3, 7.0, 1.5]]);
        let out = Rotate::new(-47.0)?.apply(&src)?;
        for (p, q) in src.points().iter().zip(out.points().iter()) {
            let norm_p = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            let norm_q = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2]).sqrt();
            assert_relative_eq!(norm_p, norm_q, epsilon = 1e-12);
        }
        Ok(())
    }
}
