use std::fmt;

use crate::{
    pointcloud::{Axis, PointCloud},
    TransformError,
};

use super::Transform;

/// What [`Normalize`] does with an axis whose values are all equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Fail with [`TransformError::DegenerateAxis`].
    #[default]
    Error,
    /// Map every value of the axis to 0.
    Zero,
    /// Divide by the zero range anyway, producing NaN.
    Propagate,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Error => write!(f, "error"),
            DegeneratePolicy::Zero => write!(f, "zero"),
            DegeneratePolicy::Propagate => write!(f, "propagate"),
        }
    }
}

/// Min-max normalize each axis of a point cloud to [0, 1].
///
/// The statistics are taken over the whole cloud passed to [`Transform::apply`]:
///
/// ```text
/// v' = (v - min) / (max - min)
/// ```
///
/// Every coordinate must be finite, otherwise the call fails with
/// [`TransformError::NonFiniteCoordinate`].
///
/// Example:
///
/// ```
/// use kornia_3d_augment::pointcloud::PointCloud;
/// use kornia_3d_augment::transforms::{Normalize, Transform};
///
/// let cloud = PointCloud::new(vec![[0.0, -1.0, 10.0], [2.0, 1.0, 20.0], [1.0, 0.0, 30.0]]);
/// let out = Normalize::default().apply(&cloud).unwrap();
/// assert_eq!(out.points(), &[[0.0, 0.0, 0.0], [1.0, 1.0, 0.5], [0.5, 0.5, 1.0]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalize {
    degenerate: DegeneratePolicy,
}

impl Normalize {
    /// Create a normalization with the given policy for constant axes.
    pub fn new(degenerate: DegeneratePolicy) -> Self {
        Self { degenerate }
    }

    /// The policy for constant axes.
    pub fn degenerate(&self) -> DegeneratePolicy {
        self.degenerate
    }
}

impl Transform for Normalize {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        // NaN would be skipped by the bounds and pass through silently
        for (row, p) in src.points().iter().enumerate() {
            for axis in Axis::ALL {
                let value = p[axis.index()];
                if !value.is_finite() {
                    return Err(TransformError::NonFiniteCoordinate { row, axis, value });
                }
            }
        }

        let (Some(min), Some(max)) = (src.min_bound(), src.max_bound()) else {
            return Ok(PointCloud::default());
        };

        // value taken by every point of a constant axis
        let mut fill: [Option<f64>; 3] = [None; 3];
        for axis in Axis::ALL {
            let c = axis.index();
            if max[c] - min[c] != 0.0 {
                continue;
            }
            fill[c] = match self.degenerate {
                DegeneratePolicy::Error => {
                    return Err(TransformError::DegenerateAxis {
                        axis,
                        value: min[c],
                    })
                }
                DegeneratePolicy::Zero => Some(0.0),
                DegeneratePolicy::Propagate => {
                    log::warn!("{axis} axis is constant ({}), normalizing to NaN", min[c]);
                    Some(f64::NAN)
                }
            };
        }

        let points = src
            .points()
            .iter()
            .map(|p| {
                let mut out = [0.0; 3];
                for (c, v) in out.iter_mut().enumerate() {
                    *v = fill[c].unwrap_or_else(|| min_max_scale(p[c], min[c], max[c]));
                }
                out
            })
            .collect();

        Ok(PointCloud::new(points))
    }
}

/// Map `v` from [min, max] to [0, 1] for finite `min < max`.
fn min_max_scale(v: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.is_finite() {
        (v - min) / range
    } else {
        // the span overflows f64, halving keeps every term finite
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

impl fmt::Display for Normalize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normalize(degenerate={})", self.degenerate)
    }
}
