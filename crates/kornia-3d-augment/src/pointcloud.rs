use std::fmt;

use crate::TransformError;

/// A coordinate axis of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first column.
    X,
    /// The second column.
    Y,
    /// The third column.
    Z,
}

impl Axis {
    /// All the axes in column order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The column index of the axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// A point cloud stored as an N×3 row-major matrix of `f64`.
///
/// Row `i` of a transformed cloud always corresponds to row `i` of its source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f64; 3]>,
}

impl PointCloud {
    /// Create a new point cloud from its points.
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self { points }
    }

    /// Create a point cloud from a flat row-major buffer `[x0, y0, z0, x1, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidFlatLength`] if the buffer length is not a multiple of 3.
    ///
    /// Example:
    ///
    /// ```
    /// use kornia_3d_augment::pointcloud::PointCloud;
    ///
    /// let cloud = PointCloud::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(cloud.points(), &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// ```
    pub fn from_flat(data: &[f64]) -> Result<Self, TransformError> {
        if data.len() % 3 != 0 {
            return Err(TransformError::InvalidFlatLength(data.len()));
        }
        let points = data
            .chunks_exact(3)
            .map(|xyz| [xyz[0], xyz[1], xyz[2]])
            .collect();
        Ok(Self { points })
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Consume the point cloud and return its points.
    pub fn into_points(self) -> Vec<[f64; 3]> {
        self.points
    }

    /// Iterate over the values of one column.
    pub fn column(&self, axis: Axis) -> impl Iterator<Item = f64> + '_ {
        let c = axis.index();
        self.points.iter().map(move |p| p[c])
    }

    /// Get the per-axis minimum of the point cloud, or `None` if it is empty.
    ///
    /// NaN coordinates are ignored, as with [`f64::min`].
    pub fn min_bound(&self) -> Option<[f64; 3]> {
        self.fold_bound(f64::min)
    }

    /// Get the per-axis maximum of the point cloud, or `None` if it is empty.
    ///
    /// NaN coordinates are ignored, as with [`f64::max`].
    pub fn max_bound(&self) -> Option<[f64; 3]> {
        self.fold_bound(f64::max)
    }

    fn fold_bound(&self, f: impl Fn(f64, f64) -> f64) -> Option<[f64; 3]> {
        let (first, rest) = self.points.split_first()?;
        Some(rest.iter().fold(*first, |acc, p| {
            [f(acc[0], p[0]), f(acc[1], p[1]), f(acc[2], p[2])]
        }))
    }
}

impl From<Vec<[f64; 3]>> for PointCloud {
    fn from(points: Vec<[f64; 3]>) -> Self {
        Self::new(points)
    }
}
