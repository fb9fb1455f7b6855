//! Augmentation transforms over [`PointCloud`].
//!
//! Every transform keeps the number of points and the N×3 shape; it only changes
//! coordinate values. Transforms never modify their input: [`Transform::apply`]
//! borrows the source cloud and returns a new one, so they can be chained freely.
//!
//! The linear transforms ([`Translate`], [`Shear`], [`Rescale`], [`Rotate`]) treat each
//! point as a row vector and compute `P @ M` for a fixed 3x3 matrix `M`.

use std::fmt;

use crate::{linalg, pointcloud::PointCloud, TransformError};

mod flip;
pub use flip::{FlipMode, RandomFlip};

mod normalize;
pub use normalize::{DegeneratePolicy, Normalize};

mod rescale;
pub use rescale::Rescale;

mod rotate;
pub use rotate::Rotate;

mod shear;
pub use shear::Shear;

mod translate;
pub use translate::Translate;

/// A transform applied to a whole point cloud.
pub trait Transform {
    /// Apply the transform to `src` and return the transformed cloud.
    ///
    /// Takes `&mut self` because stochastic transforms advance their random state.
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError>;
}

/// Any of the point cloud transforms of this crate.
#[derive(Debug, Clone)]
pub enum PointCloudTransform {
    /// Random sign flip of one axis.
    Flip(RandomFlip),
    /// Translation in matrix form.
    Translate(Translate),
    /// Shear with `sinh` coefficients.
    Shear(Shear),
    /// Anisotropic scaling.
    Rescale(Rescale),
    /// Coupled rotation around the three axes.
    Rotate(Rotate),
    /// Per-axis min-max normalization.
    Normalize(Normalize),
}

impl Transform for PointCloudTransform {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        match self {
            PointCloudTransform::Flip(t) => t.apply(src),
            PointCloudTransform::Translate(t) => t.apply(src),
            PointCloudTransform::Shear(t) => t.apply(src),
            PointCloudTransform::Rescale(t) => t.apply(src),
            PointCloudTransform::Rotate(t) => t.apply(src),
            PointCloudTransform::Normalize(t) => t.apply(src),
        }
    }
}

impl fmt::Display for PointCloudTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCloudTransform::Flip(t) => t.fmt(f),
            PointCloudTransform::Translate(t) => t.fmt(f),
            PointCloudTransform::Shear(t) => t.fmt(f),
            PointCloudTransform::Rescale(t) => t.fmt(f),
            PointCloudTransform::Rotate(t) => t.fmt(f),
            PointCloudTransform::Normalize(t) => t.fmt(f),
        }
    }
}

macro_rules! impl_from_transform {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for PointCloudTransform {
                fn from(t: $variant) -> Self {
                    PointCloudTransform::$variant(t)
                }
            }
        )*
    };
}

impl_from_transform!(Translate, Shear, Rescale, Rotate, Normalize);

impl From<RandomFlip> for PointCloudTransform {
    fn from(t: RandomFlip) -> Self {
        PointCloudTransform::Flip(t)
    }
}

/// Compute `src @ m` into a new point cloud.
pub(crate) fn apply_matrix(src: &PointCloud, m: &[[f64; 3]; 3]) -> PointCloud {
    let mut dst_points = vec![[0.0; 3]; src.len()];
    linalg::right_multiply(src.points(), m, &mut dst_points);
    PointCloud::new(dst_points)
}
