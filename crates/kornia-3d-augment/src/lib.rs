#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Example
//!
//! ```
//! use kornia_3d_augment::pointcloud::PointCloud;
//! use kornia_3d_augment::transforms::{Rescale, Rotate, Transform};
//!
//! let cloud = PointCloud::new(vec![[1.0, 1.0, 1.0], [0.0, 2.0, -1.0]]);
//!
//! let mut rescale = Rescale::new(&[2.0, 1.0, 0.5])?;
//! let mut rotate = Rotate::new(30.0)?;
//!
//! let augmented = rotate.apply(&rescale.apply(&cloud)?)?;
//! assert_eq!(augmented.len(), cloud.len());
//! # Ok::<(), kornia_3d_augment::TransformError>(())
//! ```

/// Serde configuration of the transforms.
pub mod config;

mod error;
pub use error::TransformError;

/// Linear algebra utilities.
pub mod linalg;

/// Point cloud container.
pub mod pointcloud;

/// Point cloud augmentation transforms.
pub mod transforms;
