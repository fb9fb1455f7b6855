//! Declarative configuration of the transforms.
//!
//! A transform is described by a JSON object tagged with its `type`:
//!
//! ```json
//! [
//!     { "type": "horizontal_flip", "p": 0.5, "mode": "stochastic-per-call", "seed": 42 },
//!     { "type": "rotate", "rot_deg": 15.0 },
//!     { "type": "normalize", "degenerate": "zero" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    transforms::{
        DegeneratePolicy, FlipMode, Normalize, PointCloudTransform, RandomFlip, Rescale, Rotate,
        Shear, Translate,
    },
    TransformError,
};

fn default_flip_p() -> f64 {
    0.5
}

/// Serializable parameters of a [`PointCloudTransform`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformConfig {
    /// Parameters of [`RandomFlip::horizontal`].
    HorizontalFlip {
        /// The flip probability.
        #[serde(default = "default_flip_p")]
        p: f64,
        /// The decision mode.
        #[serde(default)]
        mode: FlipMode,
        /// Seed of the random generator.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Parameters of [`RandomFlip::vertical`].
    VerticalFlip {
        /// The flip probability.
        #[serde(default = "default_flip_p")]
        p: f64,
        /// The decision mode.
        #[serde(default)]
        mode: FlipMode,
        /// Seed of the random generator.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Parameters of [`Translate`].
    Translate {
        /// The translation vector.
        trans: Vec<f64>,
    },
    /// Parameters of [`Shear`].
    Shear {
        /// The shear angle in degrees.
        shear_deg: f64,
    },
    /// Parameters of [`Rescale`].
    Rescale {
        /// The per-axis scale factors.
        rescale: Vec<f64>,
    },
    /// Parameters of [`Rotate`].
    Rotate {
        /// The rotation angle in degrees.
        rot_deg: f64,
    },
    /// Parameters of [`Normalize`].
    Normalize {
        /// The policy for constant axes.
        #[serde(default)]
        degenerate: DegeneratePolicy,
    },
}

impl TransformConfig {
    /// Parse a single configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the parameters and build the transform.
    ///
    /// # Errors
    ///
    /// Returns the configuration error of the corresponding constructor.
    pub fn build(&self) -> Result<PointCloudTransform, TransformError> {
        let transform: PointCloudTransform = match self {
            TransformConfig::HorizontalFlip { p, mode, seed } => {
                RandomFlip::horizontal(*p, *mode, *seed)?.into()
            }
            TransformConfig::VerticalFlip { p, mode, seed } => {
                RandomFlip::vertical(*p, *mode, *seed)?.into()
            }
            TransformConfig::Translate { trans } => Translate::new(trans)?.into(),
            TransformConfig::Shear { shear_deg } => Shear::new(*shear_deg)?.into(),
            TransformConfig::Rescale { rescale } => Rescale::new(rescale)?.into(),
            TransformConfig::Rotate { rot_deg } => Rotate::new(*rot_deg)?.into(),
            TransformConfig::Normalize { degenerate } => Normalize::new(*degenerate).into(),
        };
        log::debug!("built transform {transform}");
        Ok(transform)
    }
}

/// Parse a JSON array of configurations and build the transforms in order.
///
/// Example:
///
/// ```
/// use kornia_3d_augment::config::parse_transforms;
/// use kornia_3d_augment::pointcloud::PointCloud;
/// use kornia_3d_augment::transforms::Transform;
///
/// let mut transforms = parse_transforms(
///     r#"[{ "type": "rescale", "rescale": [2.0, 1.0, 0.5] }, { "type": "rotate", "rot_deg": 0.0 }]"#,
/// )
/// .unwrap();
///
/// let mut cloud = PointCloud::new(vec![[1.0, 1.0, 1.0]]);
/// for t in transforms.iter_mut() {
///     cloud = t.apply(&cloud).unwrap();
/// }
/// assert_eq!(cloud.points(), &[[2.0, 1.0, 0.5]]);
/// ```
pub fn parse_transforms(json: &str) -> Result<Vec<PointCloudTransform>, TransformError> {
    let configs: Vec<TransformConfig> = serde_json::from_str(json)?;
    configs.iter().map(TransformConfig::build).collect()
}
