use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    pointcloud::{Axis, PointCloud},
    TransformError,
};

use super::Transform;

/// How a [`RandomFlip`] turns its probability into a flip decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlipMode {
    /// Flip on every call iff `p > 0.5`. No randomness is involved.
    DeterministicThreshold,
    /// Draw one uniform sample `u` in [0, 1) per call and flip iff `u < p`.
    #[default]
    StochasticPerCall,
}

impl fmt::Display for FlipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipMode::DeterministicThreshold => write!(f, "deterministic-threshold"),
            FlipMode::StochasticPerCall => write!(f, "stochastic-per-call"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    // negates y
    Horizontal,
    // negates x
    Vertical,
}

/// Negate one coordinate axis of the whole cloud with a given probability.
///
/// The horizontal flip negates `y`, the vertical flip negates `x`. The decision is
/// taken once per call and applies to every point.
///
/// Example:
///
/// ```
/// use kornia_3d_augment::pointcloud::PointCloud;
/// use kornia_3d_augment::transforms::{FlipMode, RandomFlip, Transform};
///
/// let cloud = PointCloud::new(vec![[1.0, 2.0, 3.0]]);
/// let mut flip = RandomFlip::vertical(0.9, FlipMode::DeterministicThreshold, None).unwrap();
/// let flipped = flip.apply(&cloud).unwrap();
/// assert_eq!(flipped.points(), &[[-1.0, 2.0, 3.0]]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomFlip {
    direction: Direction,
    p: f64,
    mode: FlipMode,
    rng: StdRng,
}

impl RandomFlip {
    /// Create a flip in `direction` with probability `p`.
    ///
    /// # Arguments
    ///
    /// * `direction` - Which axis to negate.
    /// * `p` - The flip probability, in [0, 1].
    /// * `mode` - How `p` is turned into a decision.
    /// * `seed` - Seed of the random generator. Uses OS entropy if `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidProbability`] if `p` is not in [0, 1].
    fn new(
        direction: Direction,
        p: f64,
        mode: FlipMode,
        seed: Option<u64>,
    ) -> Result<Self, TransformError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(TransformError::InvalidProbability(p));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            direction,
            p,
            mode,
            rng,
        })
    }

    /// Create a horizontal flip, negating the `y` axis.
    pub fn horizontal(p: f64, mode: FlipMode, seed: Option<u64>) -> Result<Self, TransformError> {
        Self::new(Direction::Horizontal, p, mode, seed)
    }

    /// Create a vertical flip, negating the `x` axis.
    pub fn vertical(p: f64, mode: FlipMode, seed: Option<u64>) -> Result<Self, TransformError> {
        Self::new(Direction::Vertical, p, mode, seed)
    }

    /// The negated axis.
    pub fn axis(&self) -> Axis {
        match self.direction {
            Direction::Horizontal => Axis::Y,
            Direction::Vertical => Axis::X,
        }
    }

    /// The flip probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// The decision mode.
    pub fn mode(&self) -> FlipMode {
        self.mode
    }

    fn should_flip(&mut self) -> bool {
        match self.mode {
            FlipMode::DeterministicThreshold => self.p > 0.5,
            FlipMode::StochasticPerCall => {
                let u: f64 = self.rng.random();
                log::trace!("{self} drew u={u:.4}");
                u < self.p
            }
        }
    }
}

impl Transform for RandomFlip {
    fn apply(&mut self, src: &PointCloud) -> Result<PointCloud, TransformError> {
        if !self.should_flip() {
            return Ok(src.clone());
        }

        let c = self.axis().index();
        let points = src
            .points()
            .iter()
            .map(|&p| {
                let mut p = p;
                p[c] = -p[c];
                p
            })
            .collect();

        Ok(PointCloud::new(points))
    }
}

impl fmt::Display for RandomFlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.direction {
            Direction::Horizontal => "RandomHorizontalFlip",
            Direction::Vertical => "RandomVerticalFlip",
        };
        write!(f, "{name}(p={}, mode={})", self.p, self.mode)
    }
}
