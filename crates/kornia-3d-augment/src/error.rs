use crate::pointcloud::Axis;

/// Error types for the point cloud transforms.
#[derive(thiserror::Error, Debug)]
pub enum TransformError {
    /// A vector parameter does not have the required number of components.
    #[error("`{name}` expects {expected} components, got {actual}")]
    InvalidArity {
        /// Name of the offending parameter.
        name: &'static str,
        /// Number of components required.
        expected: usize,
        /// Number of components provided.
        actual: usize,
    },

    /// The flip probability is outside of [0, 1].
    #[error("flip probability `p` must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// A parameter is NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A flat coordinate buffer cannot be split into xyz rows.
    #[error("flat point buffer length ({0}) is not a multiple of 3")]
    InvalidFlatLength(usize),

    /// Min-max normalization over an axis where every point has the same value.
    #[error("cannot normalize the {axis} axis: every point has {axis} = {value}")]
    DegenerateAxis {
        /// The constant axis.
        axis: Axis,
        /// The value shared by all the points.
        value: f64,
    },

    /// A point has a NaN or infinite coordinate where finite values are required.
    #[error("point {row} has a non-finite {axis} coordinate ({value})")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        row: usize,
        /// The non-finite axis.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },

    /// The transform configuration could not be parsed.
    #[error("invalid transform configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Check that a vector parameter has exactly three finite components.
pub(crate) fn ensure_vec3(name: &'static str, values: &[f64]) -> Result<[f64; 3], TransformError> {
    let values: [f64; 3] = values
        .try_into()
        .map_err(|_| TransformError::InvalidArity {
            name,
            expected: 3,
            actual: values.len(),
        })?;

    for &value in values.iter() {
        ensure_finite(name, value)?;
    }

    Ok(values)
}

/// Check that a scalar parameter is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, TransformError> {
    if !value.is_finite() {
        return Err(TransformError::NonFiniteParameter { name, value });
    }
    Ok(value)
}
