use crate::HomographyError;
use homography_core::Real;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Parameterization of the homography solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DofMode {
    /// 9 parameters with `||h|| = 1`, solved as a null vector via SVD.
    #[default]
    UnitNorm,
    /// 8 parameters with `h33 = 1`, solved as weighted least squares.
    FixedScale,
}

impl DofMode {
    /// Interpret an integer mode flag: `1` is unit-norm, `0` is fixed-scale.
    ///
    /// Any other value falls back to [`DofMode::UnitNorm`] instead of being
    /// rejected.
    pub fn from_flag(flag: i64) -> Self {
        match flag {
            1 => DofMode::UnitNorm,
            0 => DofMode::FixedScale,
            other => {
                debug!("unrecognized dof flag {other}, using unit-norm");
                DofMode::UnitNorm
            }
        }
    }

    /// Integer flag understood by [`DofMode::from_flag`].
    pub fn flag(self) -> i64 {
        match self {
            DofMode::UnitNorm => 1,
            DofMode::FixedScale => 0,
        }
    }

    /// Number of unknowns in the linear system.
    pub fn num_params(self) -> usize {
        match self {
            DofMode::UnitNorm => 9,
            DofMode::FixedScale => 8,
        }
    }
}

/// Options for [`HomographySolver::fit`](crate::HomographySolver::fit).
///
/// # Example
///
/// ```
/// use homography_linear::{DofMode, HomographyFitOptions};
///
/// let opts = HomographyFitOptions {
///     mode: DofMode::FixedScale,
///     ..Default::default()
/// };
/// assert!(opts.weights.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomographyFitOptions {
    pub mode: DofMode,
    /// Relative per-correspondence confidence. Empty or all-zero means uniform.
    pub weights: Vec<Real>,
}

impl HomographyFitOptions {
    pub fn with_weights(mode: DofMode, weights: Vec<Real>) -> Self {
        Self { mode, weights }
    }
}

/// Validate per-correspondence weights and substitute the uniform default.
///
/// - `None`, an empty slice, or an all-zero slice yields `n` ones.
/// - A length different from `n` is an error.
/// - Negative or non-finite entries are kept as given, with a warning.
pub fn resolve_weights(
    weights: Option<&[Real]>,
    n: usize,
) -> Result<Vec<Real>, HomographyError> {
    let Some(w) = weights.filter(|w| w.iter().any(|&v| v != 0.0)) else {
        return Ok(vec![1.0; n]);
    };

    if w.len() != n {
        return Err(HomographyError::WeightCountMismatch {
            expected: n,
            got: w.len(),
        });
    }

    let malformed = w.iter().filter(|v| !v.is_finite() || **v < 0.0).count();
    if malformed > 0 {
        warn!("{malformed} of {n} weights are negative or non-finite; using them as given");
    }

    Ok(w.to_vec())
}
