use std::fmt;
use thiserror::Error;

/// Which side of the correspondence set a problem refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSetRole {
    Source,
    Destination,
}

impl fmt::Display for PointSetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSetRole::Source => f.write_str("source"),
            PointSetRole::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HomographyError {
    #[error("no point correspondences given")]
    NoCorrespondences,
    #[error("dimension mismatch: {src} source points vs {dst} destination points")]
    PointCountMismatch { src: usize, dst: usize },
    #[error("dimension mismatch: {got} weights for {expected} correspondences")]
    WeightCountMismatch { expected: usize, got: usize },
    #[error("degenerate {0} point configuration for normalization")]
    DegenerateNormalization(PointSetRole),
    #[error("singular system: normal equations are rank deficient")]
    SingularSystem,
    #[error("svd failed")]
    SvdFailed,
    #[error("de-normalization solve failed: {0}")]
    Denormalization(&'static str),
}
