//! Homography estimation (plane-induced projective transform).
//!
//! Implements a weighted, normalized Direct Linear Transform. The homography
//! `H` maps **source points** to **destination points**: `x' ~ H x`.
//!
//! Pipeline:
//! 1. normalize the source and destination sets independently,
//! 2. build the weighted system ([`WeightedSystem`]),
//! 3. solve it with the estimator picked by [`DofMode`],
//! 4. de-normalize with a least-squares solve ([`denormalize_homography`]).
//!
//! Input points should be in consistent units; the output is expressed in
//! the original coordinates of both sets.

mod denormalize;
mod estimator;
mod options;
mod system;

pub use denormalize::*;
pub use estimator::{DltEstimator, FixedScaleDlt, UnitNormDlt};
pub use options::*;
pub use system::*;

use crate::math::{HartleyNormalizer, PointNormalizer};
use crate::{HomographyError, PointSetRole};
use homography_core::{Mat3, Pt2, Real};
use log::debug;

/// High-level entry point for weighted homography estimation.
#[derive(Debug, Clone, Copy)]
pub struct HomographySolver;

/// Estimate `H` such that `x' ~ H x` using the weighted normalized DLT.
///
/// `weights` are relative per-correspondence confidences; `None`, an empty
/// slice or an all-zero slice means uniform weights. In
/// [`DofMode::UnitNorm`] the result is defined up to scale; in
/// [`DofMode::FixedScale`] the normalized-frame estimate has `h33 = 1` but
/// the returned matrix is not rescaled after de-normalization.
pub fn fit_homography(
    src: &[Pt2],
    dst: &[Pt2],
    weights: Option<&[Real]>,
    mode: DofMode,
) -> Result<Mat3, HomographyError> {
    HomographySolver::fit_weighted(&HartleyNormalizer, src, dst, weights, mode)
}

impl HomographySolver {
    /// Fit with Hartley normalization and the given options.
    pub fn fit(
        src: &[Pt2],
        dst: &[Pt2],
        opts: &HomographyFitOptions,
    ) -> Result<Mat3, HomographyError> {
        Self::fit_with(&HartleyNormalizer, src, dst, opts)
    }

    /// Fit with a caller-provided point normalizer.
    pub fn fit_with<N: PointNormalizer + ?Sized>(
        normalizer: &N,
        src: &[Pt2],
        dst: &[Pt2],
        opts: &HomographyFitOptions,
    ) -> Result<Mat3, HomographyError> {
        Self::fit_weighted(normalizer, src, dst, Some(opts.weights.as_slice()), opts.mode)
    }

    fn fit_weighted<N: PointNormalizer + ?Sized>(
        normalizer: &N,
        src: &[Pt2],
        dst: &[Pt2],
        weights: Option<&[Real]>,
        mode: DofMode,
    ) -> Result<Mat3, HomographyError> {
        let n = src.len();
        if dst.len() != n {
            return Err(HomographyError::PointCountMismatch {
                src: n,
                dst: dst.len(),
            });
        }
        if n == 0 {
            return Err(HomographyError::NoCorrespondences);
        }
        let weights = resolve_weights(weights, n)?;
        if n < 4 {
            debug!("{n} correspondences under-determine a homography");
        }

        let (src_n, t_src) = normalizer
            .normalize(src)
            .ok_or(HomographyError::DegenerateNormalization(PointSetRole::Source))?;
        let (dst_n, t_dst) = normalizer
            .normalize(dst)
            .ok_or(HomographyError::DegenerateNormalization(
                PointSetRole::Destination,
            ))?;

        let system = WeightedSystem::build(&src_n, &dst_n, &weights);
        debug!("fitting {mode:?} homography to {n} correspondences");
        let h = estimator::estimate(mode, &system)?;

        denormalize_homography(&h, &t_src, &t_dst)
    }
}
