use super::system::WeightedSystem;
use super::DofMode;
use crate::math::{index_of_smallest, mat3_from_row_major};
use crate::HomographyError;
use homography_core::{Mat3, Real};
use log::debug;
use nalgebra::DVector;

/// Pivots below this fraction of the largest pivot mark the 8-parameter
/// normal equations as singular.
const SINGULAR_PIVOT_RTOL: Real = 1e-12;

/// Iteration cap for the SVD; non-finite input never converges.
pub(crate) const SVD_MAX_ITERS: usize = 1000;

/// Solves a [`WeightedSystem`] for the homography in normalized coordinates.
pub trait DltEstimator {
    fn estimate(&self, system: &WeightedSystem) -> Result<Mat3, HomographyError>;
}

/// 9-parameter solve: minimize `||A h||` subject to `||h|| = 1`.
///
/// `h` is the right singular vector of `Aᵀ W A` belonging to its smallest
/// singular value. The result is only defined up to scale and sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitNormDlt;

impl DltEstimator for UnitNormDlt {
    fn estimate(&self, system: &WeightedSystem) -> Result<Mat3, HomographyError> {
        let svd = system
            .normal_matrix()
            .try_svd(false, true, Real::EPSILON, SVD_MAX_ITERS)
            .ok_or(HomographyError::SvdFailed)?;
        let v_t = svd.v_t.ok_or(HomographyError::SvdFailed)?;

        let idx = index_of_smallest(&svd.singular_values);
        debug!(
            "unit-norm dlt: smallest singular value {:.3e} (largest {:.3e})",
            svd.singular_values[idx],
            svd.singular_values.max()
        );

        Ok(mat3_from_row_major(&v_t.row(idx)))
    }
}

/// 8-parameter solve with `h33 = 1` via the weighted normal equations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScaleDlt;

impl DltEstimator for FixedScaleDlt {
    fn estimate(&self, system: &WeightedSystem) -> Result<Mat3, HomographyError> {
        let (m, r) = system.fixed_scale_normal_equations();

        let lu = m.full_piv_lu();
        let pivots = lu.u().diagonal().abs();
        let (min_pivot, max_pivot) = (pivots.min(), pivots.max());
        let well_posed = min_pivot > SINGULAR_PIVOT_RTOL * max_pivot;
        if !well_posed {
            debug!("fixed-scale dlt: pivot ratio {min_pivot:.3e} / {max_pivot:.3e}");
            return Err(HomographyError::SingularSystem);
        }

        let x = lu.solve(&r).ok_or(HomographyError::SingularSystem)?;
        let n = DofMode::UnitNorm.num_params();
        let h = DVector::from_iterator(n, x.iter().copied().chain(std::iter::once(1.0)));
        Ok(mat3_from_row_major(&h))
    }
}

/// Run the estimator variant selected by `mode`.
pub(crate) fn estimate(mode: DofMode, system: &WeightedSystem) -> Result<Mat3, HomographyError> {
    match mode {
        DofMode::UnitNorm => UnitNormDlt.estimate(system),
        DofMode::FixedScale => FixedScaleDlt.estimate(system),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homography_core::{normalize_h33, Pt2};

    fn square_to_quad() -> (Vec<Pt2>, Vec<Pt2>) {
        let src = vec![
            Pt2::new(-1.0, -1.0),
            Pt2::new(1.0, -1.0),
            Pt2::new(1.0, 1.0),
            Pt2::new(-1.0, 1.0),
        ];
        let h = Mat3::new(1.1, 0.2, 0.1, -0.1, 0.9, -0.2, 0.05, -0.08, 1.0);
        let dst = src
            .iter()
            .map(|p| homography_core::apply_homography(&h, p).unwrap())
            .collect();
        (src, dst)
    }

    #[test]
    fn both_variants_agree_on_exact_data() {
        let (src, dst) = square_to_quad();
        let sys = WeightedSystem::build(&src, &dst, &[1.0; 4]);

        let h9 = normalize_h33(&UnitNormDlt.estimate(&sys).unwrap());
        let h8 = FixedScaleDlt.estimate(&sys).unwrap();

        assert_eq!(h8[(2, 2)], 1.0);
        assert!((h9 - h8).norm() < 1e-9, "h9 = {h9}, h8 = {h8}");
        assert!((h8[(0, 0)] - 1.1).abs() < 1e-9);
        assert!((h8[(2, 1)] + 0.08).abs() < 1e-9);
    }

    #[test]
    fn unit_norm_solution_has_unit_norm() {
        let (src, dst) = square_to_quad();
        let sys = WeightedSystem::build(&src, &dst, &[1.0, 2.0, 3.0, 4.0]);
        let h = UnitNormDlt.estimate(&sys).unwrap();
        assert!((h.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fixed_scale_reports_rank_deficiency() {
        let (src, dst) = square_to_quad();
        let sys = WeightedSystem::build(&src[..3], &dst[..3], &[1.0; 3]);
        assert!(matches!(
            FixedScaleDlt.estimate(&sys),
            Err(HomographyError::SingularSystem)
        ));
        assert!(UnitNormDlt.estimate(&sys).is_ok());
    }

    #[test]
    fn dispatch_follows_mode() {
        let (src, dst) = square_to_quad();
        let sys = WeightedSystem::build(&src, &dst, &[1.0; 4]);
        let h = estimate(DofMode::FixedScale, &sys).unwrap();
        assert_eq!(h[(2, 2)], 1.0);
        let h = estimate(DofMode::UnitNorm, &sys).unwrap();
        assert!((h.norm() - 1.0).abs() < 1e-12);
    }
}
