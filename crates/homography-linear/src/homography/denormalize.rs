use super::estimator::SVD_MAX_ITERS;
use crate::HomographyError;
use homography_core::{Mat3, Real};
use nalgebra::DMatrix;

/// Map a homography estimated between normalized frames back to the original
/// frames.
///
/// Solves `Td · X = H · Ts` in the least-squares sense instead of forming
/// `Td⁻¹`. A singular `Td` yields the minimum-norm solution rather than an
/// error. The result is not rescaled.
pub fn denormalize_homography(
    h: &Mat3,
    t_src: &Mat3,
    t_dst: &Mat3,
) -> Result<Mat3, HomographyError> {
    // Dynamic storage keeps nalgebra on the bidiagonal SVD; the fixed 3x3
    // path works on `TdᵀTd` and loses the small singular value of Hartley
    // transforms with large offsets.
    let td = DMatrix::from_column_slice(3, 3, t_dst.as_slice());
    let rhs = DMatrix::from_column_slice(3, 3, (h * t_src).as_slice());

    let svd = td
        .clone()
        .try_svd(true, true, Real::EPSILON, SVD_MAX_ITERS)
        .ok_or(HomographyError::Denormalization("svd did not converge"))?;
    // Same relative cut-off as a LAPACK `gelsd` default: eps * max(rows, cols).
    let eps = Real::EPSILON * 3.0 * svd.singular_values.max();

    let mut x = svd
        .solve(&rhs, eps)
        .map_err(HomographyError::Denormalization)?;
    // One refinement step on the residual; the minimum-norm solution is a
    // fixed point, so singular `Td` is unaffected.
    let resid = &rhs - &td * &x;
    x += svd
        .solve(&resid, eps)
        .map_err(HomographyError::Denormalization)?;

    Ok(Mat3::from_column_slice(x.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_inverse_for_similarity() {
        let t_src = Mat3::new(2.0, 0.0, -1.0, 0.0, 2.0, -1.0, 0.0, 0.0, 1.0);
        let t_dst = Mat3::new(0.5, 0.0, 3.0, 0.0, 0.5, -2.0, 0.0, 0.0, 1.0);
        let h = Mat3::new(1.0, 0.1, 0.2, -0.3, 0.9, 0.0, 0.01, 0.02, 1.0);

        let out = denormalize_homography(&h, &t_src, &t_dst).unwrap();
        let expected = t_dst.try_inverse().unwrap() * h * t_src;
        assert!((out - expected).norm() < 1e-12);
    }

    #[test]
    fn singular_destination_transform_is_tolerated() {
        let t_dst = Mat3::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let out = denormalize_homography(&Mat3::identity(), &Mat3::identity(), &t_dst).unwrap();
        // Minimum-norm solution drops the unobservable row.
        let expected = Mat3::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!((out - expected).norm() < 1e-12);
    }

    #[test]
    fn large_offset_destination_transform_stays_accurate() {
        // Hartley-style transform of points around a UTM position.
        let (s, cx, cy) = (2.5e-3, 451_000.0, 5_412_000.0);
        let t_dst = Mat3::new(s, 0.0, -s * cx, 0.0, s, -s * cy, 0.0, 0.0, 1.0);
        let t_dst_inv = Mat3::new(1.0 / s, 0.0, cx, 0.0, 1.0 / s, cy, 0.0, 0.0, 1.0);
        let t_src = Mat3::new(4e-3, 0.0, -1.6, 0.0, 4e-3, -1.2, 0.0, 0.0, 1.0);
        let h = Mat3::new(0.9, 0.02, 0.1, -0.03, -0.95, 0.05, 1e-3, 2e-3, 1.0);

        let out = denormalize_homography(&h, &t_src, &t_dst).unwrap();
        let expected = t_dst_inv * h * t_src;
        let rel = (out - expected).norm() / expected.norm();
        assert!(rel < 1e-9, "relative error {rel:.3e}");
    }
}
