//! Geometric quality measures for a fitted homography.

use homography_core::{apply_homography, Mat3, Pt2, Real};

/// Forward transfer error `|| H src_i - dst_i ||` for every correspondence.
///
/// Points sent to infinity by `h` report `Real::INFINITY`.
pub fn transfer_errors(h: &Mat3, src: &[Pt2], dst: &[Pt2]) -> Vec<Real> {
    src.iter()
        .zip(dst.iter())
        .map(|(s, d)| match apply_homography(h, s) {
            Some(p) => (p - d).norm(),
            None => Real::INFINITY,
        })
        .collect()
}

/// Weighted root-mean-square transfer error.
///
/// `weights` follow the same convention as the fitting functions: `None`, an
/// empty slice or an all-zero slice means uniform weights. Returns `None`
/// when there is nothing to average (no correspondences, or weights of the
/// wrong length).
pub fn rms_transfer_error(
    h: &Mat3,
    src: &[Pt2],
    dst: &[Pt2],
    weights: Option<&[Real]>,
) -> Option<Real> {
    let errors = transfer_errors(h, src, dst);
    let weights = crate::resolve_weights(weights, errors.len()).ok()?;

    let total: Real = weights.iter().sum();
    if errors.is_empty() || total <= 0.0 {
        return None;
    }

    let sum_sq: Real = errors
        .iter()
        .zip(weights.iter())
        .map(|(e, w)| w * e * e)
        .sum();
    Some((sum_sq / total).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_mapping_has_zero_error() {
        let h = Mat3::new(2.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0);
        let src = [Pt2::new(0.0, 0.0), Pt2::new(1.0, 1.0)];
        let dst = [Pt2::new(1.0, 0.0), Pt2::new(3.0, 2.0)];

        assert_eq!(transfer_errors(&h, &src, &dst), vec![0.0, 0.0]);
        assert_eq!(rms_transfer_error(&h, &src, &dst, None), Some(0.0));
    }

    #[test]
    fn weighted_rms() {
        let h = Mat3::identity();
        let src = [Pt2::new(0.0, 0.0), Pt2::new(0.0, 0.0)];
        let dst = [Pt2::new(3.0, 4.0), Pt2::new(0.0, 0.0)];

        let uniform = rms_transfer_error(&h, &src, &dst, None).unwrap();
        assert!((uniform - (12.5_f64).sqrt()).abs() < 1e-12);

        let w = [0.0, 1.0];
        let only_second = rms_transfer_error(&h, &src, &dst, Some(&w[..])).unwrap();
        assert_eq!(only_second, 0.0);
    }

    #[test]
    fn points_at_infinity_and_bad_weights() {
        let h = Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0);
        let src = [Pt2::new(1.0, 0.0)];
        let dst = [Pt2::new(0.0, 0.0)];
        assert!(transfer_errors(&h, &src, &dst)[0].is_infinite());

        let w = [1.0, 1.0];
        assert!(rms_transfer_error(&Mat3::identity(), &src, &dst, Some(&w[..])).is_none());
        assert!(rms_transfer_error(&h, &[], &[], None).is_none());
    }
}
