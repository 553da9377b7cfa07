//! Point conditioning and small matrix helpers for the DLT solvers.
//!
//! # Hartley Normalization
//!
//! Normalizing points before DLT-style algorithms improves numerical stability
//! by centering the data and scaling it to a fixed mean distance. The
//! estimation pipeline consumes normalization through the [`PointNormalizer`]
//! trait; [`HartleyNormalizer`] is the default implementation.
//!
//! # Example
//!
//! ```
//! use homography_linear::math::normalize_points_2d;
//! use homography_core::Pt2;
//!
//! let points = vec![
//!     Pt2::new(100.0, 200.0),
//!     Pt2::new(150.0, 250.0),
//!     Pt2::new(120.0, 220.0),
//! ];
//!
//! let (normalized, transform) = normalize_points_2d(&points).unwrap();
//! // normalized points have mean at origin, mean distance = sqrt(2)
//! assert_eq!(normalized.len(), 3);
//! assert_eq!(transform[(2, 2)], 1.0);
//! ```

use homography_core::{Mat3, Pt2, Real};
use nalgebra::{Dim, Matrix, RawStorage, U1};

/// Maps a point set into a numerically conditioned frame.
///
/// Implementations must be deterministic. The returned matrix `T` maps an
/// original point in homogeneous coordinates onto its normalized counterpart:
/// `p_norm ~ T * p`. `None` signals a configuration that cannot be normalized.
pub trait PointNormalizer {
    fn normalize(&self, points: &[Pt2]) -> Option<(Vec<Pt2>, Mat3)>;
}

/// Hartley normalization: centroid at the origin, mean distance `√2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HartleyNormalizer;

impl PointNormalizer for HartleyNormalizer {
    fn normalize(&self, points: &[Pt2]) -> Option<(Vec<Pt2>, Mat3)> {
        normalize_points_2d(points)
    }
}

/// Leaves points untouched and reports the identity transform.
///
/// Turns the pipeline into a plain (un-normalized) weighted DLT.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl PointNormalizer for IdentityNormalizer {
    fn normalize(&self, points: &[Pt2]) -> Option<(Vec<Pt2>, Mat3)> {
        Some((points.to_vec(), Mat3::identity()))
    }
}

/// Hartley normalization for 2D points.
///
/// Centers points at the origin and scales so that the mean distance from
/// the origin is `√2`.
///
/// # Returns
///
/// * `Some((normalized_points, transform_matrix))` - Normalized points and
///   the 3x3 transformation matrix `T` such that `p_norm = T * p_homogeneous`
/// * `None` - If input is empty or all points coincide (zero mean distance)
///
/// # References
///
/// Hartley & Zisserman, "Multiple View Geometry in Computer Vision", 2nd ed.,
/// Algorithm 4.2 (Normalized DLT)
pub fn normalize_points_2d(points: &[Pt2]) -> Option<(Vec<Pt2>, Mat3)> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as Real;
    let centroid = points
        .iter()
        .fold(Pt2::origin(), |acc, p| acc + p.coords / n);

    let mean_dist = points.iter().map(|p| (p - centroid).norm()).sum::<Real>() / n;
    if !mean_dist.is_finite() || mean_dist <= Real::EPSILON {
        return None;
    }

    let scale = Real::sqrt(2.0) / mean_dist;
    #[rustfmt::skip]
    let t = Mat3::new(
        scale, 0.0, -scale * centroid.x,
        0.0, scale, -scale * centroid.y,
        0.0, 0.0, 1.0,
    );

    let norm = points
        .iter()
        .map(|p| Pt2::from((p - centroid) * scale))
        .collect();

    Some((norm, t))
}

/// Reshape a 9-element row (or column) vector into a 3x3 matrix, row-major.
///
/// # Panics
///
/// Panics if `h` does not hold exactly 9 elements.
pub fn mat3_from_row_major<R, C, S>(h: &Matrix<Real, R, C, S>) -> Mat3
where
    R: Dim,
    C: Dim,
    S: RawStorage<Real, R, C>,
{
    assert_eq!(h.len(), 9, "Expected 9 elements for 3x3 matrix extraction");
    Mat3::from_fn(|r, c| h[3 * r + c])
}

/// Index of the smallest entry of a singular value vector.
///
/// Ties resolve to the last index, which is where a descending-sorted
/// decomposition places the null direction.
pub(crate) fn index_of_smallest<D, S>(values: &Matrix<Real, D, U1, S>) -> usize
where
    D: Dim,
    S: RawStorage<Real, D, U1>,
{
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v <= values[best] {
            best = i;
        }
    }
    best
}
