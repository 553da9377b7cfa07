//! Mathematical utilities and type definitions.
//!
//! This module provides the fundamental types used throughout the workspace
//! and small helpers for working with homogeneous coordinates.

use nalgebra::{Matrix3, Point2, Vector2, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 2D point with [`Real`] coordinates.
pub type Pt2 = Point2<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;

/// Convert a 2D point in Euclidean coordinates into homogeneous coordinates.
///
/// Given a point `p = (x, y)`, returns the homogeneous vector `(x, y, 1)`.
pub fn to_homogeneous(p: &Pt2) -> Vec3 {
    Vec3::new(p.x, p.y, 1.0)
}

/// Convert a 3D homogeneous vector back to a 2D point.
///
/// The input is interpreted as `(x, y, w)` and the result is `(x / w, y / w)`.
/// The caller is responsible for ensuring that `w != 0`.
pub fn from_homogeneous(v: &Vec3) -> Pt2 {
    Pt2::new(v.x / v.z, v.y / v.z)
}

/// Map a point through a homography: `p' ~ H p`.
///
/// Returns `None` when the point is sent to (or numerically next to) the line
/// at infinity.
///
/// # Example
///
/// ```
/// use homography_core::{apply_homography, Mat3, Pt2};
///
/// let h = Mat3::new(2.0, 0.0, 1.0, 0.0, 2.0, -1.0, 0.0, 0.0, 1.0);
/// let p = apply_homography(&h, &Pt2::new(1.0, 1.0)).unwrap();
/// assert!((p.x - 3.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// ```
pub fn apply_homography(h: &Mat3, p: &Pt2) -> Option<Pt2> {
    let v = h * to_homogeneous(p);
    if v.z.abs() <= Real::EPSILON {
        return None;
    }
    Some(from_homogeneous(&v))
}

/// Rescale a homography so that `H[2,2] == 1`.
///
/// Homographies are defined up to scale; this picks the conventional
/// representative. If `H[2,2]` is negligible the matrix is returned as-is.
pub fn normalize_h33(h: &Mat3) -> Mat3 {
    let scale = h[(2, 2)];
    if scale.abs() > Real::EPSILON {
        h / scale
    } else {
        *h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homogeneous_roundtrip() {
        let p = Pt2::new(3.5, -2.0);
        let v = to_homogeneous(&p) * 4.0;
        let back = from_homogeneous(&v);
        assert!((back - p).norm() < 1e-12);
    }

    #[test]
    fn point_at_infinity_is_rejected() {
        // Last row maps (1, 0) to w = 0.
        let h = Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0);
        assert!(apply_homography(&h, &Pt2::new(1.0, 0.0)).is_none());
        assert!(apply_homography(&h, &Pt2::new(0.0, 5.0)).is_some());
    }

    #[test]
    fn normalize_h33_scales_matrix() {
        let h = Mat3::new(4.0, 0.0, 2.0, 0.0, 4.0, 6.0, 0.0, 0.0, 2.0);
        let n = normalize_h33(&h);
        assert_eq!(n[(2, 2)], 1.0);
        assert_eq!(n[(0, 0)], 2.0);
        assert_eq!(n[(1, 2)], 3.0);

        let degenerate = Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0);
        assert_eq!(normalize_h33(&degenerate), degenerate);
    }
}
