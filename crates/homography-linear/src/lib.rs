//! Linear (closed-form) homography estimation.
//!
//! The main entry point is [`fit_homography`]: a weighted, normalized Direct
//! Linear Transform that fits `x' ~ H x` to 2D correspondences in either the
//! 9-parameter unit-norm form or the 8-parameter `h33 = 1` form
//! (see [`DofMode`]).
//!
//! ```
//! use homography_core::{normalize_h33, Pt2};
//! use homography_linear::{fit_homography, DofMode};
//!
//! let src = [
//!     Pt2::new(0.0, 0.0),
//!     Pt2::new(1.0, 0.0),
//!     Pt2::new(1.0, 1.0),
//!     Pt2::new(0.0, 1.0),
//! ];
//! let dst: Vec<Pt2> = src.iter().map(|p| Pt2::new(2.0 * p.x, 2.0 * p.y)).collect();
//!
//! let h = normalize_h33(&fit_homography(&src, &dst, None, DofMode::UnitNorm).unwrap());
//! assert!((h[(0, 0)] - 2.0).abs() < 1e-6);
//! assert!((h[(1, 1)] - 2.0).abs() < 1e-6);
//! ```

mod error;
mod homography;
pub mod math;
mod residuals;

pub use error::*;
pub use homography::*;
pub use residuals::*;
