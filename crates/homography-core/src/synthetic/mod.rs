//! Deterministic synthetic data generation helpers.
//!
//! Small, reusable building blocks for constructing synthetic homography
//! problems used in tests:
//! - planar point grids,
//! - transfer of points through a known homography,
//! - deterministic pseudo-random noise.
//!
//! Everything here is deterministic (explicit seeds; stable point ordering).
//!
//! # Example
//!
//! ```
//! use homography_core::{synthetic::{noise::UniformNoise, planar}, Mat3};
//!
//! let h = Mat3::new(1.2, 0.1, 3.0, -0.05, 0.9, 1.0, 1e-3, 2e-3, 1.0);
//! let src = planar::grid_points_2d(5, 4, 10.0);
//! let dst = planar::transfer_points(&h, &src).unwrap();
//! let noisy = UniformNoise { seed: 7, max_abs: 0.25 }.apply_all(&dst);
//! assert_eq!(noisy.len(), 20);
//! ```

pub mod noise;
pub mod planar;
