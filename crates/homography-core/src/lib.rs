//! Core math primitives for planar homography estimation.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Pt2`, `Mat3`, ...),
//! - homogeneous-coordinate helpers and point transfer through a homography,
//! - deterministic synthetic data helpers used by tests.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Deterministic synthetic correspondence generation.
pub mod synthetic;

pub use math::*;
