//! Deterministic noise helpers for synthetic datasets.
//!
//! The functions here avoid `thread_rng` and do not depend on the internal
//! algorithm of any RNG crate. This keeps synthetic datasets stable across
//! versions and platforms.

use crate::{Pt2, Real, Vec2};

/// Deterministic uniform per-axis noise in `[-max_abs, +max_abs]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UniformNoise {
    /// Base seed controlling the pseudo-random sequence.
    pub seed: u64,
    /// Maximum absolute per-axis noise, in point units.
    pub max_abs: Real,
}

impl UniformNoise {
    /// Sample a deterministic 2D noise vector for a given point index.
    #[inline]
    pub fn sample(&self, point_idx: usize) -> Vec2 {
        let max_abs = self.max_abs.abs();
        if max_abs == 0.0 {
            return Vec2::zeros();
        }

        let key = self.seed ^ (point_idx as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        let u = u64_to_unit_f64(splitmix64(key));
        let v = u64_to_unit_f64(splitmix64(key ^ 0x94D0_49BB_1331_11EB));

        // Map [0, 1) -> [-max_abs, +max_abs].
        Vec2::new((u - 0.5) * 2.0 * max_abs, (v - 0.5) * 2.0 * max_abs)
    }

    /// Perturb a single point.
    #[inline]
    pub fn apply(&self, point_idx: usize, p: &Pt2) -> Pt2 {
        p + self.sample(point_idx)
    }

    /// Perturb every point, keyed by its index.
    pub fn apply_all(&self, points: &[Pt2]) -> Vec<Pt2> {
        points
            .iter()
            .enumerate()
            .map(|(idx, p)| self.apply(idx, p))
            .collect()
    }
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn u64_to_unit_f64(x: u64) -> Real {
    // Top 53 bits -> [0, 1).
    let mantissa = x >> 11;
    (mantissa as Real) * (1.0 / ((1u64 << 53) as Real))
}
