//! Synthetic planar correspondence helpers.
//!
//! The functions here build simple 2D point grids and map them through a
//! known homography to produce noise-free correspondences.

use crate::{apply_homography, Mat3, Pt2, Real};
use anyhow::Result;
use std::ops::RangeInclusive;

/// Generate a planar grid of 2D points with `nx * ny` points.
///
/// Points are ordered deterministically in row-major order (Y major):
/// `(x = 0..nx-1, y = 0..ny-1)`.
pub fn grid_points_2d(nx: usize, ny: usize, spacing: Real) -> Vec<Pt2> {
    if nx == 0 || ny == 0 {
        return Vec::new();
    }
    let last = |n: usize| i32::try_from(n - 1).unwrap_or(i32::MAX);
    grid_points_range_2d(0..=last(nx), 0..=last(ny), spacing)
}

/// Generate a planar grid of 2D points over integer index ranges.
///
/// The output order is deterministic in row-major order (Y major). Empty
/// ranges produce an empty grid.
pub fn grid_points_range_2d(
    x: RangeInclusive<i32>,
    y: RangeInclusive<i32>,
    spacing: Real,
) -> Vec<Pt2> {
    let nx = (*x.end() as i64 - *x.start() as i64 + 1).max(0) as usize;
    let ny = (*y.end() as i64 - *y.start() as i64 + 1).max(0) as usize;
    let mut points = Vec::with_capacity(nx.saturating_mul(ny));

    for j in y {
        for i in x.clone() {
            points.push(Pt2::new(i as Real * spacing, j as Real * spacing));
        }
    }
    points
}

/// Map every point through `h`, requiring all of them to stay finite.
pub fn transfer_points(h: &Mat3, points: &[Pt2]) -> Result<Vec<Pt2>> {
    let mut out = Vec::with_capacity(points.len());
    for (idx, p) in points.iter().enumerate() {
        let Some(q) = apply_homography(h, p) else {
            anyhow::bail!("point {idx} ({:.3}, {:.3}) maps to infinity", p.x, p.y);
        };
        out.push(q);
    }
    Ok(out)
}
