use super::DofMode;
use homography_core::{Pt2, Real};
use nalgebra::{DMatrix, DVector};

/// Weighted DLT system built from normalized correspondences.
///
/// Each correspondence `(x, y) -> (x', y')` contributes two rows
///
/// ```text
/// [x, y, 1, 0, 0, 0, -x'x, -x'y, -x']
/// [0, 0, 0, x, y, 1, -y'x, -y'y, -y']
/// ```
///
/// and its weight on both matching diagonal entries of `W`. The `h33 = 1`
/// form reuses the same rows: the first eight columns are the coefficients
/// and the negated last column is the right-hand side `[x', y']`.
#[derive(Debug, Clone)]
pub struct WeightedSystem {
    /// `2N x 9` design matrix `A`.
    pub design: DMatrix<Real>,
    /// Diagonal of the `2N x 2N` weight matrix `W`.
    pub row_weights: DVector<Real>,
}

impl WeightedSystem {
    /// Assemble the system. `src`, `dst` and `weights` must have equal length.
    pub fn build(src: &[Pt2], dst: &[Pt2], weights: &[Real]) -> Self {
        debug_assert_eq!(src.len(), dst.len());
        debug_assert_eq!(src.len(), weights.len());

        let cols = DofMode::UnitNorm.num_params();
        let design = DMatrix::from_fn(2 * src.len(), cols, |r, c| {
            let (s, d) = (&src[r / 2], &dst[r / 2]);
            // Even rows constrain x', odd rows y'.
            let (target, offset) = if r % 2 == 0 { (d.x, 0) } else { (d.y, 3) };
            match c {
                6 => -target * s.x,
                7 => -target * s.y,
                8 => -target,
                c if c == offset => s.x,
                c if c == offset + 1 => s.y,
                c if c == offset + 2 => 1.0,
                _ => 0.0,
            }
        });
        let row_weights = DVector::from_fn(2 * weights.len(), |r, _| weights[r / 2]);

        Self {
            design,
            row_weights,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.design.nrows()
    }

    /// `W A` computed by row scaling.
    fn weighted(&self, m: &DMatrix<Real>) -> DMatrix<Real> {
        let mut out = m.clone();
        for (mut row, w) in out.row_iter_mut().zip(self.row_weights.iter()) {
            row *= *w;
        }
        out
    }

    /// Normal-equations matrix `Aᵀ W A` of the 9-parameter system.
    pub fn normal_matrix(&self) -> DMatrix<Real> {
        self.design.tr_mul(&self.weighted(&self.design))
    }

    /// Normal equations `(Aᵀ W A, Aᵀ W b)` of the 8-parameter system.
    pub fn fixed_scale_normal_equations(&self) -> (DMatrix<Real>, DVector<Real>) {
        // `h33` is the trailing unknown; fixing it to 1 moves its column to the rhs.
        let k = DofMode::FixedScale.num_params();
        let a = self.design.columns(0, k).into_owned();
        let b: DVector<Real> = -self.design.column(k);
        let wa = self.weighted(&a);
        (a.tr_mul(&wa), wa.tr_mul(&b))
    }
}
