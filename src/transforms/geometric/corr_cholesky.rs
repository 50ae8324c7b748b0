//! CorrCholeskyFactor — ℝⁿ⁽ⁿ⁻¹⁾ᐟ² → upper Cholesky factors of n×n
//! correlation matrices.
//!
//! Purpose
//! -------
//! Build an upper-triangular `U` such that `U'U` is a correlation matrix
//! (symmetric, positive semi-definite, unit diagonal). Each column of `U`
//! is a unit vector: column `j` (0-based) consumes `j` unconstrained
//! scalars through the remainder chain, starting from a fresh budget
//! `r = 1`, and closes with `U[j, j] = √r`.
//!
//! Key behaviors
//! -------------
//! - `dimension() = n(n − 1)/2`, the size of the strictly upper triangle.
//! - Inputs are consumed column by column and, within a column, row by
//!   row; the inverse replays the same order. Column 0 is always `[1]`.
//! - The log-Jacobian is the sum of every per-element increment. It is
//!   taken with respect to the strictly upper triangle of `U`, read in
//!   the same column-major order.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 1`, fixed at construction.
//! - Output entries below the diagonal are exactly zero.
//! - `inverse` checks only that `U` is n×n; the strict lower triangle and
//!   the diagonal are not read.
use crate::transforms::{
    core::{LogJac, LogJacFlag, Transform, Value, validate_size, validate_square},
    errors::TransformResult,
    geometric::remainder::{l2_remainder_inverse, l2_remainder_transform},
};
use ndarray::{Array2, ArrayView1, ArrayViewMut1};

/// Upper Cholesky factors of n×n correlation matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrCholeskyFactor {
    n: usize,
}

impl CorrCholeskyFactor {
    /// Construct a correlation Cholesky factor transform for n×n matrices.
    ///
    /// # Errors
    /// - [`TransformError::InvalidDimension`](crate::transforms::errors::TransformError)
    ///   if `n == 0`.
    pub fn new(n: usize) -> TransformResult<Self> {
        validate_size(n, "CorrCholeskyFactor requires n >= 1.")?;
        log::debug!(
            "CorrCholeskyFactor(n = {n}) constructed with dimension {}",
            n * (n - 1) / 2
        );
        Ok(CorrCholeskyFactor { n })
    }

    /// Side length of the output matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The correlation matrix `U'U` implied by an upper Cholesky factor.
    pub fn correlation(u: &Array2<f64>) -> Array2<f64> {
        u.t().dot(u)
    }
}

impl Transform for CorrCholeskyFactor {
    fn dimension(&self) -> usize {
        self.n * (self.n - 1) / 2
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        debug_assert_eq!(x.len(), self.dimension(), "unchecked CorrCholeskyFactor input");
        let n = self.n;
        let mut u = Array2::zeros((n, n));
        let mut logjac = flag.zero();
        let mut idx = 0;
        for col in 0..n {
            let mut r = 1.0;
            for row in 0..col {
                let (y, r_next, lj) = l2_remainder_transform(flag, x[idx], r);
                u[[row, col]] = y;
                r = r_next;
                logjac += lj;
                idx += 1;
            }
            u[[col, col]] = r.sqrt();
        }
        Ok((Value::Matrix(u), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        validate_square(y.as_matrix()?, self.n)
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let Value::Matrix(u) = y else { return };
        let mut idx = 0;
        for col in 0..self.n {
            let mut r = 1.0;
            for row in 0..col {
                let (x, r_next) = l2_remainder_inverse(u[[row, col]], r);
                out[idx] = x;
                r = r_next;
                idx += 1;
            }
        }
    }
}
