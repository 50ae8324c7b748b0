//! UnitVector — ℝⁿ⁻¹ → unit sphere in ℝⁿ.
//!
//! Purpose
//! -------
//! Map an unconstrained vector of length `n − 1` to a vector `y ∈ ℝⁿ`
//! with `‖y‖₂ = 1` by chaining `n − 1` remainder steps against a budget
//! that starts at 1, then closing with `y[n−1] = √r`.
//!
//! Key behaviors
//! -------------
//! - `dimension() = n − 1`; `UnitVector::new(1)` has dimension 0 and
//!   always yields `[1.0]`.
//! - The log-Jacobian is the sum of the per-step increments; the closing
//!   coordinate is a deterministic function of the spent budget and adds
//!   no term of its own.
//! - The inverse replays the chain on `y[0..n−1]` and ignores `y[n−1]`,
//!   which is fixed by the norm constraint. Whether `‖y‖ ≈ 1` is a caller
//!   concern and is not checked.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 1`, fixed at construction.
//! - The closing coordinate is non-negative, so the image is the open
//!   upper hemisphere in the last coordinate plus its boundary limit.
use crate::transforms::{
    core::{LogJac, LogJacFlag, Transform, Value, validate_length, validate_size},
    errors::TransformResult,
    geometric::remainder::{l2_remainder_inverse, l2_remainder_transform},
};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Unit vectors in ℝⁿ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitVector {
    n: usize,
}

impl UnitVector {
    /// Construct a unit-vector transform for ℝⁿ.
    ///
    /// # Errors
    /// - [`TransformError::InvalidDimension`](crate::transforms::errors::TransformError)
    ///   if `n == 0`.
    pub fn new(n: usize) -> TransformResult<Self> {
        validate_size(n, "UnitVector requires n >= 1.")?;
        log::debug!("UnitVector(n = {n}) constructed with dimension {}", n - 1);
        Ok(UnitVector { n })
    }

    /// Length of the output vector.
    pub fn output_len(&self) -> usize {
        self.n
    }
}

impl Transform for UnitVector {
    fn dimension(&self) -> usize {
        self.n - 1
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        debug_assert_eq!(x.len(), self.dimension(), "unchecked UnitVector input");
        let mut y = Array1::zeros(self.n);
        let mut r = 1.0;
        let mut logjac = flag.zero();
        for (i, &xi) in x.iter().enumerate() {
            let (yi, r_next, lj) = l2_remainder_transform(flag, xi, r);
            y[i] = yi;
            r = r_next;
            logjac += lj;
        }
        y[self.n - 1] = r.sqrt();
        Ok((Value::Vector(y), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        validate_length(y.as_vector()?.len(), self.n)
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let Value::Vector(y) = y else { return };
        let mut r = 1.0;
        for (xi, &yi) in out.iter_mut().zip(y.iter()) {
            let (x, r_next) = l2_remainder_inverse(yi, r);
            *xi = x;
            r = r_next;
        }
    }
}
