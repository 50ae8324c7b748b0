//! Scalar transforms onto intervals.
//!
//! One unconstrained real maps to one constrained real:
//!
//! | variant              | image     | `y(x)`                  | log-derivative               |
//! |----------------------|-----------|-------------------------|------------------------------|
//! | `Identity`           | ℝ         | `x`                     | `0`                          |
//! | `Positive { shift }` | (shift,∞) | `shift + eˣ`            | `x`                          |
//! | `Negative { shift }` | (−∞,shift)| `shift − eˣ`            | `x`                          |
//! | `Interval { a, b }`  | (a, b)    | `a + (b − a)·σ(x)`      | `ln(b − a) + ln σ'(x)`       |
//!
//! Inverses do not check that `y` lies in the image; values outside it
//! give non-finite results.
use crate::{
    numerical_stability::{logistic_logjac, safe_logistic, safe_logit},
    transforms::{
        core::{LogJac, LogJacFlag, Transform, Value},
        errors::{TransformError, TransformResult},
    },
};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Transform of one real onto ℝ, a half-line, or a bounded interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarTransform {
    Identity,
    Positive { shift: f64 },
    Negative { shift: f64 },
    Interval { lower: f64, upper: f64 },
}

impl ScalarTransform {
    /// ℝ → ℝ.
    pub fn identity() -> Self {
        ScalarTransform::Identity
    }

    /// ℝ → (shift, ∞).
    pub fn positive(shift: f64) -> Self {
        ScalarTransform::Positive { shift }
    }

    /// ℝ → (−∞, shift).
    pub fn negative(shift: f64) -> Self {
        ScalarTransform::Negative { shift }
    }

    /// ℝ → (lower, upper).
    ///
    /// # Errors
    /// - [`TransformError::InvalidInterval`] unless both bounds are finite
    ///   and `lower < upper`.
    pub fn interval(lower: f64, upper: f64) -> TransformResult<Self> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(TransformError::InvalidInterval { lower, upper });
        }
        Ok(ScalarTransform::Interval { lower, upper })
    }

    /// Map a single real and return its log-derivative when requested.
    pub fn transform_scalar(&self, flag: LogJacFlag, x: f64) -> (f64, LogJac) {
        match *self {
            ScalarTransform::Identity => (x, flag.zero()),
            ScalarTransform::Positive { shift } => (shift + x.exp(), flag.compute(|| x)),
            ScalarTransform::Negative { shift } => (shift - x.exp(), flag.compute(|| x)),
            ScalarTransform::Interval { lower, upper } => {
                let width = upper - lower;
                let y = lower + width * safe_logistic(x);
                (y, flag.compute(|| width.ln() + logistic_logjac(x)))
            }
        }
    }

    /// Preimage of a single constrained real.
    pub fn inverse_scalar(&self, y: f64) -> f64 {
        match *self {
            ScalarTransform::Identity => y,
            ScalarTransform::Positive { shift } => (y - shift).ln(),
            ScalarTransform::Negative { shift } => (shift - y).ln(),
            ScalarTransform::Interval { lower, upper } => {
                safe_logit((y - lower) / (upper - lower))
            }
        }
    }
}

impl Transform for ScalarTransform {
    fn dimension(&self) -> usize {
        1
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        debug_assert_eq!(x.len(), 1, "ScalarTransform expects a length-1 slice");
        let (y, logjac) = self.transform_scalar(flag, x[0]);
        Ok((Value::Real(y), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        y.as_real().map(|_| ())
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        if let Value::Real(v) = y {
            out[0] = self.inverse_scalar(*v);
        }
    }
}
