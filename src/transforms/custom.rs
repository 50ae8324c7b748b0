//! CustomTransform — user-supplied bijection on ℝⁿ.
//!
//! Wraps a forward map and its inverse as closures. The log-Jacobian is
//! not known in closed form and is obtained from a finite-difference
//! Jacobian (see [`numerical_logjac`]), so it is only as accurate as that
//! approximation.
//!
//! The closures must map length-`n` vectors to length-`n` vectors; a
//! result of the wrong length from either closure is reported as
//! `DimensionMismatch`, also when the transform sits inside a composite.
use crate::{
    diagnostics::numerical_logjac,
    transforms::{
        core::{LogJac, LogJacFlag, Transform, Value, validate_length, validate_size},
        errors::TransformResult,
    },
};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use std::{fmt, sync::Arc};

type VectorMap = Arc<dyn Fn(&Array1<f64>) -> Array1<f64> + Send + Sync>;

/// Bijection ℝⁿ → ℝⁿ defined by a pair of closures.
#[derive(Clone)]
pub struct CustomTransform {
    dimension: usize,
    forward: VectorMap,
    inverse: VectorMap,
}

impl CustomTransform {
    /// # Errors
    /// - [`TransformError::InvalidDimension`](crate::transforms::errors::TransformError)
    ///   if `dimension == 0`.
    pub fn new<F, G>(dimension: usize, forward: F, inverse: G) -> TransformResult<Self>
    where
        F: Fn(&Array1<f64>) -> Array1<f64> + Send + Sync + 'static,
        G: Fn(&Array1<f64>) -> Array1<f64> + Send + Sync + 'static,
    {
        validate_size(dimension, "CustomTransform requires a positive dimension.")?;
        log::debug!("CustomTransform constructed with dimension {dimension}");
        Ok(CustomTransform { dimension, forward: Arc::new(forward), inverse: Arc::new(inverse) })
    }

    fn apply_forward(&self, x: &Array1<f64>) -> TransformResult<Array1<f64>> {
        let y = (self.forward)(x);
        validate_length(y.len(), self.dimension)?;
        Ok(y)
    }
}

impl fmt::Debug for CustomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomTransform")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl Transform for CustomTransform {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        let x = x.to_owned();
        let y = self.apply_forward(&x)?;
        let logjac = match flag {
            LogJacFlag::ValueOnly => LogJac::NotComputed,
            LogJacFlag::ValueAndLogJac => {
                LogJac::Value(numerical_logjac(&x, &|v: &Array1<f64>| (self.forward)(v))?)
            }
        };
        Ok((Value::Vector(y), logjac))
    }

    /// Checks the vector length and runs the inverse closure once to check
    /// its output length, so a nested custom slot fails validation before
    /// any sibling slot is written.
    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        let y = y.as_vector()?;
        validate_length(y.len(), self.dimension)?;
        validate_length((self.inverse)(y).len(), self.dimension)
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let Value::Vector(y) = y else { return };
        out.assign(&(self.inverse)(y));
    }
}
