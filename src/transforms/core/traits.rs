//! The capability interface shared by every transform.
//!
//! - [`Transform`]: trait implemented by each variant (unit vector,
//!   correlation Cholesky factor, scalar intervals, composites, custom).
//!
//! Convention: a transform maps a flat unconstrained vector `x` of length
//! [`Transform::dimension`] to a constrained [`Value`] `y`, and its
//! log-Jacobian is `ln |det ∂y/∂x|` taken over the free coordinates of `y`
//! (e.g. the first `n − 1` entries of a unit vector, the strictly upper
//! triangle of a correlation Cholesky factor).
use crate::transforms::{
    core::{
        logjac::{LogJac, LogJacFlag},
        validation::validate_length,
        value::Value,
    },
    errors::TransformResult,
};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use std::fmt::Debug;

/// Bijection between unconstrained ℝⁿ and a constrained value space.
///
/// Implementors are immutable configuration objects: they are built once,
/// validated at construction, and then evaluated many times. No state is
/// kept between calls, so a transform can be shared across threads.
///
/// Required:
/// - `dimension()`: length of the flat unconstrained vector.
/// - `transform_with(flag, x)`: evaluate on an `x` whose length has
///   already been checked, computing the log-Jacobian only when `flag`
///   asks for it.
/// - `validate_value(y)`: check that `y` has the variant and shape this
///   transform produces, recursively for composites.
/// - `write_inverse(out, y)`: write the preimage of an already-validated
///   `y` into `out`, whose length equals `dimension()`.
///
/// Provided (checked entry points):
/// - `transform`, `transform_and_logjac`, `inverse`, `inverse_into`.
pub trait Transform: Debug + Send + Sync {
    // Required methods
    fn dimension(&self) -> usize;

    /// Unchecked forward evaluation.
    ///
    /// # Panics
    /// - May panic (indexing) if `x.len() != self.dimension()`; callers go
    ///   through [`Transform::transform`] or a composite, which check the
    ///   length first. Debug builds assert it.
    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)>;

    fn validate_value(&self, y: &Value) -> TransformResult<()>;

    /// Unchecked inverse into `out`.
    ///
    /// Preconditions: `out.len() == self.dimension()` and
    /// `self.validate_value(y)` returned `Ok`. A `y` of the wrong kind is
    /// ignored and leaves `out` unwritten; a wrong `out` length may panic.
    fn write_inverse(&self, out: ArrayViewMut1<'_, f64>, y: &Value);

    // Provided methods

    /// Map `x` to the constrained space.
    ///
    /// # Errors
    /// - `TransformError::DimensionMismatch` if `x.len() != dimension()`;
    ///   raised before any output is produced.
    fn transform(&self, x: ArrayView1<'_, f64>) -> TransformResult<Value> {
        validate_length(x.len(), self.dimension())?;
        let (y, _) = self.transform_with(LogJacFlag::ValueOnly, x)?;
        Ok(y)
    }

    /// Map `x` to the constrained space and return `ln |det J|` alongside.
    ///
    /// # Errors
    /// - `TransformError::DimensionMismatch` if `x.len() != dimension()`.
    fn transform_and_logjac(&self, x: ArrayView1<'_, f64>) -> TransformResult<(Value, f64)> {
        validate_length(x.len(), self.dimension())?;
        let (y, logjac) = self.transform_with(LogJacFlag::ValueAndLogJac, x)?;
        Ok((y, logjac.into_result()?))
    }

    /// Write the preimage of `y` into the caller-provided buffer `out`.
    ///
    /// Both `out` and `y` are validated before anything is written, so a
    /// rejected call leaves `out` untouched.
    ///
    /// # Errors
    /// - `TransformError::DimensionMismatch` if `out.len() != dimension()`
    ///   or a nested length is wrong.
    /// - `TransformError::ShapeMismatch` / `ValueKindMismatch` /
    ///   `KeyNotFound` if `y` is not shaped like this transform's output.
    fn inverse_into(&self, out: ArrayViewMut1<'_, f64>, y: &Value) -> TransformResult<()> {
        validate_length(out.len(), self.dimension())?;
        self.validate_value(y)?;
        self.write_inverse(out, y);
        Ok(())
    }

    /// Allocate and return the preimage of `y`.
    fn inverse(&self, y: &Value) -> TransformResult<Array1<f64>> {
        let mut out = Array1::zeros(self.dimension());
        self.inverse_into(out.view_mut(), y)?;
        Ok(out)
    }

    /// Box this transform for use inside a composite.
    fn boxed(self) -> BoxedTransform
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// Owned, type-erased transform, as stored by composites.
pub type BoxedTransform = Box<dyn Transform>;
