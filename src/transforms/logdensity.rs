//! Log-density helpers on the unconstrained side.
//!
//! - [`transform_logdensity`]: pull a log-density on the constrained space
//!   back to ℝⁿ, `f(t(x)) + ln |det J_t(x)|`.
//! - [`random_reals`]: standard-normal draws of the right length, for
//!   starting points and randomized tests.
use crate::transforms::{
    core::{Transform, Value},
    errors::TransformResult,
};
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use statrs::distribution::Normal;

/// Evaluate the log-density `f` at `t(x)` and add the log-Jacobian.
///
/// # Errors
/// - `TransformError::DimensionMismatch` if `x.len() != t.dimension()`.
pub fn transform_logdensity<T, F>(t: &T, f: F, x: ArrayView1<'_, f64>) -> TransformResult<f64>
where
    T: Transform + ?Sized,
    F: Fn(&Value) -> f64,
{
    let (y, logjac) = t.transform_and_logjac(x)?;
    Ok(f(&y) + logjac)
}

/// Draw `dimension` independent standard-normal reals.
pub fn random_reals<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Array1<f64> {
    let normal = Normal::new(0.0, 1.0).expect("Standard normal parameters are valid");
    Array1::from_iter((0..dimension).map(|_| rng.sample(normal)))
}
