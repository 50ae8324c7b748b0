//! diagnostics::finite_diff — numerical Jacobians and log-determinants.
//!
//! Purpose
//! -------
//! Approximate the Jacobian of a vector map ℝⁿ → ℝⁿ by finite differences
//! and reduce it to `ln |det J|`. Used to supply log-Jacobians for
//! user-defined transforms and to cross-check the closed-form
//! log-Jacobians of the built-in transforms.
//!
//! Key behaviors
//! -------------
//! - [`numerical_jacobian`] tries central differences first and falls back
//!   to forward differences when the central result has non-finite
//!   entries.
//! - [`log_abs_det`] factorizes the Jacobian with a partially pivoted LU
//!   decomposition and sums `ln |u_ii|` over the pivots.
//! - [`numerical_logjac`] chains the two.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned Jacobians are `m × n` with entry `(i, j) = ∂f_i/∂x_j` and
//!   contain only finite values.
//! - A zero-dimensional input has an empty Jacobian whose log-determinant
//!   is 0.
//!
//! Conventions
//! -----------
//! - Step sizes are those of the `finitediff` crate (√ε for forward,
//!   ∛ε-order for central differences).
//! - Errors are reported as [`TransformError`] so they compose with the
//!   rest of the transform API.
//!
//! Testing notes
//! -------------
//! - Unit tests use linear and elementwise maps with known Jacobians; the
//!   integration tests compare every closed-form log-Jacobian in the crate
//!   against [`numerical_logjac`].
use crate::transforms::{
    core::validate_square,
    errors::{TransformError, TransformResult},
};
use finitediff::FiniteDiff;
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// numerical_jacobian — finite-difference Jacobian of `f` at `x`.
///
/// Parameters
/// ----------
/// - `x`: `&Array1<f64>`
///   Evaluation point.
/// - `f`: `&F`
///   Vector map to differentiate.
///
/// Returns
/// -------
/// `TransformResult<Array2<f64>>`
///   Jacobian with rows indexed by outputs and columns by inputs.
///
/// Errors
/// ------
/// - `TransformError::NonFiniteJacobian`
///   Returned when both the central and the forward approximation
///   contain a NaN or infinite entry; reports the first such entry of
///   the forward approximation.
///
/// Notes
/// -----
/// - The central-difference failure is logged at `warn` level and
///   otherwise discarded; only the forward-difference result is surfaced.
pub fn numerical_jacobian<F: Fn(&Array1<f64>) -> Array1<f64>>(
    x: &Array1<f64>, f: &F,
) -> TransformResult<Array2<f64>> {
    if x.is_empty() {
        return Ok(Array2::zeros((f(x).len(), 0)));
    }
    let central = x.central_jacobian(f).reversed_axes();
    match validate_finite(&central) {
        Ok(()) => Ok(central),
        Err(err) => {
            log::warn!(
                "Central-difference Jacobian rejected ({err}); retrying with forward differences"
            );
            let forward = x.forward_jacobian(f).reversed_axes();
            validate_finite(&forward)?;
            Ok(forward)
        }
    }
}

/// log_abs_det — `ln |det J|` of a square matrix via LU factorization.
///
/// Errors
/// ------
/// - `TransformError::ShapeMismatch` if `jacobian` is not square.
/// - `TransformError::NonFiniteJacobian` if an entry is NaN or infinite.
/// - `TransformError::SingularJacobian` if a pivot is exactly zero.
pub fn log_abs_det(jacobian: &Array2<f64>) -> TransformResult<f64> {
    let n = jacobian.nrows();
    validate_square(jacobian, n)?;
    validate_finite(jacobian)?;
    if n == 0 {
        return Ok(0.0);
    }
    let matrix = DMatrix::from_fn(n, n, |i, j| jacobian[[i, j]]);
    let upper = matrix.lu().u();
    let mut total = 0.0;
    for &pivot in upper.diagonal().iter() {
        if pivot == 0.0 {
            return Err(TransformError::SingularJacobian);
        }
        total += pivot.abs().ln();
    }
    Ok(total)
}

/// Numerical `ln |det ∂f/∂x|` at `x`; 0 when `x` is empty.
pub fn numerical_logjac<F: Fn(&Array1<f64>) -> Array1<f64>>(
    x: &Array1<f64>, f: &F,
) -> TransformResult<f64> {
    if x.is_empty() {
        return Ok(0.0);
    }
    let jacobian = numerical_jacobian(x, f)?;
    log_abs_det(&jacobian)
}

// ---- Helper methods ----

fn validate_finite(jacobian: &Array2<f64>) -> TransformResult<()> {
    for ((row, col), &value) in jacobian.indexed_iter() {
        if !value.is_finite() {
            return Err(TransformError::NonFiniteJacobian { row, col, value });
        }
    }
    Ok(())
}
