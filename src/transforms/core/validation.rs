//! Validation helpers shared by all transforms.
//!
//! - **Construction checks**: [`validate_size`] rejects non-positive sizes.
//! - **Call checks**: [`validate_length`] and [`validate_square`] compare
//!   flat vectors and matrices against the shape a transform expects.
//!
//! All helpers return [`TransformError`] variants so higher layers report
//! shape problems uniformly.
use crate::transforms::errors::{TransformError, TransformResult};
use ndarray::Array2;

/// Validate a size declared at construction.
///
/// # Errors
/// Returns [`TransformError::InvalidDimension`] if `n == 0`.
pub fn validate_size(n: usize, reason: &'static str) -> TransformResult<()> {
    if n == 0 {
        return Err(TransformError::InvalidDimension { param: n, reason });
    }
    Ok(())
}

/// Validate the length of a flat vector.
///
/// # Errors
/// Returns [`TransformError::DimensionMismatch`] if `actual != expected`.
pub fn validate_length(actual: usize, expected: usize) -> TransformResult<()> {
    if actual != expected {
        return Err(TransformError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Validate that `m` is `n × n`.
///
/// # Errors
/// Returns [`TransformError::ShapeMismatch`] with both shapes otherwise.
pub fn validate_square(m: &Array2<f64>, n: usize) -> TransformResult<()> {
    if m.nrows() != n || m.ncols() != n {
        return Err(TransformError::ShapeMismatch {
            expected: vec![n, n],
            actual: m.shape().to_vec(),
        });
    }
    Ok(())
}
