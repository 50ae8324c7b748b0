//! Errors for transform construction, evaluation, and inversion.
//!
//! This module defines [`TransformError`], the single error type shared by
//! every transform in the crate, and the [`TransformResult`] alias.
//!
//! ## Conventions
//! - Construction-time checks (sizes, bounds, names) fail eagerly.
//! - Per-call shape checks run before any computation, so a rejected call
//!   leaves caller-provided buffers untouched.
//! - These are contract violations (bad shape, bad configuration), not
//!   transient failures; nothing is retried.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Crate-wide result alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Unified error type for transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Construction ----
    /// A declared size is non-positive.
    InvalidDimension { param: usize, reason: &'static str },

    /// Interval bounds must be finite with lower < upper.
    InvalidInterval { lower: f64, upper: f64 },

    /// Named composites cannot declare the same name twice.
    DuplicateName { name: String },

    // ---- Shapes ----
    /// Flat input or output buffer has the wrong length.
    DimensionMismatch { expected: usize, actual: usize },

    /// Matrix or array value has the wrong shape.
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    /// Value variant does not match what the transform produces.
    ValueKindMismatch { expected: &'static str, actual: &'static str },

    /// Name lookup in a named value or named composite failed.
    KeyNotFound { name: String },

    // ---- Log-Jacobian ----
    /// A log-Jacobian was read from an evaluation that skipped it.
    LogJacNotComputed,

    /// Finite-difference Jacobian has a non-finite entry.
    NonFiniteJacobian { row: usize, col: usize, value: f64 },

    /// Finite-difference Jacobian is numerically singular.
    SingularJacobian,
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Construction ----
            TransformError::InvalidDimension { param, reason } => {
                write!(f, "Invalid dimension {param}: {reason}")
            }
            TransformError::InvalidInterval { lower, upper } => {
                write!(f, "Interval bounds must be finite with lower < upper; got ({lower}, {upper})")
            }
            TransformError::DuplicateName { name } => {
                write!(f, "Name '{name}' is declared more than once.")
            }
            // ---- Shapes ----
            TransformError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected length {expected}, got {actual}")
            }
            TransformError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected:?}, got {actual:?}")
            }
            TransformError::ValueKindMismatch { expected, actual } => {
                write!(f, "Value kind mismatch: expected {expected}, got {actual}")
            }
            TransformError::KeyNotFound { name } => {
                write!(f, "Name '{name}' not found.")
            }
            // ---- Log-Jacobian ----
            TransformError::LogJacNotComputed => {
                write!(f, "Log-Jacobian was requested from a value-only evaluation.")
            }
            TransformError::NonFiniteJacobian { row, col, value } => {
                write!(f, "Jacobian entry ({row}, {col}) is non-finite: {value}")
            }
            TransformError::SingularJacobian => {
                write!(f, "Jacobian is numerically singular.")
            }
        }
    }
}

/// Convert a [`TransformError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
