//! Transformed values.
//!
//! A [`Value`] is what a transform produces from a flat unconstrained
//! vector and what its inverse consumes. The variant is fixed by the
//! transform: scalars give [`Value::Real`], unit vectors and custom
//! transforms give [`Value::Vector`], correlation Cholesky factors give
//! [`Value::Matrix`], and the composites nest further values inside
//! [`Value::Array`], [`Value::Tuple`], or [`Value::Named`].
//!
//! Named values keep their entries in declaration order.
use crate::transforms::errors::{TransformError, TransformResult};
use ndarray::{Array1, Array2, ArrayD};

/// Output of a transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single real.
    Real(f64),
    /// A dense vector.
    Vector(Array1<f64>),
    /// A dense matrix.
    Matrix(Array2<f64>),
    /// An n-dimensional array of values, all produced by the same transform.
    Array(ArrayD<Value>),
    /// Positional values from heterogeneous transforms.
    Tuple(Vec<Value>),
    /// Named values from heterogeneous transforms, in declaration order.
    Named(Vec<(String, Value)>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Real(_) => "real",
            Value::Vector(_) => "vector",
            Value::Matrix(_) => "matrix",
            Value::Array(_) => "array",
            Value::Tuple(_) => "tuple",
            Value::Named(_) => "named",
        }
    }

    fn mismatch(&self, expected: &'static str) -> TransformError {
        TransformError::ValueKindMismatch { expected, actual: self.kind() }
    }

    pub fn as_real(&self) -> TransformResult<f64> {
        match self {
            Value::Real(v) => Ok(*v),
            other => Err(other.mismatch("real")),
        }
    }

    pub fn as_vector(&self) -> TransformResult<&Array1<f64>> {
        match self {
            Value::Vector(v) => Ok(v),
            other => Err(other.mismatch("vector")),
        }
    }

    pub fn as_matrix(&self) -> TransformResult<&Array2<f64>> {
        match self {
            Value::Matrix(m) => Ok(m),
            other => Err(other.mismatch("matrix")),
        }
    }

    pub fn as_array(&self) -> TransformResult<&ArrayD<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_tuple(&self) -> TransformResult<&[Value]> {
        match self {
            Value::Tuple(t) => Ok(t),
            other => Err(other.mismatch("tuple")),
        }
    }

    /// Entries of a named value, in declaration order.
    pub fn as_named(&self) -> TransformResult<&[(String, Value)]> {
        match self {
            Value::Named(entries) => Ok(entries),
            other => Err(other.mismatch("named")),
        }
    }

    /// Look up an entry of a named value.
    ///
    /// # Errors
    /// - [`TransformError::ValueKindMismatch`] if `self` is not named.
    /// - [`TransformError::KeyNotFound`] if no entry carries `name`.
    pub fn get(&self, name: &str) -> TransformResult<&Value> {
        self.as_named()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
            .ok_or_else(|| TransformError::KeyNotFound { name: name.to_string() })
    }

    pub fn into_vector(self) -> TransformResult<Array1<f64>> {
        match self {
            Value::Vector(v) => Ok(v),
            other => Err(other.mismatch("vector")),
        }
    }

    pub fn into_matrix(self) -> TransformResult<Array2<f64>> {
        match self {
            Value::Matrix(m) => Ok(m),
            other => Err(other.mismatch("matrix")),
        }
    }
}
