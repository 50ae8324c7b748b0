//! rust_bijectors — constrained-space transforms with log-Jacobians and Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the geometric transforms to Python via the `_rust_bijectors` extension
//! module. The crate maps flat unconstrained real vectors to structured
//! constrained values (unit vectors, Cholesky factors of correlation matrices,
//! bounded scalars, and arrays / tuples / records of these) together with the
//! log absolute Jacobian determinant needed for change-of-variables densities.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`transforms`, `diagnostics`,
//!   `numerical_stability`) as the public crate surface.
//! - Define `#[pyclass]` wrappers for [`UnitVector`](transforms::UnitVector)
//!   and [`CorrCholeskyFactor`](transforms::CorrCholeskyFactor) and the
//!   `#[pymodule]` initializer for the `_rust_bijectors` Python extension.
//! - Register the `transforms` Python submodule under `rust_bijectors` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Transforms are immutable after construction, so the Python wrappers hold
//!   them by value and need no interior mutability.
//!
//! Conventions
//! -----------
//! - Python vectors are returned as `list[float]`, matrices as row-major
//!   `list[list[float]]`.
//! - Errors from core Rust code are propagated as [`transforms::TransformError`]
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - The library logs through the `log` facade (construction at `debug`,
//!   numerical fallbacks at `warn`); binaries and tests choose the backend.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`transforms`] (or
//!   `transforms::prelude`) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by integration tests under `tests/` that compare closed-form
//!   log-Jacobians with finite-difference ones.

pub mod diagnostics;
pub mod numerical_stability;
pub mod transforms;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    transforms::{CorrCholeskyFactor, Transform, UnitVector, Value},
    utils::{extract_vector, matrix_to_rows, rows_to_matrix},
};

/// PyUnitVector — Python-facing wrapper for [`UnitVector`].
///
/// Constructed from Python as `UnitVector(n)`; maps `n − 1` reals to a point
/// on the unit sphere in ℝⁿ.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "UnitVector", module = "rust_bijectors.transforms")]
pub struct PyUnitVector {
    inner: UnitVector,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyUnitVector {
    #[new]
    #[pyo3(text_signature = "(n, /)")]
    pub fn new(n: usize) -> PyResult<Self> {
        Ok(PyUnitVector { inner: UnitVector::new(n)? })
    }

    /// Number of unconstrained inputs, `n − 1`.
    #[getter]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    #[pyo3(text_signature = "(self, x, /)")]
    pub fn transform<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
        let x = extract_vector(py, x)?;
        let y = self.inner.transform(x.view())?.into_vector()?;
        Ok(y.to_vec())
    }

    #[pyo3(text_signature = "(self, x, /)")]
    pub fn transform_and_logjac<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>,
    ) -> PyResult<(Vec<f64>, f64)> {
        let x = extract_vector(py, x)?;
        let (y, logjac) = self.inner.transform_and_logjac(x.view())?;
        Ok((y.into_vector()?.to_vec(), logjac))
    }

    #[pyo3(text_signature = "(self, y, /)")]
    pub fn inverse<'py>(&self, py: Python<'py>, y: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
        let y = extract_vector(py, y)?;
        let x = self.inner.inverse(&Value::Vector(y))?;
        Ok(x.to_vec())
    }
}

/// PyCorrCholeskyFactor — Python-facing wrapper for [`CorrCholeskyFactor`].
///
/// Constructed from Python as `CorrCholeskyFactor(n)`; maps `n(n − 1)/2`
/// reals to an upper-triangular `n × n` factor `U` with `UᵀU` a correlation
/// matrix.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "CorrCholeskyFactor", module = "rust_bijectors.transforms")]
pub struct PyCorrCholeskyFactor {
    inner: CorrCholeskyFactor,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyCorrCholeskyFactor {
    #[new]
    #[pyo3(text_signature = "(n, /)")]
    pub fn new(n: usize) -> PyResult<Self> {
        Ok(PyCorrCholeskyFactor { inner: CorrCholeskyFactor::new(n)? })
    }

    /// Number of unconstrained inputs, `n(n − 1)/2`.
    #[getter]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Side length `n` of the output matrix.
    #[getter]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[pyo3(text_signature = "(self, x, /)")]
    pub fn transform<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>,
    ) -> PyResult<Vec<Vec<f64>>> {
        let x = extract_vector(py, x)?;
        let u = self.inner.transform(x.view())?.into_matrix()?;
        Ok(matrix_to_rows(&u))
    }

    #[pyo3(text_signature = "(self, x, /)")]
    pub fn transform_and_logjac<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>,
    ) -> PyResult<(Vec<Vec<f64>>, f64)> {
        let x = extract_vector(py, x)?;
        let (u, logjac) = self.inner.transform_and_logjac(x.view())?;
        Ok((matrix_to_rows(&u.into_matrix()?), logjac))
    }

    #[pyo3(text_signature = "(self, u, /)")]
    pub fn inverse(&self, u: Vec<Vec<f64>>) -> PyResult<Vec<f64>> {
        let u = rows_to_matrix(u)?;
        let x = self.inner.inverse(&Value::Matrix(u))?;
        Ok(x.to_vec())
    }
}

/// _rust_bijectors — PyO3 module initializer for the Python extension.
///
/// Creates the `transforms` submodule, attaches it to `_rust_bijectors`, and
/// registers it in `sys.modules` as `rust_bijectors.transforms`.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_bijectors<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let transforms_mod = PyModule::new(_py, "transforms")?;
    transforms_submodule(_py, m, &transforms_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_bijectors.transforms", transforms_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn transforms_submodule<'py>(
    _py: Python, rust_bijectors: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyUnitVector>()?;
    m.add_class::<PyCorrCholeskyFactor>()?;
    rust_bijectors.add_submodule(m)?;
    Ok(())
}
