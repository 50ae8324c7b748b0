//! Python conversion helpers shared by the PyO3 wrappers in `lib.rs`.
//!
//! Inputs arrive as numpy arrays, pandas Series, or plain Python sequences
//! and are copied into owned `ndarray` containers; outputs leave as nested
//! `Vec`s so Python receives lists.
#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Borrow or copy a 1-D float64 input as a contiguous read-only array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a 1-D float64 input into an owned vector.
#[cfg(feature = "python-bindings")]
pub fn extract_vector<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("expected a contiguous 1-D float64 array"))?;
    Ok(Array1::from(slice.to_vec()))
}

/// Build a matrix from a list of equally long rows.
#[cfg(feature = "python-bindings")]
pub fn rows_to_matrix(rows: Vec<Vec<f64>>) -> PyResult<Array2<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return Err(PyValueError::new_err("matrix rows must all have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|err| PyValueError::new_err(format!("invalid matrix: {err}")))
}

/// Convert `Array2<f64>` into row-major nested lists.
#[cfg(feature = "python-bindings")]
pub fn matrix_to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|row| row.to_vec()).collect()
}
