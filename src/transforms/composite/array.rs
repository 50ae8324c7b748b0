//! ArrayTransform — the same transform repeated over an n-dimensional grid.
//!
//! Purpose
//! -------
//! Apply one element transform independently to every cell of an array
//! with fixed `dims`. The flat input is split into `∏ dims` consecutive
//! slices of the element's dimension; cell `k` in row-major (logical
//! `ndarray`) order consumes slice `k`.
//!
//! Key behaviors
//! -------------
//! - `dimension() = element.dimension() × ∏ dims`.
//! - Output is `Value::Array` with shape `dims`; the log-Jacobian is the
//!   sum of the per-cell log-Jacobians.
//! - Inverse concatenates per-cell preimages in the same row-major order.
use crate::transforms::{
    core::{BoxedTransform, LogJac, LogJacFlag, Segment, Transform, Value, validate_size},
    errors::{TransformError, TransformResult},
};
use ndarray::{ArrayD, ArrayView1, ArrayViewMut1, IxDyn};

/// An n-dimensional array of identically transformed cells.
#[derive(Debug)]
pub struct ArrayTransform {
    element: BoxedTransform,
    dims: Vec<usize>,
    cells: usize,
}

impl ArrayTransform {
    /// Repeat `element` over an array of shape `dims`.
    ///
    /// # Errors
    /// - [`TransformError::InvalidDimension`] if `dims` is empty or any
    ///   extent is zero.
    pub fn new<T: Transform + 'static>(element: T, dims: &[usize]) -> TransformResult<Self> {
        Self::from_boxed(element.boxed(), dims)
    }

    /// Same as [`ArrayTransform::new`] for an already boxed element.
    pub fn from_boxed(element: BoxedTransform, dims: &[usize]) -> TransformResult<Self> {
        validate_size(dims.len(), "ArrayTransform requires at least one axis.")?;
        for &extent in dims {
            validate_size(extent, "ArrayTransform extents must be positive.")?;
        }
        let cells: usize = dims.iter().product();
        log::debug!(
            "ArrayTransform(dims = {dims:?}) constructed with dimension {}",
            cells * element.dimension()
        );
        Ok(ArrayTransform { element, dims: dims.to_vec(), cells })
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn element(&self) -> &dyn Transform {
        self.element.as_ref()
    }
}

impl Transform for ArrayTransform {
    fn dimension(&self) -> usize {
        self.cells * self.element.dimension()
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        let step = self.element.dimension();
        let mut values = Vec::with_capacity(self.cells);
        let mut logjac = flag.zero();
        let mut segment = Segment::origin();
        for _ in 0..self.cells {
            segment = segment.next(step);
            let (value, lj) = self.element.transform_with(flag, segment.view(x))?;
            values.push(value);
            logjac += lj;
        }
        let array = ArrayD::from_shape_vec(IxDyn(&self.dims), values).map_err(|_| {
            TransformError::ShapeMismatch { expected: self.dims.clone(), actual: vec![self.cells] }
        })?;
        Ok((Value::Array(array), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        let array = y.as_array()?;
        if array.shape() != self.dims.as_slice() {
            return Err(TransformError::ShapeMismatch {
                expected: self.dims.clone(),
                actual: array.shape().to_vec(),
            });
        }
        array.iter().try_for_each(|cell| self.element.validate_value(cell))
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let Value::Array(array) = y else { return };
        let step = self.element.dimension();
        let mut segment = Segment::origin();
        for cell in array.iter() {
            segment = segment.next(step);
            self.element.write_inverse(segment.view_mut(&mut out), cell);
        }
    }
}
