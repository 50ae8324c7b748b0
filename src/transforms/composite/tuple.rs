//! TupleTransform — heterogeneous transforms side by side.
//!
//! The flat input is partitioned into one contiguous slice per component,
//! sized by each component's `dimension()`, in declared order. Outputs are
//! collected positionally into `Value::Tuple`; log-Jacobians add up.
use crate::transforms::{
    core::{BoxedTransform, LogJac, LogJacFlag, Segment, Transform, Value, validate_length},
    errors::TransformResult,
};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Positional composite of independent transforms.
#[derive(Debug)]
pub struct TupleTransform {
    components: Vec<BoxedTransform>,
    dimension: usize,
}

impl TupleTransform {
    pub fn new(components: Vec<BoxedTransform>) -> Self {
        let dimension = components.iter().map(|t| t.dimension()).sum();
        log::debug!(
            "TupleTransform with {} components constructed with dimension {dimension}",
            components.len()
        );
        TupleTransform { components, dimension }
    }

    pub fn components(&self) -> &[BoxedTransform] {
        &self.components
    }
}

impl Transform for TupleTransform {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        let mut values = Vec::with_capacity(self.components.len());
        let mut logjac = flag.zero();
        let mut segment = Segment::origin();
        for component in self.components.iter() {
            segment = segment.next(component.dimension());
            let (value, lj) = component.transform_with(flag, segment.view(x))?;
            values.push(value);
            logjac += lj;
        }
        Ok((Value::Tuple(values), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        let items = y.as_tuple()?;
        validate_length(items.len(), self.components.len())?;
        self.components.iter().zip(items.iter()).try_for_each(|(t, item)| t.validate_value(item))
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let Value::Tuple(items) = y else { return };
        let mut segment = Segment::origin();
        for (component, item) in self.components.iter().zip(items.iter()) {
            segment = segment.next(component.dimension());
            component.write_inverse(segment.view_mut(&mut out), item);
        }
    }
}
