//! NamedTupleTransform — heterogeneous transforms addressed by name.
//!
//! Purpose
//! -------
//! Same flat-input partitioning as [`TupleTransform`](super::TupleTransform),
//! but each component carries a unique name and the output is a
//! `Value::Named` record.
//!
//! Key behaviors
//! -------------
//! - Components consume consecutive input slices in declaration order.
//! - Output entries are listed in declaration order.
//! - The inverse looks each declared name up in the supplied record, so
//!   the caller's entry order does not matter. Unknown extra entries are
//!   rejected through the entry-count check.
//!
//! Invariants & assumptions
//! ------------------------
//! - Names are unique; enforced at construction.
use crate::transforms::{
    core::{BoxedTransform, LogJac, LogJacFlag, Segment, Transform, Value, validate_length},
    errors::{TransformError, TransformResult},
};
use ndarray::{ArrayView1, ArrayViewMut1};
use std::collections::HashSet;

/// Record of named component transforms.
#[derive(Debug)]
pub struct NamedTupleTransform {
    components: Vec<(String, BoxedTransform)>,
    dimension: usize,
}

impl NamedTupleTransform {
    /// Build from `(name, transform)` pairs in declaration order.
    ///
    /// # Errors
    /// - [`TransformError::DuplicateName`] if a name occurs twice.
    pub fn new<S: Into<String>>(components: Vec<(S, BoxedTransform)>) -> TransformResult<Self> {
        let components: Vec<(String, BoxedTransform)> =
            components.into_iter().map(|(name, t)| (name.into(), t)).collect();
        let mut seen = HashSet::with_capacity(components.len());
        for (name, _) in components.iter() {
            if !seen.insert(name.as_str()) {
                return Err(TransformError::DuplicateName { name: name.clone() });
            }
        }
        let dimension = components.iter().map(|(_, t)| t.dimension()).sum();
        log::debug!(
            "NamedTupleTransform with fields {:?} constructed with dimension {dimension}",
            components.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>()
        );
        Ok(NamedTupleTransform { components, dimension })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|(name, _)| name.as_str())
    }

    /// Component transform registered under `name`.
    ///
    /// # Errors
    /// - [`TransformError::KeyNotFound`] if no component has that name.
    pub fn get(&self, name: &str) -> TransformResult<&dyn Transform> {
        self.components
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_ref())
            .ok_or_else(|| TransformError::KeyNotFound { name: name.to_string() })
    }
}

impl Transform for NamedTupleTransform {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn transform_with(
        &self, flag: LogJacFlag, x: ArrayView1<'_, f64>,
    ) -> TransformResult<(Value, LogJac)> {
        let mut entries = Vec::with_capacity(self.components.len());
        let mut logjac = flag.zero();
        let mut segment = Segment::origin();
        for (name, component) in self.components.iter() {
            segment = segment.next(component.dimension());
            let (value, lj) = component.transform_with(flag, segment.view(x))?;
            entries.push((name.clone(), value));
            logjac += lj;
        }
        Ok((Value::Named(entries), logjac))
    }

    fn validate_value(&self, y: &Value) -> TransformResult<()> {
        let entries = y.as_named()?;
        validate_length(entries.len(), self.components.len())?;
        for (name, component) in self.components.iter() {
            component.validate_value(y.get(name)?)?;
        }
        Ok(())
    }

    fn write_inverse(&self, mut out: ArrayViewMut1<'_, f64>, y: &Value) {
        let mut segment = Segment::origin();
        for (name, component) in self.components.iter() {
            segment = segment.next(component.dimension());
            if let Ok(value) = y.get(name) {
                component.write_inverse(segment.view_mut(&mut out), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::{
        geometric::{CorrCholeskyFactor, UnitVector},
        scalar::ScalarTransform,
    };
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, array, s};

    fn sample() -> NamedTupleTransform {
        NamedTupleTransform::new(vec![
            ("direction", UnitVector::new(3).unwrap().boxed()),
            ("scale", ScalarTransform::positive(0.0).boxed()),
            ("corr", CorrCholeskyFactor::new(3).unwrap().boxed()),
        ])
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Check that duplicate names are rejected and lookups behave.
    //
    // Given
    // -----
    // - Two components both named "a"; the sample record.
    //
    // Expect
    // ------
    // - DuplicateName { "a" }; get("scale") has dimension 1;
    //   get("missing") is KeyNotFound.
    fn construction_rejects_duplicates_and_get_looks_up_names() {
        let dup = NamedTupleTransform::new(vec![
            ("a", ScalarTransform::identity().boxed()),
            ("a", ScalarTransform::identity().boxed()),
        ]);
        assert_eq!(dup.unwrap_err(), TransformError::DuplicateName { name: "a".to_string() });

        let t = sample();
        assert_eq!(t.dimension(), 2 + 1 + 3);
        assert_eq!(t.names().collect::<Vec<_>>(), vec!["direction", "scale", "corr"]);
        assert_eq!(t.get("scale").unwrap().dimension(), 1);
        assert_eq!(
            t.get("missing").unwrap_err(),
            TransformError::KeyNotFound { name: "missing".to_string() }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify declaration-order output, log-Jacobian additivity and a
    // round trip that is insensitive to the entry order of the record.
    //
    // Given
    // -----
    // - x of length 6; the output record with its entries reversed.
    //
    // Expect
    // ------
    // - Entry names in declaration order; logjac equals the sum of the
    //   per-slice logjacs; inverse(reversed) ≈ x.
    fn transform_orders_entries_and_inverse_looks_up_by_name() {
        let t = sample();
        let x = array![0.3, -0.7, 1.2, 0.1, -0.4, 0.8];
        let (y, total) = t.transform_and_logjac(x.view()).unwrap();

        let names: Vec<&str> = y.as_named().unwrap().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["direction", "scale", "corr"]);
        assert_abs_diff_eq!(y.get("scale").unwrap().as_real().unwrap(), 1.2_f64.exp());

        let (_, a) = t.get("direction").unwrap().transform_and_logjac(x.slice(s![0..2])).unwrap();
        let (_, b) = t.get("scale").unwrap().transform_and_logjac(x.slice(s![2..3])).unwrap();
        let (_, c) = t.get("corr").unwrap().transform_and_logjac(x.slice(s![3..6])).unwrap();
        assert_abs_diff_eq!(total, a + b + c, epsilon = 1e-12);

        let mut entries = y.as_named().unwrap().to_vec();
        entries.reverse();
        let x_back = t.inverse(&Value::Named(entries)).unwrap();
        for (a, b) in x_back.iter().zip(x.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-10);
        }
    }

    #[test]
    // Purpose
    // -------
    // Exercise the malformed-record paths of the inverse.
    //
    // Given
    // -----
    // - A record missing "scale", a record with an extra entry, and a
    //   record where "scale" is renamed.
    //
    // Expect
    // ------
    // - DimensionMismatch for wrong entry counts, KeyNotFound for the
    //   renamed field; the output buffer is untouched in every case.
    fn malformed_records_are_rejected_without_writing() {
        let t = sample();
        let x = array![0.3, -0.7, 1.2, 0.1, -0.4, 0.8];
        let y = t.transform(x.view()).unwrap();
        let entries = y.as_named().unwrap().to_vec();

        let missing = Value::Named(vec![entries[0].clone(), entries[2].clone()]);
        let mut extra = entries.clone();
        extra.push(("bonus".to_string(), Value::Real(1.0)));
        let mut renamed = entries.clone();
        renamed[1].0 = "sigma".to_string();

        let mut buf = Array1::from_elem(6, -3.0);
        assert_eq!(
            t.inverse_into(buf.view_mut(), &missing),
            Err(TransformError::DimensionMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            t.inverse_into(buf.view_mut(), &Value::Named(extra)),
            Err(TransformError::DimensionMismatch { expected: 3, actual: 4 })
        );
        assert_eq!(
            t.inverse_into(buf.view_mut(), &Value::Named(renamed)),
            Err(TransformError::KeyNotFound { name: "scale".to_string() })
        );
        assert!(buf.iter().all(|&v| v == -3.0));
    }
}
