//! Integration tests for the transform stack.
//!
//! Purpose
//! -------
//! - Validate transforms end to end through the public crate surface:
//!   construction, forward map, log-Jacobian, and inverse.
//! - Cross-check every closed-form log-Jacobian against a finite-difference
//!   Jacobian of the forward map over the free output coordinates.
//!
//! Coverage
//! --------
//! - `transforms::geometric`: `UnitVector`, `CorrCholeskyFactor` dimension
//!   formulas, boundary sizes, and structural invariants at random points.
//! - `transforms::composite`: tuple / named / array composites, nested
//!   composites, Jacobian decomposability, malformed inputs.
//! - `transforms::logdensity`: pulled-back densities.
//! - `diagnostics::finite_diff`: used as the reference for log-Jacobians.
//!
//! Exclusions
//! ----------
//! - Fine-grained checks of the logistic primitives and the remainder step;
//!   these are covered by unit tests.
//! - Python bindings; those are exercised from the Python package.
use ndarray::{Array1, Array2, array, s};
use rand::{SeedableRng, rngs::StdRng};
use rust_bijectors::{diagnostics::numerical_logjac, transforms::prelude::*};

const LOGJAC_TOL: f64 = 1e-6;
const ROUNDTRIP_TOL: f64 = 1e-9;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Purpose
/// -------
/// Flatten a constrained value to its free coordinates, the ones the
/// log-Jacobian is taken with respect to.
///
/// Conventions
/// -----------
/// - Vector leaves (unit vectors) drop their last entry.
/// - Matrix leaves (correlation Cholesky factors) contribute their strict
///   upper triangle, column by column.
/// - Arrays are walked in row-major order; tuples and named values in
///   entry order.
fn free_coordinates(value: &Value, out: &mut Vec<f64>) {
    match value {
        Value::Real(v) => out.push(*v),
        Value::Vector(v) => out.extend(v.slice(s![..v.len() - 1]).iter()),
        Value::Matrix(m) => {
            for col in 0..m.ncols() {
                for row in 0..col {
                    out.push(m[[row, col]]);
                }
            }
        }
        Value::Array(cells) => cells.iter().for_each(|cell| free_coordinates(cell, out)),
        Value::Tuple(items) => items.iter().for_each(|item| free_coordinates(item, out)),
        Value::Named(entries) => entries.iter().for_each(|(_, v)| free_coordinates(v, out)),
    }
}

fn numeric_logjac_of(t: &dyn Transform, x: &Array1<f64>) -> f64 {
    let f = |v: &Array1<f64>| {
        let mut coords = Vec::with_capacity(v.len());
        match t.transform(v.view()) {
            Ok(y) => free_coordinates(&y, &mut coords),
            Err(_) => coords.resize(v.len(), f64::NAN),
        }
        Array1::from(coords)
    };
    numerical_logjac(x, &f).expect("finite-difference log-Jacobian should exist")
}

fn assert_close(a: &Array1<f64>, b: &Array1<f64>, tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (u, v)) in a.iter().zip(b.iter()).enumerate() {
        assert!((u - v).abs() <= tol, "entry {i}: {u} vs {v}");
    }
}

#[test]
// Purpose
// -------
// Pin down the boundary scenarios of the geometric transforms.
//
// Given
// -----
// - UnitVector(1) and CorrCholeskyFactor(1) with empty input.
// - UnitVector(3) at x = [0, 0]; CorrCholeskyFactor(2) at x = [0].
//
// Expect
// ------
// - [1.0]; [[1.0]]; ≈ [0, 0, 1]; the 2 × 2 identity.
fn boundary_scenarios() {
    init_logging();
    let empty = Array1::<f64>::zeros(0);

    let uv1 = UnitVector::new(1).unwrap();
    assert_eq!(uv1.dimension(), 0);
    assert_eq!(uv1.transform(empty.view()).unwrap(), Value::Vector(array![1.0]));

    let cc1 = CorrCholeskyFactor::new(1).unwrap();
    assert_eq!(cc1.dimension(), 0);
    assert_eq!(cc1.transform(empty.view()).unwrap(), Value::Matrix(array![[1.0]]));

    let y = UnitVector::new(3).unwrap().transform(array![0.0, 0.0].view()).unwrap();
    assert_close(&y.into_vector().unwrap(), &array![0.0, 0.0, 1.0], 1e-15);

    let u = CorrCholeskyFactor::new(2).unwrap().transform(array![0.0].view()).unwrap();
    assert_eq!(u.into_matrix().unwrap(), Array2::<f64>::eye(2));
}

#[test]
// Purpose
// -------
// Check the structural invariants and round trips of both geometric
// transforms at random points across sizes.
//
// Given
// -----
// - n = 1..=7, standard-normal x from a seeded RNG.
//
// Expect
// ------
// - ‖y‖ ≈ 1 for unit vectors; U upper triangular with unit columns and
//   UᵀU a correlation matrix; inverse(transform(x)) ≈ x.
fn geometric_invariants_hold_at_random_points() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(20240611);
    for n in 1..=7 {
        let uv = UnitVector::new(n).unwrap();
        let x = random_reals(uv.dimension(), &mut rng);
        let y = uv.transform(x.view()).unwrap();
        let norm = y.as_vector().unwrap().dot(y.as_vector().unwrap()).sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "n = {n}: norm {norm}");
        assert_close(&uv.inverse(&y).unwrap(), &x, ROUNDTRIP_TOL);

        let cc = CorrCholeskyFactor::new(n).unwrap();
        let x = random_reals(cc.dimension(), &mut rng);
        let y = cc.transform(x.view()).unwrap();
        let u = y.as_matrix().unwrap();
        for ((row, col), &v) in u.indexed_iter() {
            if row > col {
                assert_eq!(v, 0.0);
            }
        }
        let corr = CorrCholeskyFactor::correlation(u);
        for i in 0..n {
            assert!((corr[[i, i]] - 1.0).abs() < 1e-12);
            for j in 0..n {
                assert!((corr[[i, j]] - corr[[j, i]]).abs() < 1e-12);
                assert!(corr[[i, j]].abs() <= 1.0 + 1e-12);
            }
        }
        assert_close(&cc.inverse(&y).unwrap(), &x, ROUNDTRIP_TOL);
    }
}

#[test]
// Purpose
// -------
// Compare the closed-form log-Jacobians of the geometric transforms with
// finite-difference log-determinants over the free coordinates.
//
// Given
// -----
// - UnitVector(n) and CorrCholeskyFactor(n) for n = 2..=5 at moderate
//   random points (draws scaled by 0.5 to stay away from saturation).
//
// Expect
// ------
// - |closed form − numeric| < 1e-6.
fn geometric_logjac_matches_finite_differences() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    for n in 2..=5 {
        let transforms: Vec<BoxedTransform> =
            vec![UnitVector::new(n).unwrap().boxed(), CorrCholeskyFactor::new(n).unwrap().boxed()];
        for t in transforms.iter() {
            let x = random_reals(t.dimension(), &mut rng) * 0.5;
            let (_, logjac) = t.transform_and_logjac(x.view()).unwrap();
            let numeric = numeric_logjac_of(&**t, &x);
            assert!(
                (logjac - numeric).abs() < LOGJAC_TOL,
                "{t:?}: closed form {logjac}, numeric {numeric}"
            );
        }
    }
}

#[test]
// Purpose
// -------
// Exercise the (UnitVector(3), CorrCholeskyFactor(2)) composite.
//
// Given
// -----
// - Random x of length 3.
//
// Expect
// ------
// - dimension 3, round trip, and a log-Jacobian equal to the manual
//   per-slice sum and to the finite-difference value.
fn tuple_of_unit_vector_and_corr_factor() {
    init_logging();
    let t = TupleTransform::new(vec![
        UnitVector::new(3).unwrap().boxed(),
        CorrCholeskyFactor::new(2).unwrap().boxed(),
    ]);
    assert_eq!(t.dimension(), 3);

    let mut rng = StdRng::seed_from_u64(3);
    let x = random_reals(3, &mut rng) * 0.5;
    let (y, logjac) = t.transform_and_logjac(x.view()).unwrap();
    assert_close(&t.inverse(&y).unwrap(), &x, ROUNDTRIP_TOL);

    let (_, a) = t.components()[0].transform_and_logjac(x.slice(s![0..2])).unwrap();
    let (_, b) = t.components()[1].transform_and_logjac(x.slice(s![2..3])).unwrap();
    assert!((logjac - (a + b)).abs() < 1e-12);
    assert!((logjac - numeric_logjac_of(&t, &x)).abs() < LOGJAC_TOL);
}

#[test]
// Purpose
// -------
// Check dimension bookkeeping, round trips and log-Jacobians through
// several levels of nesting.
//
// Given
// -----
// - A named record { "dirs": Array[2, 2] of UnitVector(3),
//   "pair": (CorrCholeskyFactor(3), interval(−1, 2)),
//   "rate": positive(0) }.
//
// Expect
// ------
// - dimension = 4·2 + (3 + 1) + 1 = 13.
// - Round trip, and the closed-form log-Jacobian matches the numeric one.
// - The "dirs" array holds unit vectors in every cell.
fn nested_composites_roundtrip_and_logjac() {
    init_logging();
    let pair = TupleTransform::new(vec![
        CorrCholeskyFactor::new(3).unwrap().boxed(),
        ScalarTransform::interval(-1.0, 2.0).unwrap().boxed(),
    ]);
    let t = NamedTupleTransform::new(vec![
        ("dirs", ArrayTransform::new(UnitVector::new(3).unwrap(), &[2, 2]).unwrap().boxed()),
        ("pair", pair.boxed()),
        ("rate", ScalarTransform::positive(0.0).boxed()),
    ])
    .unwrap();
    assert_eq!(t.dimension(), 13);

    let mut rng = StdRng::seed_from_u64(99);
    let x = random_reals(13, &mut rng) * 0.5;
    let (y, logjac) = t.transform_and_logjac(x.view()).unwrap();

    let dirs = y.get("dirs").unwrap().as_array().unwrap();
    assert_eq!(dirs.shape(), &[2, 2]);
    for cell in dirs.iter() {
        let v = cell.as_vector().unwrap();
        assert!((v.dot(v) - 1.0).abs() < 1e-12);
    }
    assert!(y.get("rate").unwrap().as_real().unwrap() > 0.0);

    assert_close(&t.inverse(&y).unwrap(), &x, ROUNDTRIP_TOL);
    assert!((logjac - numeric_logjac_of(&t, &x)).abs() < LOGJAC_TOL);
}

#[test]
// Purpose
// -------
// Confirm that malformed inputs are rejected before any output exists and
// that rejected inverses leave the caller's buffer untouched.
//
// Given
// -----
// - UnitVector(4) with an input of length 2.
// - A tuple composite given a nested value with a wrong-size matrix.
//
// Expect
// ------
// - DimensionMismatch { expected: 3, actual: 2 }.
// - ShapeMismatch on the nested matrix; buffer unchanged.
fn malformed_inputs_are_rejected_up_front() {
    init_logging();
    let uv = UnitVector::new(4).unwrap();
    assert_eq!(
        uv.transform(array![0.1, 0.2].view()),
        Err(TransformError::DimensionMismatch { expected: 3, actual: 2 })
    );
    assert!(matches!(UnitVector::new(0), Err(TransformError::InvalidDimension { .. })));

    let t = TupleTransform::new(vec![
        UnitVector::new(3).unwrap().boxed(),
        CorrCholeskyFactor::new(3).unwrap().boxed(),
    ]);
    let y = t.transform(array![0.3, 0.1, -0.2, 0.4, 0.5].view()).unwrap();
    let items = y.as_tuple().unwrap();
    let bad = Value::Tuple(vec![items[0].clone(), Value::Matrix(Array2::eye(2))]);

    let mut buf = Array1::from_elem(t.dimension(), 42.0);
    assert!(matches!(
        t.inverse_into(buf.view_mut(), &bad),
        Err(TransformError::ShapeMismatch { .. })
    ));
    assert!(buf.iter().all(|&v| v == 42.0));
}

#[test]
// Purpose
// -------
// Check that the pulled-back log-density of a flat density on the
// correlation Cholesky factors equals the log-Jacobian, and that a
// user-defined transform slots into a composite.
//
// Given
// -----
// - f ≡ 0 with CorrCholeskyFactor(3).
// - (CustomTransform: x ↦ 3x, UnitVector(2)).
//
// Expect
// ------
// - logdensity == logjac; the custom slot contributes 2·ln 3 to the
//   tuple log-Jacobian.
fn logdensity_and_custom_components() {
    init_logging();
    let cc = CorrCholeskyFactor::new(3).unwrap();
    let x = array![0.2, -0.4, 0.1];
    let (_, logjac) = cc.transform_and_logjac(x.view()).unwrap();
    assert_eq!(transform_logdensity(&cc, |_: &Value| 0.0, x.view()).unwrap(), logjac);

    let scale = CustomTransform::new(
        2,
        |v: &Array1<f64>| v.mapv(|e| 3.0 * e),
        |v: &Array1<f64>| v.mapv(|e| e / 3.0),
    )
    .unwrap();
    let t = TupleTransform::new(vec![scale.boxed(), UnitVector::new(2).unwrap().boxed()]);
    let x = array![1.0, -2.0, 0.7];
    let (y, total) = t.transform_and_logjac(x.view()).unwrap();
    let uv = UnitVector::new(2).unwrap();
    let (_, uv_logjac) = uv.transform_and_logjac(x.slice(s![2..])).unwrap();
    assert!((total - (2.0 * 3.0_f64.ln() + uv_logjac)).abs() < LOGJAC_TOL);
    assert_close(&t.inverse(&y).unwrap(), &x, ROUNDTRIP_TOL);
}
