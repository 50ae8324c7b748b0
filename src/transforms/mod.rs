//! transforms — bijections from unconstrained ℝⁿ to constrained spaces.
//!
//! Purpose
//! -------
//! Provide the transform layer of the crate: a common capability interface
//! ([`Transform`]), the geometric transforms onto the unit sphere and onto
//! Cholesky factors of correlation matrices, scalar interval transforms,
//! user-defined transforms, and composites that arrange any of these into
//! arrays, tuples, and named records.
//!
//! Key behaviors
//! -------------
//! - Every transform reports its unconstrained `dimension()` and maps a
//!   flat `f64` vector of that length to a [`Value`], optionally with the
//!   log absolute Jacobian determinant.
//! - Inverses map a [`Value`] back to the flat vector; composites validate
//!   the whole nested value before writing anything.
//! - [`transform_logdensity`] pulls a constrained log-density back to the
//!   unconstrained space; [`random_reals`] draws starting points.
//!
//! Invariants & assumptions
//! ------------------------
//! - Transforms are immutable after construction and `Send + Sync`.
//! - Composite dimensions are the sums of their components; composite
//!   log-Jacobians are the sums of component log-Jacobians.
//! - Log-Jacobians are taken with respect to the free coordinates of the
//!   output (first `n − 1` entries of a unit vector, strict upper triangle
//!   of a correlation Cholesky factor in column order).
//!
//! Conventions
//! -----------
//! - Unconstrained inputs are `ndarray::ArrayView1<f64>`; constrained
//!   outputs are [`Value`] trees whose leaves are reals, vectors and
//!   matrices.
//! - Configuration errors surface at construction; shape errors surface
//!   at call time. Both use [`TransformError`] / [`TransformResult`].
//! - Constructors log their resulting dimension at `debug` level through
//!   the `log` facade; evaluation paths do not log.
//!
//! Downstream usage
//! ----------------
//! - Samplers and optimizers work on the flat vector, call
//!   `transform_and_logjac` (or [`transform_logdensity`]) per evaluation,
//!   and use `inverse` to map user-supplied initial values to ℝⁿ.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each transform; cross-transform properties
//!   (numerical log-Jacobians, nested composites) live under `tests/`.

pub mod composite;
pub mod core;
pub mod custom;
pub mod errors;
pub mod geometric;
pub mod logdensity;
pub mod scalar;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::composite::{ArrayTransform, NamedTupleTransform, TupleTransform};
pub use self::core::{BoxedTransform, LogJac, LogJacFlag, Transform, Value};
pub use self::custom::CustomTransform;
pub use self::errors::{TransformError, TransformResult};
pub use self::geometric::{CorrCholeskyFactor, UnitVector};
pub use self::logdensity::{random_reals, transform_logdensity};
pub use self::scalar::ScalarTransform;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_bijectors::transforms::prelude::*;
//
// to import every transform, the value type and the error surface at once.

pub mod prelude {
    pub use super::{
        ArrayTransform, BoxedTransform, CorrCholeskyFactor, CustomTransform, NamedTupleTransform,
        ScalarTransform, Transform, TransformError, TransformResult, TupleTransform, UnitVector,
        Value, random_reals, transform_logdensity,
    };
}
