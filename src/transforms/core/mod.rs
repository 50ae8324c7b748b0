//! core — building blocks shared by every transform.
//!
//! Purpose
//! -------
//! Define the capability interface ([`Transform`]), the value type it
//! produces ([`Value`]), the log-Jacobian request flag and accumulator
//! ([`LogJacFlag`], [`LogJac`]), the slice cursor used by composites
//! ([`Segment`]), and the shape-validation helpers.
//!
//! Conventions
//! -----------
//! - Flat unconstrained vectors are `ndarray` 1-D views over `f64`.
//! - Checked entry points validate lengths and value shapes before any
//!   computation; `transform_with` / `write_inverse` assume those checks
//!   already passed.

pub mod logjac;
pub mod segment;
pub mod traits;
pub mod validation;
pub mod value;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::logjac::{LogJac, LogJacFlag};
pub use self::segment::Segment;
pub use self::traits::{BoxedTransform, Transform};
pub use self::validation::{validate_length, validate_size, validate_square};
pub use self::value::Value;
