//! composite — transforms assembled from other transforms.
//!
//! Purpose
//! -------
//! Combine boxed component transforms into larger structures while keeping
//! a single flat unconstrained input vector:
//! - [`ArrayTransform`]: one element transform repeated over a grid.
//! - [`TupleTransform`]: heterogeneous components, positional output.
//! - [`NamedTupleTransform`]: heterogeneous components, named output.
//!
//! Invariants & assumptions
//! ------------------------
//! - The flat input is split into consecutive, non-overlapping slices in
//!   component order; their lengths sum to `dimension()`.
//! - The composite log-Jacobian is the sum of the component log-Jacobians
//!   (block-diagonal Jacobian).
//! - Inverse validation is recursive and finishes before anything is
//!   written, so a malformed nested value never leaves a partial result.
//!
//! Testing notes
//! -------------
//! - Each composite checks log-Jacobian decomposability against manually
//!   sliced component evaluations, plus malformed-value rejection.

pub mod array;
pub mod named;
pub mod tuple;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::array::ArrayTransform;
pub use self::named::NamedTupleTransform;
pub use self::tuple::TupleTransform;
