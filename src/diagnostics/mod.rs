//! diagnostics — numerical checks for transforms.
//!
//! Finite-difference Jacobians and LU log-determinants, used by
//! [`CustomTransform`](crate::transforms::CustomTransform) to obtain its
//! log-Jacobian and by tests to verify the closed-form ones.

pub mod finite_diff;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::finite_diff::{log_abs_det, numerical_jacobian, numerical_logjac};
