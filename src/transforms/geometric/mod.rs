//! geometric — transforms onto spheres and correlation factors.
//!
//! Purpose
//! -------
//! Host the two nontrivial geometric transforms and the recursive step
//! they share:
//! - [`remainder`]: the L2 remainder bijection, one coordinate at a time
//!   against a running squared-norm budget.
//! - [`UnitVector`]: one remainder chain closed by `√r`.
//! - [`CorrCholeskyFactor`]: one remainder chain per column of an upper
//!   triangular factor.
//!
//! Invariants & assumptions
//! ------------------------
//! - The budget `r` starts at 1 for every chain, never goes negative, and
//!   lives only inside a single call.
//! - Log-Jacobians are sums of per-step increments; no `ln` is evaluated
//!   for value-only calls.

pub mod corr_cholesky;
pub mod remainder;
pub mod unit_vector;

pub use self::corr_cholesky::CorrCholeskyFactor;
pub use self::remainder::{l2_remainder_inverse, l2_remainder_transform};
pub use self::unit_vector::UnitVector;
