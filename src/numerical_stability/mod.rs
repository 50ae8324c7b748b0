//! numerical_stability — numerically robust scalar primitives.
//!
//! Purpose
//! -------
//! Collect the numerically stable scalar functions every transform in the
//! crate is assembled from: the logistic function and its inverse, the
//! log-derivative of the logistic function, and the softplus pair. The
//! rest of the crate can then assume well-conditioned `f64` arithmetic in
//! the tails.
//!
//! Key behaviors
//! -------------
//! - `safe_logistic` / `safe_logit` map ℝ ↔ (0, 1) without overflow.
//! - `logistic_logjac` gives `ln σ'(x)` in a form that never evaluates
//!   `ln(0)`, so log-Jacobians stay finite for large `|x|`.
//! - `safe_softplus` / `safe_softplus_inv` map ℝ ↔ (0, ∞).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite `f64`. Domain violations (e.g. `safe_logit(2.0)`)
//!   produce non-finite outputs rather than errors; shape and domain
//!   validation belongs to the transform layer.
//!
//! Conventions
//! -----------
//! - Pure functions, no allocation, no logging; safe for tight loops.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    LOG_TWO, SOFTPLUS_CUTOFF, logistic_logjac, safe_logistic, safe_logit, safe_softplus,
    safe_softplus_inv,
};
