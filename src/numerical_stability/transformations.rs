//! Numerical stability utilities.
//!
//! Provides safe implementations of the scalar nonlinearities that every
//! transform in this crate is built from. Each of them is prone to
//! overflow/underflow in naïve form; the versions here use explicit
//! branches or cutoffs (`x > SOFTPLUS_CUTOFF`) to keep `f64` arithmetic in
//! a well-conditioned regime.
//!
//! # Provided items
//! - [`LOG_TWO`]: `ln 2`, the constant part of the remainder-step
//!   log-Jacobian.
//! - [`safe_softplus(x)`]: stable `ln(1 + exp(x))`, ℝ → (0, ∞).
//! - [`safe_softplus_inv(x)`]: inverse of softplus on (0, ∞).
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(-x))`, ℝ → (0, 1).
//! - [`safe_logit(p)`]: inverse of the logistic function on (0, 1).
//! - [`logistic_logjac(x)`]: `ln σ(x) + ln(1 − σ(x))`, the log-derivative
//!   of the logistic function, finite for all finite `x`.
//!
//! # Domain
//! None of these functions validate their input. Outside the documented
//! domain (e.g. `safe_logit(1.5)`) they return non-finite values instead of
//! raising; callers that need a guarantee check shapes and ranges upstream.

/// `ln 2`.
pub const LOG_TWO: f64 = std::f64::consts::LN_2;

/// Above this argument `softplus(x)` and `x` agree to `f64` precision.
pub const SOFTPLUS_CUTOFF: f64 = 20.0;

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// Computes softplus without overflow for large positive `x` and
/// with good precision for large negative `x`. This implementation
/// uses a simple piecewise guard:
///
/// - For sufficiently large `x`, `softplus(x) ≈ x + ln1p(exp(-x)) ≈ x`.
/// - Otherwise, it falls back to `ln1p(exp(x))`.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `softplus(x)` as `f64`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > SOFTPLUS_CUTOFF { x } else { x.exp().ln_1p() }
}

/// Stable inverse of softplus on `(0, ∞)`: solves for `t` in
/// `softplus(t) = x`, returning `t = ln(exp(x) - 1)`.
///
/// - For sufficiently large `x`, `ln(exp(x) - 1) ≈ x`.
/// - Otherwise, it uses `ln(expm1(x))`.
///
/// # Parameters
/// - `x`: a positive real (the softplus output), must be finite and `> 0`.
///
/// # Returns
/// - `t` such that `softplus(t) = x`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    if x > SOFTPLUS_CUTOFF { x } else { x.exp_m1().ln() }
}

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// Branches on the sign of `x` so that `exp` is only ever evaluated at a
/// non-positive argument:
///
/// - `x ≥ 0`: `1 / (1 + exp(-x))`
/// - `x < 0`: `exp(x) / (1 + exp(x))`
///
/// The result lies in `[0, 1]`; it saturates to exactly `0.0` / `1.0` only
/// when `|x|` exceeds roughly 37 (positive side) or 745 (negative side).
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inverse of the logistic function, `logit(p) = ln(p / (1 − p))`.
///
/// Evaluated as `ln(p) − ln1p(−p)` to keep precision for `p` close to 1.
/// Returns `±∞` at the endpoints and `NaN` outside `[0, 1]`.
pub fn safe_logit(p: f64) -> f64 {
    p.ln() - (-p).ln_1p()
}

/// Log-derivative of the logistic function:
/// `ln σ(x) + ln(1 − σ(x)) = −(softplus(x) + softplus(−x))`.
///
/// The softplus form never evaluates `ln(0)`, so the result stays finite
/// (and ≈ `−|x|`) for large `|x|` where `σ(x)` itself saturates.
pub fn logistic_logjac(x: f64) -> f64 {
    -(safe_softplus(x) + safe_softplus(-x))
}
