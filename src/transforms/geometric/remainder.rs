//! The L2 remainder bijection.
//!
//! One step maps an unconstrained scalar `x` and a remaining squared-norm
//! budget `r ≥ 0` to an output coordinate `y ∈ (−√r, √r)` and the budget
//! left after spending `y²`:
//!
//! ```text
//! z  = 2·σ(x) − 1          z ∈ (−1, 1)
//! y  = z·√r
//! r' = r·(1 − z²)          so  y² + r' = r
//! ln |∂y/∂x| = ln 2 + ln σ(x) + ln(1 − σ(x)) + ½·ln r
//! ```
//!
//! Chaining steps against a shared budget that starts at 1 fills the
//! coordinates of a unit vector; the last coordinate is `√r_final`. Within
//! a chain, `y_i` depends only on `x_1..x_i`, so the Jacobian is
//! triangular and the chain's log-Jacobian is the sum of the per-step
//! terms.
use crate::{
    numerical_stability::{LOG_TWO, logistic_logjac, safe_logistic, safe_logit},
    transforms::core::{LogJac, LogJacFlag},
};

/// Forward remainder step.
///
/// Returns `(y, r', logjac)`. The log-Jacobian term (and its `ln r`) is
/// evaluated only under [`LogJacFlag::ValueAndLogJac`]; with `r = 0` the
/// value path yields `y = 0`, `r' = 0` without dividing by zero.
#[inline]
pub fn l2_remainder_transform(flag: LogJacFlag, x: f64, r: f64) -> (f64, f64, LogJac) {
    let z = 2.0 * safe_logistic(x) - 1.0;
    let y = z * r.sqrt();
    let r_next = r * (1.0 - z * z);
    let logjac = flag.compute(|| LOG_TWO + logistic_logjac(x) + 0.5 * r.ln());
    (y, r_next, logjac)
}

/// Inverse remainder step.
///
/// Returns `(x, r')` with `x = logit((y/√r + 1)/2)` and `r' = r − y²`,
/// clamped at zero so rounding never drives the budget negative. `y` is
/// assumed to satisfy `|y| < √r`; otherwise `x` is non-finite.
#[inline]
pub fn l2_remainder_inverse(y: f64, r: f64) -> (f64, f64) {
    let x = safe_logit(0.5 * (y / r.sqrt() + 1.0));
    let r_next = (r - y * y).max(0.0);
    (x, r_next)
}
