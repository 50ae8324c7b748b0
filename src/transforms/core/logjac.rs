//! Log-Jacobian request flag and accumulator.
//!
//! Every transform evaluates under a [`LogJacFlag`]. Under
//! [`LogJacFlag::ValueOnly`] the log-Jacobian slot carries
//! [`LogJac::NotComputed`] and no `ln`/`sqrt` is evaluated that the value
//! itself does not need. `NotComputed` is a sentinel, never a numeric
//! zero: it absorbs everything it is added to, so an unrequested
//! log-Jacobian cannot be silently summed into a real one.
use crate::transforms::errors::{TransformError, TransformResult};
use std::ops::{Add, AddAssign};

/// Whether a transform evaluation should compute its log-Jacobian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogJacFlag {
    /// Compute the transformed value only.
    ValueOnly,
    /// Compute the transformed value and `ln |det J|`.
    ValueAndLogJac,
}

impl LogJacFlag {
    /// The additive identity for this flag: `Value(0.0)` when log-Jacobians
    /// are requested, `NotComputed` otherwise.
    #[inline]
    pub fn zero(self) -> LogJac {
        match self {
            LogJacFlag::ValueOnly => LogJac::NotComputed,
            LogJacFlag::ValueAndLogJac => LogJac::Value(0.0),
        }
    }

    /// Evaluate `f` only when log-Jacobians are requested.
    #[inline]
    pub fn compute<F: FnOnce() -> f64>(self, f: F) -> LogJac {
        match self {
            LogJacFlag::ValueOnly => LogJac::NotComputed,
            LogJacFlag::ValueAndLogJac => LogJac::Value(f()),
        }
    }
}

/// Log-Jacobian of one evaluation, or the marker that it was skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogJac {
    NotComputed,
    Value(f64),
}

impl LogJac {
    /// The numeric log-Jacobian, if it was computed.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            LogJac::NotComputed => None,
            LogJac::Value(v) => Some(v),
        }
    }

    /// The numeric log-Jacobian, or [`TransformError::LogJacNotComputed`].
    pub fn into_result(self) -> TransformResult<f64> {
        self.value().ok_or(TransformError::LogJacNotComputed)
    }
}

impl Add for LogJac {
    type Output = LogJac;

    #[inline]
    fn add(self, rhs: LogJac) -> LogJac {
        match (self, rhs) {
            (LogJac::Value(a), LogJac::Value(b)) => LogJac::Value(a + b),
            _ => LogJac::NotComputed,
        }
    }
}

impl AddAssign for LogJac {
    #[inline]
    fn add_assign(&mut self, rhs: LogJac) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that `NotComputed` is absorbing under addition and that the
    // closure passed to `compute` is skipped for value-only evaluations.
    //
    // Given
    // -----
    // - Both flags and a closure that panics if called.
    //
    // Expect
    // ------
    // - ValueOnly never calls the closure and yields NotComputed.
    // - Value + NotComputed == NotComputed.
    fn not_computed_absorbs_and_value_only_skips_work() {
        let lj = LogJacFlag::ValueOnly.compute(|| panic!("must not be evaluated"));
        assert_eq!(lj, LogJac::NotComputed);
        assert_eq!(LogJac::Value(1.5) + LogJac::NotComputed, LogJac::NotComputed);
        assert_eq!(
            LogJac::NotComputed.into_result(),
            Err(TransformError::LogJacNotComputed)
        );
    }

    #[test]
    // Purpose
    // -------
    // Check accumulation from the flag's additive identity.
    //
    // Given
    // -----
    // - ValueAndLogJac and three increments.
    //
    // Expect
    // ------
    // - The sum of increments.
    fn value_and_logjac_accumulates_increments() {
        let flag = LogJacFlag::ValueAndLogJac;
        let mut acc = flag.zero();
        for inc in [0.5, -1.25, 2.0] {
            acc += flag.compute(|| inc);
        }
        assert_eq!(acc.into_result(), Ok(1.25));
    }
}
