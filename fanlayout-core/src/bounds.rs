//! Strict bound checks and rejection tallies
//!
//! ## Exclusive bounds
//!
//! Every acceptance test in the engine is an open interval: a metric equal
//! to either bound fails. The check is written as "accept only if strictly
//! inside", so NaN and infinities fall out without special cases:
//!
//! ```text
//! accept  ⇔  value is finite  ∧  min < value < max
//! ```
//!
//! Non-finite values get their own rejection reason so diagnostics can tell
//! a degenerate input (zero diameter, zero room side) apart from a metric
//! that is merely too low or too high.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constraints::Range, traits::Validatable};

/// Why a metric failed a bound check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// Value at or below the minimum
    BelowMin,
    /// Value at or above the maximum
    AboveMax,
    /// Value is NaN or infinite
    NonFinite,
}

/// Check `value` against the open interval `(range.min, range.max)`.
pub fn check_open_range(value: f64, range: &Range) -> Result<(), Rejection> {
    if !value.is_valid() {
        Err(Rejection::NonFinite)
    } else if value <= range.min {
        Err(Rejection::BelowMin)
    } else if value >= range.max {
        Err(Rejection::AboveMax)
    } else {
        Ok(())
    }
}

/// Check `value` against an exclusive upper limit.
pub fn check_below(value: f64, max: f64) -> Result<(), Rejection> {
    if !value.is_valid() {
        Err(Rejection::NonFinite)
    } else if value >= max {
        Err(Rejection::AboveMax)
    } else {
        Ok(())
    }
}

/// Per-criterion rejection counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundCounts {
    /// Candidates at or below the minimum
    pub below: usize,
    /// Candidates at or above the maximum
    pub above: usize,
    /// Candidates whose metric was NaN or infinite
    pub non_finite: usize,
}

impl BoundCounts {
    /// Tally one rejection
    pub fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::BelowMin => self.below += 1,
            Rejection::AboveMax => self.above += 1,
            Rejection::NonFinite => self.non_finite += 1,
        }
    }

    /// Total rejections for this criterion
    pub fn total(&self) -> usize {
        self.below + self.above + self.non_finite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_range_check() {
        let r = Range::new(0.0, 10.0);
        assert!(check_open_range(5.0, &r).is_ok());
        assert_eq!(check_open_range(0.0, &r), Err(Rejection::BelowMin));
        assert_eq!(check_open_range(10.0, &r), Err(Rejection::AboveMax));
        assert_eq!(check_open_range(-1.0, &r), Err(Rejection::BelowMin));
        assert_eq!(check_open_range(f64::NAN, &r), Err(Rejection::NonFinite));
    }

    #[test]
    fn infinity_fails_even_unbounded_range() {
        let r = Range::new(f64::NEG_INFINITY, f64::INFINITY);
        assert!(check_open_range(1e300, &r).is_ok());
        assert_eq!(check_open_range(f64::INFINITY, &r), Err(Rejection::NonFinite));
    }

    #[test]
    fn upper_limit_is_exclusive() {
        assert!(check_below(1.2, 1.25).is_ok());
        assert_eq!(check_below(1.25, 1.25), Err(Rejection::AboveMax));
        assert_eq!(check_below(f64::NAN, 1.25), Err(Rejection::NonFinite));
    }

    #[test]
    fn counts_accumulate() {
        let mut counts = BoundCounts::default();
        counts.record(Rejection::BelowMin);
        counts.record(Rejection::BelowMin);
        counts.record(Rejection::NonFinite);
        assert_eq!(counts.below, 2);
        assert_eq!(counts.above, 0);
        assert_eq!(counts.total(), 3);
    }
}
