//! Error Types for Input Validation
//!
//! ## Design Philosophy
//!
//! The search engine itself never fails. An empty result is a valid outcome,
//! and degenerate numbers (zero diameter, zero room size) turn into
//! non-finite ratios that every bound check rejects. Errors exist only for
//! callers that want to reject bad input *before* running a search:
//!
//! 1. **Small Size**: variants carry `f64` values and `&'static str` field
//!    names, nothing heap allocated.
//!
//! 2. **Copy Semantics**: errors implement `Copy` so they can be returned
//!    from validation helpers and stored without ceremony.
//!
//! 3. **Actionable Information**: each variant names the offending field so
//!    the caller can point the user at the right control.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use fanlayout_core::{DesignError, RoomModel};
//!
//! let room = RoomModel::new(3.7, 0.0, 13.0);
//! match room.validate() {
//!     Ok(()) => {}
//!     Err(DesignError::NonPositiveDimension { field, .. }) => {
//!         assert_eq!(field, "size_x");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for input validation
pub type DesignResult<T> = Result<T, DesignError>;

/// Input validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    /// A length that must be strictly positive is zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A range whose minimum is not below its maximum
    #[error("{field} range is empty: [{min}, {max}]")]
    InvalidRange {
        /// Name of the offending range
        field: &'static str,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// Fan-count range that starts at zero or is inverted
    #[error("fan count range [{min}, {max}] must start at 1 and be non-decreasing")]
    EmptyFanCountRange {
        /// Configured minimum fans per axis
        min: u32,
        /// Configured maximum fans per axis
        max: u32,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("{field} is not a finite number")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
    },
}

/// Check that a length is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> DesignResult<()> {
    if !value.is_finite() {
        return Err(DesignError::InvalidValue { field });
    }
    if value <= 0.0 {
        return Err(DesignError::NonPositiveDimension { field, value });
    }
    Ok(())
}
