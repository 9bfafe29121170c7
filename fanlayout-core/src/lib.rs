//! Core design engine for FanLayout
//!
//! Finds uniform grids of identical ceiling fans for a rectangular room and
//! scores each fan model in each grid with an empirical airflow regression.
//!
//! Key properties:
//! - Pure functions of the room, fan catalog and constraints
//! - Deterministic result order (layout outer, fan inner)
//! - Every bound is strict; boundary and non-finite values are rejected
//! - Runs without `std` (needs `alloc`)
//!
//! ```no_run
//! use fanlayout_core::{design, example_catalog, ConstraintSet, RoomModel};
//!
//! let room = RoomModel::new(3.7, 13.0, 16.0);
//! let report = design(&room, &example_catalog(), &ConstraintSet::default());
//!
//! match report.explain() {
//!     None => {}         // report.solutions holds the viable designs
//!     Some(_reason) => {} // tell the user which constraint emptied the table
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod bounds;
pub mod constants;
pub mod constraints;
pub mod diagnostics;
pub mod errors;
pub mod fan;
pub mod layout;
pub mod performance;
pub mod room;
pub mod search;
pub mod traits;

// Public API
pub use bounds::{BoundCounts, Rejection};
pub use constraints::{ConstraintSet, FanCountRange, Range};
pub use diagnostics::{Criterion, EmptyReason, LayoutDiagnostics, SearchDiagnostics};
pub use errors::{DesignError, DesignResult};
pub use fan::{example_catalog, select_fans, FanModel};
pub use layout::{enumerate, LayoutCandidate, LayoutEnumeration};
pub use performance::{
    Airspeeds, BladeHeightRange, CertificationHeights, Clearance, DimensionlessGroups,
    ModelCoefficients, OperatingParameters, PerformanceModel, SolutionCandidate,
};
pub use room::RoomModel;
pub use search::{
    design, design_with, fan_count_summary, search, sort_solutions, DesignReport, SearchOutcome,
    SolutionSearch, SortKey,
};
pub use traits::{AirflowModel, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn default_request_is_valid() {
        assert!(RoomModel::new(3.7, 13.0, 16.0).validate().is_ok());
        assert!(ConstraintSet::default().validate().is_ok());
        assert!(example_catalog().iter().all(|f| f.validate().is_ok()));
    }
}
