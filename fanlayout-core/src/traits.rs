//! Core traits
//!
//! The performance model sits behind [`AirflowModel`] so a search can run
//! against the fitted regression or against any other estimator with the
//! same inputs. Keep the seam narrow: one pure function.

use crate::{
    fan::FanModel,
    layout::LayoutCandidate,
    performance::{OperatingParameters, SolutionCandidate},
};

/// Maps a (layout, fan, operating point) triple to a solution candidate.
///
/// Implementations must be pure: identical inputs give identical outputs,
/// and degenerate inputs yield non-finite metrics rather than panics.
pub trait AirflowModel {
    /// Evaluate one fan model in one layout
    fn evaluate(
        &self,
        layout: &LayoutCandidate,
        fan: &FanModel,
        operating: &OperatingParameters,
    ) -> SolutionCandidate;
}

/// Trait for values that can be checked for numeric sanity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
