//! Solution search
//!
//! Crosses every enumerated layout with every selected fan, evaluates each
//! pair through an [`AirflowModel`] and keeps the pairs that satisfy the
//! constraint set.
//!
//! ## Filter order
//!
//! Tests run in a fixed order and stop at the first failure:
//!
//! ```text
//! 1. dimensionless diameter   dr ∈ (min, max)
//! 2. lowest air speed         ∈ (min, max)
//! 3. average air speed        ∈ (min, max)
//! 4. uniformity               ∈ (min, max)
//! 5. blade height band        pass
//! ```
//!
//! The order only changes which counter a rejected candidate lands in; the
//! accepted set is the conjunction of all five. Results keep iteration order
//! (layout outer, fan inner) and are not ranked.
//!
//! ## Statelessness
//!
//! A search owns nothing between calls. Every change to the room, catalog
//! or constraints means calling [`design`] again with the new snapshot;
//! overlapping calls are independent.

use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bounds::{check_open_range, Rejection},
    constraints::ConstraintSet,
    diagnostics::{Criterion, EmptyReason, LayoutDiagnostics, SearchDiagnostics},
    fan::FanModel,
    layout::{enumerate, LayoutCandidate},
    performance::{PerformanceModel, SolutionCandidate},
    room::RoomModel,
    traits::AirflowModel,
};

/// Accepted solutions with the tallies for the rejected ones
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchOutcome {
    /// Accepted candidates in iteration order
    pub solutions: Vec<SolutionCandidate>,
    /// Rejection counts per criterion
    pub diagnostics: SearchDiagnostics,
}

/// Layout × fan search driven by an airflow model
#[derive(Debug, Clone, Default)]
pub struct SolutionSearch<M = PerformanceModel> {
    model: M,
}

impl<M: AirflowModel> SolutionSearch<M> {
    /// Create a search using `model` to evaluate candidates
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Model in use
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Evaluate and filter every layout × fan pair.
    pub fn run(
        &self,
        layouts: &[LayoutCandidate],
        catalog: &[FanModel],
        constraints: &ConstraintSet,
    ) -> SearchOutcome {
        for fan in catalog {
            if let Err(e) = fan.validate() {
                log_warn!("Fan {} will never be accepted: {}", fan.fan_type, e);
            }
        }

        let operating = constraints.operating_parameters();
        let mut diagnostics = SearchDiagnostics::default();
        let mut solutions = Vec::new();

        for layout in layouts {
            for fan in catalog {
                let candidate = self.model.evaluate(layout, fan, &operating);
                diagnostics.evaluated += 1;

                match screen(&candidate, constraints) {
                    Ok(()) => solutions.push(candidate),
                    Err((criterion, rejection)) => diagnostics.record(criterion, rejection),
                }
            }
        }
        diagnostics.accepted = solutions.len();

        log_debug!(
            "{} viable solutions of {} evaluated; ({}, {}) failed on min, max dimensionless diameter",
            diagnostics.accepted,
            diagnostics.evaluated,
            diagnostics.dimensionless_diameter.below,
            diagnostics.dimensionless_diameter.above
        );

        SearchOutcome {
            solutions,
            diagnostics,
        }
    }
}

/// Apply the five acceptance tests in order, stopping at the first failure.
pub fn screen(
    candidate: &SolutionCandidate,
    constraints: &ConstraintSet,
) -> Result<(), (Criterion, Rejection)> {
    check_open_range(candidate.groups.diameter_ratio, &constraints.dimensionless_diameter)
        .map_err(|r| (Criterion::DimensionlessDiameter, r))?;
    check_open_range(candidate.airspeeds.lowest, &constraints.min_air_speed)
        .map_err(|r| (Criterion::MinAirSpeed, r))?;
    check_open_range(candidate.airspeeds.average, &constraints.avg_air_speed)
        .map_err(|r| (Criterion::AvgAirSpeed, r))?;
    check_open_range(candidate.uniformity, &constraints.uniformity)
        .map_err(|r| (Criterion::Uniformity, r))?;

    let band = &candidate.blade_height_range;
    if !band.pass {
        let mean = candidate.operating.blade_height.mean();
        let rejection = if mean < band.min {
            Rejection::BelowMin
        } else if mean > band.max {
            Rejection::AboveMax
        } else {
            Rejection::NonFinite
        };
        return Err((Criterion::BladeHeight, rejection));
    }
    Ok(())
}

/// Search with the fitted regression model.
pub fn search(
    layouts: &[LayoutCandidate],
    catalog: &[FanModel],
    constraints: &ConstraintSet,
) -> SearchOutcome {
    SolutionSearch::new(PerformanceModel::default()).run(layouts, catalog, constraints)
}

/// Everything one design request produced
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DesignReport {
    /// Layouts that passed enumeration
    pub layouts: Vec<LayoutCandidate>,
    /// Accepted solutions in iteration order
    pub solutions: Vec<SolutionCandidate>,
    /// Layout enumeration tallies
    pub layout_diagnostics: LayoutDiagnostics,
    /// Solution filter tallies
    pub search_diagnostics: SearchDiagnostics,
}

impl DesignReport {
    /// Why the report holds no solutions; `None` when it has some.
    pub fn explain(&self) -> Option<EmptyReason> {
        if !self.solutions.is_empty() {
            return None;
        }
        if self.layouts.is_empty() {
            return Some(EmptyReason::NoLayouts);
        }
        if self.search_diagnostics.evaluated == 0 {
            return Some(EmptyReason::EmptyCatalog);
        }
        self.search_diagnostics
            .exhausted_at()
            .map(EmptyReason::Filtered)
    }

    /// Fan count of every solution, in result order
    pub fn fan_counts(&self) -> Vec<u32> {
        fan_count_summary(&self.solutions)
    }
}

/// Enumerate layouts and search them with the fitted regression model.
pub fn design(room: &RoomModel, catalog: &[FanModel], constraints: &ConstraintSet) -> DesignReport {
    design_with(&PerformanceModel::default(), room, catalog, constraints)
}

/// Enumerate layouts and search them with a caller-supplied model.
pub fn design_with<M: AirflowModel + Clone>(
    model: &M,
    room: &RoomModel,
    catalog: &[FanModel],
    constraints: &ConstraintSet,
) -> DesignReport {
    let enumeration = enumerate(
        room,
        constraints.fans_per_axis,
        &constraints.cell_size,
        constraints.aspect_ratio_max,
    );
    let outcome = SolutionSearch::new(model.clone()).run(&enumeration.layouts, catalog, constraints);

    DesignReport {
        layouts: enumeration.layouts,
        solutions: outcome.solutions,
        layout_diagnostics: enumeration.diagnostics,
        search_diagnostics: outcome.diagnostics,
    }
}

/// Fan count of every solution, in result order
pub fn fan_count_summary(solutions: &[SolutionCandidate]) -> Vec<u32> {
    solutions.iter().map(SolutionCandidate::num_fans).collect()
}

/// Field to order results by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortKey {
    /// Total fans in the layout
    FanCount,
    /// Lowest air speed
    MinAirSpeed,
    /// Average air speed
    AvgAirSpeed,
    /// Highest air speed
    MaxAirSpeed,
    /// Uniformity
    Uniformity,
    /// Cell aspect ratio
    AspectRatio,
}

impl SortKey {
    fn value(&self, solution: &SolutionCandidate) -> f64 {
        match self {
            SortKey::FanCount => solution.num_fans() as f64,
            SortKey::MinAirSpeed => solution.airspeeds.lowest,
            SortKey::AvgAirSpeed => solution.airspeeds.average,
            SortKey::MaxAirSpeed => solution.airspeeds.highest,
            SortKey::Uniformity => solution.uniformity,
            SortKey::AspectRatio => solution.aspect_ratio(),
        }
    }
}

/// Stable ascending sort by `key`, NaN last.
pub fn sort_solutions(solutions: &mut [SolutionCandidate], key: SortKey) {
    solutions.sort_by(|a, b| compare_nan_last(key.value(a), key.value(b)));
}

fn compare_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
