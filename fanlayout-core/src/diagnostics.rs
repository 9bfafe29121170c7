//! Rejection diagnostics
//!
//! Both search stages count why candidates were dropped so the display layer
//! can explain an empty result ("every layout failed on aspect ratio")
//! instead of showing a blank table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::{BoundCounts, Rejection};

/// Tallies from layout enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutDiagnostics {
    /// X-axis fan counts dropped by the widened cell-size pre-filter
    pub prefiltered_x: usize,
    /// Y-axis fan counts dropped by the widened cell-size pre-filter
    pub prefiltered_y: usize,
    /// Grids that reached the authoritative tests
    pub considered: usize,
    /// Grids at or above the aspect ratio limit
    pub aspect_ratio: BoundCounts,
    /// Grids whose equivalent cell side is out of range
    pub cell_size: BoundCounts,
    /// Grids kept
    pub accepted: usize,
}

/// Solution filter criteria, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Criterion {
    /// Dimensionless diameter `dr`
    DimensionlessDiameter,
    /// Lowest air speed
    MinAirSpeed,
    /// Area-weighted average air speed
    AvgAirSpeed,
    /// Uniformity
    Uniformity,
    /// Blade height band
    BladeHeight,
}

impl Criterion {
    /// All criteria in application order
    pub const ORDER: [Criterion; 5] = [
        Criterion::DimensionlessDiameter,
        Criterion::MinAirSpeed,
        Criterion::AvgAirSpeed,
        Criterion::Uniformity,
        Criterion::BladeHeight,
    ];
}

/// Tallies from the solution filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchDiagnostics {
    /// Layout × fan pairs evaluated
    pub evaluated: usize,
    /// Failures on dimensionless diameter
    pub dimensionless_diameter: BoundCounts,
    /// Failures on lowest air speed
    pub min_air_speed: BoundCounts,
    /// Failures on average air speed
    pub avg_air_speed: BoundCounts,
    /// Failures on uniformity
    pub uniformity: BoundCounts,
    /// Failures on blade height, classified by where the band midpoint fell
    pub blade_height: BoundCounts,
    /// Candidates kept
    pub accepted: usize,
}

impl SearchDiagnostics {
    /// Tally one rejection against a criterion
    pub fn record(&mut self, criterion: Criterion, rejection: Rejection) {
        self.counts_mut(criterion).record(rejection);
    }

    /// Counters for one criterion
    pub fn counts(&self, criterion: Criterion) -> &BoundCounts {
        match criterion {
            Criterion::DimensionlessDiameter => &self.dimensionless_diameter,
            Criterion::MinAirSpeed => &self.min_air_speed,
            Criterion::AvgAirSpeed => &self.avg_air_speed,
            Criterion::Uniformity => &self.uniformity,
            Criterion::BladeHeight => &self.blade_height,
        }
    }

    fn counts_mut(&mut self, criterion: Criterion) -> &mut BoundCounts {
        match criterion {
            Criterion::DimensionlessDiameter => &mut self.dimensionless_diameter,
            Criterion::MinAirSpeed => &mut self.min_air_speed,
            Criterion::AvgAirSpeed => &mut self.avg_air_speed,
            Criterion::Uniformity => &mut self.uniformity,
            Criterion::BladeHeight => &mut self.blade_height,
        }
    }

    /// Total rejections across all criteria
    pub fn rejected(&self) -> usize {
        Criterion::ORDER.iter().map(|&c| self.counts(c).total()).sum()
    }

    /// The criterion after which no candidate survived, if any.
    ///
    /// Criteria short-circuit, so survivors shrink monotonically along
    /// [`Criterion::ORDER`].
    pub fn exhausted_at(&self) -> Option<Criterion> {
        if self.evaluated == 0 || self.accepted > 0 {
            return None;
        }
        let mut remaining = self.evaluated;
        for criterion in Criterion::ORDER {
            remaining = remaining.saturating_sub(self.counts(criterion).total());
            if remaining == 0 {
                return Some(criterion);
            }
        }
        None
    }
}

/// Why a design produced no solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyReason {
    /// No fan grid satisfied the layout constraints
    NoLayouts,
    /// Layouts exist but no fans were selected
    EmptyCatalog,
    /// Every candidate was rejected; the criterion that removed the last one
    Filtered(Criterion),
}
