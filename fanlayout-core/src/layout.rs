//! Fan-grid layouts and their enumeration
//!
//! A layout splits the floor into a uniform `nx × ny` grid of cells with one
//! fan at the centre of each. [`enumerate`] walks every admissible grid for a
//! room in a fixed order and reports why the others were dropped.
//!
//! ## Two-step filtering
//!
//! ```text
//! counts n ∈ [min, max]
//!     │  per axis: side = size / n
//!     ▼
//! pre-filter   cell.min·√(1/AR) <= side <= cell.max·√AR     (per axis)
//!     │  cross product of surviving X and Y counts
//!     ▼
//! authoritative   aspect < AR,  cell.min < r < cell.max     (per grid)
//! ```
//!
//! The pre-filter only prunes axes that cannot produce a passing grid once
//! the aspect ratio limit is applied; the grid test decides.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    bounds::{check_below, check_open_range},
    constants::certification::{
        CERTIFIED_DIAMETER_CAP_HEIGHT, UNCERTIFIED_DIAMETER_CAP_HEIGHT,
        UNCERTIFIED_CAP_DIAMETER_THRESHOLD,
    },
    constants::geometry::BLADE_CEILING_CLEARANCE_FACTOR,
    constraints::{FanCountRange, Range},
    diagnostics::LayoutDiagnostics,
    room::RoomModel,
};

/// One uniform fan grid in a room
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LayoutCandidate {
    num_fans_x: u32,
    num_fans_y: u32,
    room: RoomModel,
    cell_size_x: f64,
    cell_size_y: f64,
    cell_area: f64,
    r: f64,
    aspect_ratio: f64,
}

impl LayoutCandidate {
    /// Derive cell geometry for an `nx × ny` grid.
    ///
    /// Zero counts are accepted and produce infinite or NaN cell sizes.
    pub fn new(num_fans_x: u32, num_fans_y: u32, room: RoomModel) -> Self {
        let cell_size_x = room.size_x / num_fans_x as f64;
        let cell_size_y = room.size_y / num_fans_y as f64;
        let cell_area = cell_size_x * cell_size_y;
        let aspect_ratio = (cell_size_x / cell_size_y).max(cell_size_y / cell_size_x);

        Self {
            num_fans_x,
            num_fans_y,
            room,
            cell_size_x,
            cell_size_y,
            cell_area,
            r: libm::sqrt(cell_area),
            aspect_ratio,
        }
    }

    /// Fans along the X axis
    pub fn num_fans_x(&self) -> u32 {
        self.num_fans_x
    }

    /// Fans along the Y axis
    pub fn num_fans_y(&self) -> u32 {
        self.num_fans_y
    }

    /// Total fans in the grid
    pub fn num_fans(&self) -> u32 {
        self.num_fans_x * self.num_fans_y
    }

    /// Room the grid is laid out in
    pub fn room(&self) -> &RoomModel {
        &self.room
    }

    /// Cell length along X (m)
    pub fn cell_size_x(&self) -> f64 {
        self.cell_size_x
    }

    /// Cell length along Y (m)
    pub fn cell_size_y(&self) -> f64 {
        self.cell_size_y
    }

    /// Cell floor area (m²)
    pub fn cell_area(&self) -> f64 {
        self.cell_area
    }

    /// Side of the square with the same area as one cell (m)
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Longer cell side over shorter cell side, always `>= 1` when finite
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Fan centre coordinates, X-major, measured from the room origin (m).
    pub fn fan_positions(&self) -> Vec<(f64, f64)> {
        let mut positions = Vec::with_capacity(self.num_fans() as usize);
        for i in 0..self.num_fans_x {
            for j in 0..self.num_fans_y {
                positions.push((
                    (i as f64 + 0.5) * self.cell_size_x,
                    (j as f64 + 0.5) * self.cell_size_y,
                ));
            }
        }
        positions
    }

    /// Fan diameters that suit this grid.
    ///
    /// Starts from `[dr.min · r, dr.max · r]`, caps the upper end by the
    /// diameters whose ceiling clearance still leaves room for the listed
    /// minimum blade heights, then clips to the diameter constraint. A lower
    /// end above the diameter maximum moves the *upper* end to that maximum.
    pub fn valid_diameter_window(&self, dimensionless_diameter: &Range, diameter: &Range) -> Range {
        let ceiling = self.room.ceiling_height;
        let mut window = Range::new(
            dimensionless_diameter.min * self.r,
            dimensionless_diameter.max * self.r,
        );

        let max_certified =
            (ceiling - CERTIFIED_DIAMETER_CAP_HEIGHT) / BLADE_CEILING_CLEARANCE_FACTOR;
        let max_uncertified =
            (ceiling - UNCERTIFIED_DIAMETER_CAP_HEIGHT) / BLADE_CEILING_CLEARANCE_FACTOR;

        if window.max > max_certified {
            window.max = max_certified;
        }
        if window.max > UNCERTIFIED_CAP_DIAMETER_THRESHOLD && window.max > max_uncertified {
            window.max = max_uncertified;
        }
        if window.min < diameter.min {
            window.min = diameter.min;
        }
        if window.min > diameter.max {
            window.max = diameter.max;
        }
        window
    }
}

/// Layouts that passed enumeration, with the tallies for the ones that did not
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LayoutEnumeration {
    /// Surviving layouts, X count outer, Y count inner, both increasing
    pub layouts: Vec<LayoutCandidate>,
    /// Rejection counts per criterion
    pub diagnostics: LayoutDiagnostics,
}

/// Per-axis fan counts whose cell side passes the widened pre-filter.
fn axis_counts(size: f64, fan_counts: FanCountRange, bounds: &Range) -> Vec<u32> {
    fan_counts
        .iter()
        .filter(|&n| bounds.contains_closed(size / n as f64))
        .collect()
}

/// Enumerate every admissible fan grid for `room`.
///
/// Rejection is exclusive: a grid whose aspect ratio equals
/// `aspect_ratio_max`, or whose `r` equals either cell-size bound, fails.
pub fn enumerate(
    room: &RoomModel,
    fan_counts: FanCountRange,
    cell_size: &Range,
    aspect_ratio_max: f64,
) -> LayoutEnumeration {
    let prefilter = Range::new(
        cell_size.min * libm::sqrt(1.0 / aspect_ratio_max),
        cell_size.max * libm::sqrt(aspect_ratio_max),
    );

    let counts_x = axis_counts(room.size_x, fan_counts, &prefilter);
    let counts_y = axis_counts(room.size_y, fan_counts, &prefilter);

    let mut diagnostics = LayoutDiagnostics {
        prefiltered_x: fan_counts.len() - counts_x.len(),
        prefiltered_y: fan_counts.len() - counts_y.len(),
        ..LayoutDiagnostics::default()
    };
    let mut layouts = Vec::new();

    for &nx in &counts_x {
        for &ny in &counts_y {
            let candidate = LayoutCandidate::new(nx, ny, *room);
            diagnostics.considered += 1;

            if let Err(rejection) = check_below(candidate.aspect_ratio(), aspect_ratio_max) {
                diagnostics.aspect_ratio.record(rejection);
                continue;
            }
            if let Err(rejection) = check_open_range(candidate.r(), cell_size) {
                diagnostics.cell_size.record(rejection);
                continue;
            }
            layouts.push(candidate);
        }
    }
    diagnostics.accepted = layouts.len();

    log_debug!(
        "{} viable layouts, {} failed on aspect ratio, ({}, {}) failed on min, max cell size",
        diagnostics.accepted,
        diagnostics.aspect_ratio.total(),
        diagnostics.cell_size.below,
        diagnostics.cell_size.above
    );
    if layouts.is_empty() {
        log_warn!(
            "No fan grid fits a {} x {} room with the current cell constraints",
            room.size_x,
            room.size_y
        );
    }

    LayoutEnumeration {
        layouts,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn worked_room() -> RoomModel {
        RoomModel::new(3.7, 16.0, 13.0)
    }

    #[test]
    fn worked_example_geometry() {
        let layout = LayoutCandidate::new(4, 4, worked_room());
        assert!((layout.cell_size_x() - 4.0).abs() < EPS);
        assert!((layout.cell_size_y() - 3.25).abs() < EPS);
        assert!((layout.cell_area() - 13.0).abs() < EPS);
        assert!((layout.r() - 13.0f64.sqrt()).abs() < EPS);
        assert!((layout.aspect_ratio() - 4.0 / 3.25).abs() < EPS);
        assert_eq!(layout.num_fans(), 16);
    }

    #[test]
    fn aspect_ratio_independent_of_orientation() {
        let a = LayoutCandidate::new(4, 4, RoomModel::new(3.7, 16.0, 13.0));
        let b = LayoutCandidate::new(4, 4, RoomModel::new(3.7, 13.0, 16.0));
        assert!((a.aspect_ratio() - b.aspect_ratio()).abs() < EPS);
        assert!(a.aspect_ratio() >= 1.0);
    }

    #[test]
    fn zero_fan_count_is_non_finite() {
        let layout = LayoutCandidate::new(0, 2, worked_room());
        assert!(!layout.cell_size_x().is_finite());
        assert!(!layout.aspect_ratio().is_finite());
    }

    #[test]
    fn fan_positions_are_cell_centres() {
        let layout = LayoutCandidate::new(2, 2, RoomModel::new(3.0, 10.0, 8.0));
        assert_eq!(
            layout.fan_positions(),
            [(2.5, 2.0), (2.5, 6.0), (7.5, 2.0), (7.5, 6.0)]
        );
    }

    #[test]
    fn enumeration_order_is_x_outer_y_inner() {
        let result = enumerate(
            &RoomModel::new(3.7, 20.0, 20.0),
            FanCountRange::new(1, 4),
            &Range::new(1.0, 100.0),
            10.0,
        );
        let pairs: Vec<(u32, u32)> = result
            .layouts
            .iter()
            .map(|l| (l.num_fans_x(), l.num_fans_y()))
            .collect();
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
        assert_eq!(pairs.first(), Some(&(1, 1)));
        assert_eq!(result.diagnostics.accepted, pairs.len());
    }

    #[test]
    fn default_constraints_on_worked_room() {
        let result = enumerate(
            &worked_room(),
            FanCountRange::new(1, 10),
            &Range::new(4.572, 15.24),
            1.25,
        );
        assert!(!result.layouts.is_empty());
        for layout in &result.layouts {
            assert!(layout.aspect_ratio() < 1.25);
            assert!(layout.r() > 4.572 && layout.r() < 15.24);
        }
        // 4 x 4 cells are 4.0 x 3.25, both sides under the widened 4.09 minimum
        assert!(!result
            .layouts
            .iter()
            .any(|l| l.num_fans_x() == 4 && l.num_fans_y() == 4));
        // 3 x 3 on 16 x 13 gives 5.33 x 4.33 cells
        assert!(result
            .layouts
            .iter()
            .any(|l| l.num_fans_x() == 3 && l.num_fans_y() == 3));
    }

    #[test]
    fn aspect_ratio_bound_is_exclusive() {
        // 2 x 1 grid in a 4 x 1 room gives square cells: aspect exactly 1.0
        let room = RoomModel::new(3.0, 4.0, 1.0);
        let counts = FanCountRange::new(1, 4);
        let cells = Range::new(0.1, 10.0);

        let strict = enumerate(&room, counts, &cells, 1.0);
        assert!(!strict.layouts.iter().any(|l| l.num_fans_x() == 4 && l.num_fans_y() == 1));
        assert!(strict.diagnostics.aspect_ratio.above > 0);

        let loose = enumerate(&room, counts, &cells, 1.0001);
        assert!(loose.layouts.iter().any(|l| l.num_fans_x() == 4 && l.num_fans_y() == 1));
    }

    #[test]
    fn zero_sized_room_yields_nothing() {
        let result = enumerate(
            &RoomModel::new(3.7, 0.0, 13.0),
            FanCountRange::new(1, 10),
            &Range::new(4.572, 15.24),
            1.25,
        );
        assert!(result.layouts.is_empty());
        assert_eq!(result.diagnostics.prefiltered_x, 10);
    }

    #[test]
    fn zero_fan_count_in_range_is_pruned() {
        let result = enumerate(
            &worked_room(),
            FanCountRange::new(0, 3),
            &Range::new(1.0, 20.0),
            2.0,
        );
        assert!(result.layouts.iter().all(|l| l.num_fans_x() > 0 && l.num_fans_y() > 0));
    }

    #[test]
    fn diameter_window_literal_caps() {
        // With the literal heights a 3.7 m ceiling caps the window below zero
        let layout = LayoutCandidate::new(3, 3, worked_room());
        let window = layout.valid_diameter_window(&Range::new(0.15, 0.5), &Range::new(1.2192, 4.2672));
        assert!((window.max - (3.7 - 7.0) / 0.2).abs() < EPS);
        assert_eq!(window.min, 1.2192);
    }

    #[test]
    fn diameter_window_for_tall_ceiling() {
        // 20 m ceiling: caps at 65 and 50, far above dr.max * r
        let room = RoomModel::new(20.0, 16.0, 16.0);
        let layout = LayoutCandidate::new(2, 2, room);
        let window = layout.valid_diameter_window(&Range::new(0.15, 0.5), &Range::new(1.0, 5.0));
        assert!((window.min - 1.2).abs() < EPS);
        assert!((window.max - 4.0).abs() < EPS);
    }
}
