//! End-to-end tests: room and catalog in, report out
//!
//! Covers the worked example, the literal certification heights, the
//! default parameter set and the empty-result explanations.

mod common;

use fanlayout_core::{
    design, design_with, enumerate, example_catalog, select_fans, sort_solutions, Criterion,
    EmptyReason, FanModel, LayoutCandidate, Range, RoomModel, SortKey,
    constants::defaults::DEFAULT_SELECTED_FANS,
};

use common::{approx_eq, metric_model, permissive_constraints, worked_fan, worked_room, EPS};

#[test]
fn worked_example_derived_values() {
    let fan = worked_fan();
    assert!((fan.nominal_air_speed() - 2.064).abs() < 1e-3);

    let layout = LayoutCandidate::new(4, 4, worked_room());
    assert!(approx_eq(layout.cell_size_x(), 4.0));
    assert!(approx_eq(layout.cell_size_y(), 3.25));
    assert!(approx_eq(layout.r(), 13.0f64.sqrt()));
    assert!((layout.r() - 3.606).abs() < 1e-3);
    assert!(approx_eq(layout.aspect_ratio(), 4.0 / 3.25));
    assert!((layout.aspect_ratio() - 1.2308).abs() < 1e-4);
}

#[test]
fn worked_example_solution_metrics() {
    let layouts = [LayoutCandidate::new(4, 4, worked_room())];
    let outcome = fanlayout_core::SolutionSearch::new(metric_model()).run(
        &layouts,
        &[worked_fan()],
        &permissive_constraints(),
    );
    assert_eq!(outcome.solutions.len(), 1);

    let s = &outcome.solutions[0];
    assert_eq!(s.fan_type(), "ExampleC");
    assert_eq!(s.num_fans(), 16);
    assert!((s.airspeeds.lowest - 1.0501).abs() < 1e-3);
    assert!((s.airspeeds.average - 1.3322).abs() < 1e-3);
    assert!((s.airspeeds.highest - 1.9893).abs() < 1e-3);
    assert!((s.uniformity - 0.5279).abs() < 1e-3);
    assert!((s.clearance.x - 1.238).abs() < EPS);
    assert!((s.clearance.y - 0.863).abs() < EPS);
    assert!((s.blade_height_range.max - 3.3952).abs() < EPS);
    assert!(s.blade_height_range.pass);
}

#[test]
fn default_request_with_literal_heights_is_empty_and_explained() {
    let catalog = select_fans(&example_catalog(), &DEFAULT_SELECTED_FANS);
    let report = design(
        &RoomModel::new(3.7, 13.0, 16.0),
        &catalog,
        &fanlayout_core::ConstraintSet::default(),
    );

    assert!(!report.layouts.is_empty());
    assert!(report.solutions.is_empty());
    assert!(matches!(report.explain(), Some(EmptyReason::Filtered(_))));
    let d = report.search_diagnostics;
    assert_eq!(d.evaluated, report.layouts.len() * catalog.len());
    assert_eq!(d.rejected(), d.evaluated);
}

#[test]
fn no_layouts_is_explained() {
    let constraints = permissive_constraints().with_cell_size(Range::new(100.0, 200.0));
    let report = design_with(&metric_model(), &worked_room(), &example_catalog(), &constraints);
    assert!(report.layouts.is_empty());
    assert_eq!(report.explain(), Some(EmptyReason::NoLayouts));
    assert_eq!(report.search_diagnostics.evaluated, 0);
}

#[test]
fn tight_dimensionless_diameter_is_blamed() {
    let constraints = permissive_constraints().with_dimensionless_diameter(Range::new(5.0, 6.0));
    let report = design_with(&metric_model(), &worked_room(), &example_catalog(), &constraints);
    assert_eq!(
        report.explain(),
        Some(EmptyReason::Filtered(Criterion::DimensionlessDiameter))
    );
    assert_eq!(
        report.search_diagnostics.dimensionless_diameter.below,
        report.search_diagnostics.evaluated
    );
}

#[test]
fn selection_order_drives_fan_order() {
    let catalog = example_catalog();
    let forward = select_fans(&catalog, &[0, 2]);
    let reverse = select_fans(&catalog, &[2, 0]);

    let a = design_with(&metric_model(), &worked_room(), &forward, &permissive_constraints());
    let b = design_with(&metric_model(), &worked_room(), &reverse, &permissive_constraints());
    assert_eq!(a.solutions.len(), b.solutions.len());

    // Within each layout the fans appear in selection order
    for window in a.solutions.windows(2) {
        if window[0].layout == window[1].layout {
            assert_eq!(window[0].fan_type(), "ExampleA");
            assert_eq!(window[1].fan_type(), "ExampleC");
        }
    }
    for window in b.solutions.windows(2) {
        if window[0].layout == window[1].layout {
            assert_eq!(window[0].fan_type(), "ExampleC");
            assert_eq!(window[1].fan_type(), "ExampleA");
        }
    }
}

#[test]
fn max_air_speed_is_not_applied() {
    let narrow = permissive_constraints().with_max_air_speed(Range::new(0.0, 0.001));
    let a = design_with(&metric_model(), &worked_room(), &example_catalog(), &narrow);
    let b = design_with(
        &metric_model(),
        &worked_room(),
        &example_catalog(),
        &permissive_constraints(),
    );
    assert_eq!(a.solutions, b.solutions);
}

#[test]
fn overlapping_fans_are_reported_not_rejected() {
    let huge = FanModel::new("Huge", 4.2672, 25.30817, true);
    let layouts = enumerate(
        &RoomModel::new(10.0, 16.0, 13.0),
        fanlayout_core::FanCountRange::new(3, 4),
        &Range::new(1.0, 20.0),
        2.0,
    )
    .layouts;
    let outcome = fanlayout_core::SolutionSearch::new(metric_model()).run(
        &layouts,
        &[huge],
        &permissive_constraints(),
    );
    assert!(outcome.solutions.iter().any(|s| s.clearance.has_overlap()));
}

#[test]
fn sorted_by_fan_count() {
    let mut report = design_with(
        &metric_model(),
        &worked_room(),
        &example_catalog(),
        &permissive_constraints(),
    );
    sort_solutions(&mut report.solutions, SortKey::FanCount);
    let counts = report.fan_counts();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}
