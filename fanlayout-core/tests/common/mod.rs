//! Shared fixtures for integration tests
//!
//! - The worked-example room and fan
//! - Models with literal and metric certification heights
//! - Constraint sets loose enough that only the tested criterion bites

#![allow(dead_code)]

use fanlayout_core::{
    CertificationHeights, ConstraintSet, FanModel, ModelCoefficients, PerformanceModel, Range,
    RoomModel,
};

pub const EPS: f64 = 1e-9;

/// 16 × 13 m floor under a 3.7 m ceiling
pub fn worked_room() -> RoomModel {
    RoomModel::new(3.7, 16.0, 13.0)
}

/// 1.524 m fan moving 3.765196 m³/s, certified
pub fn worked_fan() -> FanModel {
    FanModel::new("ExampleC", 1.524, 3.765196, true)
}

/// Model whose certification heights are in metres, so certified fans can pass
pub fn metric_model() -> PerformanceModel {
    PerformanceModel::new(
        ModelCoefficients::default().with_certification(CertificationHeights::metric()),
    )
}

/// Default layout constraints with every solution criterion opened wide
pub fn permissive_constraints() -> ConstraintSet {
    ConstraintSet::default()
        .with_dimensionless_diameter(Range::new(0.0, 10.0))
        .with_min_air_speed(Range::new(0.0, 100.0))
        .with_avg_air_speed(Range::new(0.0, 100.0))
        .with_uniformity(Range::new(0.0, 10.0))
}

/// Relative float comparison for derived lengths
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}
