//! Basic Fan Layout Search
//!
//! Sizes a grid of ceiling fans for a 13 × 16 m room with the default
//! constraint set and the built-in example catalog.
//!
//! ## What You'll Learn
//!
//! - Describing a room and picking fans from a catalog
//! - Running a full design request
//! - Reading air speeds, uniformity and clearances from each solution
//! - Sorting results for display
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_search
//! ```

use fanlayout_core::{
    constants::defaults::DEFAULT_SELECTED_FANS, design_with, example_catalog, select_fans,
    sort_solutions, CertificationHeights, ConstraintSet, ModelCoefficients, PerformanceModel,
    RoomModel, SortKey,
};

fn main() {
    println!("FanLayout Basic Search Example");
    println!("==============================\n");

    // Length along X, width along Y
    let room = RoomModel::new(3.7, 13.0, 16.0);
    println!(
        "Room: {} m x {} m, ceiling {} m ({} m²)\n",
        room.size_x,
        room.size_y,
        room.ceiling_height,
        room.area()
    );

    let catalog = select_fans(&example_catalog(), &DEFAULT_SELECTED_FANS);
    println!("Candidate fans:");
    for fan in &catalog {
        println!(
            "  {:<10} D = {:.3} m  Q = {:>6.2} m³/s  V0 = {:.2} m/s  listed: {}",
            fan.fan_type,
            fan.diameter,
            fan.airflow,
            fan.nominal_air_speed(),
            fan.meets_certification
        );
    }
    println!();

    // The listed minimum blade heights are in feet; use their metric values
    let model = PerformanceModel::new(
        ModelCoefficients::default().with_certification(CertificationHeights::metric()),
    );
    let constraints = ConstraintSet::default();
    let mut report = design_with(&model, &room, &catalog, &constraints);

    println!(
        "{} layouts, {} solutions\n",
        report.layouts.len(),
        report.solutions.len()
    );

    sort_solutions(&mut report.solutions, SortKey::Uniformity);
    for s in report.solutions.iter().rev() {
        println!(
            "  {:<10} {:>2} x {:<2} fans  min {:.2}  avg {:.2}  max {:.2} m/s  uniformity {:.2}  clearance ({:.2}, {:.2}) m",
            s.fan_type(),
            s.layout.num_fans_x(),
            s.layout.num_fans_y(),
            s.airspeeds.lowest,
            s.airspeeds.average,
            s.airspeeds.highest,
            s.uniformity,
            s.clearance.x,
            s.clearance.y
        );
    }

    if let Some(reason) = report.explain() {
        println!("No solutions: {:?}", reason);
    }
}
