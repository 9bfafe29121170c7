//! Explaining Empty Results
//!
//! Walks through the rejection counters a design request produces, using
//! the default model whose listed blade heights are reproduced literally.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_diagnostics
//! ```

use fanlayout_core::{
    design, example_catalog, BoundCounts, ConstraintSet, Criterion, EmptyReason, Range, RoomModel,
};

fn print_counts(label: &str, counts: &BoundCounts) {
    println!(
        "  {:<24} below {:>3}  above {:>3}  non-finite {:>3}",
        label, counts.below, counts.above, counts.non_finite
    );
}

fn main() {
    println!("FanLayout Diagnostics Example");
    println!("=============================\n");

    let room = RoomModel::new(3.7, 13.0, 16.0);
    let catalog = example_catalog();

    let requests = [
        ("defaults", ConstraintSet::default()),
        (
            "cells too large",
            ConstraintSet::default().with_cell_size(Range::new(40.0, 50.0)),
        ),
        ("no fans", ConstraintSet::default()),
    ];

    for (i, (name, constraints)) in requests.iter().enumerate() {
        let fans = if i == 2 { &catalog[..0] } else { &catalog[..] };
        let report = design(&room, fans, constraints);

        println!("Request: {}", name);
        let layouts = &report.layout_diagnostics;
        println!(
            "  layouts: {} considered, {} accepted, pre-filter dropped ({}, {})",
            layouts.considered, layouts.accepted, layouts.prefiltered_x, layouts.prefiltered_y
        );
        print_counts("aspect ratio", &layouts.aspect_ratio);
        print_counts("cell size", &layouts.cell_size);

        let search = &report.search_diagnostics;
        println!(
            "  candidates: {} evaluated, {} accepted",
            search.evaluated, search.accepted
        );
        for criterion in Criterion::ORDER {
            print_counts(&format!("{:?}", criterion), search.counts(criterion));
        }

        match report.explain() {
            None => println!("  => {} solutions\n", report.solutions.len()),
            Some(EmptyReason::NoLayouts) => println!("  => no grid fits the room\n"),
            Some(EmptyReason::EmptyCatalog) => println!("  => select at least one fan\n"),
            Some(EmptyReason::Filtered(c)) => println!("  => last candidates removed by {:?}\n", c),
        }
    }
}
