//! Regolith Quickstart — one mission from form fields to report lines.
//!
//! Demonstrates:
//!   1. Building the keyed form-field map a web collaborator would post
//!   2. Deriving a MissionRequest from it
//!   3. Running the engine and printing the report
//!   4. What a malformed request looks like at the same boundary
//!
//! Run with:
//!   cargo run --example quickstart

use indexmap::IndexMap;
use regolith_engine::{run_request, MissionRequest};

fn form(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() {
    println!("=== Regolith Quickstart ===\n");

    // 1. The classic worked example, as posted by the form.
    let fields = form(&[
        ("Rover 1 Command", "LMLMLMLMM"),
        ("Rover 1 State", "1 2 N"),
        ("Rover 2 Command", "MMRMMRMRRM"),
        ("Rover 2 State", "3 3 E"),
        ("Upper-Right Coordinate", "5 5"),
    ]);

    // 2. Derive the request. The rover count comes from the field count.
    let request = MissionRequest::from_form(&fields);
    println!(
        "Plateau corner: {:?}, rovers: {}",
        request.upper_right,
        request.rover_count()
    );

    // 3. Run and print. One line per rover.
    let report = run_request(&request);
    println!("\nReport:");
    for line in &report.lines {
        println!("  {line}");
    }
    println!(
        "\nMetrics: {} rovers simulated, {} commands applied",
        report.metrics.rovers_simulated, report.metrics.commands_applied
    );

    // 4. A malformed request never simulates; the report carries the
    //    accumulated validation errors instead.
    let bad = MissionRequest::new("five five", vec![]);
    let report = run_request(&bad);
    println!("\nMalformed request report:");
    for line in &report.lines {
        println!("  {line}");
    }
}
