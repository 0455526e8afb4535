//! Integration test: boundary loss and rover clashes.
//!
//! Lost and clashed are normal terminal outcomes delivered through the
//! report, but either one halts all remaining rovers.

use regolith_engine::{run_request, MissionRequest};
use regolith_test_utils::MissionFormBuilder;

#[test]
fn rover_driving_off_the_plateau_is_lost() {
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("1 2 N", "MMMMMMMMMMM")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(report.lines.len(), 1);
    assert!(report.lines[0].contains("Error") && report.lines[0].contains("LOST"));
    assert_eq!(report.lines[0], "Error: Rover 1 LOST");
    assert_eq!(report.metrics.rovers_lost, 1);
}

#[test]
fn rover_clashing_into_finalized_rover() {
    // Rover 1 finalizes at (1, 3). Rover 2 starts at (1, 4) facing
    // south; its first move lands on (1, 3) and the pre-command check
    // before its second move flags the clash.
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("1 2 N", "LMLMLMLMM")
        .rover("1 4 S", "MM")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0], "Rover 1 final state: 1 3 N ");
    assert!(report.lines[1].contains("Error") && report.lines[1].contains("CLASHED"));
    assert_eq!(report.lines[1], "Error: Rover 2 CLASHED into other rover");
}

#[test]
fn lost_rover_halts_every_rover_after_it() {
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("1 2 N", "MMMMMMMMMMM")
        .rover("3 3 E", "M")
        .rover("0 0 N", "M")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    // Only the lost rover appears; rovers 2 and 3 never run.
    assert_eq!(report.lines, vec!["Error: Rover 1 LOST".to_string()]);
    assert_eq!(report.metrics.rovers_simulated, 1);
}

#[test]
fn out_of_bounds_start_is_flagged_before_the_first_command() {
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("6 2 N", "M")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(report.lines, vec!["Error: Rover 1 LOST".to_string()]);
}

#[test]
fn final_move_off_the_plateau_is_not_rechecked() {
    // Checks run before each command, never after the last one: a rover
    // whose final move exits the plateau still reports a final state.
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("5 5 N", "M")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(report.lines, vec!["Rover 1 final state: 5 6 N ".to_string()]);
}

#[test]
fn final_move_onto_finalized_rover_is_not_rechecked() {
    // Same off-by-one for clashes: rover 2's last move lands exactly on
    // rover 1's finalized cell and is never checked.
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("1 2 N", "M")
        .rover("1 4 S", "M")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(
        report.lines,
        vec![
            "Rover 1 final state: 1 3 N ".to_string(),
            "Rover 2 final state: 1 3 S ".to_string(),
        ]
    );
}

#[test]
fn third_rover_clashes_with_first() {
    // The occupancy set accumulates across finalized rovers.
    let form = MissionFormBuilder::new()
        .plateau("5 5")
        .rover("0 0 E", "M")
        .rover("3 3 N", "M")
        .rover("1 0 W", "MM")
        .build();
    let report = run_request(&MissionRequest::from_form(&form));

    assert_eq!(report.lines.len(), 3);
    assert_eq!(report.lines[2], "Error: Rover 3 CLASHED into other rover");
}
