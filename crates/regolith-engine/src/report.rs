//! Rendering outcomes and errors into the ordered report lines.
//!
//! The report's line list is the engine's sole output artifact at the
//! collaborator boundary; the structured outcomes and metrics ride
//! along for Rust callers. Line wording is stable; downstream
//! consumers match on it.

use regolith_core::{RoverId, RoverOutcome, ValidationError};

use crate::metrics::MissionMetrics;
use crate::mission::MissionRun;

/// The engine's complete output for one request.
#[derive(Clone, Debug)]
pub struct MissionReport {
    /// Ordered output lines: either one per validation error, or one
    /// per simulated rover.
    pub lines: Vec<String>,
    /// Structured per-rover outcomes; empty when validation failed.
    pub outcomes: Vec<(RoverId, RoverOutcome)>,
    /// Counters from the run (or from validation).
    pub metrics: MissionMetrics,
}

impl MissionReport {
    /// Build the report for a completed simulation run.
    pub fn from_run(run: MissionRun) -> Self {
        let lines = run
            .outcomes
            .iter()
            .map(|(id, outcome)| outcome_line(*id, outcome))
            .collect();
        Self {
            lines,
            outcomes: run.outcomes,
            metrics: run.metrics,
        }
    }

    /// Build the report for a request that failed validation.
    ///
    /// Simulation never ran; the lines are the rendered errors in check
    /// order.
    pub fn from_validation_errors(errors: &[ValidationError]) -> Self {
        Self {
            lines: errors.iter().map(error_line).collect(),
            outcomes: Vec::new(),
            metrics: MissionMetrics {
                validation_errors: errors.len() as u32,
                ..MissionMetrics::default()
            },
        }
    }
}

/// Render one rover's outcome.
///
/// The success line carries a trailing space after the heading; it is
/// part of the stable output format.
pub fn outcome_line(id: RoverId, outcome: &RoverOutcome) -> String {
    match outcome {
        RoverOutcome::Completed(state) => {
            format!("Rover {id} final state: {state} ")
        }
        RoverOutcome::Lost => format!("Error: Rover {id} LOST"),
        RoverOutcome::Clashed => {
            format!("Error: Rover {id} CLASHED into other rover")
        }
    }
}

/// Render one validation error.
pub fn error_line(error: &ValidationError) -> String {
    format!("Error: {error}")
}
